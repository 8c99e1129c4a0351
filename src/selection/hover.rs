// SPDX-License-Identifier: MPL-2.0
//! Transient hover state feeding the tooltip.
//!
//! Only the identity of the hovered item is stored. The tooltip text is
//! derived from the facility directory when read, so it always names the
//! same code the list and the map show.

use crate::facility::FacilityDirectory;

/// Item currently under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTarget {
    /// A marker or list row, identified by facility code.
    Facility(String),
    /// A map region, identified by country name.
    Region(String),
}

#[derive(Debug, Clone, Default)]
pub struct HoverState {
    target: Option<HoverTarget>,
}

impl HoverState {
    pub fn enter(&mut self, target: HoverTarget) {
        self.target = Some(target);
    }

    /// Clears the hover if `target` is the one being hovered. A late leave
    /// event from a previous item must not wipe the newer hover.
    pub fn leave(&mut self, target: &HoverTarget) {
        if self.target.as_ref() == Some(target) {
            self.target = None;
        }
    }

    pub fn clear(&mut self) {
        self.target = None;
    }

    #[must_use]
    pub fn target(&self) -> Option<&HoverTarget> {
        self.target.as_ref()
    }

    /// Tooltip text, or an empty string when nothing is hovered.
    #[must_use]
    pub fn content<'a>(&'a self, directory: &'a FacilityDirectory) -> &'a str {
        match &self.target {
            Some(HoverTarget::Facility(code)) => directory
                .get(code)
                .map_or("", |record| record.code.as_str()),
            Some(HoverTarget::Region(name)) => name.as_str(),
            None => "",
        }
    }
}

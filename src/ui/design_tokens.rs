// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by every dashboard surface.

## Organization

- **Palette**: Base colors (dark teal surfaces, status colors)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component and marker sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use facility_map::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let glow = Color {
    a: opacity::GLOW,
    ..palette::HEALTHY_500
};
let padding = spacing::MD;
assert!(padding > spacing::SM);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    // Surfaces (dark teal scale)
    pub const SURFACE_950: Color = Color::from_rgb(0.027, 0.102, 0.122); // #071A1F
    pub const SURFACE_900: Color = Color::from_rgb(0.051, 0.196, 0.255); // #0D3241
    pub const SURFACE_700: Color = Color::from_rgb(0.204, 0.314, 0.357); // #34505B
    pub const SURFACE_500: Color = Color::from_rgb(0.325, 0.514, 0.596); // #538398
    pub const TEXT_MUTED: Color = Color::from_rgb(0.635, 0.725, 0.745); // #A2B9BE
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.812, 0.878, 0.918); // #CFE0EA

    // Map
    pub const OCEAN: Color = Color::from_rgb(0.039, 0.145, 0.184);
    pub const GRATICULE: Color = Color::from_rgba(0.325, 0.514, 0.596, 0.35);

    // Status
    pub const HEALTHY_500: Color = Color::from_rgb(0.204, 0.827, 0.600); // #34D399
    pub const AT_RISK_500: Color = Color::from_rgb(0.984, 0.749, 0.141); // #FBBF24
    pub const CRITICAL_500: Color = Color::from_rgb(0.973, 0.443, 0.443); // #F87171

    // Highlight
    pub const ACCENT_400: Color = Color::from_rgb(0.376, 0.780, 0.929);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Status chip background.
    pub const CHIP: f32 = 0.18;
    /// Halo around markers.
    pub const GLOW: f32 = 0.35;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Floating panels drawn over the map.
    pub const SURFACE: f32 = 0.92;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Markers
    pub const MARKER_DOT_RADIUS: f32 = 4.5;
    pub const MARKER_GLOW_RADIUS: f32 = 9.0;
    /// Pointer distance within which a marker counts as hit.
    pub const MARKER_HIT_RADIUS: f32 = 12.0;
    /// Pointer travel before a press turns into a drag.
    pub const DRAG_THRESHOLD: f32 = 3.0;

    // Annotation connector offset from the selected marker.
    pub const ANNOTATION_DX: f32 = 28.0;
    pub const ANNOTATION_DY: f32 = -24.0;

    pub const HEADER_HEIGHT: f32 = 56.0;
    pub const LIST_HEIGHT: f32 = 260.0;
    pub const DETAIL_PANEL_WIDTH: f32 = 280.0;
    pub const STATUS_DOT: f32 = 10.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name in the header.
    pub const TITLE_MD: f32 = 20.0;

    /// Panel headings, clock time.
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - List headers, dates, marker labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GLOW > opacity::CHIP);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // A marker must be clickable over its whole glow.
    assert!(sizing::MARKER_HIT_RADIUS > sizing::MARKER_GLOW_RADIUS);
    assert!(sizing::MARKER_GLOW_RADIUS > sizing::MARKER_DOT_RADIUS);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::SM * 2.0);
    }
}

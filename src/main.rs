// SPDX-License-Identifier: MPL-2.0
use facility_map::app::{self, paths, Flags};
use facility_map::logging;

const HELP: &str = "\
facility_map

USAGE:
  facility_map [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <id>              UI language (e.g. en-US, fr)
  --config-dir <dir>       Directory holding settings.toml
  --facilities <file>      Facility catalog replacing the built-in one

ENVIRONMENT:
  FACILITY_MAP_CONFIG_DIR  Config directory (overridden by --config-dir)
  FACILITY_MAP_LOG         Log filter, e.g. `debug` or `facility_map=trace`
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        facilities: args.opt_value_from_str("--facilities")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    logging::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

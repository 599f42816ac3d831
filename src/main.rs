// SPDX-License-Identifier: MPL-2.0
use rating_card::app::{self, Flags};
use rating_card::ui::theming::ThemeMode;
use std::path::PathBuf;

const HELP: &str = "\
rating_card - rate your support experience

USAGE:
  rating_card [OPTIONS]

OPTIONS:
  --config-dir <DIR>      Directory holding settings.toml
                          (overrides RATING_CARD_CONFIG_DIR)
  --theme <MODE>          light, dark or system (overrides settings.toml)
  --diagnostics <FILE>    Write a JSON diagnostics report on exit
  -h, --help              Print this help
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
        diagnostics_path: args.opt_value_from_os_str("--diagnostics", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("[WARN] Ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("[ERROR] {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

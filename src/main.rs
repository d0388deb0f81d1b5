// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use flashdeck::app::{self, paths, Flags};

const HELP: &str = "\
flashdeck - vocabulary flashcards

USAGE:
  flashdeck [OPTIONS]

OPTIONS:
  --lang <tag>         Interface language (pt, en, id)
  --pair <tag>         Language pair (english, indonesian,
                       portuguese-to-english, portuguese-to-indonesian)
  --source <dir|url>   Read word lists and locale tables from a directory
                       or an http(s) base URL instead of the bundled data
  --data-dir <dir>     Directory for local storage
  --config-dir <dir>   Directory for settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        pair: opt_value(&mut args, "--pair"),
        source: opt_value(&mut args, "--source"),
        data_dir: opt_value(&mut args, "--data-dir"),
        config_dir: opt_value(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("Ignoring {key}: {err}");
        None
    })
}

// SPDX-License-Identifier: MPL-2.0
use beforelife::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Before Life / After Life

USAGE:
  beforelife [OPTIONS]

OPTIONS:
  -h, --help             Print this help
  --lang <LOCALE>        Interface language (e.g. en-US)
  --view <VIEW>          View shown at startup (gallery, form, about, text,
                         byPrompt, byContributor, card)
  --assets-dir <PATH>    Directory holding images, archive and clips
  --config-dir <PATH>    Directory holding settings.toml
  --data-dir <PATH>      Directory for saved form progress

ENVIRONMENT:
  BEFORELIFE_LOG         Log filter (default: info)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    init_tracing();

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        start_view: opt_string(&mut args, "--view"),
    };
    paths::init_cli_overrides(paths::CliDirs {
        data_dir: opt_string(&mut args, "--data-dir"),
        config_dir: opt_string(&mut args, "--config-dir"),
        assets_dir: opt_string(&mut args, "--assets-dir"),
    });

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unknown arguments");
    }

    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, key, "invalid command line value");
            None
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BEFORELIFE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

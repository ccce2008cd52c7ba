// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use iced_gallery::logging;

const HELP: &str = "\
Iced Gallery - image search gallery

USAGE:
  iced_gallery [OPTIONS] [QUERY]

OPTIONS:
  -h, --help              Print this help and exit
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --api-key <KEY>         API key, overrides PIXABAY_API_KEY and settings.toml
  --config-dir <DIR>      Directory holding settings.toml
  --i18n-dir <DIR>        Directory with extra Fluent .ftl files

ARGS:
  [QUERY]                 Search submitted at startup
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let api_key = args.opt_value_from_str("--api-key")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let query = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(Some(Flags {
        lang,
        api_key,
        i18n_dir,
        config_dir,
        query: Some(query).filter(|q| !q.trim().is_empty()),
    }))
}

fn main() -> iced::Result {
    let flags = match parse_args() {
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

    logging::init();
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}

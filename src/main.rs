use iced_mermaid::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    // Directory overrides must land before anything resolves a path.
    let data_dir = args.opt_value_from_str("--data-dir").unwrap();
    let config_dir = args.opt_value_from_str("--config-dir").unwrap();
    paths::init_cli_overrides(data_dir, config_dir);

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        share_input: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}

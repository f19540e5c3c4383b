// SPDX-License-Identifier: MPL-2.0
use vitrine::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        theme: args.opt_value_from_str("--theme").unwrap(),
        config_path: args.opt_value_from_str("--config").unwrap(),
        gallery_dir: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}

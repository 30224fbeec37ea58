// SPDX-License-Identifier: MPL-2.0
use brand_portal::app::{self, config, Flags};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang: Result<Option<String>, _> = args.opt_value_from_str("--lang");
    let config_dir: Result<Option<String>, _> = args.opt_value_from_str("--config-dir");
    let unused = args.finish();

    let config_dir = config_dir.ok().flatten().map(PathBuf::from);
    let (config, config_warning) = config::load_with_override(config_dir);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.general.log_level.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let lang = match lang {
        Ok(lang) => lang,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring --lang");
            None
        }
    };
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unexpected arguments");
    }
    // Settings are read before the subscriber exists, so report the fallback here
    if config_warning.is_some() {
        tracing::warn!("settings.toml could not be read, using default settings");
    }

    tracing::info!(
        lang = lang.as_deref().unwrap_or("<auto>"),
        log_level = %config.general.log_level,
        "starting brand portal"
    );

    app::run(Flags {
        lang,
        config,
        config_warning,
    })
}

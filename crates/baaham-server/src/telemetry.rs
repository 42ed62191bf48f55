//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::filter::LevelFilter;

use crate::config::AppConfig;

fn filter(default_level: LevelFilter) -> EnvFilter {
    let directive: Directive = match format!("baaham={default_level}").parse() {
        Ok(d) => d,
        Err(_) => default_level.into(),
    };
    EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy()
}

/// Server logging: JSON lines in production, human-readable otherwise.
/// `RUST_LOG` overrides the default `baaham=info`.
pub fn init(config: &AppConfig) {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(LevelFilter::INFO));
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// CLI logging: warnings only, on stderr, so command output stays clean.
pub fn init_cli() {
    tracing_subscriber::fmt()
        .with_env_filter(filter(LevelFilter::WARN))
        .with_writer(std::io::stderr)
        .init();
}

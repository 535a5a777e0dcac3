//! swatch — a color picker that shows the selected color in every common
//! notation and copies any of them with one click.
//!
//! Run with:  `RUST_LOG=info swatch`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("swatch v{} starting", env!("CARGO_PKG_VERSION"));

    swatch_app::run().map_err(Into::into)
}

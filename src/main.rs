use std::env::{self, current_dir};

use color_eyre::Section;
use libpage::{pipeline::build_once, serve::serve};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logger();

    if env::args().any(|a| a == "serve") {
        let root =
            current_dir().with_note(|| "While getting the current working directory")?;
        serve(root).await?;
    } else {
        let out = build_once()?;
        info!("Built {}", out.display());
    }

    Ok(())
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("libpage=info,project_page=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

use anyhow::Result;
use readme_view::{content, dioxus_gui};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("readme_view=info")),
        )
        .init();
    content::install(content::Loader::new(content::remote_base())?);
    dioxus_gui::run()?;
    Ok(())
}

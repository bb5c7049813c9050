//! Remote content: fetch the current language's markdown and render it.

use anyhow::Context as _;
use once_cell::sync::OnceCell;
use pulldown_cmark::{html, Options, Parser};
use thiserror::Error;

use crate::lang::Language;

const DEFAULT_REMOTE_BASE: &str =
    "https://raw.githubusercontent.com/gusosilva/gusosilva.com/main";
const USER_AGENT: &str = concat!("readme-view/", env!("CARGO_PKG_VERSION"));

/// Remote base path the markdown files live under. Overridable through the
/// environment to point a build at another host.
pub fn remote_base() -> String {
    std::env::var("README_VIEW_REMOTE_BASE").unwrap_or_else(|_| DEFAULT_REMOTE_BASE.to_string())
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GET {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Fetches the remote markdown files and converts them for display.
pub struct Loader {
    client: reqwest::Client,
    base: String,
}

impl Loader {
    pub fn new(base: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("build http client")?;
        Ok(Self { client, base })
    }

    async fn fetch_markdown(&self, lang: Language) -> Result<String, ContentError> {
        let url = format!("{}/{}", self.base, lang.content_file());
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ContentError::Status { url, status });
        }
        Ok(resp.text().await?)
    }

    /// Load and render the content for `lang`. A failing English load
    /// switches to Portuguese and retries the entire load once; a
    /// Portuguese failure is final. Returns the language that is now
    /// current together with its HTML when a load succeeded; on total
    /// failure the HTML is `None` (the content region stays as it was)
    /// but the fallback switch still sticks.
    pub async fn load(&self, lang: Language) -> (Language, Option<String>) {
        match self.fetch_markdown(lang).await {
            Ok(markdown) => (lang, Some(render_markdown(&markdown))),
            Err(err) => {
                tracing::error!(%err, lang = lang.code(), "content fetch failed");
                if lang == Language::default() {
                    return (lang, None);
                }
                let fallback = Language::default();
                match self.fetch_markdown(fallback).await {
                    Ok(markdown) => (fallback, Some(render_markdown(&markdown))),
                    Err(err) => {
                        tracing::error!(%err, lang = fallback.code(), "fallback fetch failed");
                        (fallback, None)
                    }
                }
            }
        }
    }
}

/// Markdown to HTML through the external renderer.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

static LOADER: OnceCell<Loader> = OnceCell::new();

/// Install the process-wide loader (one-time; later calls are ignored).
pub fn install(loader: Loader) {
    let _ = LOADER.set(loader);
}

/// The installed loader, if `install` has run.
pub fn loader() -> Option<&'static Loader> {
    LOADER.get()
}

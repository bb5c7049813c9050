//! Dioxus desktop GUI.
use crate::content;
use crate::lang::Language;
use crate::prefs::{self, PrefStore};
use crate::theme::{self, Theme};
use crate::ui;
use dioxus::prelude::*;
use std::time::Duration;

const WINDOW_TITLE: &str = "gusosilva.com";

/// How often the OS color-scheme preference is re-checked while running.
const SYSTEM_THEME_POLL: Duration = Duration::from_secs(2);

// Design tokens for both themes. Light is the base; an explicit
// data-theme="dark" or (with no attribute) a dark OS preference switches to
// the dark set, mirroring the stylesheet contract of the hosted site.
const GLOBAL_CSS: &str = r#":root {
    color-scheme: light;
    --color-bg: #fafafa;
    --color-panel: #ffffff;
    --color-border: #e3e3e3;
    --color-border-hover: #c8c8c8;
    --color-text: #1d1f21;
    --color-text-dim: #5f6368;
    --color-accent: #2f6fdb;
    --color-code-bg: #f0f0f2;
    --radius-sm: 4px;
    --radius-md: 8px;
    --transition: .16s cubic-bezier(.4,0,.2,1);
}
:root[data-theme="dark"] {
    color-scheme: dark;
    --color-bg: #111213;
    --color-panel: #1d1f21;
    --color-border: #272a2d;
    --color-border-hover: #33373b;
    --color-text: #dddddd;
    --color-text-dim: #9aa0a6;
    --color-accent: #4d8eff;
    --color-code-bg: #222527;
}
@media (prefers-color-scheme: dark) {
    :root:not([data-theme]) {
        color-scheme: dark;
        --color-bg: #111213;
        --color-panel: #1d1f21;
        --color-border: #272a2d;
        --color-border-hover: #33373b;
        --color-text: #dddddd;
        --color-text-dim: #9aa0a6;
        --color-accent: #4d8eff;
        --color-code-bg: #222527;
    }
}
html,body { margin:0; background:var(--color-bg); color:var(--color-text); font-family: 'Inter', 'SF Pro Text', 'Segoe UI', Arial, Helvetica, sans-serif; -webkit-font-smoothing:antialiased; }
#root { max-width:760px; margin:0 auto; padding:16px 20px 40px 20px; display:flex; flex-direction:column; gap:18px; min-height:100vh; box-sizing:border-box; }
.toolbar { display:flex; justify-content:flex-end; gap:8px; }
button { background:var(--color-panel); color:var(--color-text); border:1px solid var(--color-border); border-radius:var(--radius-sm); padding:6px 12px; font-size:13px; cursor:pointer; font-weight:500; letter-spacing:.2px; display:inline-flex; align-items:center; justify-content:center; gap:6px; transition:var(--transition); }
button:hover { border-color:var(--color-border-hover); }
button:active { transform:translateY(1px); }
button .icon { width:16px; height:16px; display:block; }
#content { line-height:1.6; font-size:15px; }
#content h1,#content h2,#content h3 { line-height:1.25; }
#content a { color:var(--color-accent); text-decoration:none; }
#content a:hover { text-decoration:underline; }
#content code { background:var(--color-code-bg); border-radius:var(--radius-sm); padding:2px 5px; font-size:13px; }
#content pre { background:var(--color-code-bg); border:1px solid var(--color-border); border-radius:var(--radius-md); padding:12px 14px; overflow-x:auto; }
#content pre code { background:none; padding:0; }
#content blockquote { margin:0; padding:2px 14px; border-left:3px solid var(--color-border-hover); color:var(--color-text-dim); }
#content img { max-width:100%; }
#content table { border-collapse:collapse; }
#content th,#content td { border:1px solid var(--color-border); padding:6px 10px; }
"#;

/// Launch the desktop application.
pub fn run() -> anyhow::Result<()> {
    dioxus_desktop::launch::launch(
        app,
        vec![],
        vec![Box::new(dioxus_desktop::Config::default())],
    );
}

/// Top-level application state mirrored into the UI.
struct AppState {
    current_lang: Language,
    current_theme: Theme,
    /// Rendered HTML for the content region; `None` until the first
    /// successful load, and left untouched by failed loads.
    content_html: Option<String>,
    prefs: PrefStore,
}

impl AppState {
    /// Initialize both selections from the preference store, tolerating
    /// absent or unrecognized stored values.
    fn new() -> Self {
        let prefs = PrefStore::open_default();
        let current_lang = prefs
            .get(prefs::LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        let current_theme = prefs
            .get(prefs::THEME_KEY)
            .and_then(|code| Theme::from_code(&code))
            .unwrap_or_default();
        Self {
            current_lang,
            current_theme,
            content_html: None,
            prefs,
        }
    }
}

/// Root component wiring the toolbar, the content region and the watchers.
fn app() -> Element {
    let mut st: Signal<AppState> = use_signal(AppState::new);

    // Initial load: fetch and render the persisted language's content once.
    {
        let mut st_load = st.clone();
        use_future(move || async move {
            let lang = st_load.read().current_lang;
            load_into(&mut st_load, lang).await;
        });
    }

    // OS color-scheme watcher. Re-renders only while the theme is auto;
    // explicit user themes are never overridden by system changes.
    let sys_tick = use_signal(|| 0u64);
    {
        let tick_sig = sys_tick.clone();
        let st_watch = st.clone();
        use_future(move || async move {
            let mut t = tick_sig;
            let mut last = theme::system_prefers_dark();
            loop {
                tokio::time::sleep(SYSTEM_THEME_POLL).await;
                let now_dark = theme::system_prefers_dark();
                if now_dark != last {
                    last = now_dark;
                    if st_watch.read().current_theme == Theme::Auto {
                        *t.write() += 1; // trigger rerender
                    }
                }
            }
        });
    }

    // Read the tick to register the dependency.
    let _sys_tick_now = *sys_tick.read();

    let (current_lang, current_theme, content_html) = {
        let r = st.read();
        (
            r.current_lang,
            r.current_theme,
            r.content_html.clone().unwrap_or_default(),
        )
    };
    let system_dark = theme::system_prefers_dark();
    let ui::Controls {
        lang_text,
        lang_icon,
        lang_tooltip,
        theme_icon,
        theme_tooltip,
    } = ui::controls(current_lang, current_theme, system_dark);

    // Re-assert the document attribute on every refresh (idempotent).
    apply_theme(current_theme);

    let window = dioxus_desktop::use_window();
    {
        let win = window.clone();
        use_effect(move || {
            win.set_title(WINDOW_TITLE);
        });
    }

    rsx! {
        div { id: "root",
            style { {GLOBAL_CSS} }
            div { class: "toolbar",
                button { id: "lang-toggle", title: "{lang_tooltip}",
                    onclick: move |_| {
                        let next = st.read().current_lang.other();
                        {
                            let mut w = st.write();
                            w.current_lang = next;
                            w.prefs.set(prefs::LANGUAGE_KEY, next.code());
                        }
                        let mut st_fetch = st.clone();
                        spawn(async move {
                            load_into(&mut st_fetch, next).await;
                        });
                    },
                    img { class: "icon", src: "{lang_icon}", alt: "" }
                    span { "{lang_text}" }
                }
                button { id: "theme-toggle", title: "{theme_tooltip}",
                    onclick: move |_| {
                        // From auto, land on the opposite of the current
                        // system preference; never re-select auto.
                        let next = {
                            let current = st.read().current_theme;
                            current.toggled(theme::system_prefers_dark())
                        };
                        let mut w = st.write();
                        w.current_theme = next;
                        w.prefs.set(prefs::THEME_KEY, next.code());
                        // Content is language-dependent, not theme-dependent: no reload.
                    },
                    img { class: "icon", src: "{theme_icon}", alt: "" }
                }
            }
            div { id: "content", dangerous_inner_html: "{content_html}" }
        }
    }
}

/// Fetch and render `lang`, writing the outcome back into the app state.
/// Concurrent loads are not sequenced; the last write wins. The automatic
/// fallback updates the in-memory language but not the stored preference.
async fn load_into(st: &mut Signal<AppState>, lang: Language) {
    let Some(loader) = content::loader() else {
        tracing::error!("content loader not installed");
        return;
    };
    let (loaded, html) = loader.load(lang).await;
    let mut w = st.write();
    w.current_lang = loaded;
    if let Some(html) = html {
        w.content_html = Some(html);
    }
}

/// Assert the theme attribute on the webview document root.
fn apply_theme(theme: Theme) {
    let js = theme::document_attribute_script(theme);
    spawn(async move {
        if let Err(err) = document::eval(&js).await {
            tracing::warn!(?err, "theme attribute eval failed");
        }
    });
}

use httpmock::Method::GET;
use httpmock::MockServer;

use readme_view::content::Loader;
use readme_view::lang::Language;

fn loader_for(server: &MockServer) -> Loader {
    Loader::new(server.url("")).expect("build loader")
}

#[tokio::test]
async fn english_content_loads_directly() {
    let server = MockServer::start();
    let en = server.mock(|when, then| {
        when.method(GET).path("/README-en.md");
        then.status(200).body("# Hello\n\nwelcome");
    });

    let loader = loader_for(&server);
    let (lang, html) = loader.load(Language::En).await;
    let html = html.expect("content loads");

    en.assert();
    assert_eq!(lang, Language::En);
    assert!(html.contains("<h1>Hello</h1>"));
    assert!(html.contains("welcome"));
}

#[tokio::test]
async fn english_failure_falls_back_to_portuguese_once() {
    let server = MockServer::start();
    let en = server.mock(|when, then| {
        when.method(GET).path("/README-en.md");
        then.status(500);
    });
    let pt = server.mock(|when, then| {
        when.method(GET).path("/README.md");
        then.status(200).body("# Olá\n\nbem-vindo");
    });

    let loader = loader_for(&server);
    let (lang, html) = loader.load(Language::En).await;

    en.assert_hits(1);
    pt.assert_hits(1);
    assert_eq!(lang, Language::Pt);
    assert!(html.expect("fallback loads").contains("<h1>Olá</h1>"));
}

#[tokio::test]
async fn portuguese_failure_has_no_fallback() {
    let server = MockServer::start();
    let pt = server.mock(|when, then| {
        when.method(GET).path("/README.md");
        then.status(404);
    });
    let en = server.mock(|when, then| {
        when.method(GET).path("/README-en.md");
        then.status(200).body("# Hello");
    });

    let loader = loader_for(&server);
    let (lang, html) = loader.load(Language::Pt).await;

    // Exactly one request: the primary language never retries elsewhere.
    pt.assert_hits(1);
    en.assert_hits(0);
    assert_eq!(lang, Language::Pt);
    assert!(html.is_none());
}

#[tokio::test]
async fn both_languages_failing_yields_no_content_but_the_switch_sticks() {
    let server = MockServer::start();
    let en = server.mock(|when, then| {
        when.method(GET).path("/README-en.md");
        then.status(503);
    });
    let pt = server.mock(|when, then| {
        when.method(GET).path("/README.md");
        then.status(503);
    });

    let loader = loader_for(&server);
    let (lang, html) = loader.load(Language::En).await;

    en.assert_hits(1);
    pt.assert_hits(1);
    assert_eq!(lang, Language::Pt);
    assert!(html.is_none());
}

#[tokio::test]
async fn unreachable_host_is_reported_as_no_content() {
    // Nothing listens on port 1; the connection error takes the same
    // fallback-free path as an HTTP failure for the primary language.
    let loader = Loader::new("http://127.0.0.1:1".to_string()).expect("build loader");
    let (lang, html) = loader.load(Language::Pt).await;
    assert_eq!(lang, Language::Pt);
    assert!(html.is_none());
}

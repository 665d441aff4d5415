// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use woosh::domain::search::engine::{SearchEngine, SearchError};
use woosh::infrastructure::search::DuckDuckGoSearchEngine;

fn result_block(href: &str, title: &str) -> String {
    format!(
        r#"<div class="result results_links web-result"><h2 class="result__title"><a rel="nofollow" class="result__a" href="{href}">{title}</a></h2></div>"#
    )
}

fn page(results: &[(&str, &str)], next: Option<&[(&str, &str)]>) -> String {
    let mut html = String::from("<html><body><div id=\"links\">");
    for (href, title) in results {
        html.push_str(&result_block(href, title));
    }
    if let Some(fields) = next {
        html.push_str(r#"<div class="nav-link"><form action="/html/" method="post"><input type="submit" class="btn btn--alt" value="Next" />"#);
        for (name, value) in fields {
            html.push_str(&format!(
                r#"<input type="hidden" name="{name}" value="{value}" />"#
            ));
        }
        html.push_str("</form></div>");
    }
    html.push_str("</div></body></html>");
    html
}

fn engine(server: &MockServer) -> DuckDuckGoSearchEngine {
    DuckDuckGoSearchEngine::new(format!("{}/html/", server.uri()), None)
}

#[tokio::test]
async fn search_follows_next_page_form() {
    let server = MockServer::start().await;

    let first = page(
        &[
            (
                "//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.linkedin.com%2Fcompany%2Facme&rut=1",
                "ACME | LinkedIn",
            ),
            ("https://www.acme.it/", "ACME"),
        ],
        Some(&[("q", "acme"), ("s", "10"), ("dc", "11")]),
    );
    let second = page(
        &[
            ("https://www.facebook.com/acme", "ACME on Facebook"),
            ("https://www.acme.it/", "ACME (duplicate)"),
        ],
        None,
    );

    Mock::given(method("POST"))
        .and(path("/html/"))
        .and(body_string_contains("b="))
        .respond_with(ResponseTemplate::new(200).set_body_string(first))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/html/"))
        .and(body_string_contains("s=10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(second))
        .expect(1)
        .mount(&server)
        .await;

    let results = engine(&server)
        .search("acme", 10, Duration::from_secs(5))
        .await
        .unwrap();

    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://www.linkedin.com/company/acme",
            "https://www.acme.it/",
            "https://www.facebook.com/acme",
        ]
    );
}

#[tokio::test]
async fn search_stops_at_max_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(
            &[
                ("https://a.example.org/", "A"),
                ("https://b.example.org/", "B"),
                ("https://c.example.org/", "C"),
            ],
            Some(&[("q", "acme"), ("s", "10")]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let results = engine(&server)
        .search("acme", 2, Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn search_sends_region() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/html/"))
        .and(body_string_contains("kl=it-it"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(
            &[("https://www.acme.it/", "ACME")],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let engine = DuckDuckGoSearchEngine::new(
        format!("{}/html/", server.uri()),
        Some("it-it".to_string()),
    );
    let results = engine
        .search("acme", 10, Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn empty_page_yields_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/html/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><div class=\"no-results\">No results.</div></body></html>"),
        )
        .mount(&server)
        .await;

    let results = engine(&server)
        .search("zzzz-nothing", 10, Duration::from_secs(5))
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn http_errors_are_engine_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let outcome = engine(&server)
        .search("acme", 10, Duration::from_secs(5))
        .await;
    assert!(matches!(outcome, Err(SearchError::EngineError(_))));
}

#[tokio::test]
async fn throttling_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(202).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    match engine(&server)
        .search("acme", 10, Duration::from_secs(5))
        .await
    {
        Err(SearchError::EngineError(message)) => assert!(message.contains("202")),
        other => panic!("expected EngineError, got {:?}", other),
    }
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/html/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page(&[("https://www.acme.it/", "ACME")], None))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let outcome = engine(&server)
        .search("acme", 10, Duration::from_millis(100))
        .await;
    assert_eq!(outcome, Err(SearchError::Timeout));
}

#[tokio::test]
async fn unreachable_provider_is_a_network_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let engine = DuckDuckGoSearchEngine::new("http://127.0.0.1:9/html/", None);
    let outcome = engine.search("acme", 10, Duration::from_secs(5)).await;
    assert!(matches!(outcome, Err(SearchError::NetworkError(_))));
}

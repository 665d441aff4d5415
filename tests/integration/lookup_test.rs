// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io::Write;

use woosh::application::context::AppContext;
use woosh::domain::vat::VatError;

use super::helpers::{test_context, test_settings, FakeSearchEngine, FakeVatChecker};

#[tokio::test]
async fn lookup_searches_by_company_name_when_valid() {
    let engine = FakeSearchEngine::returning(&[
        "https://www.linkedin.com/company/acme",
        "https://www.acme.it/chi-siamo",
        "https://www.example.com/acme",
    ]);
    let context = test_context(engine.clone(), FakeVatChecker::valid("ACME S.P.A."));

    let data = context.lookup.lookup("IT00743110157").await;

    assert!(data.vat.is_valid);
    assert_eq!(data.vat.company_name.as_deref(), Some("ACME S.P.A."));
    assert_eq!(engine.queries.lock()[0].0, "ACME S.P.A.");
    assert_eq!(
        data.urls.get("social"),
        Some(&["https://www.linkedin.com/company/acme".to_string()][..])
    );
    assert!(data
        .urls
        .iter()
        .all(|(_, urls)| urls.iter().all(|u| !u.contains("example.com"))));
}

#[tokio::test]
async fn lookup_falls_back_to_raw_input() {
    let engine = FakeSearchEngine::returning(&[]);
    let context = test_context(
        engine.clone(),
        FakeVatChecker::failing(VatError::Transport("connection refused".to_string())),
    );

    let data = context.lookup.lookup("  IT00743110157 ").await;

    assert!(!data.vat.is_valid);
    assert_eq!(data.vat.error.as_deref(), Some("Error: connection refused"));
    assert!(data.urls.is_empty());
    assert_eq!(engine.queries.lock()[0].0, "IT00743110157");
}

#[tokio::test]
async fn repeated_searches_are_served_from_cache() {
    let engine = FakeSearchEngine::returning(&["https://www.facebook.com/acme"]);
    let context = test_context(engine.clone(), FakeVatChecker::valid("ACME S.P.A."));

    let first = context.search.search_companies("acme", 50, 5).await;
    let second = context.search.search_companies("acme", 50, 5).await;
    assert_eq!(first, second);
    assert_eq!(engine.calls(), 1);

    context.search.search_companies("acme", 50, 1).await;
    assert_eq!(engine.calls(), 2);
}

#[tokio::test]
async fn context_loads_custom_rule_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
categories:
  - name: partner
    rules:
      - {{ pattern: acme-partner, priority: 7 }}
excluded:
  - {{ pattern: spam }}
"#
    )
    .unwrap();

    let settings = test_settings(&format!(
        "[rules]\npath = \"{}\"\n",
        file.path().display()
    ));
    let engine = FakeSearchEngine::returning(&[
        "https://acme-partner.example.org/",
        "https://spam.example.org/",
        "https://www.linkedin.com/company/acme",
    ]);
    let context = AppContext::with_collaborators(
        &settings,
        engine,
        FakeVatChecker::valid("ACME S.P.A."),
    )
    .unwrap();

    let results = context.search.search("acme").await;
    let categories: Vec<&str> = results.iter().map(|(c, _)| c).collect();
    assert_eq!(categories, vec!["partner", "altro"]);
    assert_eq!(results.total_urls(), 2);
}

#[tokio::test]
async fn context_rejects_missing_rule_file() {
    let settings = test_settings("[rules]\npath = \"/nonexistent/woosh/rules.yaml\"\n");
    let outcome = AppContext::with_collaborators(
        &settings,
        FakeSearchEngine::returning(&[]),
        FakeVatChecker::valid("ACME S.P.A."),
    );
    assert!(outcome.is_err());
}

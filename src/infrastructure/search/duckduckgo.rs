// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::config::settings::SearchSettings;
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchEngine, SearchError};

/// DuckDuckGo HTML 端点
pub const DEFAULT_BASE_URL: &str = "https://html.duckduckgo.com/html/";

/// 单次搜索最多翻页数
pub const MAX_PAGES: usize = 10;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

static RESULT_LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.result:not(.result--ad) a.result__a")
        .unwrap_or_else(|e| panic!("invalid result selector: {e}"))
});

static NEXT_FORM_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.nav-link form").unwrap_or_else(|e| panic!("invalid form selector: {e}"))
});

static INPUT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("input[name]").unwrap_or_else(|e| panic!("invalid input selector: {e}"))
});

static SUBMIT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("input[type=submit]").unwrap_or_else(|e| panic!("invalid submit selector: {e}"))
});

/// 单页解析结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// 本页的自然结果（已去除广告）
    pub results: Vec<SearchResult>,
    /// 下一页表单字段，没有下一页时为 `None`
    pub next_form: Option<Vec<(String, String)>>,
}

/// DuckDuckGo 搜索引擎实现
///
/// 通过 HTML 端点抓取结果：
/// - POST 表单提交查询，翻页时回传页面上的 "Next" 表单
/// - 跳过广告结果
/// - 解码 `//duckduckgo.com/l/?uddg=...` 形式的跳转链接
/// - 整个搜索过程受调用方给出的超时限制
pub struct DuckDuckGoSearchEngine {
    client: reqwest::Client,
    base_url: String,
    region: Option<String>,
}

impl Default for DuckDuckGoSearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

impl DuckDuckGoSearchEngine {
    pub fn new(base_url: impl Into<String>, region: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into(),
            region,
        }
    }

    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self::new(settings.base_url.clone(), settings.region.clone())
    }

    /// 第一页的表单字段
    fn initial_form(&self, query: &str) -> Vec<(String, String)> {
        let mut form = vec![
            ("q".to_string(), query.to_string()),
            ("b".to_string(), String::new()),
        ];
        if let Some(region) = self.region.as_deref().filter(|r| !r.is_empty()) {
            form.push(("kl".to_string(), region.to_string()));
        }
        form
    }

    async fn fetch_page(&self, form: &[(String, String)]) -> Result<String, SearchError> {
        let response = self
            .client
            .post(&self.base_url)
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "it-IT,it;q=0.9,en;q=0.8")
            .form(form)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        // DuckDuckGo answers 202 with a challenge page when it throttles a client
        if status == reqwest::StatusCode::ACCEPTED {
            return Err(SearchError::EngineError(
                "rate limited by DuckDuckGo (HTTP 202)".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(SearchError::EngineError(format!("HTTP error {}", status)));
        }

        response.text().await.map_err(map_request_error)
    }

    async fn collect(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>, SearchError> {
        let limit = max_results as usize;
        let mut results: Vec<SearchResult> = Vec::with_capacity(limit.min(64));
        let mut seen: HashSet<String> = HashSet::new();
        let mut form = self.initial_form(query);

        for page_number in 1..=MAX_PAGES {
            let html = match self.fetch_page(&form).await {
                Ok(html) => html,
                Err(e) if !results.is_empty() => {
                    warn!(page = page_number, "Stopping pagination early: {}", e);
                    break;
                }
                Err(e) => return Err(e),
            };

            let page = parse_page(&html);
            debug!(
                page = page_number,
                found = page.results.len(),
                total = results.len(),
                "DuckDuckGo page parsed"
            );
            if page.results.is_empty() {
                break;
            }

            for result in page.results {
                if seen.insert(result.url.clone()) {
                    results.push(result);
                    if results.len() >= limit {
                        return Ok(results);
                    }
                }
            }

            match page.next_form {
                Some(next) => form = next,
                None => break,
            }
        }

        Ok(results)
    }
}

#[async_trait]
impl SearchEngine for DuckDuckGoSearchEngine {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
        timeout: Duration,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::EngineError(
                "Search query cannot be empty".to_string(),
            ));
        }
        if max_results == 0 {
            return Ok(Vec::new());
        }

        match tokio::time::timeout(timeout, self.collect(query, max_results)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(SearchError::Timeout),
        }
    }

    fn name(&self) -> &'static str {
        "duckduckgo"
    }
}

fn map_request_error(e: reqwest::Error) -> SearchError {
    if e.is_timeout() {
        SearchError::Timeout
    } else {
        SearchError::NetworkError(e.to_string())
    }
}

/// 解析一页 DuckDuckGo HTML 结果
pub fn parse_page(html: &str) -> SearchPage {
    let document = Html::parse_document(html);

    let results = document
        .select(&RESULT_LINK_SELECTOR)
        .filter_map(|link| {
            let href = link.value().attr("href")?;
            let url = decode_redirect(href)?;
            let title = link.text().collect::<String>().trim().to_string();
            let result = SearchResult::new(url);
            Some(if title.is_empty() {
                result
            } else {
                result.with_title(title)
            })
        })
        .collect();

    SearchPage {
        results,
        next_form: next_page_form(&document),
    }
}

/// 选择 "Next" 表单；找不到带 Next 按钮的表单时退回最后一个导航表单
fn next_page_form(document: &Html) -> Option<Vec<(String, String)>> {
    let forms: Vec<ElementRef<'_>> = document.select(&NEXT_FORM_SELECTOR).collect();
    let form = forms
        .iter()
        .find(|form| {
            form.select(&SUBMIT_SELECTOR).any(|submit| {
                submit
                    .value()
                    .attr("value")
                    .is_some_and(|v| v.to_ascii_lowercase().contains("next"))
            })
        })
        .or_else(|| forms.last())?;

    let fields: Vec<(String, String)> = form
        .select(&INPUT_SELECTOR)
        .filter(|input| input.value().attr("type") != Some("submit"))
        .filter_map(|input| {
            let name = input.value().attr("name")?;
            let value = input.value().attr("value").unwrap_or_default();
            Some((name.to_string(), value.to_string()))
        })
        .collect();

    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

/// 解码跳转链接
///
/// `//duckduckgo.com/l/?uddg=<encoded>` 返回解码后的目标地址，
/// 直接的 http(s) 链接原样返回，其余（相对路径、javascript: 等）返回 `None`
pub fn decode_redirect(href: &str) -> Option<String> {
    let href = href.trim();
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&absolute).ok()?;
    if let Some((_, target)) = parsed.query_pairs().find(|(key, _)| key == "uddg") {
        let target = target.into_owned();
        return if target.is_empty() { None } else { Some(target) };
    }

    match parsed.scheme() {
        "http" | "https" => Some(absolute),
        _ => None,
    }
}

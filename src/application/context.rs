// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::info;

use crate::application::use_cases::{CompanyLookupService, CompanySearchService};
use crate::config::settings::Settings;
use crate::domain::rules::{RuleError, RuleTable};
use crate::domain::search::engine::SearchEngine;
use crate::domain::services::ranker::ResultRanker;
use crate::domain::vat::VatChecker;
use crate::infrastructure::cache::RankedResultCache;
use crate::infrastructure::search::DuckDuckGoSearchEngine;
use crate::infrastructure::storage::LocalResultStore;
use crate::infrastructure::vies::ViesClient;

/// 应用上下文
///
/// 由配置一次性组装的共享服务，HTTP 服务与 CLI 共用
#[derive(Clone)]
pub struct AppContext {
    pub search: Arc<CompanySearchService>,
    pub lookup: Arc<CompanyLookupService>,
    pub store: Arc<LocalResultStore>,
}

impl AppContext {
    /// 使用真实的 DuckDuckGo 与 VIES 客户端构建上下文
    ///
    /// 规则表加载失败（文件不可读、正则非法）时返回错误，
    /// 调用方应当中止启动
    pub fn from_settings(settings: &Settings) -> Result<Self, RuleError> {
        let engine: Arc<dyn SearchEngine> =
            Arc::new(DuckDuckGoSearchEngine::from_settings(&settings.search));
        let checker: Arc<dyn VatChecker> = Arc::new(ViesClient::from_settings(&settings.vies));
        Self::with_collaborators(settings, engine, checker)
    }

    /// 使用给定的搜索引擎与 VAT 校验实现构建上下文
    pub fn with_collaborators(
        settings: &Settings,
        engine: Arc<dyn SearchEngine>,
        checker: Arc<dyn VatChecker>,
    ) -> Result<Self, RuleError> {
        let rules = Arc::new(RuleTable::load(settings.rules.path.as_deref())?);
        info!(
            categories = rules.categories().len(),
            excluded = rules.excluded().len(),
            "Rule table ready"
        );

        let cache = RankedResultCache::with_capacity(settings.cache.capacity).map(Arc::new);
        if cache.is_none() {
            info!("Ranked result cache disabled");
        }

        let search = Arc::new(
            CompanySearchService::new(engine, ResultRanker::new(rules))
                .with_cache(cache)
                .with_timeout(settings.search.timeout())
                .with_defaults(settings.search.max_results, settings.search.top_per_category),
        );
        let lookup = Arc::new(
            CompanyLookupService::new(checker, search.clone())
                .with_default_country(settings.vies.default_country.clone()),
        );
        let store = Arc::new(LocalResultStore::from_settings(&settings.output));

        Ok(Self {
            search,
            lookup,
            store,
        })
    }
}

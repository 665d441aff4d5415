// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::rule::{Rule, RuleSpec};

/// 未命中任何规则时使用的类别
pub const DEFAULT_CATEGORY: &str = "altro";

const BUILTIN_RULES: &str = include_str!("default_rules.yaml");

/// 规则表加载错误
///
/// 所有错误都在启动阶段抛出，不会延迟到匹配阶段
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("invalid regex `{pattern}` in `{category}`: {source}")]
    InvalidRegex {
        category: String,
        pattern: String,
        source: regex::Error,
    },

    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed rule document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("category name cannot be empty")]
    EmptyCategoryName,

    #[error("duplicate category `{0}`")]
    DuplicateCategory(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct RuleDocument {
    #[serde(default)]
    categories: Vec<CategoryDocument>,
    #[serde(default)]
    excluded: Vec<RuleSpec>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CategoryDocument {
    name: String,
    #[serde(default)]
    rules: Vec<RuleSpec>,
}

/// 单个类别及其有序规则
#[derive(Debug, Clone)]
pub struct CategoryRules {
    name: String,
    rules: Vec<Rule>,
}

impl CategoryRules {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// 是否存在命中该域名的规则
    pub fn matches(&self, domain: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(domain))
    }

    /// 第一条命中规则的优先级
    pub fn first_match_priority(&self, domain: &str) -> Option<i32> {
        self.rules
            .iter()
            .find(|rule| rule.matches(domain))
            .map(Rule::priority)
    }
}

/// 分类规则表
///
/// 进程级静态配置：启动时加载一次，之后只读。只读访问无需同步，
/// 可以通过 `Arc` 在并发请求之间共享。
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    categories: Vec<CategoryRules>,
    excluded: Vec<Rule>,
}

impl RuleTable {
    /// 由已构造的规则创建规则表
    pub fn new(categories: Vec<CategoryRules>, excluded: Vec<Rule>) -> Result<Self, RuleError> {
        let mut names = HashSet::new();
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(RuleError::EmptyCategoryName);
            }
            if !names.insert(category.name.clone()) {
                return Err(RuleError::DuplicateCategory(category.name.clone()));
            }
        }
        Ok(Self {
            categories,
            excluded,
        })
    }

    /// 内置规则表
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_yaml_str(BUILTIN_RULES)
    }

    /// 从 YAML 文本解析规则表
    ///
    /// 类别以序列声明，从而保留声明顺序
    pub fn from_yaml_str(content: &str) -> Result<Self, RuleError> {
        let document: RuleDocument = serde_yaml::from_str(content)?;

        let mut categories = Vec::with_capacity(document.categories.len());
        for category in &document.categories {
            let rules = compile_rules(&category.name, &category.rules)?;
            categories.push(CategoryRules::new(category.name.clone(), rules));
        }
        let excluded = compile_rules("excluded", &document.excluded)?;

        let table = Self::new(categories, excluded)?;
        debug!(
            categories = table.categories.len(),
            excluded = table.excluded.len(),
            "Rule table compiled"
        );
        Ok(table)
    }

    /// 从 YAML 文件加载规则表
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_yaml_str(&content)?;
        info!("Loaded rule table from {}", path.display());
        Ok(table)
    }

    /// 指定了文件时从文件加载，否则使用内置规则表
    pub fn load(path: Option<&str>) -> Result<Self, RuleError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    pub fn categories(&self) -> &[CategoryRules] {
        &self.categories
    }

    pub fn excluded(&self) -> &[Rule] {
        &self.excluded
    }

    pub fn category(&self, name: &str) -> Option<&CategoryRules> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// 任一排除规则命中即返回 true
    pub fn is_excluded(&self, domain: &str) -> bool {
        self.excluded.iter().any(|rule| rule.matches(domain))
    }

    /// 按声明顺序返回第一个命中的类别，未命中时返回 `DEFAULT_CATEGORY`
    pub fn classify_domain(&self, domain: &str) -> &str {
        if domain.is_empty() {
            return DEFAULT_CATEGORY;
        }
        self.categories
            .iter()
            .find(|category| category.matches(domain))
            .map(CategoryRules::name)
            .unwrap_or(DEFAULT_CATEGORY)
    }

    /// 类别中第一条命中规则的优先级，没有命中时为 0
    pub fn priority_for(&self, category: &str, domain: &str) -> i32 {
        self.category(category)
            .and_then(|c| c.first_match_priority(domain))
            .unwrap_or(0)
    }

    /// 导出为 YAML 文本
    pub fn to_yaml(&self) -> Result<String, RuleError> {
        let document = RuleDocument {
            categories: self
                .categories
                .iter()
                .map(|c| CategoryDocument {
                    name: c.name.clone(),
                    rules: c.rules.iter().map(Rule::to_spec).collect(),
                })
                .collect(),
            excluded: self.excluded.iter().map(Rule::to_spec).collect(),
        };
        Ok(serde_yaml::to_string(&document)?)
    }
}

fn compile_rules(category: &str, specs: &[RuleSpec]) -> Result<Vec<Rule>, RuleError> {
    specs
        .iter()
        .map(|spec| {
            Rule::from_spec(spec).map_err(|source| RuleError::InvalidRegex {
                category: category.to_string(),
                pattern: spec.pattern.clone(),
                source,
            })
        })
        .collect()
}

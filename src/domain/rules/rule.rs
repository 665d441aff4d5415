// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// 规则的声明形式
///
/// 与规则文件（YAML）中的条目一一对应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// 子串或正则表达式
    pub pattern: String,
    /// 为 true 时按正则表达式处理
    #[serde(default)]
    pub regex: bool,
    /// 打分优先级，数值越大越靠前
    #[serde(default)]
    pub priority: i32,
}

/// 域名匹配方式
#[derive(Debug, Clone)]
enum Matcher {
    /// 大小写不敏感的子串匹配，模式在构造时已转为小写
    Substring(String),
    /// 大小写不敏感的正则搜索（不锚定）
    Regex(Regex),
}

impl Matcher {
    fn is_match(&self, domain: &str) -> bool {
        let domain = domain.to_lowercase();
        match self {
            Matcher::Substring(needle) => domain.contains(needle.as_str()),
            Matcher::Regex(re) => re.is_match(&domain),
        }
    }
}

/// 单条分类规则
///
/// 规则加载后不可变。正则规则在构造时编译，非法模式在加载阶段即失败。
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    priority: i32,
    matcher: Matcher,
}

impl Rule {
    /// 创建子串规则
    pub fn substring(pattern: impl Into<String>, priority: i32) -> Self {
        let pattern = pattern.into();
        let matcher = Matcher::Substring(pattern.to_lowercase());
        Self {
            pattern,
            priority,
            matcher,
        }
    }

    /// 创建正则规则
    ///
    /// # Errors
    ///
    /// 模式无法编译时返回 `regex::Error`
    pub fn regex(pattern: impl Into<String>, priority: i32) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        let compiled = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self {
            pattern,
            priority,
            matcher: Matcher::Regex(compiled),
        })
    }

    /// 从声明形式构造规则
    pub fn from_spec(spec: &RuleSpec) -> Result<Self, regex::Error> {
        if spec.regex {
            Self::regex(spec.pattern.clone(), spec.priority)
        } else {
            Ok(Self::substring(spec.pattern.clone(), spec.priority))
        }
    }

    /// 判断规则是否命中给定域名
    pub fn matches(&self, domain: &str) -> bool {
        self.matcher.is_match(domain)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn is_regex(&self) -> bool {
        matches!(self.matcher, Matcher::Regex(_))
    }

    /// 转回声明形式，用于导出规则表
    pub fn to_spec(&self) -> RuleSpec {
        RuleSpec {
            pattern: self.pattern.clone(),
            regex: self.is_regex(),
            priority: self.priority,
        }
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 分类规则
//!
//! 规则表把类别名映射到有序的规则列表，另有一个独立的排除列表。
//! 声明顺序有语义：分类取第一个命中的类别，打分取该类别中第一条命中规则的优先级。

pub mod rule;
pub mod table;

pub use rule::{Rule, RuleSpec};
pub use table::{CategoryRules, RuleError, RuleTable};

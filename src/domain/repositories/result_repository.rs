// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 结果存储错误类型
#[derive(Error, Debug)]
pub enum ResultStoreError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 结果仓库特质
///
/// 保存搜索与 VAT 查询结果，键为相对文件名
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// 使用指定键保存数据，已存在时覆盖
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), ResultStoreError>;

    /// 根据键读取数据，不存在时返回 `None`
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ResultStoreError>;

    /// 检查指定键是否存在
    async fn exists(&self, key: &str) -> Result<bool, ResultStoreError>;
}

/// 搜索结果的存储键：`{query}_results.json`，空格与路径分隔符替换为下划线
pub fn results_key(query: &str) -> String {
    format!("{}_results.json", sanitize(query.trim()))
}

/// VAT 查询结果的存储键：`vat_{country}{number}_results.json`
pub fn vat_results_key(country_code: &str, vat_number: &str) -> String {
    format!(
        "vat_{}{}_results.json",
        sanitize(country_code),
        sanitize(vat_number)
    )
}

fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect()
}

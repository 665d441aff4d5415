// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::config::settings::OutputSettings;
use crate::domain::repositories::result_repository::{ResultRepository, ResultStoreError};

/// 本地文件系统结果存储
pub struct LocalResultStore {
    base_path: PathBuf,
}

impl LocalResultStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn from_settings(settings: &OutputSettings) -> Self {
        Self::new(&settings.results_dir)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// 键对应的完整路径
    pub fn full_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    /// 以带缩进的 JSON 保存，返回写入的路径
    pub async fn save_json<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<PathBuf, ResultStoreError> {
        let data = serde_json::to_vec_pretty(value)?;
        self.save(key, &data).await?;
        let path = self.full_path(key);
        info!("Results saved to {}", path.display());
        Ok(path)
    }
}

#[async_trait]
impl ResultRepository for LocalResultStore {
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), ResultStoreError> {
        let full_path = self.full_path(key);

        // 确保目录存在
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(&full_path).await?;
        file.write_all(data).await?;
        file.flush().await?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ResultStoreError> {
        match fs::read(self.full_path(key)).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ResultStoreError::Io(e)),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, ResultStoreError> {
        Ok(fs::try_exists(self.full_path(key)).await?)
    }
}

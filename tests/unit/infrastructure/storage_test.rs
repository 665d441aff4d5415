// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 本地结果存储测试模块

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use tempfile::TempDir;

    use woosh::domain::models::ranked::{RankedCategory, RankedResults};
    use woosh::domain::repositories::result_repository::{results_key, ResultRepository};
    use woosh::infrastructure::storage::LocalResultStore;

    fn sample() -> RankedResults {
        RankedResults::from_categories(vec![
            RankedCategory {
                category: "social".to_string(),
                urls: vec!["https://www.linkedin.com/company/acme".to_string()],
            },
            RankedCategory {
                category: "altro".to_string(),
                urls: vec!["https://www.acme.it/".to_string()],
            },
        ])
    }

    #[tokio::test]
    async fn test_save_json_writes_pretty_file() {
        let dir = TempDir::new().unwrap();
        let store = LocalResultStore::new(dir.path().join("results"));

        let key = results_key("ACME S.p.A.");
        let path = store.save_json(&key, &sample()).await.unwrap();

        assert_eq!(path, dir.path().join("results").join("ACME_S.p.A._results.json"));
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.contains('\n'));
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["social"][0], "https://www.linkedin.com/company/acme");
        assert!(store.exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_and_exists() {
        let dir = TempDir::new().unwrap();
        let store = LocalResultStore::new(dir.path());

        assert_eq!(store.get("missing.json").await.unwrap(), None);
        assert!(!store.exists("missing.json").await.unwrap());

        store.save("nested/dir/raw.json", b"{}").await.unwrap();
        assert_eq!(
            store.get("nested/dir/raw.json").await.unwrap(),
            Some(b"{}".to_vec())
        );
        assert!(store.exists("nested/dir/raw.json").await.unwrap());
    }
}

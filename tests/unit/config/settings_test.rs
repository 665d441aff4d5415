// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 测试默认配置文件与 `WOOSH__*` 环境变量的加载

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use woosh::config::settings::Settings;

    #[test]
    fn test_config_loading_from_default_toml() {
        let settings = Settings::new().expect("config/default.toml should load");

        assert_eq!(settings.search.base_url, "https://html.duckduckgo.com/html/");
        assert_eq!(settings.search.timeout(), Duration::from_secs(10));
        assert_eq!(settings.vies.timeout(), Duration::from_secs(10));
        assert!(settings.vies.base_url.ends_with("/rest-api"));
        assert!(!settings.server.cors_origins.is_empty());
    }

    #[test]
    fn test_environment_overrides() {
        let settings = Settings::with_env_vars([
            ("WOOSH__SERVER__PORT", "9311"),
            (
                "WOOSH__SERVER__CORS_ORIGINS",
                "http://localhost:3000,https://app.example.org",
            ),
            ("WOOSH__SEARCH__REGION", "it-it"),
            ("OTHER__SERVER__PORT", "1"),
        ])
        .unwrap();

        assert_eq!(settings.server.port, 9311);
        assert_eq!(
            settings.server.cors_origins,
            vec!["http://localhost:3000", "https://app.example.org"]
        );
        assert_eq!(settings.search.region.as_deref(), Some("it-it"));
    }

    #[test]
    fn test_environment_overrides_do_not_leak_between_loads() {
        let overridden = Settings::with_env_vars([("WOOSH__CACHE__CAPACITY", "7")]).unwrap();
        let untouched = Settings::with_env_vars(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(overridden.cache.capacity, 7);
        assert_eq!(untouched.cache.capacity, 128);
    }

    #[test]
    fn test_invalid_environment_value_is_rejected() {
        assert!(Settings::with_env_vars([("WOOSH__SERVER__PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Settings::from_toml_str("[cache]\ncapacity = -5\n").is_err());
        assert!(Settings::from_toml_str("[search]\nmax_results = -1\n").is_err());
    }
}

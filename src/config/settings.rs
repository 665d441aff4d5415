// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map};
use serde::Deserialize;

/// 环境变量前缀，例如 `WOOSH__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "WOOSH";

/// 应用程序配置设置
///
/// 包含服务器、搜索、VIES、缓存、规则表与结果输出等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 搜索配置
    pub search: SearchSettings,
    /// VIES 配置
    pub vies: ViesSettings,
    /// 结果缓存配置
    pub cache: CacheSettings,
    /// 分类规则配置
    #[serde(default)]
    pub rules: RulesSettings,
    /// 结果输出配置
    pub output: OutputSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 允许跨域访问的来源
    pub cors_origins: Vec<String>,
}

/// 搜索配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// DuckDuckGo HTML 端点
    pub base_url: String,
    /// 默认请求的原始结果数量
    pub max_results: u32,
    /// 单次搜索的总超时时间（秒）
    pub timeout_secs: u64,
    /// 每个类别保留的 URL 数量
    pub top_per_category: usize,
    /// 区域参数，例如 `it-it`
    pub region: Option<String>,
}

impl SearchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// VIES 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ViesSettings {
    /// VIES REST 接口根地址
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 输入未携带国家前缀时使用的国家代码
    pub default_country: String,
}

impl ViesSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 结果缓存配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// 缓存条目上限，0 表示禁用
    pub capacity: usize,
}

/// 分类规则配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesSettings {
    /// 规则文件路径，未设置时使用内置规则
    pub path: Option<String>,
}

/// 结果输出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// CLI `--save` 写入的目录
    pub results_dir: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 加载顺序（后者覆盖前者）：内置默认值、`config/default`、
    /// `config/{APP_ENVIRONMENT}`、`WOOSH__*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Self::environment())
    }

    /// 与 [`Settings::new`] 相同，但从给定的变量表读取 `WOOSH__*` 覆盖项，不访问进程环境变量
    pub fn with_env_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::load(Self::environment().source(Some(vars)))
    }

    fn load(overrides: Environment) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(overrides)
            .build()?
            .try_deserialize()
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.cors_origins")
            .try_parsing(true)
    }

    /// 从 TOML 文本加载配置，未给出的键使用默认值
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Server
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.cors_origins", vec!["http://localhost:3000"])?
            // Search
            .set_default("search.base_url", "https://html.duckduckgo.com/html/")?
            .set_default("search.max_results", 100)?
            .set_default("search.timeout_secs", 10)?
            .set_default("search.top_per_category", 5)?
            // VIES
            .set_default(
                "vies.base_url",
                "https://ec.europa.eu/taxation_customs/vies/rest-api",
            )?
            .set_default("vies.timeout_secs", 10)?
            .set_default("vies.default_country", "IT")?
            // Cache
            .set_default("cache.capacity", 128)?
            // Output
            .set_default("output.results_dir", "results")
    }

    /// 监听地址，形如 `0.0.0.0:8000`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

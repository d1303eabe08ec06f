use serde::Deserialize;

/// Main configuration structure for pepscan
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub registry: RegistryConfig,
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// Registry endpoints to audit
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// URL of the index page listing every proposal
    #[serde(rename = "index-url")]
    pub index_url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            index_url: "https://peps.python.org/".to_string(),
        }
    }
}

/// HTTP fetching and page cache configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Path to the SQLite page cache file
    #[serde(rename = "cache-path")]
    pub cache_path: String,

    /// Whether repeat fetches are served from the cache
    #[serde(rename = "use-cache")]
    pub use_cache: bool,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            cache_path: "./pepscan-cache.db".to_string(),
            use_cache: true,
            timeout_secs: 30,
            user_agent: format!("pepscan/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the file renderer writes result tables into
    #[serde(rename = "results-dir")]
    pub results_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: "./results".to_string(),
        }
    }
}

use crate::matching::BrowseLimits;
use std::env;
use std::path::PathBuf;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
    /// Optional path to a catalog JSON file. If None, the embedded catalog is used.
    pub catalog_path: Option<PathBuf>,
    /// Number of ranked candidates handed to the facet filter on the search path.
    pub search_candidates: usize,
    /// Default size of the trending section.
    pub trending_limit: usize,
    /// Default size of the new-tools section.
    pub new_tools_limit: usize,
    /// Longest accepted query, in characters.
    pub max_query_length: usize,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            shutdown_timeout_secs: env::var("SHUTDOWN_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            catalog_path: env::var("CATALOG_PATH").ok().map(PathBuf::from),
            search_candidates: env::var("SEARCH_CANDIDATES")
                .unwrap_or_else(|_| "50".to_string())
                .parse()?,
            trending_limit: env::var("TRENDING_LIMIT")
                .unwrap_or_else(|_| "6".to_string())
                .parse()?,
            new_tools_limit: env::var("NEW_TOOLS_LIMIT")
                .unwrap_or_else(|_| "6".to_string())
                .parse()?,
            max_query_length: env::var("MAX_QUERY_LENGTH")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()?,
        })
    }

    pub fn browse_limits(&self) -> BrowseLimits {
        BrowseLimits {
            search_candidates: self.search_candidates,
            trending: self.trending_limit,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout_secs: 30,
            catalog_path: None,
            search_candidates: 50,
            trending_limit: 6,
            new_tools_limit: 6,
            max_query_length: 1000,
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Working directory (order snapshot lives here) |
/// | HTTP_PORT | 8080 | HTTP API port |
/// | MENU_API_URL | https://free-food-menus-api-two.vercel.app | Upstream menu source base URL |
/// | MENU_CATEGORIES | (14 built-in slugs) | Comma-separated category slugs to aggregate |
/// | MENU_FETCH_TIMEOUT_MS | 10000 | Per-category upstream request timeout |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/menu HTTP_PORT=3000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds the order snapshot file
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Base URL of the upstream menu source
    pub menu_api_url: String,
    /// Category slugs to aggregate, in display order
    pub menu_categories: Vec<String>,
    /// Per-category upstream request timeout (milliseconds)
    pub fetch_timeout_ms: u64,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// The category set of the reference deployment.
    ///
    /// This is configuration, not logic: the aggregator works for any set.
    pub fn default_categories() -> Vec<String> {
        [
            "bbqs",
            "best-foods",
            "breads",
            "burgers",
            "chocolates",
            "desserts",
            "drinks",
            "fried-chicken",
            "ice-cream",
            "pizzas",
            "porks",
            "sandwiches",
            "sausages",
            "steaks",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            menu_api_url: std::env::var("MENU_API_URL")
                .unwrap_or_else(|_| "https://free-food-menus-api-two.vercel.app".into()),
            menu_categories: std::env::var("MENU_CATEGORIES")
                .ok()
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .filter(|v: &Vec<String>| !v.is_empty())
                .unwrap_or_else(Self::default_categories),
            fetch_timeout_ms: std::env::var("MENU_FETCH_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10_000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the fields tests care about.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Path of the order snapshot file inside the working directory.
    pub fn snapshot_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("orders.json")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_categories_match_reference_deployment() {
        let cats = Config::default_categories();
        assert_eq!(cats.len(), 14);
        assert_eq!(cats[0], "bbqs");
        assert_eq!(cats[13], "steaks");
    }

    #[test]
    fn snapshot_path_joins_work_dir() {
        let config = Config::with_overrides("/tmp/menu-test", 0);
        assert_eq!(
            config.snapshot_path(),
            std::path::PathBuf::from("/tmp/menu-test/orders.json")
        );
    }
}

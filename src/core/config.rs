//! Configuration management for uxcompare
//!
//! Supports environment variables, config files, and runtime overrides.
//! Sites and category are plain config fields rather than source literals.
//!
//! Config file location: ~/.config/uxcompare/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{CompareError, Result};
use crate::core::types::Site;

/// Main configuration for uxcompare
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sites under comparison and their product category
    pub comparison: ComparisonConfig,
    /// Browser configuration
    pub browser: BrowserConfig,
    /// Screenshot capture configuration
    pub capture: CaptureConfig,
    /// CLIP scoring configuration
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Gemini narrative configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Sites and category for a comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Product category the sites compete in, used in scoring prompts
    pub category: String,
    /// Ordered list of sites; output order follows this list
    pub sites: Vec<Site>,
}

/// Browser automation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Whether to run with a visible browser window
    pub headed: bool,
    /// Viewport width in px
    pub viewport_width: u32,
    /// Viewport height in px; tall so most pages fit without scrolling
    pub viewport_height: u32,
    /// Navigation timeout in seconds
    pub nav_timeout_secs: u64,
    /// Post-load settle delay in milliseconds
    pub settle_ms: u64,
}

/// Screenshot capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Root directory for per-site screenshot folders
    pub screenshots_dir: PathBuf,
    /// Minimum main-band height in px; shorter bands are skipped
    pub min_main_height: u32,
}

/// CLIP scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Where to cache downloaded model weights (encoder default if unset)
    pub cache_dir: Option<PathBuf>,
    /// Show model download progress on first run
    pub show_download_progress: bool,
}

/// Gemini narrative configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key; prefer the GEMINI_API_KEY environment variable
    pub api_key: Option<String>,
    /// Model name for generateContent
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comparison: ComparisonConfig::default(),
            browser: BrowserConfig::default(),
            capture: CaptureConfig::default(),
            scoring: ScoringConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            category: env::var("UXCOMPARE_CATEGORY").unwrap_or_else(|_| "Ecommerce".to_string()),
            sites: vec![
                Site::new("amazon", "https://www.amazon.in"),
                Site::new("flipkart", "https://www.flipkart.com"),
            ],
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headed: env::var("UXCOMPARE_HEADED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            viewport_width: 1280,
            viewport_height: 3000,
            nav_timeout_secs: 60,
            settle_ms: 3000,
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            screenshots_dir: env::var("UXCOMPARE_SCREENSHOTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("screenshots")),
            min_main_height: 50,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cache_dir: env::var("UXCOMPARE_MODEL_CACHE").ok().map(PathBuf::from),
            show_download_progress: true,
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY").ok(),
            model: env::var("UXCOMPARE_GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            timeout_secs: 120,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("uxcompare")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(mut config) = Self::load_from_file() {
            // Env always wins for the credential
            if let Ok(key) = env::var("GEMINI_API_KEY") {
                config.gemini.api_key = Some(key);
            }
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(CompareError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| CompareError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CompareError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| CompareError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CompareError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| CompareError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Save configuration and return the path
    pub fn save_and_get_path(&self) -> Result<PathBuf> {
        self.save()?;
        Ok(Self::config_file())
    }

    /// Check if a config file exists
    pub fn config_exists() -> bool {
        Self::config_file().exists()
    }

    /// Validate site URLs and the site list shape
    pub fn validate(&self) -> Result<()> {
        if self.comparison.sites.is_empty() {
            return Err(CompareError::config("No sites configured"));
        }

        for site in &self.comparison.sites {
            if site.name.trim().is_empty() {
                return Err(CompareError::config("Site with an empty name"));
            }
            url::Url::parse(&site.url)
                .map_err(|e| CompareError::config(format!("Invalid URL for {}: {}", site.name, e)))?;
        }

        Ok(())
    }

    /// Screenshot directory for one site
    pub fn site_dir(&self, site_name: &str) -> PathBuf {
        self.capture.screenshots_dir.join(site_name)
    }

    /// Expected full-page screenshot path for one site
    pub fn full_page_path(&self, site_name: &str) -> PathBuf {
        self.site_dir(site_name)
            .join(format!("{}_full.png", site_name))
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config)
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }
}

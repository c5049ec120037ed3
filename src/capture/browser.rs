//! Browser session - wraps a headless Chrome instance
//!
//! One session per comparison run; one tab per site.

use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::core::{BrowserConfig, CompareError, Result};

/// Owned Chrome instance for a comparison run
///
/// The browser process is terminated when the session is dropped, so an
/// early return from the run loop cannot leak it.
pub struct BrowserSession {
    browser: Browser,
}

impl BrowserSession {
    /// Launch Chrome with the configured viewport
    pub fn launch(config: &BrowserConfig) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(!config.headed)
            .window_size(Some((config.viewport_width, config.viewport_height)))
            // must outlive CLIP scoring pauses between sites
            .idle_browser_timeout(Duration::from_secs(600))
            .build()
            .map_err(|e| CompareError::browser(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(options)
            .map_err(|e| CompareError::browser(format!("Failed to launch Chrome: {}", e)))?;

        Ok(Self { browser })
    }

    /// Check if a Chrome executable can be found
    pub fn is_available() -> bool {
        headless_chrome::browser::default_executable().is_ok()
    }

    /// Open a fresh tab
    pub fn new_tab(&self) -> Result<Arc<Tab>> {
        self.browser
            .new_tab()
            .map_err(|e| CompareError::browser(format!("Failed to open tab: {}", e)))
    }
}

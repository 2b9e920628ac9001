//! Configuration management with environment variable support.
//!
//! This module provides centralized configuration for web-regress, supporting:
//! - Environment variables for all configurable values
//! - Sensible defaults that match the original hardcoded values
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `WEB_REGRESS_APP_URL` | Target application URL | `http://localhost:3002` |
//! | `WEB_REGRESS_WEBDRIVER_URL` | WebDriver endpoint URL | `http://localhost:9515` |
//! | `WEB_REGRESS_BROWSER` | Browser name capability | `chrome` |
//! | `WEB_REGRESS_SCREENSHOT_DIR` | Directory for failure screenshots | `screenshots` |
//! | `WEB_REGRESS_REPORT_DIR` | Directory for report files | `.` |
//! | `WEB_REGRESS_STEP_PAUSE_MS` | Pause after each successful step (ms) | `3000` |
//! | `WEB_REGRESS_CONNECT_TIMEOUT` | WebDriver connect timeout (seconds) | `10` |
//! | `WEB_REGRESS_REQUEST_TIMEOUT` | WebDriver request timeout (seconds) | `120` |
//!
//! # Example
//!
//! ```bash
//! # Drive a geckodriver instance against a staging deploy
//! export WEB_REGRESS_WEBDRIVER_URL="http://localhost:4444"
//! export WEB_REGRESS_BROWSER="firefox"
//! export WEB_REGRESS_APP_URL="http://staging.local:3002"
//! ```

use std::env;
use std::sync::OnceLock;

// ============================================================================
// Default Values (matching original hardcoded values)
// ============================================================================

/// Default target application URL
pub const DEFAULT_APP_URL: &str = "http://localhost:3002";

/// Default WebDriver endpoint (chromedriver)
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Default browser name capability
pub const DEFAULT_BROWSER: &str = "chrome";

/// Default directory for failure screenshots
pub const DEFAULT_SCREENSHOT_DIR: &str = "screenshots";

/// Default directory for report files
pub const DEFAULT_REPORT_DIR: &str = ".";

/// Default pause after each successful step, and after the initial page load (milliseconds)
pub const DEFAULT_STEP_PAUSE_MS: u64 = 3000;

/// Default WebDriver connection timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// Default WebDriver request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 120;

// ============================================================================
// Environment Variable Names
// ============================================================================

/// Environment variable for the target application URL
pub const ENV_APP_URL: &str = "WEB_REGRESS_APP_URL";

/// Environment variable for the WebDriver endpoint
pub const ENV_WEBDRIVER_URL: &str = "WEB_REGRESS_WEBDRIVER_URL";

/// Environment variable for the browser name capability
pub const ENV_BROWSER: &str = "WEB_REGRESS_BROWSER";

/// Environment variable for the screenshot directory
pub const ENV_SCREENSHOT_DIR: &str = "WEB_REGRESS_SCREENSHOT_DIR";

/// Environment variable for the report directory
pub const ENV_REPORT_DIR: &str = "WEB_REGRESS_REPORT_DIR";

/// Environment variable for the inter-step pause
pub const ENV_STEP_PAUSE_MS: &str = "WEB_REGRESS_STEP_PAUSE_MS";

/// Environment variable for the WebDriver connect timeout
pub const ENV_CONNECT_TIMEOUT: &str = "WEB_REGRESS_CONNECT_TIMEOUT";

/// Environment variable for the WebDriver request timeout
pub const ENV_REQUEST_TIMEOUT: &str = "WEB_REGRESS_REQUEST_TIMEOUT";

// ============================================================================
// Configuration Getters (with caching)
// ============================================================================

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration (initialized from environment on first access)
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Centralized configuration for web-regress
#[derive(Debug, Clone)]
pub struct Config {
    /// Target application settings
    pub app: AppSettings,
    /// WebDriver settings
    pub driver: DriverSettings,
    /// Run/artifact settings
    pub run: RunSettings,
}

/// Target-application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// URL of the web application under test
    pub url: String,
}

/// WebDriver-related settings
#[derive(Debug, Clone)]
pub struct DriverSettings {
    /// WebDriver endpoint URL
    pub endpoint: String,
    /// Browser name capability
    pub browser: String,
    /// Connection timeout (seconds)
    pub connect_timeout: u64,
    /// Request timeout (seconds)
    pub request_timeout: u64,
}

/// Run and artifact settings
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Directory where failure screenshots are written
    pub screenshot_dir: String,
    /// Directory where report files are written
    pub report_dir: String,
    /// Pause after each successful step and after initial load (milliseconds)
    pub step_pause_ms: u64,
}

impl Config {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            app: AppSettings::from_env(),
            driver: DriverSettings::from_env(),
            run: RunSettings::from_env(),
        }
    }

    /// Create configuration with all defaults (ignoring environment)
    pub fn defaults() -> Self {
        Self {
            app: AppSettings::defaults(),
            driver: DriverSettings::defaults(),
            run: RunSettings::defaults(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl AppSettings {
    /// Create application settings from environment variables
    pub fn from_env() -> Self {
        Self {
            url: env::var(ENV_APP_URL).unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
        }
    }

    /// Create application settings with defaults
    pub fn defaults() -> Self {
        Self {
            url: DEFAULT_APP_URL.to_string(),
        }
    }
}

impl DriverSettings {
    /// Create WebDriver settings from environment variables
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var(ENV_WEBDRIVER_URL)
                .unwrap_or_else(|_| DEFAULT_WEBDRIVER_URL.to_string()),
            browser: env::var(ENV_BROWSER).unwrap_or_else(|_| DEFAULT_BROWSER.to_string()),
            connect_timeout: env::var(ENV_CONNECT_TIMEOUT)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            request_timeout: env::var(ENV_REQUEST_TIMEOUT)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        }
    }

    /// Create WebDriver settings with defaults
    pub fn defaults() -> Self {
        Self {
            endpoint: DEFAULT_WEBDRIVER_URL.to_string(),
            browser: DEFAULT_BROWSER.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl RunSettings {
    /// Create run settings from environment variables
    pub fn from_env() -> Self {
        Self {
            screenshot_dir: env::var(ENV_SCREENSHOT_DIR)
                .unwrap_or_else(|_| DEFAULT_SCREENSHOT_DIR.to_string()),
            report_dir: env::var(ENV_REPORT_DIR).unwrap_or_else(|_| DEFAULT_REPORT_DIR.to_string()),
            step_pause_ms: env::var(ENV_STEP_PAUSE_MS)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_STEP_PAUSE_MS),
        }
    }

    /// Create run settings with defaults
    pub fn defaults() -> Self {
        Self {
            screenshot_dir: DEFAULT_SCREENSHOT_DIR.to_string(),
            report_dir: DEFAULT_REPORT_DIR.to_string(),
            step_pause_ms: DEFAULT_STEP_PAUSE_MS,
        }
    }
}

/// Get the target application URL (convenience function)
pub fn app_url() -> String {
    get().app.url.clone()
}

/// Get the WebDriver endpoint (convenience function)
pub fn webdriver_url() -> String {
    get().driver.endpoint.clone()
}

/// Get the screenshot directory (convenience function)
pub fn screenshot_dir() -> String {
    get().run.screenshot_dir.clone()
}

/// Get the inter-step pause in milliseconds (convenience function)
pub fn step_pause_ms() -> u64 {
    get().run.step_pause_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::defaults();
        assert_eq!(config.app.url, DEFAULT_APP_URL);
        assert_eq!(config.driver.endpoint, DEFAULT_WEBDRIVER_URL);
        assert_eq!(config.driver.browser, DEFAULT_BROWSER);
        assert_eq!(config.run.screenshot_dir, DEFAULT_SCREENSHOT_DIR);
        assert_eq!(config.run.step_pause_ms, DEFAULT_STEP_PAUSE_MS);
    }

    #[test]
    fn test_driver_defaults_timeouts() {
        let driver = DriverSettings::defaults();
        assert_eq!(driver.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(driver.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_run_defaults_report_dir_is_cwd() {
        let run = RunSettings::defaults();
        assert_eq!(run.report_dir, ".");
    }
}

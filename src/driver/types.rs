use crate::config;

/// Result type for WebDriver operations
pub type DriverResult<T> = Result<T, DriverError>;

/// Errors that can occur while talking to the WebDriver endpoint
#[derive(Debug)]
pub enum DriverError {
    /// Transport-level failure (connection refused, timeout, bad URL)
    Http(reqwest::Error),
    /// Error payload returned by the WebDriver endpoint
    /// (e.g. "no such element", "element not interactable")
    Protocol {
        /// W3C error code string
        error: String,
        /// Human-readable message from the driver
        message: String,
    },
    /// Response body did not match the W3C wire format
    InvalidResponse(String),
    /// Screenshot payload was not valid base64
    Decode(String),
}

impl std::fmt::Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverError::Http(e) => write!(f, "HTTP error: {}", e),
            DriverError::Protocol { error, message } => {
                write!(f, "WebDriver error [{}]: {}", error, message)
            }
            DriverError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            DriverError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DriverError {
    fn from(e: reqwest::Error) -> Self {
        DriverError::Http(e)
    }
}

/// Configuration for a WebDriver session
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// WebDriver endpoint URL (e.g. a local chromedriver)
    pub endpoint: String,
    /// Browser name requested in the session capabilities
    pub browser: String,
    /// Timeout for establishing connections (seconds)
    pub connect_timeout: u64,
    /// Timeout for individual commands (seconds)
    pub request_timeout: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        let cfg = config::get();
        Self {
            endpoint: cfg.driver.endpoint.clone(),
            browser: cfg.driver.browser.clone(),
            connect_timeout: cfg.driver.connect_timeout,
            request_timeout: cfg.driver.request_timeout,
        }
    }
}

impl DriverConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn browser(mut self, browser: impl Into<String>) -> Self {
        self.browser = browser.into();
        self
    }

    pub fn connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout = seconds;
        self
    }

    pub fn request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout = seconds;
        self
    }
}

//! Blocking W3C WebDriver client.
//!
//! Speaks the JSON-over-HTTP wire protocol directly against a local driver
//! process (chromedriver, geckodriver). Only the handful of commands the
//! regression run needs are implemented: session create/delete, navigation,
//! window maximize, XPath element lookup, click/clear/send-keys, and
//! viewport screenshots.

use base64::Engine;
use std::time::Duration;

use super::types::{DriverConfig, DriverError, DriverResult};

/// W3C element identifier key in find-element responses
const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// An active browser session against a WebDriver endpoint.
///
/// The session is deleted when the struct is dropped, so the browser is
/// released on every exit path. Call [`DriverSession::quit`] to release it
/// explicitly and observe the outcome.
#[derive(Debug)]
pub struct DriverSession {
    client: reqwest::blocking::Client,
    endpoint: String,
    session_id: String,
}

impl DriverSession {
    /// Create a new browser session with the configured capabilities.
    pub fn start(config: &DriverConfig) -> DriverResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        let body = serde_json::json!({
            "capabilities": {
                "alwaysMatch": {
                    "browserName": config.browser,
                }
            }
        });

        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        let value = post_command(&client, &format!("{}/session", endpoint), &body)?;

        let session_id = value
            .get("sessionId")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                DriverError::InvalidResponse("session response missing sessionId".to_string())
            })?
            .to_string();

        Ok(Self {
            client,
            endpoint,
            session_id,
        })
    }

    /// Session identifier assigned by the driver
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Navigate the browser to a URL
    pub fn navigate(&self, url: &str) -> DriverResult<()> {
        self.post("url", &serde_json::json!({ "url": url }))?;
        Ok(())
    }

    /// Maximize the browser window
    pub fn maximize_window(&self) -> DriverResult<()> {
        self.post("window/maximize", &serde_json::json!({}))?;
        Ok(())
    }

    /// Find a single element by XPath, returning its element id
    pub fn find_element(&self, xpath: &str) -> DriverResult<String> {
        let value = self.post(
            "element",
            &serde_json::json!({ "using": "xpath", "value": xpath }),
        )?;

        value
            .get(ELEMENT_KEY)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                DriverError::InvalidResponse("find-element response missing element id".to_string())
            })
    }

    /// Click an element
    pub fn click(&self, element_id: &str) -> DriverResult<()> {
        self.post(&format!("element/{}/click", element_id), &serde_json::json!({}))?;
        Ok(())
    }

    /// Clear an element's current content
    pub fn clear(&self, element_id: &str) -> DriverResult<()> {
        self.post(&format!("element/{}/clear", element_id), &serde_json::json!({}))?;
        Ok(())
    }

    /// Type text into an element
    pub fn send_keys(&self, element_id: &str, text: &str) -> DriverResult<()> {
        self.post(
            &format!("element/{}/value", element_id),
            &serde_json::json!({ "text": text }),
        )?;
        Ok(())
    }

    /// Capture a PNG screenshot of the current viewport
    pub fn screenshot(&self) -> DriverResult<Vec<u8>> {
        let url = format!("{}/session/{}/screenshot", self.endpoint, self.session_id);
        let response = self.client.get(&url).send()?;
        let value = unwrap_value(response)?;

        let encoded = value.as_str().ok_or_else(|| {
            DriverError::InvalidResponse("screenshot response was not a string".to_string())
        })?;

        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| DriverError::Decode(e.to_string()))
    }

    /// Delete the session, releasing the browser
    pub fn quit(&self) -> DriverResult<()> {
        let url = format!("{}/session/{}", self.endpoint, self.session_id);
        let response = self.client.delete(&url).send()?;
        unwrap_value(response)?;
        Ok(())
    }

    /// Issue a POST command scoped to this session and return its `value`
    fn post(&self, command: &str, body: &serde_json::Value) -> DriverResult<serde_json::Value> {
        let url = format!("{}/session/{}/{}", self.endpoint, self.session_id, command);
        post_command(&self.client, &url, body)
    }
}

impl Drop for DriverSession {
    fn drop(&mut self) {
        let url = format!("{}/session/{}", self.endpoint, self.session_id);
        let _ = self.client.delete(&url).send();
    }
}

/// POST a command body and return the unwrapped `value` field
fn post_command(
    client: &reqwest::blocking::Client,
    url: &str,
    body: &serde_json::Value,
) -> DriverResult<serde_json::Value> {
    let response = client.post(url).json(body).send()?;
    unwrap_value(response)
}

/// Unwrap the W3C response envelope, mapping error payloads to `DriverError::Protocol`.
///
/// Every WebDriver response is `{"value": ...}`; on failure `value` carries
/// `error` and `message` fields alongside a non-2xx status.
fn unwrap_value(response: reqwest::blocking::Response) -> DriverResult<serde_json::Value> {
    let status = response.status();
    let body: serde_json::Value = response
        .json()
        .map_err(|e| DriverError::InvalidResponse(e.to_string()))?;

    let value = body
        .get("value")
        .cloned()
        .ok_or_else(|| DriverError::InvalidResponse("response missing value field".to_string()))?;

    if !status.is_success() {
        let error = value
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown error")
            .to_string();
        let message = value
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        return Err(DriverError::Protocol { error, message });
    }

    Ok(value)
}

//! Platform configuration.
//!
//! The host hands the plugin a JSON block for its platform. This module
//! deserializes that block and validates it before any accessory is built.
//!
//! ```
//! use gdo_core::PlatformConfig;
//!
//! let config = PlatformConfig::from_json_str(r#"{
//!     "platform": "UniversalGdo",
//!     "devices": [{ "displayName": "Workshop Door" }]
//! }"#).unwrap();
//!
//! assert_eq!(config.devices[0].display_name, "Workshop Door");
//! assert_eq!(config.devices[0].manufacturer(), "Chamberlain");
//! ```

use crate::{
    Result,
    constants::{
        DEFAULT_DISPLAY_NAME, DEFAULT_MANUFACTURER, DEFAULT_MODEL, DEFAULT_SERIAL_NUMBER,
        PLATFORM_NAME,
    },
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Configuration for a single simulated garage door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    /// Name shown in the host app.
    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

impl DeviceConfig {
    /// Create a device configuration with default accessory information.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            manufacturer: None,
            model: None,
            serial_number: None,
        }
    }

    pub fn manufacturer(&self) -> &str {
        self.manufacturer.as_deref().unwrap_or(DEFAULT_MANUFACTURER)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn serial_number(&self) -> &str {
        self.serial_number.as_deref().unwrap_or(DEFAULT_SERIAL_NUMBER)
    }
}

/// Configuration block for the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    /// Must equal [`PLATFORM_NAME`].
    pub platform: String,

    /// Optional human-readable platform name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            platform: PLATFORM_NAME.to_string(),
            name: None,
            devices: Vec::new(),
        }
    }
}

impl PlatformConfig {
    /// Parse and validate a configuration from a JSON string.
    ///
    /// # Errors
    /// Returns `Error::Json` for malformed JSON and `Error::Config` if
    /// validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be read, otherwise the same
    /// errors as [`from_json_str`](Self::from_json_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check platform name and device display names.
    ///
    /// # Errors
    /// Returns `Error::Config` if:
    /// - `platform` is not [`PLATFORM_NAME`]
    /// - a display name is blank
    /// - two devices share a display name
    pub fn validate(&self) -> Result<()> {
        if self.platform != PLATFORM_NAME {
            return Err(Error::Config(format!(
                "platform must be {PLATFORM_NAME}, got {}",
                self.platform
            )));
        }

        let mut seen = HashSet::new();
        for device in &self.devices {
            if device.display_name.trim().is_empty() {
                return Err(Error::Config("device displayName must not be empty".to_string()));
            }
            if !seen.insert(device.display_name.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate device displayName: {}",
                    device.display_name
                )));
            }
        }

        Ok(())
    }

    /// Configured devices, or a single default device when none are listed.
    pub fn devices_or_default(&self) -> Vec<DeviceConfig> {
        if self.devices.is_empty() {
            vec![DeviceConfig::new(DEFAULT_DISPLAY_NAME)]
        } else {
            self.devices.clone()
        }
    }
}

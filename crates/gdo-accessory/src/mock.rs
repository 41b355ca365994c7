//! In-process host for testing and development.
//!
//! [`MockHost`] records registered platforms and forwards characteristic
//! reads and writes to accessories by display name, the way a real host
//! would after pairing.
//!
//! # Examples
//!
//! ```
//! use gdo_accessory::{MockHost, register};
//! use gdo_core::{Characteristic, CharacteristicValue, PlatformConfig};
//!
//! #[tokio::main]
//! async fn main() -> gdo_core::Result<()> {
//!     let mut host = MockHost::new();
//!     register(&mut host, PlatformConfig::default())?;
//!
//!     let value = host.get("Garage Door", Characteristic::ObstructionDetected).await?;
//!     assert_eq!(value, CharacteristicValue::Bool(false));
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;

use gdo_core::{Characteristic, CharacteristicValue, Error, Result};
use tracing::debug;

use crate::accessory::GarageDoorAccessory;
use crate::host::HostApi;
use crate::platform::GaragePlatform;

#[derive(Debug, Default)]
pub struct MockHost {
    platforms: BTreeMap<String, GaragePlatform>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn platform(&self, platform_name: &str) -> Option<&GaragePlatform> {
        self.platforms.get(platform_name)
    }

    /// Registered platform names, sorted.
    pub fn platform_names(&self) -> Vec<&str> {
        self.platforms.keys().map(String::as_str).collect()
    }

    /// Every accessory across all registered platforms.
    pub fn accessories(&self) -> impl Iterator<Item = &GarageDoorAccessory> {
        self.platforms
            .values()
            .flat_map(|platform| platform.accessories().iter())
    }

    /// Find an accessory by display name.
    ///
    /// # Errors
    /// Returns `Error::AccessoryNotFound` if no registered platform has it.
    pub fn accessory(&self, display_name: &str) -> Result<&GarageDoorAccessory> {
        self.platforms
            .values()
            .find_map(|platform| platform.accessory(display_name))
            .ok_or_else(|| Error::AccessoryNotFound(display_name.to_string()))
    }

    /// Forward a characteristic read.
    pub async fn get(
        &self,
        display_name: &str,
        characteristic: Characteristic,
    ) -> Result<CharacteristicValue> {
        debug!("Host get {} on {}", characteristic, display_name);
        self.accessory(display_name)?
            .handle_get(characteristic)
            .await
    }

    /// Forward a characteristic write.
    pub async fn set(
        &self,
        display_name: &str,
        characteristic: Characteristic,
        value: CharacteristicValue,
    ) -> Result<CharacteristicValue> {
        debug!("Host set {} = {} on {}", characteristic, value, display_name);
        self.accessory(display_name)?
            .handle_set(characteristic, value)
            .await
    }
}

impl HostApi for MockHost {
    fn register_platform(&mut self, platform_name: &str, platform: GaragePlatform) -> Result<()> {
        if self.platforms.contains_key(platform_name) {
            return Err(Error::Config(format!(
                "platform already registered: {platform_name}"
            )));
        }

        self.platforms.insert(platform_name.to_string(), platform);
        Ok(())
    }
}

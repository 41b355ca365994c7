//! Platform: discovers the configured garage doors.
//!
//! One [`GarageDoorAccessory`] is created per configured device. A platform
//! with no devices configured exposes a single default door.

use gdo_core::constants::PLATFORM_NAME;
use gdo_core::{PlatformConfig, Result};
use tracing::info;

use crate::accessory::GarageDoorAccessory;

#[derive(Debug, Clone)]
pub struct GaragePlatform {
    config: PlatformConfig,
    accessories: Vec<GarageDoorAccessory>,
}

impl GaragePlatform {
    /// Validate `config` and discover its devices.
    ///
    /// # Errors
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn new(config: PlatformConfig) -> Result<Self> {
        config.validate()?;

        let accessories: Vec<_> = config
            .devices_or_default()
            .iter()
            .map(|device| {
                info!("Adding new accessory: {}", device.display_name);
                GarageDoorAccessory::new(device)
            })
            .collect();

        info!(
            "{} discovered {} accessories",
            config.name.as_deref().unwrap_or(PLATFORM_NAME),
            accessories.len()
        );

        Ok(Self {
            config,
            accessories,
        })
    }

    /// Platform name shown in logs, falling back to [`PLATFORM_NAME`].
    pub fn name(&self) -> &str {
        self.config.name.as_deref().unwrap_or(PLATFORM_NAME)
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub fn accessories(&self) -> &[GarageDoorAccessory] {
        &self.accessories
    }

    /// Look up an accessory by display name.
    pub fn accessory(&self, display_name: &str) -> Option<&GarageDoorAccessory> {
        self.accessories
            .iter()
            .find(|accessory| accessory.display_name() == display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdo_core::constants::DEFAULT_DISPLAY_NAME;
    use gdo_core::{DeviceConfig, Error};

    #[test]
    fn test_default_platform_has_one_door() {
        let platform = GaragePlatform::new(PlatformConfig::default()).unwrap();

        assert_eq!(platform.name(), PLATFORM_NAME);
        assert_eq!(platform.accessories().len(), 1);
        assert!(platform.accessory(DEFAULT_DISPLAY_NAME).is_some());
    }

    #[test]
    fn test_one_accessory_per_device() {
        let config = PlatformConfig {
            name: Some("Home".to_string()),
            devices: vec![DeviceConfig::new("Left"), DeviceConfig::new("Right")],
            ..PlatformConfig::default()
        };
        let platform = GaragePlatform::new(config).unwrap();

        assert_eq!(platform.name(), "Home");
        assert_eq!(platform.accessories().len(), 2);
        assert_eq!(platform.accessory("Right").unwrap().display_name(), "Right");
        assert!(platform.accessory("Middle").is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PlatformConfig {
            devices: vec![DeviceConfig::new("Door"), DeviceConfig::new("Door")],
            ..PlatformConfig::default()
        };
        assert!(matches!(GaragePlatform::new(config), Err(Error::Config(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_accessories_are_independent() {
        let config = PlatformConfig {
            devices: vec![DeviceConfig::new("Left"), DeviceConfig::new("Right")],
            ..PlatformConfig::default()
        };
        let platform = GaragePlatform::new(config).unwrap();

        let left = platform.accessory("Left").unwrap().controller();
        let right = platform.accessory("Right").unwrap().controller();
        left.set_target_door_state(gdo_core::TargetDoorState::Open).await;

        assert_eq!(
            right.get_current_door_state().await,
            gdo_core::CurrentDoorState::Closed
        );
    }
}

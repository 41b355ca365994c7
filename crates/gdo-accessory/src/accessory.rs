//! Garage door accessory exposed to the host.
//!
//! [`GarageDoorAccessory`] binds a [`DoorController`] to the characteristic
//! surface the host reads and writes, and carries the accessory information
//! block (manufacturer, model, serial number and display name).

use gdo_core::{
    Characteristic, CharacteristicValue, DeviceConfig, Error, Result, TargetDoorState,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::controller::DoorController;

/// Characteristics of the garage door opener service, in registration order.
const DOOR_CHARACTERISTICS: [Characteristic; 3] = [
    Characteristic::CurrentDoorState,
    Characteristic::TargetDoorState,
    Characteristic::ObstructionDetected,
];

/// Static information reported for an accessory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryInformation {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
}

impl AccessoryInformation {
    /// Build the information block for a configured device, filling gaps
    /// with the plugin defaults.
    pub fn from_device(device: &DeviceConfig) -> Self {
        Self {
            name: device.display_name.clone(),
            manufacturer: device.manufacturer().to_string(),
            model: device.model().to_string(),
            serial_number: device.serial_number().to_string(),
        }
    }
}

/// A simulated garage door opener accessory.
#[derive(Debug, Clone)]
pub struct GarageDoorAccessory {
    information: AccessoryInformation,
    controller: DoorController,
}

impl GarageDoorAccessory {
    /// Create an accessory for `device` with a closed door.
    pub fn new(device: &DeviceConfig) -> Self {
        let information = AccessoryInformation::from_device(device);
        let controller = DoorController::new(information.name.clone());
        Self::with_controller(information, controller)
    }

    /// Create an accessory around an existing controller.
    pub fn with_controller(information: AccessoryInformation, controller: DoorController) -> Self {
        Self {
            information,
            controller,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.information.name
    }

    pub fn information(&self) -> &AccessoryInformation {
        &self.information
    }

    pub fn controller(&self) -> &DoorController {
        &self.controller
    }

    /// Door characteristics with get handlers (and a set handler for the target).
    pub fn door_characteristics(&self) -> &'static [Characteristic] {
        &DOOR_CHARACTERISTICS
    }

    /// Dispatch a host read.
    ///
    /// # Errors
    ///
    /// Never fails for the characteristics this accessory exposes. The
    /// `Result` is the host contract for reads.
    pub async fn handle_get(&self, characteristic: Characteristic) -> Result<CharacteristicValue> {
        let value: CharacteristicValue = match characteristic {
            Characteristic::CurrentDoorState => {
                self.controller.get_current_door_state().await.into()
            }
            Characteristic::TargetDoorState => self.controller.get_target_door_state().await.into(),
            Characteristic::ObstructionDetected => {
                self.controller.get_obstruction_detected().await.into()
            }
            Characteristic::Name => self.information.name.as_str().into(),
            Characteristic::Manufacturer => self.information.manufacturer.as_str().into(),
            Characteristic::Model => self.information.model.as_str().into(),
            Characteristic::SerialNumber => self.information.serial_number.as_str().into(),
        };

        debug!("{} get {} -> {}", self.information.name, characteristic, value);
        Ok(value)
    }

    /// Dispatch a host write.
    ///
    /// Only `TargetDoorState` is writable. The value must be a valid target
    /// code, but the door toggles regardless of which target it names.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the characteristic is read-only (`Error::ReadOnlyCharacteristic`)
    /// - the value is not a target door state code (`Error::InvalidCharacteristicValue`)
    pub async fn handle_set(
        &self,
        characteristic: Characteristic,
        value: CharacteristicValue,
    ) -> Result<CharacteristicValue> {
        if !characteristic.is_writable() {
            return Err(Error::ReadOnlyCharacteristic(characteristic.to_string()));
        }

        let requested = TargetDoorState::try_from(&value)?;
        let target = self.controller.set_target_door_state(requested).await;
        Ok(target.into())
    }
}

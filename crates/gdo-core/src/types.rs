use crate::{Result, error::Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current position of the door as reported to the host.
///
/// Numeric codes follow the host's CurrentDoorState characteristic contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum CurrentDoorState {
    Open = 0,
    Closed = 1,
    Opening = 2,
    Closing = 3,
    /// Part of the host contract; the simulated door never stops midway.
    Stopped = 4,
}

impl CurrentDoorState {
    /// Create a current door state from its characteristic code.
    ///
    /// # Errors
    /// Returns `Error::InvalidCharacteristicValue` for codes above 4.
    #[inline]
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Open),
            1 => Ok(Self::Closed),
            2 => Ok(Self::Opening),
            3 => Ok(Self::Closing),
            4 => Ok(Self::Stopped),
            _ => Err(Error::invalid_value(Characteristic::CurrentDoorState, value)),
        }
    }

    /// Convert the state to its characteristic code.
    #[inline]
    #[must_use]
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` while the door is travelling.
    #[inline]
    #[must_use]
    pub fn is_moving(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

impl fmt::Display for CurrentDoorState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
            Self::Opening => write!(f, "OPENING"),
            Self::Closing => write!(f, "CLOSING"),
            Self::Stopped => write!(f, "STOPPED"),
        }
    }
}

/// Position the door has been asked to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum TargetDoorState {
    Open = 0,
    Closed = 1,
}

impl TargetDoorState {
    /// Create a target door state from its characteristic code.
    ///
    /// # Errors
    /// Returns `Error::InvalidCharacteristicValue` for codes other than 0 or 1.
    #[inline]
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Open),
            1 => Ok(Self::Closed),
            _ => Err(Error::invalid_value(Characteristic::TargetDoorState, value)),
        }
    }

    #[inline]
    #[must_use]
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// The opposite target. Used by the toggle transition.
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// In-motion state reported while travelling towards this target.
    #[must_use]
    pub fn moving_state(self) -> CurrentDoorState {
        match self {
            Self::Open => CurrentDoorState::Opening,
            Self::Closed => CurrentDoorState::Closing,
        }
    }

    /// State reported once the door has reached this target.
    #[must_use]
    pub fn settled_state(self) -> CurrentDoorState {
        match self {
            Self::Open => CurrentDoorState::Open,
            Self::Closed => CurrentDoorState::Closed,
        }
    }
}

impl fmt::Display for TargetDoorState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

/// Derive the target implied by a current door state.
///
/// A door that is open, opening or stopped is treated as heading open;
/// everything else is heading closed.
#[must_use]
pub fn target_from_current(current: CurrentDoorState) -> TargetDoorState {
    match current {
        CurrentDoorState::Open | CurrentDoorState::Opening | CurrentDoorState::Stopped => {
            TargetDoorState::Open
        }
        CurrentDoorState::Closed | CurrentDoorState::Closing => TargetDoorState::Closed,
    }
}

/// Same mapping as [`target_from_current`] for a raw code.
///
/// Unknown codes map to `Closed`.
#[must_use]
pub fn target_from_current_code(code: u8) -> TargetDoorState {
    CurrentDoorState::from_u8(code)
        .map(target_from_current)
        .unwrap_or(TargetDoorState::Closed)
}

/// Characteristics exposed by the garage door accessory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Characteristic {
    CurrentDoorState,
    TargetDoorState,
    ObstructionDetected,
    Name,
    Manufacturer,
    Model,
    SerialNumber,
}

impl Characteristic {
    /// Returns `true` if the host may write this characteristic.
    #[inline]
    #[must_use]
    pub fn is_writable(self) -> bool {
        matches!(self, Self::TargetDoorState)
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::CurrentDoorState => "CurrentDoorState",
            Self::TargetDoorState => "TargetDoorState",
            Self::ObstructionDetected => "ObstructionDetected",
            Self::Name => "Name",
            Self::Manufacturer => "Manufacturer",
            Self::Model => "Model",
            Self::SerialNumber => "SerialNumber",
        };
        write!(f, "{name}")
    }
}

impl From<Characteristic> for String {
    fn from(characteristic: Characteristic) -> Self {
        characteristic.to_string()
    }
}

impl std::str::FromStr for Characteristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CurrentDoorState" => Ok(Self::CurrentDoorState),
            "TargetDoorState" => Ok(Self::TargetDoorState),
            "ObstructionDetected" => Ok(Self::ObstructionDetected),
            "Name" => Ok(Self::Name),
            "Manufacturer" => Ok(Self::Manufacturer),
            "Model" => Ok(Self::Model),
            "SerialNumber" => Ok(Self::SerialNumber),
            other => Err(Error::UnsupportedCharacteristic(other.to_string())),
        }
    }
}

/// Value carried by a characteristic read or write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacteristicValue {
    Bool(bool),
    UInt8(u8),
    String(String),
}

impl CharacteristicValue {
    #[must_use]
    pub fn as_u8(&self) -> Option<u8> {
        match self {
            Self::UInt8(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for CharacteristicValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::UInt8(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<CurrentDoorState> for CharacteristicValue {
    fn from(state: CurrentDoorState) -> Self {
        Self::UInt8(state.to_u8())
    }
}

impl From<TargetDoorState> for CharacteristicValue {
    fn from(state: TargetDoorState) -> Self {
        Self::UInt8(state.to_u8())
    }
}

impl From<bool> for CharacteristicValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for CharacteristicValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl TryFrom<&CharacteristicValue> for TargetDoorState {
    type Error = Error;

    fn try_from(value: &CharacteristicValue) -> Result<Self> {
        let code = value
            .as_u8()
            .ok_or_else(|| Error::invalid_value(Characteristic::TargetDoorState, value))?;
        TargetDoorState::from_u8(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CurrentDoorState::Open, TargetDoorState::Open)]
    #[case(CurrentDoorState::Opening, TargetDoorState::Open)]
    #[case(CurrentDoorState::Stopped, TargetDoorState::Open)]
    #[case(CurrentDoorState::Closed, TargetDoorState::Closed)]
    #[case(CurrentDoorState::Closing, TargetDoorState::Closed)]
    fn test_target_from_current(
        #[case] current: CurrentDoorState,
        #[case] expected: TargetDoorState,
    ) {
        assert_eq!(target_from_current(current), expected);
        assert_eq!(target_from_current_code(current.to_u8()), expected);
    }

    #[rstest]
    #[case(5)]
    #[case(42)]
    #[case(255)]
    fn test_target_from_unknown_code_is_closed(#[case] code: u8) {
        assert_eq!(target_from_current_code(code), TargetDoorState::Closed);
    }

    #[rstest]
    #[case(0, CurrentDoorState::Open)]
    #[case(1, CurrentDoorState::Closed)]
    #[case(2, CurrentDoorState::Opening)]
    #[case(3, CurrentDoorState::Closing)]
    #[case(4, CurrentDoorState::Stopped)]
    fn test_current_state_codes(#[case] code: u8, #[case] expected: CurrentDoorState) {
        assert_eq!(CurrentDoorState::from_u8(code).unwrap(), expected);
        assert_eq!(expected.to_u8(), code);
    }

    #[test]
    fn test_current_state_invalid_code() {
        let result = CurrentDoorState::from_u8(5);
        assert!(matches!(
            result,
            Err(Error::InvalidCharacteristicValue { .. })
        ));
    }

    #[test]
    fn test_target_state_codes() {
        assert_eq!(TargetDoorState::from_u8(0).unwrap(), TargetDoorState::Open);
        assert_eq!(TargetDoorState::from_u8(1).unwrap(), TargetDoorState::Closed);
        assert!(TargetDoorState::from_u8(2).is_err());
    }

    #[test]
    fn test_state_display_names() {
        assert_eq!(CurrentDoorState::Opening.to_string(), "OPENING");
        assert_eq!(CurrentDoorState::Stopped.to_string(), "STOPPED");
        assert_eq!(TargetDoorState::Closed.to_string(), "CLOSED");
    }

    #[test]
    fn test_toggle_and_derived_states() {
        assert_eq!(TargetDoorState::Closed.toggled(), TargetDoorState::Open);
        assert_eq!(TargetDoorState::Open.toggled(), TargetDoorState::Closed);
        assert_eq!(TargetDoorState::Open.moving_state(), CurrentDoorState::Opening);
        assert_eq!(TargetDoorState::Closed.settled_state(), CurrentDoorState::Closed);
        assert!(CurrentDoorState::Closing.is_moving());
        assert!(!CurrentDoorState::Open.is_moving());
    }

    #[test]
    fn test_characteristic_round_trips_through_name() {
        let parsed: Characteristic = "ObstructionDetected".parse().unwrap();
        assert_eq!(parsed, Characteristic::ObstructionDetected);
        assert!("Brightness".parse::<Characteristic>().is_err());
    }

    #[test]
    fn test_only_target_is_writable() {
        assert!(Characteristic::TargetDoorState.is_writable());
        assert!(!Characteristic::CurrentDoorState.is_writable());
        assert!(!Characteristic::Name.is_writable());
    }

    #[test]
    fn test_target_from_characteristic_value() {
        let value = CharacteristicValue::UInt8(0);
        assert_eq!(TargetDoorState::try_from(&value).unwrap(), TargetDoorState::Open);

        let wrong_type = CharacteristicValue::Bool(true);
        assert!(TargetDoorState::try_from(&wrong_type).is_err());
    }

    #[test]
    fn test_characteristic_value_serialization() {
        let json =
            serde_json::to_string(&CharacteristicValue::from(CurrentDoorState::Closing)).unwrap();
        assert_eq!(json, "3");

        let value: CharacteristicValue = serde_json::from_str("false").unwrap();
        assert_eq!(value, CharacteristicValue::Bool(false));

        let value: CharacteristicValue = serde_json::from_str("\"Garage\"").unwrap();
        assert_eq!(value.as_str(), Some("Garage"));
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_string(&CurrentDoorState::Opening).unwrap();
        assert_eq!(json, "\"OPENING\"");
        let state: TargetDoorState = serde_json::from_str("\"CLOSED\"").unwrap();
        assert_eq!(state, TargetDoorState::Closed);
    }
}

//! Plugin-level constants for the Universal GDO accessory plugin.
//!
//! Constants are grouped by concern: polling intervals, plugin identity,
//! door travel timing and accessory information defaults.
//!
//! # Usage
//!
//! ```
//! use gdo_core::constants::*;
//! use std::time::Duration;
//!
//! assert_eq!(PLATFORM_NAME, "UniversalGdo");
//!
//! let travel = Duration::from_millis(SETTLE_DELAY_MS);
//! assert_eq!(travel.as_secs(), 3);
//! ```

// ============================================================================
// Time Intervals
// ============================================================================

/// Interval for polling a garage door controller for device state updates.
///
/// Declared for future controller integrations; the simulated door never polls.
pub const DEVICE_REFRESH_INTERVAL_SECS: u64 = 5;

/// Interval for polling a controller while a door is actively changing state.
pub const ACTIVE_DEVICE_REFRESH_INTERVAL_SECS: u64 = 1;

/// How long active polling continues after a state change was requested.
pub const ACTIVE_DEVICE_REFRESH_DURATION_SECS: u64 = 60 * 5;

// ============================================================================
// Plugin Configuration
// ============================================================================

/// Name of the platform registered with the host.
///
/// Configuration files must use this value in their `platform` field.
pub const PLATFORM_NAME: &str = "UniversalGdo";

/// Name of the plugin package as known to the host.
pub const PLUGIN_NAME: &str = "homebridge-universal-gdo";

// ============================================================================
// Door Timing
// ============================================================================

/// Simulated door travel time in milliseconds.
///
/// A transition reports OPENING/CLOSING for this long before it settles
/// to OPEN/CLOSED.
pub const SETTLE_DELAY_MS: u64 = 3000;

// ============================================================================
// Accessory Information Defaults
// ============================================================================

/// Manufacturer reported when the device configuration omits one.
pub const DEFAULT_MANUFACTURER: &str = "Chamberlain";

/// Model reported when the device configuration omits one.
pub const DEFAULT_MODEL: &str = "Default-Model";

/// Serial number reported when the device configuration omits one.
pub const DEFAULT_SERIAL_NUMBER: &str = "Default-Serial";

/// Display name of the device created when no devices are configured.
pub const DEFAULT_DISPLAY_NAME: &str = "Garage Door";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_refresh_is_faster_than_idle_refresh() {
        assert!(ACTIVE_DEVICE_REFRESH_INTERVAL_SECS < DEVICE_REFRESH_INTERVAL_SECS);
        assert_eq!(ACTIVE_DEVICE_REFRESH_DURATION_SECS, 300);
    }

    #[test]
    fn test_plugin_identity() {
        assert_eq!(PLATFORM_NAME, "UniversalGdo");
        assert_eq!(PLUGIN_NAME, "homebridge-universal-gdo");
    }
}

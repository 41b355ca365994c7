//! Host platform boundary.
//!
//! The home-automation host owns accessory lifecycle and characteristic
//! dispatch. The plugin only needs one call from it: binding the platform
//! name to a platform instance. [`HostApi`] is that seam; [`register`] is the
//! plugin entry point a host invokes at load time.

use gdo_core::constants::PLATFORM_NAME;
use gdo_core::{PlatformConfig, Result};
use tracing::info;

use crate::platform::GaragePlatform;

/// Registration surface offered by the host.
///
/// See [`MockHost`](crate::mock::MockHost) for an in-process implementation.
pub trait HostApi {
    /// Bind `platform_name` to `platform`.
    ///
    /// # Errors
    ///
    /// Implementations decide what a failed registration looks like, e.g. a
    /// name that is already taken.
    fn register_platform(&mut self, platform_name: &str, platform: GaragePlatform) -> Result<()>;
}

/// Build the platform from `config` and register it under [`PLATFORM_NAME`].
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the host rejects the
/// registration.
///
/// # Examples
///
/// ```
/// use gdo_accessory::{MockHost, register};
/// use gdo_core::PlatformConfig;
/// use gdo_core::constants::PLATFORM_NAME;
///
/// let mut host = MockHost::new();
/// register(&mut host, PlatformConfig::default()).unwrap();
/// assert!(host.platform(PLATFORM_NAME).is_some());
/// ```
pub fn register<H: HostApi>(api: &mut H, config: PlatformConfig) -> Result<()> {
    let platform = GaragePlatform::new(config)?;
    info!("Registering platform {}", PLATFORM_NAME);
    api.register_platform(PLATFORM_NAME, platform)
}

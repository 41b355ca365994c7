//! Simulated garage door opener accessory.
//!
//! This crate implements the accessory side of the Universal GDO plugin: a
//! door state controller that simulates door travel, the garage door
//! accessory that exposes it to a home-automation host, and the platform
//! that discovers configured doors.
//!
//! # Components
//!
//! - [`DoorController`]: current/target door state and the timed toggle
//! - [`SettleHandle`]: the scheduled settle of an in-flight transition
//! - [`GarageDoorAccessory`]: characteristic get/set dispatch and accessory information
//! - [`GaragePlatform`]: one accessory per configured device
//! - [`HostApi`] / [`register`]: the registration seam towards the host
//! - [`MockHost`]: in-process host for tests and the CLI
//!
//! # Example
//!
//! ```
//! use gdo_accessory::{MockHost, register};
//! use gdo_core::{Characteristic, CharacteristicValue, CurrentDoorState, PlatformConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> gdo_core::Result<()> {
//! let mut host = MockHost::new();
//! register(&mut host, PlatformConfig::default())?;
//!
//! let current = host.get("Garage Door", Characteristic::CurrentDoorState).await?;
//! assert_eq!(current, CharacteristicValue::from(CurrentDoorState::Closed));
//! # Ok(())
//! # }
//! ```
//!
//! # Runtime
//!
//! Settles are spawned with `tokio::spawn`, so every async operation that
//! toggles the door must run inside a tokio runtime.

pub mod accessory;
pub mod controller;
pub mod host;
pub mod mock;
pub mod platform;
pub mod state;

pub use accessory::{AccessoryInformation, GarageDoorAccessory};
pub use controller::{DoorController, DoorControllerBuilder, SettleHandle};
pub use host::{HostApi, register};
pub use mock::MockHost;
pub use platform::GaragePlatform;
pub use state::{DoorState, DoorTransition};

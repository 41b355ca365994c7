//! Door State Controller.
//!
//! The controller owns a [`DoorState`] behind an `Arc<Mutex<_>>` and exposes
//! the four characteristic operations of a garage door opener. Only
//! [`set_target_door_state`](DoorController::set_target_door_state) has side
//! effects: it toggles the door and then waits for the settle.
//!
//! # Two-Phase Transition
//!
//! ```text
//! CLOSED ──trigger──► OPENING ──3s──► OPEN ──trigger──► CLOSING ──3s──► CLOSED
//! ```
//!
//! The settle runs as its own tokio task. While it is pending, reads observe
//! the in-motion state. [`begin_transition`](DoorController::begin_transition)
//! exposes the task as a [`SettleHandle`] without waiting on it.
//!
//! # Overlapping Transitions
//!
//! A toggle issued while a settle is pending is not rejected. Both settles
//! run to completion and the current state ends as written by the settle
//! that fires last.
//!
//! # Examples
//!
//! ```
//! use gdo_accessory::DoorController;
//! use gdo_core::{CurrentDoorState, TargetDoorState};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let door = DoorController::builder("Garage Door")
//!         .with_settle_delay(Duration::from_millis(10))
//!         .build();
//!
//!     let target = door.set_target_door_state(TargetDoorState::Open).await;
//!     assert_eq!(target, TargetDoorState::Open);
//!     assert_eq!(door.get_current_door_state().await, CurrentDoorState::Open);
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use gdo_core::constants::SETTLE_DELAY_MS;
use gdo_core::{CurrentDoorState, TargetDoorState};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::state::{DoorState, DoorTransition};

/// Controller for one simulated garage door.
///
/// Cloning is cheap and every clone shares the same door state.
#[derive(Debug, Clone)]
pub struct DoorController {
    name: Arc<str>,
    state: Arc<Mutex<DoorState>>,
    settle_delay: Duration,
}

impl DoorController {
    /// Create a closed door with the standard travel time.
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> DoorControllerBuilder {
        DoorControllerBuilder::new(name)
    }

    /// Display name used in log lines.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub async fn get_current_door_state(&self) -> CurrentDoorState {
        let current = self.state.lock().await.current();
        info!("{} is currently: {}", self.name, current);
        current
    }

    pub async fn get_target_door_state(&self) -> TargetDoorState {
        let target = self.state.lock().await.target();
        info!("{} will be: {}", self.name, target);
        target
    }

    /// Always `false`.
    pub async fn get_obstruction_detected(&self) -> bool {
        let state = self.state.lock().await;
        debug!(
            target_state = %state.target(),
            "Get Characteristic ObstructionDetected for {}", self.name
        );
        state.obstruction_detected()
    }

    /// Toggle the door and wait for it to settle.
    ///
    /// `requested` is ignored: every call flips the target, so the operation
    /// is not idempotent. Resolves once this call's settle has run, with the
    /// target held at that moment. An overlapping toggle may have changed it.
    pub async fn set_target_door_state(&self, requested: TargetDoorState) -> TargetDoorState {
        debug!(
            requested = %requested,
            "Set Characteristic TargetDoorState for {}, toggling", self.name
        );

        let settle = self.begin_transition().await;
        let scheduled = settle.target();

        if settle.wait().await.is_none() {
            warn!("{} settle towards {} was cancelled", self.name, scheduled);
        }

        self.state.lock().await.target()
    }

    /// Perform the immediate phase of a toggle and schedule the settle.
    ///
    /// The settle task keeps running if the returned handle is dropped.
    pub async fn begin_transition(&self) -> SettleHandle {
        let target = self.state.lock().await.begin_toggle();
        let terminal = target.settled_state();
        info!("{} moving to {}: {}", self.name, target, target.moving_state());

        let state = Arc::clone(&self.state);
        let name = Arc::clone(&self.name);
        let delay = self.settle_delay;

        debug!("{} settles to {} in {}ms", name, terminal, delay.as_millis());

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let transition = state.lock().await.settle(terminal);
            info!("{} settled: {} -> {}", name, transition.from, transition.to);
            transition
        });

        SettleHandle {
            target,
            terminal,
            task,
        }
    }

    /// Copy of the recorded transitions, oldest first.
    pub async fn history(&self) -> Vec<DoorTransition> {
        self.state.lock().await.history().iter().cloned().collect()
    }
}

/// Scheduled settle of an in-flight transition.
#[derive(Debug)]
pub struct SettleHandle {
    target: TargetDoorState,
    terminal: CurrentDoorState,
    task: JoinHandle<DoorTransition>,
}

impl SettleHandle {
    /// Target set by the transition that scheduled this settle.
    pub fn target(&self) -> TargetDoorState {
        self.target
    }

    /// State the settle will write.
    pub fn terminal_state(&self) -> CurrentDoorState {
        self.terminal
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Abort the settle, leaving the door in its in-motion state.
    ///
    /// Has no effect once the settle has run.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Wait for the settle.
    ///
    /// Returns the state written, or `None` if the settle was cancelled.
    pub async fn wait(self) -> Option<CurrentDoorState> {
        match self.task.await {
            Ok(transition) => Some(transition.to),
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(_) => None,
        }
    }
}

/// Builder for [`DoorController`].
///
/// ```
/// use gdo_accessory::DoorController;
/// use gdo_core::{CurrentDoorState, TargetDoorState};
///
/// # #[tokio::main]
/// # async fn main() {
/// let door = DoorController::builder("Barn")
///     .with_initial_state(CurrentDoorState::Open)
///     .build();
///
/// assert_eq!(door.get_target_door_state().await, TargetDoorState::Open);
/// # }
/// ```
#[derive(Debug)]
pub struct DoorControllerBuilder {
    name: String,
    initial_state: CurrentDoorState,
    settle_delay: Duration,
}

impl DoorControllerBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_state: CurrentDoorState::Closed,
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
        }
    }

    /// Start from `state` instead of CLOSED. The target is derived from it.
    pub fn with_initial_state(mut self, state: CurrentDoorState) -> Self {
        self.initial_state = state;
        self
    }

    /// Override the door travel time.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn build(self) -> DoorController {
        DoorController {
            name: Arc::from(self.name),
            state: Arc::new(Mutex::new(DoorState::new(self.initial_state))),
            settle_delay: self.settle_delay,
        }
    }
}

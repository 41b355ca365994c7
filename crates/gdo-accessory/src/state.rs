//! Door state held by a single accessory.
//!
//! [`DoorState`] is the explicit state object behind a
//! [`DoorController`](crate::DoorController). It is only changed through the
//! two phases of a transition:
//!
//! - [`begin_toggle`](DoorState::begin_toggle): flip the target and report
//!   the in-motion state (OPENING/CLOSING)
//! - [`settle`](DoorState::settle): report the terminal state (OPEN/CLOSED)
//!
//! Current and target are not kept consistent with each other outside of
//! those two calls. An overlapping transition can leave the door reporting
//! OPEN while targeting CLOSED until the later settle lands.
//!
//! # Examples
//!
//! ```
//! use gdo_accessory::DoorState;
//! use gdo_core::{CurrentDoorState, TargetDoorState};
//!
//! let mut state = DoorState::new(CurrentDoorState::Closed);
//! assert_eq!(state.target(), TargetDoorState::Closed);
//!
//! let target = state.begin_toggle();
//! assert_eq!(target, TargetDoorState::Open);
//! assert_eq!(state.current(), CurrentDoorState::Opening);
//!
//! state.settle(target.settled_state());
//! assert_eq!(state.current(), CurrentDoorState::Open);
//! assert_eq!(state.history().len(), 2);
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use gdo_core::{CurrentDoorState, TargetDoorState, target_from_current};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// Maximum number of state transitions to keep in history.
///
/// A full open/close cycle records four transitions, so this keeps the last
/// 25 cycles.
const MAX_HISTORY_SIZE: usize = 100;

/// A single change of the current door state.
///
/// The `timestamp` is not serialized; deserialized records carry the time of
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorTransition {
    pub from: CurrentDoorState,
    pub to: CurrentDoorState,

    #[serde(skip, default = "Instant::now")]
    pub timestamp: Instant,
}

impl DoorTransition {
    pub fn new(from: CurrentDoorState, to: CurrentDoorState) -> Self {
        Self {
            from,
            to,
            timestamp: Instant::now(),
        }
    }

    /// Time elapsed since the transition was recorded.
    pub fn elapsed(&self) -> Duration {
        self.timestamp.elapsed()
    }
}

/// Current and target door state plus the constant obstruction flag.
#[derive(Debug, Clone)]
pub struct DoorState {
    current: CurrentDoorState,
    target: TargetDoorState,
    obstruction_detected: bool,
    history: VecDeque<DoorTransition>,
}

impl DoorState {
    /// Create a door state with the target derived from `initial`.
    pub fn new(initial: CurrentDoorState) -> Self {
        Self {
            current: initial,
            target: target_from_current(initial),
            obstruction_detected: false,
            history: VecDeque::with_capacity(MAX_HISTORY_SIZE),
        }
    }

    pub fn current(&self) -> CurrentDoorState {
        self.current
    }

    pub fn target(&self) -> TargetDoorState {
        self.target
    }

    /// Always `false`; the simulated door has no obstruction sensor.
    pub fn obstruction_detected(&self) -> bool {
        self.obstruction_detected
    }

    /// Recorded transitions, oldest first.
    pub fn history(&self) -> &VecDeque<DoorTransition> {
        &self.history
    }

    /// Up to `count` of the most recent transitions, oldest first.
    pub fn last_transitions(&self, count: usize) -> Vec<DoorTransition> {
        self.history
            .iter()
            .rev()
            .take(count)
            .rev()
            .cloned()
            .collect()
    }

    /// Start a toggle: flip the target and enter its in-motion state.
    ///
    /// Returns the new target. The caller is responsible for the settle.
    pub fn begin_toggle(&mut self) -> TargetDoorState {
        let target = self.target.toggled();
        self.target = target;
        self.change_current(target.moving_state());
        target
    }

    /// Finish a toggle by entering `terminal`.
    ///
    /// The target is left untouched, even if a later toggle has changed it.
    pub fn settle(&mut self, terminal: CurrentDoorState) -> DoorTransition {
        self.change_current(terminal)
    }

    fn change_current(&mut self, new_state: CurrentDoorState) -> DoorTransition {
        let transition = DoorTransition::new(self.current, new_state);
        self.current = new_state;

        self.history.push_back(transition.clone());
        if self.history.len() > MAX_HISTORY_SIZE {
            self.history.pop_front();
        }

        transition
    }
}

impl Default for DoorState {
    /// A closed door, as every accessory starts after a restart.
    fn default() -> Self {
        Self::new(CurrentDoorState::Closed)
    }
}

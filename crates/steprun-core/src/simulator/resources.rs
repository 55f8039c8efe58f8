//! Single-slot resource locks shared by build and test steps.

use log::warn;
use tokio::sync::{Mutex, MutexGuard};

use crate::models::StepKind;

/// A single execution slot that one step at a time may occupy.
#[derive(Debug)]
pub struct ResourceGate {
    label: &'static str,
    slot: Mutex<()>,
}

/// Proof of holding a [`ResourceGate`]. The slot is released on drop.
#[derive(Debug)]
pub struct Acquisition<'a> {
    _guard: MutexGuard<'a, ()>,
    waited: bool,
}

impl Acquisition<'_> {
    /// Whether another step held the slot when acquisition started.
    pub fn waited(&self) -> bool {
        self.waited
    }
}

impl ResourceGate {
    /// `label` names the activity in contention warnings, e.g. "Building".
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            slot: Mutex::new(()),
        }
    }

    /// Take the slot, waiting as long as it takes if it is busy.
    pub async fn acquire(&self) -> Acquisition<'_> {
        if let Ok(guard) = self.slot.try_lock() {
            return Acquisition {
                _guard: guard,
                waited: false,
            };
        }

        warn!("{} lock is not available!", self.label);
        Acquisition {
            _guard: self.slot.lock().await,
            waited: true,
        }
    }

    /// Whether some step currently holds the slot.
    pub fn is_held(&self) -> bool {
        self.slot.try_lock().is_err()
    }
}

/// The build and test slots owned by one simulator.
#[derive(Debug)]
pub struct ResourceLocks {
    build: ResourceGate,
    test: ResourceGate,
}

impl ResourceLocks {
    pub fn new() -> Self {
        Self {
            build: ResourceGate::new("Building"),
            test: ResourceGate::new("Testing"),
        }
    }

    /// Gate guarding the given kind of step, if it has one.
    pub fn gate(&self, kind: StepKind) -> Option<&ResourceGate> {
        match kind {
            StepKind::Build => Some(&self.build),
            StepKind::Test => Some(&self.test),
            StepKind::Lint => None,
        }
    }
}

impl Default for ResourceLocks {
    fn default() -> Self {
        Self::new()
    }
}

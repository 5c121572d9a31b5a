//! What a robot returns each turn.

use mr_core::LocationId;

use crate::{RobotError, RobotResult};

/// Robot-private plan carried between turns.  Stock robots store the
/// remaining stops of a route here; robots that need nothing leave it empty.
pub type Memory = Vec<LocationId>;

/// One turn's choice: where to move, and the memory for the next turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub direction: LocationId,
    pub memory:    Memory,
}

impl Decision {
    /// Step to the head of `plan`, remembering the rest.
    pub fn follow(mut plan: Memory) -> RobotResult<Decision> {
        if plan.is_empty() {
            return Err(RobotError::EmptyRoute);
        }
        let direction = plan.remove(0);
        Ok(Decision { direction, memory: plan })
    }
}

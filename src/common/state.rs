//! Simulation run state.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum SimState {
    #[default]
    Running,
    /// Emitters are frozen (set by the debug break toggles).
    Halted,
}

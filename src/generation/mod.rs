//! The generation cycle: its state record and the orchestrator that drives it.

pub mod orchestrator;
pub mod state;

pub use orchestrator::{Busy, Orchestrator};
pub use state::GenerationState;

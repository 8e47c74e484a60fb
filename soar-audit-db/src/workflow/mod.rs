pub mod phase_machine;

pub use phase_machine::PhaseStateMachine;

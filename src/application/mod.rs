//! Application layer: per-form transient state and the reactive derivations
//! that keep it consistent with the user's inputs.

pub mod engine;
pub mod region;

//! Hook slots and stage definitions.

pub mod definitions;
pub mod set;

pub use definitions::HookStage;
pub use set::{HookFn, Hooks, Primary};

//! Application-level configuration.
//!
//! - [`GenerationParams`]: fixed sampling parameters handed to the model client
//! - [`BehaviorConfig`]: runtime limits for model delegation

pub mod behavior;
pub mod generation_params;

pub use behavior::BehaviorConfig;
pub use generation_params::GenerationParams;

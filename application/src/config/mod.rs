//! Application-level configuration.
//!
//! - [`ResolutionParams`]: search retry and result caps for the resolution chain

pub mod resolution_params;

pub use resolution_params::ResolutionParams;

//! Progress indication while a question is being resolved

pub mod spinner;

pub use spinner::ResolutionSpinner;

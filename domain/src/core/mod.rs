//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated question from a user
//! - [`answer::Answer`]: the single answer body plus where it came from
//! - [`provider::ProviderKind`]: the external answer sources
//! - [`identity`]: user and intent-session identifiers
//! - [`error::DomainError`]: domain-level errors

pub mod answer;
pub mod error;
pub mod identity;
pub mod provider;
pub mod question;

//! Value model and object capabilities for the
//! [`objectvalidate`](https://crates.io/crates/objectvalidate) engine.
//!
//! This crate provides:
//!
//! - [`Value`], the dynamically typed value read from an object graph.
//! - [`Object`], the trait adapters implement so the engine can read
//!   properties and resolve mappings, plus the optional capabilities:
//!   - [`Proxy`]: unwraps a lazy-loading placeholder to its real class.
//!   - [`ValidatableModel`]: exposes a storage identity.
//! - [`ApiProblem`] and [`Arguments`], the serializable shape of a finding.
//!
//! # Usage
//!
//! Most users do not need this crate directly: `objectvalidate` re-exports it
//! as its `types` module. Depend on it when writing adapters that should not
//! pull in the engine.

#![warn(missing_docs)]

mod object;
mod problem;
mod value;

pub use object::{Object, Proxy, ValidatableModel};
pub use problem::{ApiProblem, Arguments};
pub use value::Value;

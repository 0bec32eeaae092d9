//! # qcodegen-catalog
//!
//! Immutable catalog of pre-authored quantum code templates.
//!
//! Each entry couples a template body (static text with `{{KEY}}`
//! placeholders) with the metadata the pipeline needs: ordered match
//! rules, placeholder defaults, reference operators fixed at catalog
//! build time, and an optional literature-cited expected result.
//!
//! The catalog is loaded once per process and read-only thereafter, so
//! concurrent requests can share it without locking.

#![deny(unsafe_code)]

pub mod builtin;
pub mod operators;
pub mod store;
pub mod types;

// Re-exports
pub use store::Catalog;
pub use types::{
    ExpectedResult, Framework, MatchRule, Operator, OperatorPair, RuleOutcome,
    TemplateDescriptor, TemplateId,
};

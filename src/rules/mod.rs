//! Rule catalog for the commit-lint engine.
//!
//! The engine recognizes a fixed set of rule names, and each rule takes a
//! different kind of option. This module records that knowledge so the
//! validator can check a `rules` entry without knowing the engine itself:
//!
//! - [`RuleKind`] - The option shape a rule expects
//! - [`RuleCatalog`] - Known rule names and their kinds
//! - [`CaseName`] - Case styles accepted by `*-case` rules

pub mod case;
pub mod catalog;

pub use case::CaseName;
pub use catalog::{RuleCatalog, RuleKind};

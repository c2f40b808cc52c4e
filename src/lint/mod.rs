//! Diagnostics for configuration files.
//!
//! Validation itself lives in [`crate::config::validator`]. This module
//! turns its errors into user-facing diagnostics and renders them.
//!
//! - **Diagnostics** - Issue reports with severity, location and suggestions ([`LintDiagnostic`])
//! - **Report** - Validation plus advisories for a loaded file ([`check`])
//! - **Output** - Human and JSON renderers ([`LintFormatter`])
//! - **Schema** - JSON Schema for editors ([`SchemaGenerator`])
//!
//! # Example
//!
//! ```
//! use herald::lint::{diagnostics_for, Severity};
//! use herald::config::{collect_errors, LintConfiguration};
//! use herald::rules::RuleCatalog;
//!
//! let errors = collect_errors(&LintConfiguration::conventional());
//! let diagnostics = diagnostics_for(&errors, &RuleCatalog::default());
//! assert!(diagnostics.is_empty());
//!
//! // Severity has ordering
//! assert!(Severity::Hint < Severity::Warning);
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod diagnostic;
pub mod output;
pub mod report;
pub mod schema;
pub mod span;

pub use diagnostic::{LintDiagnostic, Severity};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use report::{advisories, check, diagnostics_for};
pub use schema::SchemaGenerator;
pub use span::Span;

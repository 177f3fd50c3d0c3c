//! Tagcheck - tag-level attribute validation and repair
//!
//! Runs the per-element checks an HTML normalizer applies once the tree is
//! built: required attributes, inferred defaults, legacy values that narrow
//! the set of HTML versions a document can claim, and accessibility gaps.
//!
//! # Architecture
//!
//! ```text
//! Node -> Engine -> Registry -> TagRule -> DocumentContext -> DiagnosticSink
//! ```
//!
//! The engine looks up the rule bound to a node's tag and runs it. Rules
//! repair the node in place, narrow the document's version lattice, raise
//! accessibility flags, and report diagnostics through the context.
//!
//! # Example
//!
//! ```
//! use tagcheck::{Config, Engine, Node, TagId};
//!
//! let run = Engine::new().run(
//!     &Config::default(),
//!     vec![Node::element(TagId::Script).with_attr("language", "VBScript")],
//! );
//!
//! assert_eq!(
//!     run.nodes[0].get_attr_by_name("type").and_then(|a| a.value()),
//!     Some("text/vbscript")
//! );
//! assert_eq!(run.report.warning_count, 1);
//! ```

pub mod access;
pub mod collab;
pub mod config;
pub mod context;
pub mod diagnostic;
pub mod engine;
pub mod input;
pub mod node;
pub mod output;
pub mod registry;
pub mod rules;
pub mod version;

// Re-export main types
pub use access::AccessFlags;
pub use collab::{AnchorIds, AttributeCheck, IdFix, PermissiveAttributes};
pub use config::{Config, ConfigError};
pub use context::{DocumentContext, DocumentSummary};
pub use diagnostic::{AttrTarget, Diagnostic, DiagnosticKind, DiagnosticSink, Report, Severity};
pub use engine::{CheckRun, Engine};
pub use input::{load_elements, InputError};
pub use node::{AttrId, Attribute, Node, TagId};
pub use output::{JsonFormatter, OutputFormatter, TextFormatter};
pub use registry::Registry;
pub use rules::TagRule;
pub use version::Versions;

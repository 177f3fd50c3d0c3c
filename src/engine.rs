//! Dispatch engine
//!
//! Looks up the rule bound to each node's tag and runs it. The engine keeps
//! no state between calls; everything a pass accumulates lives in the
//! [`DocumentContext`].

use crate::collab::{AnchorIds, AttributeCheck, Collaborators, IdFix, PermissiveAttributes};
use crate::config::Config;
use crate::context::{DocumentContext, DocumentSummary};
use crate::diagnostic::Report;
use crate::node::Node;
use crate::registry::Registry;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Result of checking one document
#[derive(Debug, Default)]
pub struct CheckRun {
    /// Source of the elements, when they came from a file
    pub file: Option<PathBuf>,

    pub report: Report,

    pub summary: DocumentSummary,

    /// Elements after repair
    pub nodes: Vec<Node>,

    /// Elements skipped because their tag is unknown
    pub skipped: usize,

    /// Processing duration
    pub duration: Duration,
}

impl CheckRun {
    /// Exit code for this run (0 clean, 1 warnings, 2 errors)
    pub fn exit_code(&self) -> i32 {
        self.report.exit_code()
    }
}

/// Rule dispatcher
pub struct Engine {
    registry: &'static Registry,
    attributes: Box<dyn AttributeCheck>,
    ids: Box<dyn IdFix>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine over the standard registry with the default collaborators
    pub fn new() -> Self {
        Self {
            registry: Registry::global(),
            attributes: Box::new(PermissiveAttributes),
            ids: Box::new(AnchorIds),
        }
    }

    /// Replace the generic attribute check
    pub fn with_attribute_check(mut self, check: impl AttributeCheck + 'static) -> Self {
        self.attributes = Box::new(check);
        self
    }

    /// Replace the anchor id fixer
    pub fn with_id_fix(mut self, fix: impl IdFix + 'static) -> Self {
        self.ids = Box::new(fix);
        self
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    fn collaborators(&self) -> Collaborators<'_> {
        Collaborators {
            attributes: self.attributes.as_ref(),
            ids: self.ids.as_ref(),
        }
    }

    /// Run the rule bound to `node`'s tag.
    ///
    /// # Panics
    ///
    /// Panics if `node.tag` is `None`. Callers resolve tag identity first.
    pub fn dispatch(&self, node: &mut Node, ctx: &mut DocumentContext<'_>) {
        let Some(tag) = node.tag else {
            panic!("dispatch called for <{}> without a tag identity", node.element);
        };
        let rule = self.registry.rule_for(tag);
        log::trace!("{} -> {} rule", node.display_name(), rule);
        rule.check(&self.collaborators(), ctx, node);
    }

    /// Dispatch every node in order
    pub fn check_all(&self, nodes: &mut [Node], ctx: &mut DocumentContext<'_>) {
        for node in nodes.iter_mut() {
            self.dispatch(node, ctx);
        }
    }

    /// Check one document's elements with a fresh context
    pub fn run(&self, config: &Config, mut nodes: Vec<Node>) -> CheckRun {
        let start = Instant::now();
        let mut report = Report::new();
        let mut skipped = 0;

        let summary = {
            let mut ctx = DocumentContext::new(config, &mut report);
            for node in nodes.iter_mut() {
                if node.tag.is_none() {
                    log::warn!(
                        "skipping <{}> at line {}: unknown element",
                        node.element,
                        node.line
                    );
                    skipped += 1;
                    continue;
                }
                self.dispatch(node, &mut ctx);
            }
            ctx.summary()
        };

        CheckRun {
            file: None,
            report,
            summary,
            nodes,
            skipped,
            duration: start.elapsed(),
        }
    }
}

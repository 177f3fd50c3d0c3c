//! Per-document validation state
//!
//! A [`DocumentContext`] lives for one pass over one document. It owns the
//! version lattice, the accessibility flags and the anchor set, reads the
//! configuration, and forwards diagnostics to a sink owned by the caller.

use crate::access::AccessFlags;
use crate::config::Config;
use crate::diagnostic::{AttrTarget, Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::node::Node;
use crate::version::Versions;
use serde::Serialize;
use std::collections::HashSet;

/// Mutable state threaded through every rule invocation of a pass
pub struct DocumentContext<'a> {
    config: &'a Config,
    sink: &'a mut dyn DiagnosticSink,
    versions: Versions,
    access: AccessFlags,
    anchors: HashSet<String>,
}

/// What a finished pass learned about the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub versions: Versions,
    pub access: AccessFlags,
}

impl<'a> DocumentContext<'a> {
    pub fn new(config: &'a Config, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            config,
            sink,
            versions: Versions::EVERYTHING,
            access: AccessFlags::NONE,
            anchors: HashSet::new(),
        }
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Profiles the document can still claim
    pub fn versions(&self) -> Versions {
        self.versions
    }

    pub fn access(&self) -> AccessFlags {
        self.access
    }

    /// Narrow the lattice to `allowed`
    pub fn constrain_version(&mut self, allowed: Versions) {
        let before = self.versions;
        self.versions.constrain(allowed);
        self.log_narrowing(before);
    }

    /// Narrow the lattice by removing `disallowed`
    pub fn exclude_versions(&mut self, disallowed: Versions) {
        let before = self.versions;
        self.versions.exclude(disallowed);
        self.log_narrowing(before);
    }

    fn log_narrowing(&self, before: Versions) {
        if before != self.versions {
            log::debug!("versions narrowed to {}", self.versions);
        }
    }

    /// Record an accessibility deficiency
    pub fn flag_access(&mut self, flag: AccessFlags) {
        if !self.access.contains(flag) {
            log::debug!("accessibility flag raised: {}", flag);
        }
        self.access.insert(flag);
    }

    /// Record an anchor identifier; false when it was already defined
    pub fn register_anchor(&mut self, identifier: &str) -> bool {
        self.anchors.insert(identifier.to_string())
    }

    /// Report a problem with an attribute of `node`
    pub fn report_attr(&mut self, node: &Node, target: AttrTarget, kind: DiagnosticKind) {
        if kind == DiagnosticKind::MissingImagemap {
            self.flag_access(AccessFlags::MISSING_IMAGE_MAP);
        }

        let diagnostic = Diagnostic::new(kind, node, target);
        match self.config.effective_severity(kind) {
            Some(severity) => self.sink.emit(diagnostic.with_severity(severity)),
            None => log::trace!("suppressed: {}", diagnostic.message),
        }
    }

    /// Report that `node` lacks the attribute `name`
    pub fn report_missing_attr(&mut self, node: &Node, name: &str) {
        self.report_attr(node, AttrTarget::named(name), DiagnosticKind::MissingAttribute);
    }

    /// Snapshot of the document-level results so far
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            versions: self.versions,
            access: self.access,
        }
    }
}

//! Diagnostic types for validation and repair events

use crate::node::{Attribute, Node};
use serde::{Deserialize, Serialize};

/// Severity level for diagnostics
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message
    Info,
    /// Warning - markup was repaired or is questionable
    #[default]
    Warning,
    /// Error - markup is wrong
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "Info"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" | "hint" | "note" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" | "err" => Ok(Severity::Error),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// What a rule observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticKind {
    /// A default attribute was inserted
    InsertingAttribute,
    /// A required attribute is absent
    MissingAttribute,
    /// Value present but not among the accepted values
    BadAttributeValue,
    /// Legal but non-standard usage
    ProprietaryAttrValue,
    /// Server-side image map without a client-side one
    MissingImagemap,
    /// `id` and `name` disagree on an anchor
    IdNameMismatch,
    /// Anchor identifier used twice in one document
    AnchorNotUnique,
}

impl DiagnosticKind {
    pub const ALL: [DiagnosticKind; 7] = [
        DiagnosticKind::InsertingAttribute,
        DiagnosticKind::MissingAttribute,
        DiagnosticKind::BadAttributeValue,
        DiagnosticKind::ProprietaryAttrValue,
        DiagnosticKind::MissingImagemap,
        DiagnosticKind::IdNameMismatch,
        DiagnosticKind::AnchorNotUnique,
    ];

    /// Look up a kind by its code
    pub fn from_code(code: &str) -> Option<DiagnosticKind> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Stable code used in configuration and machine output
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::InsertingAttribute => "INSERTING_ATTRIBUTE",
            DiagnosticKind::MissingAttribute => "MISSING_ATTRIBUTE",
            DiagnosticKind::BadAttributeValue => "BAD_ATTRIBUTE_VALUE",
            DiagnosticKind::ProprietaryAttrValue => "PROPRIETARY_ATTR_VALUE",
            DiagnosticKind::MissingImagemap => "MISSING_IMAGEMAP",
            DiagnosticKind::IdNameMismatch => "ID_NAME_MISMATCH",
            DiagnosticKind::AnchorNotUnique => "ANCHOR_NOT_UNIQUE",
        }
    }

    pub fn default_severity(self) -> Severity {
        Severity::Warning
    }

    /// Render the message for `element` (already in `<tag>` form)
    pub fn message(self, element: &str, target: &AttrTarget) -> String {
        let name = target.name();
        let value = target.value().unwrap_or("");
        match self {
            DiagnosticKind::InsertingAttribute => {
                format!("{} inserting \"{}\" attribute", element, name)
            }
            DiagnosticKind::MissingAttribute => {
                format!("{} lacks \"{}\" attribute", element, name)
            }
            DiagnosticKind::BadAttributeValue => format!(
                "{} attribute \"{}\" has invalid value \"{}\"",
                element, name, value
            ),
            DiagnosticKind::ProprietaryAttrValue => {
                format!("{} proprietary attribute value \"{}\"", element, value)
            }
            DiagnosticKind::MissingImagemap => {
                format!("{} should use client-side image map", element)
            }
            DiagnosticKind::IdNameMismatch => {
                format!("{} id and name attribute value mismatch", element)
            }
            DiagnosticKind::AnchorNotUnique => {
                format!("{} anchor \"{}\" already defined", element, value)
            }
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The attribute a diagnostic is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AttrTarget {
    /// Snapshot of an attribute present on the node
    Attribute { name: String, value: Option<String> },
    /// Only a name; the attribute may not exist at all
    Named { name: String },
}

impl AttrTarget {
    pub fn named(name: &str) -> Self {
        AttrTarget::Named {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AttrTarget::Attribute { name, .. } | AttrTarget::Named { name } => name,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            AttrTarget::Attribute { value, .. } => value.as_deref(),
            AttrTarget::Named { .. } => None,
        }
    }
}

impl From<&Attribute> for AttrTarget {
    fn from(attr: &Attribute) -> Self {
        AttrTarget::Attribute {
            name: attr.name.clone(),
            value: attr.value.clone(),
        }
    }
}

/// A validation or repair event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Element in `<tag>` form
    pub element: String,
    pub target: AttrTarget,
    pub message: String,
    /// Source line of the element (1-based, 0 when unknown)
    pub line: usize,
    /// Source column of the element (1-based, 0 when unknown)
    pub column: usize,
}

impl Diagnostic {
    /// Create a diagnostic about `target` on `node` with the kind's default
    /// severity
    pub fn new(kind: DiagnosticKind, node: &Node, target: AttrTarget) -> Self {
        let element = node.display_name();
        let message = kind.message(&element, &target);
        Self {
            kind,
            severity: kind.default_severity(),
            element,
            target,
            message,
            line: node.line,
            column: node.column,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Append-only destination for diagnostics
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Collected diagnostics with per-severity counts
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.error_count == 0 && self.warning_count == 0
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Diagnostics of one kind, in emission order
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }

    /// Get exit code (0 = success, 1 = warnings, 2 = errors)
    pub fn exit_code(&self) -> i32 {
        if self.error_count > 0 {
            2
        } else if self.warning_count > 0 {
            1
        } else {
            0
        }
    }

    /// Closing summary line
    pub fn summary_line(&self) -> String {
        if self.is_clean() {
            return "No warnings or errors were found.".to_string();
        }
        format!(
            "{} {}, {} {} were found!",
            self.warning_count,
            if self.warning_count == 1 { "warning" } else { "warnings" },
            self.error_count,
            if self.error_count == 1 { "error" } else { "errors" },
        )
    }
}

impl DiagnosticSink for Report {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Info => self.info_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::TagId;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("WARN".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("hint".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!(
            "fatal".parse::<Severity>(),
            Err("Unknown severity: fatal".to_string())
        );
    }

    #[test]
    fn test_codes_round_trip() {
        for kind in DiagnosticKind::ALL {
            assert_eq!(DiagnosticKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(DiagnosticKind::from_code("missing_attribute"), None);
    }

    #[test]
    fn test_messages() {
        let img = Node::element(TagId::Img);
        let d = Diagnostic::new(DiagnosticKind::MissingAttribute, &img, AttrTarget::named("alt"));
        assert_eq!(d.message, "<img> lacks \"alt\" attribute");

        let caption = Node::element(TagId::Caption).with_attr("align", "diagonal");
        let align = caption.get_attr_by_name("align").unwrap();
        let d = Diagnostic::new(DiagnosticKind::BadAttributeValue, &caption, align.into());
        assert_eq!(
            d.message,
            "<caption> attribute \"align\" has invalid value \"diagonal\""
        );

        let hr = Node::element(TagId::Hr).with_attr("src", "line.gif");
        let src = hr.get_attr_by_name("src").unwrap();
        let d = Diagnostic::new(DiagnosticKind::ProprietaryAttrValue, &hr, src.into());
        assert_eq!(d.message, "<hr> proprietary attribute value \"line.gif\"");

        let d = Diagnostic::new(
            DiagnosticKind::MissingImagemap,
            &img,
            AttrTarget::named("ismap"),
        );
        assert_eq!(d.message, "<img> should use client-side image map");

        let script = Node::element(TagId::Script);
        let d = Diagnostic::new(
            DiagnosticKind::InsertingAttribute,
            &script,
            AttrTarget::named("type"),
        );
        assert_eq!(d.message, "<script> inserting \"type\" attribute");
    }

    #[test]
    fn test_diagnostic_position_comes_from_node() {
        let node = Node::element(TagId::Form).at(12, 3);
        let d = Diagnostic::new(DiagnosticKind::MissingAttribute, &node, AttrTarget::named("action"));
        assert_eq!((d.line, d.column), (12, 3));
        assert!(d.is_warning());
        assert!(!d.is_error());
    }

    #[test]
    fn test_target_keeps_absent_and_empty_apart() {
        let bare = Attribute::new("border", None);
        let empty = Attribute::new("border", Some(""));
        assert_eq!(AttrTarget::from(&bare).value(), None);
        assert_eq!(AttrTarget::from(&empty).value(), Some(""));
        assert_eq!(AttrTarget::named("border").value(), None);
    }

    #[test]
    fn test_report_counts() {
        let node = Node::element(TagId::Meta);
        let mut report = Report::new();
        assert_eq!(report.summary_line(), "No warnings or errors were found.");
        assert_eq!(report.exit_code(), 0);

        report.emit(Diagnostic::new(
            DiagnosticKind::MissingAttribute,
            &node,
            AttrTarget::named("content"),
        ));
        assert_eq!(report.summary_line(), "1 warning, 0 errors were found!");
        assert_eq!(report.exit_code(), 1);

        report.emit(
            Diagnostic::new(DiagnosticKind::MissingAttribute, &node, AttrTarget::named("name"))
                .with_severity(Severity::Error),
        );
        assert_eq!(report.summary_line(), "1 warning, 1 error were found!");
        assert_eq!(report.exit_code(), 2);
        assert_eq!(report.of_kind(DiagnosticKind::MissingAttribute).count(), 2);
    }
}

//! Per-tag attribute rules
//!
//! Each rule follows the same shape: capture the facts it needs from the
//! node, run the generic attribute check, then apply tag-specific repairs
//! and report what it found. Rules are within-call idempotent only; running
//! one twice on an unrepaired node reports twice.

use crate::access::AccessFlags;
use crate::collab::Collaborators;
use crate::context::DocumentContext;
use crate::diagnostic::{AttrTarget, DiagnosticKind};
use crate::node::{AttrId, Attribute, Node};
use crate::version::Versions;
use serde::Serialize;
use std::fmt;

const TEXT_JAVASCRIPT: &str = "text/javascript";
const TEXT_VBSCRIPT: &str = "text/vbscript";
const TEXT_CSS: &str = "text/css";

/// The closed set of tag rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagRule {
    Html,
    Script,
    Table,
    Caption,
    Hr,
    Img,
    Area,
    Anchor,
    Map,
    Style,
    Form,
    Meta,
    TableCell,
    Link,
    Baseline,
}

impl TagRule {
    pub const ALL: [TagRule; 15] = [
        TagRule::Html,
        TagRule::Script,
        TagRule::Table,
        TagRule::Caption,
        TagRule::Hr,
        TagRule::Img,
        TagRule::Area,
        TagRule::Anchor,
        TagRule::Map,
        TagRule::Style,
        TagRule::Form,
        TagRule::Meta,
        TagRule::TableCell,
        TagRule::Link,
        TagRule::Baseline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TagRule::Html => "html",
            TagRule::Script => "script",
            TagRule::Table => "table",
            TagRule::Caption => "caption",
            TagRule::Hr => "hr",
            TagRule::Img => "img",
            TagRule::Area => "area",
            TagRule::Anchor => "anchor",
            TagRule::Map => "map",
            TagRule::Style => "style",
            TagRule::Form => "form",
            TagRule::Meta => "meta",
            TagRule::TableCell => "table-cell",
            TagRule::Link => "link",
            TagRule::Baseline => "baseline",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TagRule::Html => "Generic attribute check only",
            TagRule::Script => "Infers a missing type from the language attribute",
            TagRule::Table => "Requires summary; gives a bare border the value 1 in XML",
            TagRule::Caption => "Checks align and narrows the version profiles it allows",
            TagRule::Hr => "Flags the proprietary src attribute",
            TagRule::Img => "Requires alt and src; ismap needs a client-side usemap",
            TagRule::Area => "Requires alt and href or nohref",
            TagRule::Anchor => "Normalizes anchor identifiers",
            TagRule::Map => "Normalizes image map identifiers",
            TagRule::Style => "Repairs a missing or empty type to text/css",
            TagRule::Form => "Requires action",
            TagRule::Meta => "Requires content",
            TagRule::TableCell => "width and height rule out HTML 4 strict",
            TagRule::Link => "Stylesheet links get type text/css",
            TagRule::Baseline => "Generic attribute check for tags without a rule",
        }
    }

    /// Run this rule on `node`
    pub fn check(self, collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
        match self {
            TagRule::Html | TagRule::Baseline => collab.attributes.check_attributes(ctx, node),
            TagRule::Script => check_script(collab, ctx, node),
            TagRule::Table => check_table(collab, ctx, node),
            TagRule::Caption => check_caption(collab, ctx, node),
            TagRule::Hr => check_hr(collab, ctx, node),
            TagRule::Img => check_img(collab, ctx, node),
            TagRule::Area => check_area(collab, ctx, node),
            TagRule::Anchor | TagRule::Map => {
                collab.attributes.check_attributes(ctx, node);
                collab.ids.fix_id(ctx, node);
            }
            TagRule::Style => check_style(collab, ctx, node),
            TagRule::Form => check_form(collab, ctx, node),
            TagRule::Meta => check_meta(collab, ctx, node),
            TagRule::TableCell => check_table_cell(collab, ctx, node),
            TagRule::Link => check_link(collab, ctx, node),
        }
    }
}

impl fmt::Display for TagRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

/// MIME type implied by a script `language` value
fn script_type_for(language: Option<&str>) -> Option<&'static str> {
    match language {
        None => Some(TEXT_JAVASCRIPT),
        Some(lang)
            if starts_with_ignore_case(lang, "javascript")
                || starts_with_ignore_case(lang, "jscript") =>
        {
            Some(TEXT_JAVASCRIPT)
        }
        Some(lang) if lang.eq_ignore_ascii_case("vbscript") => Some(TEXT_VBSCRIPT),
        Some(_) => None,
    }
}

fn check_script(collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
    let language = node.get_attr(AttrId::Language).map(|a| a.value.clone());
    let has_type = node.has_attr(AttrId::Type);

    collab.attributes.check_attributes(ctx, node);

    if has_type {
        return;
    }

    let inferred = match &language {
        Some(value) => script_type_for(value.as_deref()),
        None => Some(TEXT_JAVASCRIPT),
    };
    if let Some(mime) = inferred {
        log::debug!("{}: inserting type=\"{}\"", node.display_name(), mime);
        node.add_attribute("type", mime);
    }

    match node.get_attr(AttrId::Type).map(AttrTarget::from) {
        Some(target) => ctx.report_attr(node, target, DiagnosticKind::InsertingAttribute),
        None => ctx.report_missing_attr(node, "type"),
    }
}

fn check_table(collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
    let has_summary = node.has_attr(AttrId::Summary);

    collab.attributes.check_attributes(ctx, node);

    if ctx.config().strict_accessibility() && !has_summary {
        ctx.flag_access(AccessFlags::MISSING_SUMMARY);
        ctx.report_missing_attr(node, "summary");
    }

    if ctx.config().output_xml {
        if let Some(border) = node.attr_by_name_mut("border") {
            if border.value.is_none() {
                border.value = Some("1".to_string());
                log::debug!("<table>: bare border set to 1");
            }
        }
    }
}

fn check_caption(collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
    let align = node.find_attr_ignore_case("align").cloned();

    collab.attributes.check_attributes(ctx, node);

    let Some(align) = align else { return };
    let Some(value) = align.value() else { return };

    if value.eq_ignore_ascii_case("left") || value.eq_ignore_ascii_case("right") {
        ctx.constrain_version(Versions::HTML40_LOOSE);
    } else if value.eq_ignore_ascii_case("top") || value.eq_ignore_ascii_case("bottom") {
        ctx.exclude_versions(Versions::HTML20 | Versions::HTML32);
    } else {
        ctx.report_attr(node, (&align).into(), DiagnosticKind::BadAttributeValue);
    }
}

fn check_hr(collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
    let src = node.get_attr_by_name("src").map(AttrTarget::from);

    collab.attributes.check_attributes(ctx, node);

    if let Some(target) = src {
        ctx.report_attr(node, target, DiagnosticKind::ProprietaryAttrValue);
    }
}

fn check_img(collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
    let has_alt = node.has_attr(AttrId::Alt);
    let has_src = node.has_attr(AttrId::Src);
    let has_usemap = node.has_attr(AttrId::Usemap);
    let has_ismap = node.has_attr(AttrId::Ismap);
    let has_datafld = node.has_attr(AttrId::Datafld);

    collab.attributes.check_attributes(ctx, node);

    if !has_alt {
        ctx.flag_access(AccessFlags::MISSING_IMAGE_ALT);
        ctx.report_missing_attr(node, "alt");
        if let Some(alt) = ctx.config().fallback_alt_text() {
            log::debug!("<img>: inserting fallback alt=\"{}\"", alt);
            node.add_attribute("alt", alt);
        }
    }

    if !has_src && !has_datafld {
        ctx.report_missing_attr(node, "src");
    }

    if has_ismap && !has_usemap {
        ctx.report_attr(node, AttrTarget::named("ismap"), DiagnosticKind::MissingImagemap);
    }
}

fn check_area(collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
    let has_alt = node.has_attr(AttrId::Alt);
    let has_href = node.has_attr(AttrId::Href);
    let has_nohref = node.has_attr(AttrId::Nohref);

    collab.attributes.check_attributes(ctx, node);

    if !has_alt && ctx.config().strict_accessibility() {
        ctx.flag_access(AccessFlags::MISSING_LINK_ALT);
        ctx.report_missing_attr(node, "alt");
    }

    if !has_href && !has_nohref {
        ctx.report_missing_attr(node, "href");
    }
}

fn check_style(collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
    let needs_type = node
        .get_attr(AttrId::Type)
        .map_or(true, Attribute::is_empty_value);

    collab.attributes.check_attributes(ctx, node);

    if needs_type {
        let target = AttrTarget::from(node.repair_attr_value("type", TEXT_CSS));
        ctx.report_attr(node, target, DiagnosticKind::InsertingAttribute);
    }
}

fn check_form(collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
    let has_action = node.get_attr_by_name("action").is_some();

    collab.attributes.check_attributes(ctx, node);

    if !has_action {
        ctx.report_missing_attr(node, "action");
    }
}

fn check_meta(collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
    let has_content = node.get_attr_by_name("content").is_some();

    collab.attributes.check_attributes(ctx, node);

    if !has_content {
        ctx.report_missing_attr(node, "content");
    }
}

fn check_table_cell(collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
    let sized =
        node.get_attr_by_name("width").is_some() || node.get_attr_by_name("height").is_some();

    collab.attributes.check_attributes(ctx, node);

    if sized {
        ctx.exclude_versions(Versions::HTML40_STRICT);
    }
}

fn check_link(collab: &Collaborators<'_>, ctx: &mut DocumentContext<'_>, node: &mut Node) {
    let is_stylesheet = node.get_attr_by_name("rel").and_then(Attribute::value) == Some("stylesheet");

    collab.attributes.check_attributes(ctx, node);

    if is_stylesheet && !node.has_attr(AttrId::Type) {
        ctx.report_missing_attr(node, "type");
        node.add_attribute("type", TEXT_CSS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{AnchorIds, PermissiveAttributes};
    use crate::config::Config;
    use crate::context::DocumentSummary;
    use crate::diagnostic::Report;
    use crate::node::TagId;
    use pretty_assertions::assert_eq;

    fn run(rule: TagRule, config: &Config, node: &mut Node) -> (Report, DocumentSummary) {
        let collab = Collaborators {
            attributes: &PermissiveAttributes,
            ids: &AnchorIds,
        };
        let mut report = Report::new();
        let summary = {
            let mut ctx = DocumentContext::new(config, &mut report);
            rule.check(&collab, &mut ctx, node);
            ctx.summary()
        };
        (report, summary)
    }

    fn value<'n>(node: &'n Node, name: &str) -> Option<&'n str> {
        node.get_attr_by_name(name).and_then(Attribute::value)
    }

    #[test]
    fn test_script_without_language_defaults_to_javascript() {
        let mut node = Node::element(TagId::Script);
        let (report, _) = run(TagRule::Script, &Config::default(), &mut node);

        assert_eq!(value(&node, "type"), Some(TEXT_JAVASCRIPT));
        assert_eq!(report.diagnostics.len(), 1);
        let d = &report.diagnostics[0];
        assert_eq!(d.kind, DiagnosticKind::InsertingAttribute);
        assert_eq!(d.target.name(), "type");
        assert_eq!(d.message, "<script> inserting \"type\" attribute");
    }

    #[test]
    fn test_script_language_prefixes() {
        for (language, expected) in [
            ("JavaScript1.2", TEXT_JAVASCRIPT),
            ("jscript", TEXT_JAVASCRIPT),
            ("JSCRIPT.Encode", TEXT_JAVASCRIPT),
            ("VBScript", TEXT_VBSCRIPT),
        ] {
            let mut node = Node::element(TagId::Script).with_attr("language", language);
            let (report, _) = run(TagRule::Script, &Config::default(), &mut node);

            assert_eq!(value(&node, "type"), Some(expected), "language {}", language);
            assert_eq!(report.of_kind(DiagnosticKind::InsertingAttribute).count(), 1);
            assert_eq!(report.diagnostics.len(), 1);
        }
    }

    #[test]
    fn test_script_unknown_language_reports_missing_type() {
        let mut node = Node::element(TagId::Script).with_attr("language", "tcl");
        let (report, _) = run(TagRule::Script, &Config::default(), &mut node);

        assert!(node.get_attr_by_name("type").is_none());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].kind, DiagnosticKind::MissingAttribute);
        assert_eq!(report.diagnostics[0].target, AttrTarget::named("type"));
    }

    #[test]
    fn test_script_bare_language_is_javascript() {
        let mut node = Node::element(TagId::Script).with_bare_attr("language");
        run(TagRule::Script, &Config::default(), &mut node);
        assert_eq!(value(&node, "type"), Some(TEXT_JAVASCRIPT));
    }

    #[test]
    fn test_script_with_type_is_untouched() {
        let original = Node::element(TagId::Script).with_attr("type", TEXT_JAVASCRIPT);
        let mut node = original.clone();
        let (report, summary) = run(TagRule::Script, &Config::default(), &mut node);

        assert!(report.is_clean());
        assert_eq!(node, original);
        assert_eq!(summary.versions, Versions::EVERYTHING);
    }

    #[test]
    fn test_table_missing_summary() {
        let mut node = Node::element(TagId::Table);
        let (report, summary) = run(TagRule::Table, &Config::default(), &mut node);

        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].message, "<table> lacks \"summary\" attribute");
        assert!(summary.access.contains(AccessFlags::MISSING_SUMMARY));
    }

    #[test]
    fn test_table_rule_reports_again_on_second_call() {
        let config = Config::default();
        let collab = Collaborators {
            attributes: &PermissiveAttributes,
            ids: &AnchorIds,
        };
        let mut node = Node::element(TagId::Table);
        let mut report = Report::new();
        {
            let mut ctx = DocumentContext::new(&config, &mut report);
            TagRule::Table.check(&collab, &mut ctx, &mut node);
            TagRule::Table.check(&collab, &mut ctx, &mut node);
        }

        assert_eq!(report.of_kind(DiagnosticKind::MissingAttribute).count(), 2);
    }

    #[test]
    fn test_table_summary_not_required_above_level_zero() {
        let config = Config {
            accessibility_check: 2,
            ..Config::default()
        };
        let mut node = Node::element(TagId::Table);
        let (report, summary) = run(TagRule::Table, &config, &mut node);

        assert!(report.is_clean());
        assert!(summary.access.is_empty());
    }

    #[test]
    fn test_table_bare_border_in_xml() {
        let config = Config {
            output_xml: true,
            ..Config::default()
        };
        let mut node = Node::element(TagId::Table)
            .with_attr("summary", "totals")
            .with_bare_attr("border");
        let (report, _) = run(TagRule::Table, &config, &mut node);

        assert!(report.is_clean());
        assert_eq!(value(&node, "border"), Some("1"));

        let mut html = Node::element(TagId::Table)
            .with_attr("summary", "totals")
            .with_bare_attr("border");
        run(TagRule::Table, &Config::default(), &mut html);
        assert_eq!(value(&html, "border"), None);
    }

    #[test]
    fn test_caption_left_narrows_to_transitional() {
        let mut node = Node::element(TagId::Caption).with_attr("align", "LEFT");
        let (report, summary) = run(TagRule::Caption, &Config::default(), &mut node);

        assert!(report.is_clean());
        assert_eq!(summary.versions, Versions::HTML40_LOOSE | Versions::PROPRIETARY);
    }

    #[test]
    fn test_caption_top_excludes_legacy_versions() {
        let mut node = Node::element(TagId::Caption).with_attr("align", "top");
        let (report, summary) = run(TagRule::Caption, &Config::default(), &mut node);

        assert!(report.is_clean());
        assert!(!summary.versions.intersects(Versions::HTML20 | Versions::HTML32));
        assert!(summary.versions.contains(Versions::HTML40_STRICT));
    }

    #[test]
    fn test_caption_bad_align() {
        let mut node = Node::element(TagId::Caption).with_attr("align", "diagonal");
        let (report, summary) = run(TagRule::Caption, &Config::default(), &mut node);

        assert_eq!(summary.versions, Versions::EVERYTHING);
        assert_eq!(report.diagnostics.len(), 1);
        let d = &report.diagnostics[0];
        assert_eq!(d.kind, DiagnosticKind::BadAttributeValue);
        assert_eq!(d.target.value(), Some("diagonal"));
        assert_eq!(
            d.message,
            "<caption> attribute \"align\" has invalid value \"diagonal\""
        );
    }

    #[test]
    fn test_caption_without_align_value_is_noop() {
        for mut node in [
            Node::element(TagId::Caption),
            Node::element(TagId::Caption).with_bare_attr("align"),
        ] {
            let (report, summary) = run(TagRule::Caption, &Config::default(), &mut node);
            assert!(report.is_clean());
            assert_eq!(summary.versions, Versions::EVERYTHING);
        }
    }

    #[test]
    fn test_caption_first_align_wins() {
        let mut node = Node::element(TagId::Caption)
            .with_attr("align", "bottom")
            .with_attr("align", "sideways");
        let (report, _) = run(TagRule::Caption, &Config::default(), &mut node);
        assert!(report.is_clean());
    }

    #[test]
    fn test_caption_align_name_ignores_case() {
        let mut node = Node::element(TagId::Caption).with_attr("ALIGN", "Right");
        let (report, summary) = run(TagRule::Caption, &Config::default(), &mut node);

        assert!(report.is_clean());
        assert_eq!(summary.versions, Versions::HTML40_LOOSE | Versions::PROPRIETARY);
    }

    #[test]
    fn test_hr_src_is_proprietary() {
        let mut node = Node::element(TagId::Hr).with_attr("src", "rule.gif");
        let (report, _) = run(TagRule::Hr, &Config::default(), &mut node);

        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(
            report.diagnostics[0].message,
            "<hr> proprietary attribute value \"rule.gif\""
        );
        assert_eq!(value(&node, "src"), Some("rule.gif"));
    }

    #[test]
    fn test_hr_uppercase_src_not_reported() {
        let mut node = Node::element(TagId::Hr).with_attr("SRC", "rule.gif");
        let (report, summary) = run(TagRule::Hr, &Config::default(), &mut node);

        assert!(report.is_clean());
        assert_eq!(summary.versions, Versions::EVERYTHING);
    }

    #[test]
    fn test_img_fallback_alt_is_inserted_and_reported() {
        let config = Config {
            alt_text: Some("image".to_string()),
            ..Config::default()
        };
        let mut node = Node::element(TagId::Img).with_attr("src", "logo.png");
        let (report, summary) = run(TagRule::Img, &config, &mut node);

        assert_eq!(value(&node, "alt"), Some("image"));
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].message, "<img> lacks \"alt\" attribute");
        assert!(summary.access.contains(AccessFlags::MISSING_IMAGE_ALT));
    }

    #[test]
    fn test_img_without_fallback_is_not_repaired() {
        let config = Config {
            alt_text: Some(String::new()),
            ..Config::default()
        };
        let mut node = Node::element(TagId::Img).with_attr("src", "logo.png");
        run(TagRule::Img, &config, &mut node);
        assert!(node.get_attr_by_name("alt").is_none());
    }

    #[test]
    fn test_img_datafld_stands_in_for_src() {
        let mut node = Node::element(TagId::Img)
            .with_attr("alt", "")
            .with_attr("datafld", "photo");
        let (report, _) = run(TagRule::Img, &Config::default(), &mut node);
        assert!(report.is_clean());

        let mut bare = Node::element(TagId::Img).with_attr("alt", "x");
        let (report, _) = run(TagRule::Img, &Config::default(), &mut bare);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].target, AttrTarget::named("src"));
    }

    #[test]
    fn test_img_server_side_map() {
        let mut node = Node::element(TagId::Img)
            .with_attr("alt", "map")
            .with_attr("src", "map.gif")
            .with_bare_attr("ismap");
        let (report, summary) = run(TagRule::Img, &Config::default(), &mut node);

        assert_eq!(report.diagnostics.len(), 1);
        let d = &report.diagnostics[0];
        assert_eq!(d.kind, DiagnosticKind::MissingImagemap);
        assert_eq!(d.message, "<img> should use client-side image map");
        assert!(summary.access.contains(AccessFlags::MISSING_IMAGE_MAP));

        let mut client = node.clone().with_attr("usemap", "#nav");
        let (report, _) = run(TagRule::Img, &Config::default(), &mut client);
        assert!(report.is_clean());
    }

    #[test]
    fn test_area_requirements() {
        let mut node = Node::element(TagId::Area);
        let (report, summary) = run(TagRule::Area, &Config::default(), &mut node);

        let targets: Vec<&str> = report.diagnostics.iter().map(|d| d.target.name()).collect();
        assert_eq!(targets, vec!["alt", "href"]);
        assert!(summary.access.contains(AccessFlags::MISSING_LINK_ALT));

        let mut nohref = Node::element(TagId::Area)
            .with_attr("alt", "dead zone")
            .with_bare_attr("nohref");
        let (report, _) = run(TagRule::Area, &Config::default(), &mut nohref);
        assert!(report.is_clean());
    }

    #[test]
    fn test_area_alt_not_required_above_level_zero() {
        let config = Config {
            accessibility_check: 1,
            ..Config::default()
        };
        let mut node = Node::element(TagId::Area).with_attr("href", "/");
        let (report, summary) = run(TagRule::Area, &config, &mut node);
        assert!(report.is_clean());
        assert!(summary.access.is_empty());
    }

    #[test]
    fn test_anchor_runs_id_fix() {
        let mut node = Node::element(TagId::A)
            .with_attr("name", "a1")
            .with_attr("id", "a2");
        let (report, _) = run(TagRule::Anchor, &Config::default(), &mut node);
        assert_eq!(report.diagnostics[0].kind, DiagnosticKind::IdNameMismatch);
    }

    #[test]
    fn test_style_type_repair() {
        for mut node in [
            Node::element(TagId::Style),
            Node::element(TagId::Style).with_attr("type", ""),
            Node::element(TagId::Style).with_bare_attr("type"),
        ] {
            let (report, _) = run(TagRule::Style, &Config::default(), &mut node);

            assert_eq!(node.attributes.len(), 1);
            assert_eq!(value(&node, "type"), Some(TEXT_CSS));
            assert_eq!(report.diagnostics.len(), 1);
            assert_eq!(report.diagnostics[0].kind, DiagnosticKind::InsertingAttribute);
            assert_eq!(report.diagnostics[0].target.value(), Some(TEXT_CSS));
        }
    }

    #[test]
    fn test_form_and_meta_requirements() {
        let mut form = Node::element(TagId::Form);
        let (report, _) = run(TagRule::Form, &Config::default(), &mut form);
        assert_eq!(report.diagnostics[0].message, "<form> lacks \"action\" attribute");

        let mut meta = Node::element(TagId::Meta).with_attr("name", "author");
        let (report, _) = run(TagRule::Meta, &Config::default(), &mut meta);
        assert_eq!(report.diagnostics[0].message, "<meta> lacks \"content\" attribute");

        let mut literal = Node::element(TagId::Form).with_attr("ACTION", "/post");
        let (report, _) = run(TagRule::Form, &Config::default(), &mut literal);
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn test_sized_cell_excludes_strict() {
        let mut node = Node::element(TagId::Td).with_attr("width", "50%");
        let (report, summary) = run(TagRule::TableCell, &Config::default(), &mut node);

        assert!(report.is_clean());
        assert!(!summary.versions.intersects(Versions::HTML40_STRICT));
        assert!(summary.versions.contains(Versions::HTML40_LOOSE));

        let mut plain = Node::element(TagId::Th);
        let (_, summary) = run(TagRule::TableCell, &Config::default(), &mut plain);
        assert_eq!(summary.versions, Versions::EVERYTHING);
    }

    #[test]
    fn test_stylesheet_link_gets_type() {
        let mut node = Node::element(TagId::Link)
            .with_attr("rel", "stylesheet")
            .with_attr("href", "site.css");
        let (report, _) = run(TagRule::Link, &Config::default(), &mut node);

        assert_eq!(value(&node, "type"), Some(TEXT_CSS));
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].kind, DiagnosticKind::MissingAttribute);
        assert_eq!(report.diagnostics[0].target, AttrTarget::named("type"));
    }

    #[test]
    fn test_link_rel_is_case_sensitive() {
        let mut node = Node::element(TagId::Link).with_attr("rel", "StyleSheet");
        let (report, _) = run(TagRule::Link, &Config::default(), &mut node);

        assert!(report.is_clean());
        assert!(node.get_attr_by_name("type").is_none());
    }

    #[test]
    fn test_link_keeps_differently_cased_type() {
        let mut node = Node::element(TagId::Link)
            .with_attr("rel", "stylesheet")
            .with_attr("TYPE", "text/x");
        let original = node.clone();
        let (report, _) = run(TagRule::Link, &Config::default(), &mut node);

        assert!(report.is_clean());
        assert_eq!(node, original);
        assert_eq!(value(&node, "TYPE"), Some("text/x"));
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<&str> = TagRule::ALL.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TagRule::ALL.len());
    }
}

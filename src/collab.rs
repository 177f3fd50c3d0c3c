//! Collaborators invoked by tag rules
//!
//! The generic "is this attribute legal here" check and anchor id
//! normalization belong to the surrounding pipeline. Rules reach them
//! through these traits so a pipeline can plug in its own.

use crate::context::DocumentContext;
use crate::diagnostic::{AttrTarget, DiagnosticKind};
use crate::node::Node;

/// Generic attribute legality check, run by every rule before its own logic
pub trait AttributeCheck: Send + Sync {
    fn check_attributes(&self, ctx: &mut DocumentContext<'_>, node: &mut Node);
}

/// Identifier normalization for `a` and `map` elements
pub trait IdFix: Send + Sync {
    fn fix_id(&self, ctx: &mut DocumentContext<'_>, node: &mut Node);
}

/// Accepts every attribute
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveAttributes;

impl AttributeCheck for PermissiveAttributes {
    fn check_attributes(&self, _ctx: &mut DocumentContext<'_>, node: &mut Node) {
        log::trace!(
            "{}: {} attribute(s) accepted",
            node.display_name(),
            node.attributes.len()
        );
    }
}

/// Keeps `id` and `name` in step on anchors and tracks anchor uniqueness.
///
/// - `name` and `id` with different values: `ID_NAME_MISMATCH` on `name`
/// - `name` without `id` when writing XML: `id` is inserted with the same value
/// - an identifier already seen in this document: `ANCHOR_NOT_UNIQUE`
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorIds;

impl IdFix for AnchorIds {
    fn fix_id(&self, ctx: &mut DocumentContext<'_>, node: &mut Node) {
        let name = node.get_attr_by_name("name").cloned();
        let id_value = node.get_attr_by_name("id").map(|a| a.value.clone());

        if let Some(name) = &name {
            match id_value {
                Some(Some(id)) if name.value.as_deref() != Some(id.as_str()) => {
                    ctx.report_attr(node, name.into(), DiagnosticKind::IdNameMismatch);
                }
                Some(_) => {}
                None => {
                    if let (true, Some(value)) = (ctx.config().output_xml, name.value()) {
                        log::debug!("{}: copying name \"{}\" into id", node.display_name(), value);
                        node.add_attribute("id", value);
                    }
                }
            }
        }

        let identifier = node
            .get_attr_by_name("id")
            .filter(|a| a.has_value())
            .or_else(|| node.get_attr_by_name("name").filter(|a| a.has_value()))
            .map(AttrTarget::from);

        if let Some(target) = identifier {
            let value = target.value().unwrap_or_default().to_string();
            if !ctx.register_anchor(&value) {
                ctx.report_attr(node, target, DiagnosticKind::AnchorNotUnique);
            }
        }
    }
}

/// Borrowed view of the collaborators handed to a rule
#[derive(Clone, Copy)]
pub struct Collaborators<'e> {
    pub attributes: &'e dyn AttributeCheck,
    pub ids: &'e dyn IdFix,
}

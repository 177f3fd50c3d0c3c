//! Element and attribute model
//!
//! A [`Node`] is one already-placed element: its tag identity, the source
//! spelling of its name, and its attributes in source order. Attribute
//! lookups return the first match, so a duplicate later in the list is
//! shadowed by the earlier one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagId {
    A,
    Abbr,
    Acronym,
    Address,
    Applet,
    Area,
    B,
    Base,
    Blockquote,
    Body,
    Br,
    Button,
    Caption,
    Center,
    Col,
    Colgroup,
    Dd,
    Div,
    Dl,
    Dt,
    Em,
    Fieldset,
    Font,
    Form,
    Frame,
    Frameset,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Head,
    Hr,
    Html,
    I,
    Iframe,
    Img,
    Input,
    Label,
    Li,
    Link,
    Map,
    Meta,
    Noframes,
    Noscript,
    Object,
    Ol,
    Option,
    P,
    Param,
    Pre,
    Script,
    Select,
    Span,
    Strong,
    Style,
    Table,
    Tbody,
    Td,
    Textarea,
    Tfoot,
    Th,
    Thead,
    Title,
    Tr,
    U,
    Ul,
}

const TAG_NAMES: &[(TagId, &str)] = &[
    (TagId::A, "a"),
    (TagId::Abbr, "abbr"),
    (TagId::Acronym, "acronym"),
    (TagId::Address, "address"),
    (TagId::Applet, "applet"),
    (TagId::Area, "area"),
    (TagId::B, "b"),
    (TagId::Base, "base"),
    (TagId::Blockquote, "blockquote"),
    (TagId::Body, "body"),
    (TagId::Br, "br"),
    (TagId::Button, "button"),
    (TagId::Caption, "caption"),
    (TagId::Center, "center"),
    (TagId::Col, "col"),
    (TagId::Colgroup, "colgroup"),
    (TagId::Dd, "dd"),
    (TagId::Div, "div"),
    (TagId::Dl, "dl"),
    (TagId::Dt, "dt"),
    (TagId::Em, "em"),
    (TagId::Fieldset, "fieldset"),
    (TagId::Font, "font"),
    (TagId::Form, "form"),
    (TagId::Frame, "frame"),
    (TagId::Frameset, "frameset"),
    (TagId::H1, "h1"),
    (TagId::H2, "h2"),
    (TagId::H3, "h3"),
    (TagId::H4, "h4"),
    (TagId::H5, "h5"),
    (TagId::H6, "h6"),
    (TagId::Head, "head"),
    (TagId::Hr, "hr"),
    (TagId::Html, "html"),
    (TagId::I, "i"),
    (TagId::Iframe, "iframe"),
    (TagId::Img, "img"),
    (TagId::Input, "input"),
    (TagId::Label, "label"),
    (TagId::Li, "li"),
    (TagId::Link, "link"),
    (TagId::Map, "map"),
    (TagId::Meta, "meta"),
    (TagId::Noframes, "noframes"),
    (TagId::Noscript, "noscript"),
    (TagId::Object, "object"),
    (TagId::Ol, "ol"),
    (TagId::Option, "option"),
    (TagId::P, "p"),
    (TagId::Param, "param"),
    (TagId::Pre, "pre"),
    (TagId::Script, "script"),
    (TagId::Select, "select"),
    (TagId::Span, "span"),
    (TagId::Strong, "strong"),
    (TagId::Style, "style"),
    (TagId::Table, "table"),
    (TagId::Tbody, "tbody"),
    (TagId::Td, "td"),
    (TagId::Textarea, "textarea"),
    (TagId::Tfoot, "tfoot"),
    (TagId::Th, "th"),
    (TagId::Thead, "thead"),
    (TagId::Title, "title"),
    (TagId::Tr, "tr"),
    (TagId::U, "u"),
    (TagId::Ul, "ul"),
];

impl TagId {
    /// Look up a tag by element name (case-insensitive)
    pub fn from_name(name: &str) -> Option<TagId> {
        TAG_NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        TAG_NAMES
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, n)| *n)
            .unwrap_or("unknown")
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Well-known attribute identities consulted by tag rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrId {
    Action,
    Align,
    Alt,
    Border,
    Content,
    Datafld,
    Height,
    Href,
    Id,
    Ismap,
    Language,
    Name,
    Nohref,
    Rel,
    Src,
    Summary,
    Type,
    Usemap,
    Width,
}

impl AttrId {
    /// Look up an attribute identity by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<AttrId> {
        let id = match name.to_ascii_lowercase().as_str() {
            "action" => AttrId::Action,
            "align" => AttrId::Align,
            "alt" => AttrId::Alt,
            "border" => AttrId::Border,
            "content" => AttrId::Content,
            "datafld" => AttrId::Datafld,
            "height" => AttrId::Height,
            "href" => AttrId::Href,
            "id" => AttrId::Id,
            "ismap" => AttrId::Ismap,
            "language" => AttrId::Language,
            "name" => AttrId::Name,
            "nohref" => AttrId::Nohref,
            "rel" => AttrId::Rel,
            "src" => AttrId::Src,
            "summary" => AttrId::Summary,
            "type" => AttrId::Type,
            "usemap" => AttrId::Usemap,
            "width" => AttrId::Width,
            _ => return None,
        };
        Some(id)
    }

    pub fn name(self) -> &'static str {
        match self {
            AttrId::Action => "action",
            AttrId::Align => "align",
            AttrId::Alt => "alt",
            AttrId::Border => "border",
            AttrId::Content => "content",
            AttrId::Datafld => "datafld",
            AttrId::Height => "height",
            AttrId::Href => "href",
            AttrId::Id => "id",
            AttrId::Ismap => "ismap",
            AttrId::Language => "language",
            AttrId::Name => "name",
            AttrId::Nohref => "nohref",
            AttrId::Rel => "rel",
            AttrId::Src => "src",
            AttrId::Summary => "summary",
            AttrId::Type => "type",
            AttrId::Usemap => "usemap",
            AttrId::Width => "width",
        }
    }
}

/// Quoting used for a value in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
    Unquoted,
}

/// One attribute on an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Name as written in the source
    pub name: String,
    /// Value; `None` for a bare attribute such as `<img ismap>`
    pub value: Option<String>,
    #[serde(default)]
    pub quote: QuoteStyle,
}

impl Attribute {
    pub fn new(name: &str, value: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            value: value.map(String::from),
            quote: QuoteStyle::Double,
        }
    }

    /// Well-known identity, if any
    pub fn id(&self) -> Option<AttrId> {
        AttrId::from_name(&self.name)
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// True for a missing or zero-length value
    pub fn is_empty_value(&self) -> bool {
        self.value.as_deref().map_or(true, str::is_empty)
    }
}

/// An element node as handed over by the tree builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Resolved identity; `None` for elements outside the tag dictionary
    pub tag: Option<TagId>,
    /// Element name as written in the source
    pub element: String,
    pub attributes: Vec<Attribute>,
    /// Source line (1-based, 0 when unknown)
    #[serde(default)]
    pub line: usize,
    /// Source column (1-based, 0 when unknown)
    #[serde(default)]
    pub column: usize,
}

impl Node {
    /// Create an element with a known tag
    pub fn element(tag: TagId) -> Self {
        Self {
            tag: Some(tag),
            element: tag.name().to_string(),
            attributes: Vec::new(),
            line: 0,
            column: 0,
        }
    }

    /// Create an element from its source name, resolving the tag identity
    pub fn named(name: &str) -> Self {
        Self {
            tag: TagId::from_name(name),
            element: name.to_string(),
            attributes: Vec::new(),
            line: 0,
            column: 0,
        }
    }

    /// Set the source position
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Builder: append an attribute with a value
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push(Attribute::new(name, Some(value)));
        self
    }

    /// Builder: append a bare attribute
    pub fn with_bare_attr(mut self, name: &str) -> Self {
        self.attributes.push(Attribute::new(name, None));
        self
    }

    /// `<name>` as used in messages
    pub fn display_name(&self) -> String {
        let name = match self.tag {
            Some(tag) => tag.name(),
            None => self.element.as_str(),
        };
        format!("<{}>", name)
    }

    /// First attribute with the given identity
    pub fn get_attr(&self, id: AttrId) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id() == Some(id))
    }

    pub fn has_attr(&self, id: AttrId) -> bool {
        self.get_attr(id).is_some()
    }

    /// First attribute whose name matches exactly
    pub fn get_attr_by_name(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn attr_by_name_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.attributes.iter_mut().find(|a| a.name == name)
    }

    /// First attribute whose name matches ignoring ASCII case
    pub fn find_attr_ignore_case(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Add an attribute, or replace the value of one spelled exactly `name`.
    /// Attributes spelled in another case are left alone.
    pub fn add_attribute(&mut self, name: &str, value: &str) {
        match self.attr_by_name_mut(name) {
            Some(existing) => existing.value = Some(value.to_string()),
            None => self.attributes.push(Attribute::new(name, Some(value))),
        }
    }

    /// Set `name` (matched ignoring ASCII case) to `value`, inserting the
    /// attribute when absent, and return the resulting record
    pub fn repair_attr_value(&mut self, name: &str, value: &str) -> &Attribute {
        let index = match self
            .attributes
            .iter()
            .position(|a| a.name.eq_ignore_ascii_case(name))
        {
            Some(index) => {
                self.attributes[index].value = Some(value.to_string());
                index
            }
            None => {
                self.attributes.push(Attribute::new(name, Some(value)));
                self.attributes.len() - 1
            }
        };
        &self.attributes[index]
    }
}

//! Supported elements.
//!
//! The tokenizer only recognizes the closed set of tags in [`TAGS`]. Each
//! entry records whether the element is a container (pushed on the open-tag
//! stack and closed by an end tag) or void (`br`, `img`), and the style
//! defaults the element applies on top of what it inherits.

use lsb_css::{Color, DisplayValue, FontStyle, FontWeight, StyleOverrides, TextDecoration};
use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// A supported element kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// `<div>`
    Div,
    /// `<span>`
    Span,
    /// `<p>`
    P,
    /// `<a>`
    A,
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<ul>`
    Ul,
    /// `<li>`
    Li,
    /// `<em>`
    Em,
    /// `<strong>`
    Strong,
    /// `<title>`
    Title,
    /// `<section>`
    Section,
    /// `<pre>`
    Pre,
    /// `<script>`
    Script,
    /// `<br>`
    Br,
    /// `<img>`
    Img,
}

impl TagKind {
    /// The lowercase tag name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The table entry for this kind.
    #[must_use]
    pub fn descriptor(self) -> &'static TagDescriptor {
        &TAGS[self as usize]
    }

    /// Returns true for `br` and `img`.
    #[must_use]
    pub fn is_void(self) -> bool {
        matches!(self.descriptor().class, TagClass::Void)
    }
}

/// How an element interacts with the open-tag stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    /// Opened by a start tag, closed by a matching end tag.
    Container,
    /// A single self-closing tag with no content.
    Void,
}

/// One row of the tag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDescriptor {
    /// The element kind.
    pub kind: TagKind,
    /// Container or void.
    pub class: TagClass,
    /// Built-in style defaults applied after inheritance.
    pub defaults: StyleOverrides,
}

const fn container(kind: TagKind, defaults: StyleOverrides) -> TagDescriptor {
    TagDescriptor {
        kind,
        class: TagClass::Container,
        defaults,
    }
}

const BLOCK: StyleOverrides = StyleOverrides::display(DisplayValue::Block);
const INLINE: StyleOverrides = StyleOverrides::display(DisplayValue::Inline);
const HIDDEN: StyleOverrides = StyleOverrides::display(DisplayValue::None);
const HEADING: StyleOverrides = StyleOverrides {
    font_weight: Some(FontWeight::Bold),
    ..BLOCK
};

/// The tag table, indexed by `TagKind as usize`.
pub static TAGS: [TagDescriptor; 17] = [
    container(TagKind::Div, BLOCK),
    container(TagKind::Span, INLINE),
    container(TagKind::P, StyleOverrides::NONE),
    container(
        TagKind::A,
        StyleOverrides {
            color: Some(Color::BLUE),
            text_decoration: Some(TextDecoration::Underline),
            ..INLINE
        },
    ),
    container(TagKind::H1, HEADING),
    container(TagKind::H2, HEADING),
    container(TagKind::H3, HEADING),
    container(TagKind::Ul, BLOCK),
    container(TagKind::Li, BLOCK),
    container(
        TagKind::Em,
        StyleOverrides {
            font_style: Some(FontStyle::Italic),
            ..INLINE
        },
    ),
    container(
        TagKind::Strong,
        StyleOverrides {
            font_weight: Some(FontWeight::Bold),
            ..INLINE
        },
    ),
    container(TagKind::Title, HIDDEN),
    container(TagKind::Section, BLOCK),
    container(TagKind::Pre, BLOCK),
    container(TagKind::Script, HIDDEN),
    TagDescriptor {
        kind: TagKind::Br,
        class: TagClass::Void,
        defaults: StyleOverrides::NONE,
    },
    TagDescriptor {
        kind: TagKind::Img,
        class: TagClass::Void,
        defaults: StyleOverrides::NONE,
    },
];

/// Look up a tag by name, ignoring ASCII case.
///
/// The whole name must match: `ulx` does not find `ul`.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static TagDescriptor> {
    TAGS.iter()
        .find(|descriptor| descriptor.kind.name().eq_ignore_ascii_case(name))
}

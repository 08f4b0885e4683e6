//! Static prose surrounding the rule table.
//!
//! These blocks carry no logic; renderers emit them verbatim.

use serde::{Deserialize, Serialize};

/// Bullet marker used for a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletStyle {
    #[default]
    Disc,
    Circle,
}

impl BulletStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            BulletStyle::Disc => "disc",
            BulletStyle::Circle => "circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Box<BulletList>>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: None,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: BulletList) -> Self {
        self.children = Some(Box::new(children));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletList {
    #[serde(default)]
    pub style: BulletStyle,
    pub items: Vec<ListItem>,
}

impl BulletList {
    pub fn new(style: BulletStyle, items: Vec<ListItem>) -> Self {
        Self { style, items }
    }

    /// A disc list of plain items.
    pub fn plain<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            style: BulletStyle::Disc,
            items: items.into_iter().map(ListItem::new).collect(),
        }
    }
}

/// A glossary line of the key table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub meaning: String,
}

impl GlossaryEntry {
    pub fn new(term: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            meaning: meaning.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StaticBlock {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    /// A bold caption followed by a bullet list.
    List { title: String, list: BulletList },
    Link { title: String, href: String },
    Spacer,
    Glossary { title: String, entries: Vec<GlossaryEntry> },
}

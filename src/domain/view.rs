// SPDX-License-Identifier: MPL-2.0
//! Top-level view identifiers.

use std::fmt;

/// One of the mutually exclusive screens of the installation.
///
/// Exactly one view is active at any time. Identifiers coming from outside
/// the type system (command line, stored values) go through
/// [`ViewId::resolve`], which maps anything unknown to the default view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewId {
    #[default]
    Gallery,
    Form,
    About,
    Text,
    ByPrompt,
    ByContributor,
    Card,
}

impl ViewId {
    /// Every view, in navigation order.
    pub const ALL: [ViewId; 7] = [
        ViewId::Gallery,
        ViewId::Form,
        ViewId::About,
        ViewId::Text,
        ViewId::ByPrompt,
        ViewId::ByContributor,
        ViewId::Card,
    ];

    /// Parses an identifier. Matching ignores case, `-` and `_`, so
    /// `byPrompt`, `by-prompt` and `BY_PROMPT` are the same view.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "gallery" => Some(ViewId::Gallery),
            "form" => Some(ViewId::Form),
            "about" => Some(ViewId::About),
            "text" => Some(ViewId::Text),
            "byprompt" => Some(ViewId::ByPrompt),
            "bycontributor" => Some(ViewId::ByContributor),
            "card" => Some(ViewId::Card),
            _ => None,
        }
    }

    /// Parses an identifier, falling back to the default view.
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    /// Canonical identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Gallery => "gallery",
            ViewId::Form => "form",
            ViewId::About => "about",
            ViewId::Text => "text",
            ViewId::ByPrompt => "byPrompt",
            ViewId::ByContributor => "byContributor",
            ViewId::Card => "card",
        }
    }

    /// Views reached through the "Images" mode of the footer.
    #[must_use]
    pub fn is_image_mode(self) -> bool {
        matches!(
            self,
            ViewId::Gallery | ViewId::ByPrompt | ViewId::ByContributor
        )
    }

    /// Views selected through the footer filter row (other than "All").
    #[must_use]
    pub fn is_filter(self) -> bool {
        matches!(self, ViewId::ByPrompt | ViewId::ByContributor)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

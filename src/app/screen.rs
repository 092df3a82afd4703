// SPDX-License-Identifier: MPL-2.0
//! The mounted view and its session.
//!
//! Only one view is mounted at a time. Each mount gets a fresh
//! [`SessionId`]; async completions carry the id of the mount that issued
//! them and are dropped once that mount is gone.

use crate::domain::view::ViewId;
use crate::ui::{by_contributor, card, form, gallery, text};

/// Identity of one mount of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    pub fn first() -> Self {
        Self(1)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Per-view state that lives exactly as long as the view is shown.
#[derive(Debug)]
pub enum Mounted {
    Gallery(gallery::State),
    Form(Box<form::State>),
    About,
    Text(text::State),
    ByPrompt,
    ByContributor(by_contributor::State),
    Card(card::State),
}

impl Mounted {
    #[must_use]
    pub fn view_id(&self) -> ViewId {
        match self {
            Mounted::Gallery(_) => ViewId::Gallery,
            Mounted::Form(_) => ViewId::Form,
            Mounted::About => ViewId::About,
            Mounted::Text(_) => ViewId::Text,
            Mounted::ByPrompt => ViewId::ByPrompt,
            Mounted::ByContributor(_) => ViewId::ByContributor,
            Mounted::Card(_) => ViewId::Card,
        }
    }

    /// Whether the view runs timers that need the fast tick.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match self {
            Mounted::Gallery(state) => state.is_animating(),
            Mounted::Form(state) => state.is_animating(),
            Mounted::Text(_) => true,
            Mounted::Card(state) => state.is_animating(),
            Mounted::About | Mounted::ByPrompt | Mounted::ByContributor(_) => false,
        }
    }
}

/// The mounted view together with its session.
#[derive(Debug)]
pub struct Screen {
    pub session: SessionId,
    pub mounted: Mounted,
}

impl Screen {
    /// Whether `session` still refers to a mounted `view`.
    #[must_use]
    pub fn is_live(&self, session: SessionId, view: ViewId) -> bool {
        self.session == session && self.mounted.view_id() == view
    }
}

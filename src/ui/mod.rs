// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every view follows the Elm-style "state down, messages up" pattern: it
//! receives a `ViewContext` with exactly the inputs it renders, emits its
//! own `Message`s and answers them with an `Event` for the orchestrator.
//!
//! # Views
//!
//! - [`gallery`] - Wall of every prompt image, hidden one by one on hover
//! - [`by_prompt`] - The five contributors' images for one prompt
//! - [`by_contributor`] - One contributor's archive, with [`image_modal`]
//! - [`text`] - Scrolling phrase list with narration and camera
//! - [`form`] - Multi-step contribution form
//! - [`about`] and [`card`] - Project statement and artist card
//!
//! # Chrome and shared pieces
//!
//! - [`header`] and [`footer`] - Always-mounted navigation bars
//! - [`typewriter`] and [`loader`] - Timed text reveal
//! - [`notifications`] - Toast notifications
//! - [`widgets`] - Canvas widgets
//! - [`styles`], [`design_tokens`], [`theming`] - Look and feel

pub mod about;
pub mod by_contributor;
pub mod by_prompt;
pub mod card;
pub mod design_tokens;
pub mod footer;
pub mod form;
pub mod gallery;
pub mod header;
pub mod image_modal;
pub mod loader;
pub mod notifications;
pub mod styles;
pub mod text;
pub mod theming;
pub mod typewriter;
pub mod widgets;

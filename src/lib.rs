// SPDX-License-Identifier: MPL-2.0
//! `beforelife` is the native viewer of the Before Life / After Life
//! installation, built with the Iced GUI framework.
//!
//! It shows an image archive browsable by prompt or by contributor, a
//! scrolling narrated text with a live camera preview, and a multi-step
//! form through which visitors contribute their own images.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

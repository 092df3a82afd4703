// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types of the installation with ZERO external dependencies.
//!
//! This module contains pure value objects and rules. It depends on `std`
//! only, so every state transition here can be tested without a window,
//! an audio device or a network.
//!
//! # Modules
//!
//! - [`view`]: Top-level view identifiers ([`ViewId`](view::ViewId))
//! - [`catalog`]: Static prompts, contributors and text phrases
//! - [`browsing`]: Bounded indices ([`PromptIndex`](browsing::PromptIndex),
//!   [`ClipNumber`](browsing::ClipNumber), [`ContributorIndex`](browsing::ContributorIndex))
//! - [`assets`]: Asset addressing for images and narration clips
//! - [`form`]: Contribution form model, snapshot and submission payload
//! - [`frame`]: Camera frames handed from capture to the text view

pub mod assets;
pub mod browsing;
pub mod catalog;
pub mod form;
pub mod frame;
pub mod view;

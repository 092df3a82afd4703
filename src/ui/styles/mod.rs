// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every view and the chrome.

pub mod button;
pub mod container;
pub mod text;

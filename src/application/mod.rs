// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the orchestrator and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`contribution`]: Upload-then-submit delivery of a form contribution
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer receives ports through `app::Services`
//!
//! # Example
//!
//! ```ignore
//! use beforelife::application::port::NarrationSink;
//!
//! // Infrastructure implements the port trait
//! struct CpalNarration { /* ... */ }
//! impl NarrationSink for CpalNarration { /* ... */ }
//! ```

pub mod contribution;
pub mod port;

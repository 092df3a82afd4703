// SPDX-License-Identifier: MPL-2.0
pub mod progress_ticks;

pub use progress_ticks::ProgressTicks;

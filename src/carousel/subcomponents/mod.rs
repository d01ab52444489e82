// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the carousel.
//!
//! Each sub-component has its own State, Message, Effect, and handle()
//! method. The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── position - current slide index, wrap-around navigation
//!     ├── autoplay - self-renewing one-shot advance timer
//!     └── swipe    - drag-vector gesture classification
//! ```

pub mod autoplay;
pub mod position;
pub mod swipe;

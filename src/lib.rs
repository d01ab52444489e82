// SPDX-License-Identifier: MPL-2.0
//! `image_carousel` is a headless image-carousel widget engine.
//!
//! It owns the slide-position state machine, the auto-advance timer, and
//! the swipe-gesture interpreter, and drives a host-provided rendering
//! surface through injected capabilities. The crate renders nothing itself
//! and works with any UI toolkit that can deliver pointer and click events
//! and apply the resulting strip transforms.

#![doc(html_root_url = "https://docs.rs/image_carousel/0.1.0")]

pub mod carousel;
pub mod config;
pub mod driver;
pub mod error;
pub mod fullscreen;
pub mod surface;

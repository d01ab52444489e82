// SPDX-License-Identifier: MPL-2.0
//! Per-instance carousel options, including loading and saving them as TOML.
//!
//! Every option has a default, so a host can start from `Options::default()`
//! and override fields, or deserialize a partial TOML table. Options are
//! immutable once a carousel is constructed.
//!
//! # Examples
//!
//! ```
//! use image_carousel::config::Options;
//!
//! let options = Options {
//!     interval_ms: 5000,
//!     captions: vec!["First".into(), "Second".into()],
//!     ..Options::default()
//! };
//! assert!(options.auto_play);
//! assert_eq!(options.caption_for(1), "Second");
//! assert_eq!(options.caption_for(7), "");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

mod defaults;
pub use defaults::*;

/// Easing curve applied to the strip transition.
///
/// `css_name` yields the matching CSS timing-function keyword for surfaces
/// that speak stylesheets; other surfaces are free to interpret the variants
/// however their toolkit animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// The CSS timing-function keyword for this curve.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Carousel construction options.
///
/// `interval_ms == 0` and `transition_duration <= 0` read as "unset" and
/// resolve to their defaults through the accessor methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Auto-advance interval in milliseconds.
    pub interval_ms: u64,
    /// Strip transition duration in seconds.
    pub transition_duration: f32,
    /// Strip transition easing curve.
    pub transition_easing: Easing,
    /// Whether the carousel advances on its own.
    pub auto_play: bool,
    /// Whether hovering the carousel pauses auto-advance.
    pub pause_on_hover: bool,
    /// Whether the full-screen toggle is active.
    pub fullscreen: bool,
    /// Caption text per slide position. Slides past the end of the list
    /// show an empty caption.
    pub captions: Vec<String>,
    /// Minimum horizontal displacement, in pixels, for a drag to count as
    /// a swipe.
    pub swipe_threshold: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            transition_duration: DEFAULT_TRANSITION_DURATION_SECS,
            transition_easing: Easing::default(),
            auto_play: true,
            pause_on_hover: true,
            fullscreen: true,
            captions: Vec::new(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl Options {
    /// The auto-advance interval. A zero `interval_ms` falls back to the
    /// default.
    #[must_use]
    pub fn interval(&self) -> Duration {
        if self.interval_ms == 0 {
            Duration::from_millis(DEFAULT_INTERVAL_MS)
        } else {
            Duration::from_millis(self.interval_ms)
        }
    }

    /// The strip transition duration in seconds. Zero or negative values
    /// fall back to the default.
    #[must_use]
    pub fn transition_duration_secs(&self) -> f32 {
        if self.transition_duration > 0.0 {
            self.transition_duration
        } else {
            DEFAULT_TRANSITION_DURATION_SECS
        }
    }

    /// Caption for the slide at `index`, or the empty string when the
    /// captions list is shorter.
    #[must_use]
    pub fn caption_for(&self, index: usize) -> &str {
        self.captions.get(index).map(String::as_str).unwrap_or("")
    }
}

pub fn load_from_path(path: &Path) -> Result<Options> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(options: &Options, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(options)?;
    fs::write(path, content)?;
    Ok(())
}

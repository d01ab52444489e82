// SPDX-License-Identifier: MPL-2.0
//! Render-adapter port: the host-owned surface the carousel drives.
//!
//! The carousel never renders; it issues one-way effects against this trait
//! and never queries visual state back. The only read access happens at
//! construction, when the component asks the surface for its slide count
//! and which optional elements the host markup provides.

use crate::config::Easing;

// =============================================================================
// SurfaceRoles
// =============================================================================

/// Optional surface elements, bound by structural role.
///
/// A missing role deactivates the matching feature rather than failing:
/// without an indicator list no highlight calls are made, without a caption
/// element no caption text is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceRoles {
    /// An indicator-list container exists.
    pub indicators: bool,
    /// A caption display element exists.
    pub caption: bool,
    /// A full-screen toggle control exists.
    pub fullscreen_toggle: bool,
}

impl SurfaceRoles {
    /// All optional elements bound.
    #[must_use]
    pub fn all() -> Self {
        Self {
            indicators: true,
            caption: true,
            fullscreen_toggle: true,
        }
    }

    /// No optional elements bound (bare strip with prev/next controls).
    #[must_use]
    pub fn none() -> Self {
        Self {
            indicators: false,
            caption: false,
            fullscreen_toggle: false,
        }
    }
}

impl Default for SurfaceRoles {
    fn default() -> Self {
        Self::all()
    }
}

// =============================================================================
// Surface
// =============================================================================

/// Host-side rendering surface driven by the carousel.
///
/// Implementations translate these calls into whatever the host toolkit
/// understands: a CSS transform on a DOM strip, a layout offset in a
/// retained-mode scene graph, or a plain command log in tests. The host
/// also builds its own indicator elements (one per slide) before reporting
/// the role as bound.
pub trait Surface {
    /// Number of slides in the image strip.
    fn slide_count(&self) -> usize;

    /// Which optional elements the host markup provides.
    fn roles(&self) -> SurfaceRoles;

    /// Sets the strip's animated transition. Called once, at construction.
    fn configure_transition(&mut self, duration_secs: f32, easing: Easing);

    /// Translates the image strip horizontally. `offset_percent` is
    /// `-(index * 100)`, in percent of one slide width.
    fn apply_strip_offset(&mut self, offset_percent: f32);

    /// Highlights the indicator at `index`, clearing all others.
    fn set_active_indicator(&mut self, index: usize);

    /// Eagerly loads the slide at `index` if it is still deferred.
    /// Already-loaded slides are left alone.
    fn materialize_slide(&mut self, index: usize);

    /// Replaces the caption text.
    fn set_caption(&mut self, text: &str);

    /// Shows an alert-level message to the user (full-screen entry
    /// failure).
    fn show_error_message(&mut self, message: &str);
}

// =============================================================================
// RecordingSurface
// =============================================================================

/// A call recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    ConfigureTransition { duration_secs: f32, easing: Easing },
    StripOffset(f32),
    ActiveIndicator(usize),
    MaterializeSlide(usize),
    Caption(String),
    ErrorMessage(String),
}

/// Command-recording surface for tests and headless hosts.
///
/// Records every call in order so a test can assert on the exact effect
/// sequence without a real display surface.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    slide_count: usize,
    roles: SurfaceRoles,
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// A recording surface with `slide_count` slides and all optional
    /// roles bound.
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            roles: SurfaceRoles::all(),
            commands: Vec::new(),
        }
    }

    /// A recording surface with an explicit role set.
    #[must_use]
    pub fn with_roles(slide_count: usize, roles: SurfaceRoles) -> Self {
        Self {
            slide_count,
            roles,
            commands: Vec::new(),
        }
    }

    /// The recorded calls, in order.
    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Drains and returns the recorded calls.
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn roles(&self) -> SurfaceRoles {
        self.roles
    }

    fn configure_transition(&mut self, duration_secs: f32, easing: Easing) {
        self.commands.push(SurfaceCommand::ConfigureTransition {
            duration_secs,
            easing,
        });
    }

    fn apply_strip_offset(&mut self, offset_percent: f32) {
        self.commands.push(SurfaceCommand::StripOffset(offset_percent));
    }

    fn set_active_indicator(&mut self, index: usize) {
        self.commands.push(SurfaceCommand::ActiveIndicator(index));
    }

    fn materialize_slide(&mut self, index: usize) {
        self.commands.push(SurfaceCommand::MaterializeSlide(index));
    }

    fn set_caption(&mut self, text: &str) {
        self.commands.push(SurfaceCommand::Caption(text.to_string()));
    }

    fn show_error_message(&mut self, message: &str) {
        self.commands
            .push(SurfaceCommand::ErrorMessage(message.to_string()));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Full-screen controller port.
//!
//! Full-screen state lives with the host (a browser document, a window
//! manager), so the carousel reaches it through an injected capability
//! instead of ambient global state. Entry may be rejected; the component
//! treats a rejection as non-fatal and surfaces it to the user.

use crate::error::FullscreenError;

/// Injected capability for entering and leaving full-screen mode.
pub trait FullscreenController {
    /// Requests full-screen mode for the carousel's container.
    fn enter(&mut self) -> Result<(), FullscreenError>;

    /// Leaves full-screen mode.
    fn exit(&mut self);

    /// Whether full-screen mode is currently active.
    fn is_active(&self) -> bool;
}

/// Headless controller that tracks the requested state in memory.
///
/// Useful in tests and in hosts whose full-screen handling is purely
/// cooperative.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedFullscreen {
    active: bool,
}

impl FullscreenController for SimulatedFullscreen {
    fn enter(&mut self) -> Result<(), FullscreenError> {
        self.active = true;
        Ok(())
    }

    fn exit(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Controller for hosts without a full-screen capability: every entry
/// request is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedFullscreen;

impl FullscreenController for UnsupportedFullscreen {
    fn enter(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::new(
            "NotSupportedError",
            "full-screen mode is not supported by this host",
        ))
    }

    fn exit(&mut self) {}

    fn is_active(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_controller_toggles() {
        let mut fullscreen = SimulatedFullscreen::default();
        assert!(!fullscreen.is_active());

        fullscreen.enter().expect("enter failed");
        assert!(fullscreen.is_active());

        fullscreen.exit();
        assert!(!fullscreen.is_active());
    }

    #[test]
    fn unsupported_controller_rejects_entry() {
        let mut fullscreen = UnsupportedFullscreen;
        let err = fullscreen.enter().expect_err("entry should be rejected");
        assert_eq!(err.name, "NotSupportedError");
        assert!(!fullscreen.is_active());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating state and update logic.
//!
//! The component owns the position, autoplay, and swipe sub-components plus
//! the injected surface and full-screen capabilities. Host events arrive as
//! [`Message`]s; rendering happens synchronously against the surface inside
//! `handle()`, and the returned [`Effect`] tells the scheduler (the
//! [`driver`](crate::driver), or a host event loop) what to do with the
//! auto-advance one-shot.

use crate::carousel::subcomponents::autoplay::{self, TimerToken};
use crate::carousel::subcomponents::position;
use crate::carousel::subcomponents::swipe::{self, Point};
use crate::config::Options;
use crate::fullscreen::FullscreenController;
use crate::surface::{Surface, SurfaceRoles};
use std::time::Duration;
use tracing::{debug, warn};

/// Messages emitted by host-side controls and input devices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Next control activated.
    NavigateNext,
    /// Previous control activated.
    NavigatePrevious,
    /// Thumbnail or indicator activated: jump to the slide at this index.
    SelectSlide(usize),
    /// Full-screen toggle control activated.
    ToggleFullscreen,
    /// Host-level full-screen state changed (e.g. the user pressed Esc).
    FullscreenChanged(bool),
    /// Pointer entered the carousel area.
    PointerEntered,
    /// Pointer left the carousel area.
    PointerLeft,
    /// Touch/pointer drag started.
    DragStarted(Point),
    /// Touch/pointer drag moved.
    DragMoved(Point),
    /// Touch/pointer drag ended.
    DragEnded,
    /// The armed auto-advance one-shot fired.
    AutoplayFired(TimerToken),
}

/// Scheduling side effects the host must perform after handling a message.
///
/// Rendering is not an effect: the surface is driven synchronously inside
/// `handle()`. Only the auto-advance one-shot crosses back to the
/// scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Cancel any pending one-shot, then arm one for `token` after `delay`.
    ArmTimer { token: TimerToken, delay: Duration },
    /// Cancel the pending one-shot.
    CancelTimer,
}

/// Carousel component: one instance manages one carousel's position and
/// timer state.
#[derive(Debug)]
pub struct Carousel<S, F> {
    surface: S,
    fullscreen: F,
    options: Options,
    roles: SurfaceRoles,
    position: position::State,
    autoplay: autoplay::State,
    swipe: swipe::State,
    /// Last full-screen state confirmed by a capability call or reported
    /// by the host. Toggle decisions query the controller instead.
    fullscreen_active: bool,
}

impl<S: Surface, F: FullscreenController> Carousel<S, F> {
    /// Binds a carousel to a host surface and full-screen controller.
    ///
    /// Reads the slide count and bound roles from the surface, configures
    /// the strip transition, and performs the initial render sync (eager
    /// window, indicator highlight, caption). Returns the component
    /// together with the initial scheduling effect: an arm request when
    /// autoplay is on and the strip is non-empty.
    pub fn new(mut surface: S, fullscreen: F, options: Options) -> (Self, Effect) {
        let total = surface.slide_count();
        let roles = surface.roles();
        surface.configure_transition(
            options.transition_duration_secs(),
            options.transition_easing,
        );

        let mut carousel = Self {
            surface,
            fullscreen,
            roles,
            position: position::State::new(total),
            autoplay: autoplay::State::default(),
            swipe: swipe::State::new(options.swipe_threshold),
            fullscreen_active: false,
            options,
        };
        carousel.sync_surface();

        let effect = if carousel.options.auto_play {
            carousel.autoplay_effect(autoplay::Message::Start)
        } else {
            Effect::None
        };
        (carousel, effect)
    }

    /// Handle a host message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::NavigateNext => {
                self.navigate(position::Message::Advance);
                Effect::None
            }
            Message::NavigatePrevious => {
                self.navigate(position::Message::Retreat);
                Effect::None
            }
            Message::SelectSlide(index) => {
                self.navigate(position::Message::GoTo(index));
                Effect::None
            }
            Message::ToggleFullscreen => {
                self.toggle_fullscreen();
                Effect::None
            }
            Message::FullscreenChanged(active) => {
                debug!(active, "host reported full-screen change");
                self.fullscreen_active = active;
                Effect::None
            }
            Message::PointerEntered => {
                if self.options.pause_on_hover {
                    self.autoplay_effect(autoplay::Message::Stop)
                } else {
                    Effect::None
                }
            }
            Message::PointerLeft => {
                // Arms whenever hover-pausing is bound, without consulting
                // `auto_play` (source behavior).
                if self.options.pause_on_hover {
                    self.autoplay_effect(autoplay::Message::Start)
                } else {
                    Effect::None
                }
            }
            Message::DragStarted(point) => {
                self.swipe.handle(swipe::Message::Started(point));
                // A drag always silences the timer, even when hover-pausing
                // is off.
                self.autoplay_effect(autoplay::Message::Stop)
            }
            Message::DragMoved(point) => {
                self.swipe.handle(swipe::Message::Moved(point));
                Effect::None
            }
            Message::DragEnded => {
                match self.swipe.handle(swipe::Message::Ended) {
                    swipe::Effect::Navigate(swipe::Direction::Advance) => {
                        self.navigate(position::Message::Advance);
                    }
                    swipe::Effect::Navigate(swipe::Direction::Retreat) => {
                        self.navigate(position::Message::Retreat);
                    }
                    swipe::Effect::None => {}
                }
                // Re-arms irrespective of the navigation outcome, and even
                // if the pointer is still over the strip; the next
                // pointer-enter pauses it again.
                if self.options.auto_play {
                    self.autoplay_effect(autoplay::Message::Start)
                } else {
                    Effect::None
                }
            }
            Message::AutoplayFired(token) => {
                match self.autoplay.handle(autoplay::Message::Fired(token)) {
                    autoplay::Effect::Advance { rearm } => {
                        self.navigate(position::Message::Advance);
                        Effect::ArmTimer {
                            token: rearm,
                            delay: self.options.interval(),
                        }
                    }
                    _ => Effect::None,
                }
            }
        }
    }

    /// The current slide index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.position.index()
    }

    /// The total number of slides bound at construction.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.position.total()
    }

    /// Whether the autoplay timer is running.
    #[must_use]
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Last known full-screen state.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen_active
    }

    /// The construction options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The injected surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The injected surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn navigate(&mut self, msg: position::Message) {
        if let position::Effect::PositionChanged { index, .. } = self.position.handle(msg) {
            debug!(index, "slide position changed");
            self.surface
                .apply_strip_offset(-(index as f32) * 100.0);
            self.update_indicator(index);
            self.materialize_window();
            self.update_caption(index);
        }
    }

    /// Construction-time sync. The strip itself starts untranslated.
    fn sync_surface(&mut self) {
        if self.position.is_empty() {
            debug!("carousel bound to an empty strip");
            return;
        }
        let index = self.position.index();
        self.update_indicator(index);
        self.materialize_window();
        self.update_caption(index);
    }

    fn update_indicator(&mut self, index: usize) {
        if self.roles.indicators {
            self.surface.set_active_indicator(index);
        }
    }

    fn materialize_window(&mut self) {
        for slide in self.position.prefetch_window() {
            self.surface.materialize_slide(slide);
        }
    }

    fn update_caption(&mut self, index: usize) {
        if self.roles.caption {
            self.surface.set_caption(self.options.caption_for(index));
        }
    }

    fn toggle_fullscreen(&mut self) {
        // Active only when the option is on and the host bound a toggle.
        if !self.options.fullscreen || !self.roles.fullscreen_toggle {
            return;
        }
        if self.fullscreen.is_active() {
            self.fullscreen.exit();
            self.fullscreen_active = false;
        } else {
            match self.fullscreen.enter() {
                Ok(()) => self.fullscreen_active = true,
                Err(err) => {
                    warn!(%err, "full-screen request rejected");
                    self.surface.show_error_message(&err.user_message());
                }
            }
        }
    }

    fn autoplay_effect(&mut self, msg: autoplay::Message) -> Effect {
        // An empty strip has nothing to advance to; never arm for it.
        if self.position.is_empty() && matches!(msg, autoplay::Message::Start) {
            return Effect::None;
        }
        match self.autoplay.handle(msg) {
            autoplay::Effect::Arm(token) | autoplay::Effect::Advance { rearm: token } => {
                Effect::ArmTimer {
                    token,
                    delay: self.options.interval(),
                }
            }
            autoplay::Effect::Cancel => Effect::CancelTimer,
            autoplay::Effect::None => Effect::None,
        }
    }
}

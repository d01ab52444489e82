// SPDX-License-Identifier: MPL-2.0
//! Autoplay timer sub-component: a self-renewing one-shot state machine.
//!
//! The sub-component never sleeps itself; it tells its scheduler (the
//! `driver`, or a host event loop) which one-shot to arm, and decides what
//! a firing means. Because arming always invalidates the previous token,
//! the interval runs from the last re-arm rather than being wall-clock
//! aligned, and no two timers can ever be live at once.

use tracing::debug;

/// Opaque handle to the single pending auto-advance one-shot.
///
/// A token is live only until the next `Start` or `Stop`; a fired stale
/// token is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// Autoplay timer status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Stopped,
    Running,
}

/// Autoplay sub-component state.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    status: Status,
    armed: Option<TimerToken>,
    next_token: u64,
}

/// Messages for the autoplay sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Cancel any pending one-shot and arm a new one.
    Start,
    /// Cancel any pending one-shot.
    Stop,
    /// A previously armed one-shot fired.
    Fired(TimerToken),
}

/// Effects produced by the autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Cancel any pending one-shot, then arm one for this token.
    Arm(TimerToken),
    /// Cancel the pending one-shot.
    Cancel,
    /// The live timer fired: advance one slide, then arm `rearm`.
    Advance { rearm: TimerToken },
}

impl State {
    /// Handle an autoplay message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start => {
                // Minting a new token stales the previous one, so a start
                // while already running collapses to a single live timer.
                let token = self.mint();
                self.status = Status::Running;
                self.armed = Some(token);
                Effect::Arm(token)
            }
            Message::Stop => {
                self.status = Status::Stopped;
                if self.armed.take().is_some() {
                    Effect::Cancel
                } else {
                    Effect::None
                }
            }
            Message::Fired(token) => {
                if self.armed != Some(token) {
                    debug!(?token, "ignoring stale timer fire");
                    return Effect::None;
                }
                let rearm = self.mint();
                self.armed = Some(rearm);
                Effect::Advance { rearm }
            }
        }
    }

    fn mint(&mut self) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        token
    }

    /// Whether the timer is in the Running state.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// The currently live token, if any.
    #[must_use]
    pub fn armed(&self) -> Option<TimerToken> {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed_token(effect: Effect) -> TimerToken {
        match effect {
            Effect::Arm(token) => token,
            other => panic!("expected Arm effect, got {other:?}"),
        }
    }

    #[test]
    fn start_arms_and_runs() {
        let mut state = State::default();
        assert!(!state.is_running());

        let effect = state.handle(Message::Start);
        assert!(matches!(effect, Effect::Arm(_)));
        assert!(state.is_running());
        assert!(state.armed().is_some());
    }

    #[test]
    fn stop_cancels_and_is_idempotent() {
        let mut state = State::default();
        state.handle(Message::Start);

        assert_eq!(state.handle(Message::Stop), Effect::Cancel);
        assert!(!state.is_running());
        assert!(state.armed().is_none());

        // Already stopped: nothing left to cancel.
        assert_eq!(state.handle(Message::Stop), Effect::None);
    }

    #[test]
    fn live_fire_advances_and_rearms() {
        let mut state = State::default();
        let token = armed_token(state.handle(Message::Start));

        let effect = state.handle(Message::Fired(token));
        let Effect::Advance { rearm } = effect else {
            panic!("expected Advance effect, got {effect:?}");
        };
        assert_ne!(rearm, token);
        assert_eq!(state.armed(), Some(rearm));
        assert!(state.is_running());
    }

    #[test]
    fn double_start_leaves_one_live_timer() {
        let mut state = State::default();
        let first = armed_token(state.handle(Message::Start));
        let second = armed_token(state.handle(Message::Start));
        assert_ne!(first, second);

        // The first one-shot may still fire in a real scheduler; it must
        // not produce a second advance.
        assert_eq!(state.handle(Message::Fired(first)), Effect::None);
        assert!(matches!(
            state.handle(Message::Fired(second)),
            Effect::Advance { .. }
        ));
    }

    #[test]
    fn fire_after_stop_is_ignored() {
        let mut state = State::default();
        let token = armed_token(state.handle(Message::Start));
        state.handle(Message::Stop);

        assert_eq!(state.handle(Message::Fired(token)), Effect::None);
        assert!(!state.is_running());
    }

    #[test]
    fn consumed_token_cannot_fire_twice() {
        let mut state = State::default();
        let token = armed_token(state.handle(Message::Start));

        assert!(matches!(
            state.handle(Message::Fired(token)),
            Effect::Advance { .. }
        ));
        assert_eq!(state.handle(Message::Fired(token)), Effect::None);
    }

    #[test]
    fn fire_on_fresh_state_is_ignored() {
        let mut state = State::default();
        let mut other = State::default();
        let foreign = armed_token(other.handle(Message::Start));

        assert_eq!(state.handle(Message::Fired(foreign)), Effect::None);
    }
}

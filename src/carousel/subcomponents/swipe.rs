// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture sub-component: classifies a drag vector as slide navigation.

/// A 2-D point in surface coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// In-flight gesture session, created on drag-start and consumed on
/// drag-end. Only the latest displacement matters; intermediate moves
/// coalesce into it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Session {
    start: Point,
    dx: f32,
    dy: f32,
}

/// Swipe sub-component state.
#[derive(Debug, Clone, Copy)]
pub struct State {
    session: Option<Session>,
    threshold: f32,
}

/// Messages for the swipe sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Drag started at this point.
    Started(Point),
    /// Drag moved to this point.
    Moved(Point),
    /// Drag ended; classify the recorded displacement.
    Ended,
}

/// Direction of swipe navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Leftward swipe: move to the next slide.
    Advance,
    /// Rightward swipe: move to the previous slide.
    Retreat,
}

/// Effects produced by gesture classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No navigation (sub-threshold, vertical-dominant, or no session).
    None,
    /// The gesture was a swipe; navigate.
    Navigate(Direction),
}

impl State {
    /// Creates a swipe state with the given classification threshold in
    /// pixels.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            session: None,
            threshold,
        }
    }

    /// Handle a gesture message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Started(start) => {
                // A new drag discards any session left over from an
                // interrupted gesture.
                self.session = Some(Session {
                    start,
                    dx: 0.0,
                    dy: 0.0,
                });
                Effect::None
            }
            Message::Moved(point) => {
                if let Some(session) = &mut self.session {
                    session.dx = point.x - session.start.x;
                    session.dy = point.y - session.start.y;
                }
                Effect::None
            }
            Message::Ended => {
                let Some(session) = self.session.take() else {
                    return Effect::None;
                };
                self.classify(&session)
            }
        }
    }

    fn classify(&self, session: &Session) -> Effect {
        // Vertical-dominant drags (ties included) read as scroll intent.
        if session.dx.abs() <= session.dy.abs() {
            return Effect::None;
        }
        if session.dx > self.threshold {
            Effect::Navigate(Direction::Retreat)
        } else if session.dx < -self.threshold {
            Effect::Navigate(Direction::Advance)
        } else {
            Effect::None
        }
    }

    /// Whether a drag session is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }
}

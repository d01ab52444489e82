// SPDX-License-Identifier: MPL-2.0
//! Slide position sub-component with wrap-around navigation.

/// Slide position state: the current index within a fixed slide count.
///
/// Navigation wraps around at both ends. With zero slides every operation
/// is a defined no-op; the state never panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    index: usize,
    total: usize,
}

/// Messages for the position sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Move to the next slide, wrapping past the last back to the first.
    Advance,
    /// Move to the previous slide, wrapping past the first back to the last.
    Retreat,
    /// Jump to the slide at this index, reduced modulo the slide count.
    GoTo(usize),
}

/// Effects produced by position changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect (empty strip).
    None,
    /// The position changed; the surface must be re-synced.
    ///
    /// Emitted once per mutation, even when the index lands on its previous
    /// value (a single-slide strip, or a jump to the current slide).
    PositionChanged { index: usize, total: usize },
}

impl State {
    /// Creates a position state over `total` slides, starting at index 0.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    /// Handle a position message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        if self.total == 0 {
            return Effect::None;
        }
        match msg {
            Message::Advance => {
                self.index = if self.index == self.total - 1 {
                    0
                } else {
                    self.index + 1
                };
            }
            Message::Retreat => {
                self.index = if self.index == 0 {
                    self.total - 1
                } else {
                    self.index - 1
                };
            }
            Message::GoTo(i) => {
                self.index = i % self.total;
            }
        }
        Effect::PositionChanged {
            index: self.index,
            total: self.total,
        }
    }

    /// The current slide index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The total number of slides.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether the strip holds no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Indices to eagerly materialize around the current slide: current,
    /// previous, and next with wrap-around, deduplicated for short strips.
    #[must_use]
    pub fn prefetch_window(&self) -> Vec<usize> {
        if self.total == 0 {
            return Vec::new();
        }
        let prev = if self.index == 0 {
            self.total - 1
        } else {
            self.index - 1
        };
        let next = if self.index == self.total - 1 {
            0
        } else {
            self.index + 1
        };

        let mut window = Vec::with_capacity(3);
        for idx in [self.index, prev, next] {
            if !window.contains(&idx) {
                window.push(idx);
            }
        }
        window
    }
}

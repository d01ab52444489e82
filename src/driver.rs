// SPDX-License-Identifier: MPL-2.0
//! Tokio event loop driving a carousel component.
//!
//! Host events arrive on an mpsc channel; the pending auto-advance one-shot
//! lives in a single slot that every arm request replaces, which is the
//! cancel-then-arm contract in scheduler form. Closing the channel stops
//! the loop and hands the component back for inspection.

use crate::carousel::subcomponents::autoplay::TimerToken;
use crate::carousel::{Carousel, Effect, Message};
use crate::fullscreen::FullscreenController;
use crate::surface::Surface;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Capacity of the host event channel.
const EVENT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy)]
struct ArmedTimer {
    token: TimerToken,
    deadline: Instant,
}

/// Runs the event loop until the channel closes, then returns the
/// component.
pub async fn run<S, F>(
    mut carousel: Carousel<S, F>,
    initial: Effect,
    mut events: mpsc::Receiver<Message>,
) -> Carousel<S, F>
where
    S: Surface,
    F: FullscreenController,
{
    let mut armed: Option<ArmedTimer> = None;
    apply_effect(initial, &mut armed);

    loop {
        let deadline = armed.map(|timer| timer.deadline);
        tokio::select! {
            event = events.recv() => match event {
                Some(message) => {
                    let effect = carousel.handle(message);
                    apply_effect(effect, &mut armed);
                }
                None => break,
            },
            () = wait_for(deadline) => {
                if let Some(timer) = armed.take() {
                    let effect = carousel.handle(Message::AutoplayFired(timer.token));
                    apply_effect(effect, &mut armed);
                }
            }
        }
    }

    carousel
}

/// Spawns [`run`] on the current tokio runtime. Returns the host event
/// sender and a handle resolving to the component once the channel closes.
pub fn spawn<S, F>(
    carousel: Carousel<S, F>,
    initial: Effect,
) -> (mpsc::Sender<Message>, JoinHandle<Carousel<S, F>>)
where
    S: Surface + Send + 'static,
    F: FullscreenController + Send + 'static,
{
    let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let handle = tokio::spawn(run(carousel, initial, rx));
    (tx, handle)
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

fn apply_effect(effect: Effect, armed: &mut Option<ArmedTimer>) {
    match effect {
        Effect::None => {}
        Effect::ArmTimer { token, delay } => {
            // Replacing the slot cancels any previous one-shot.
            *armed = Some(ArmedTimer {
                token,
                deadline: Instant::now() + delay,
            });
        }
        Effect::CancelTimer => {
            *armed = None;
        }
    }
}

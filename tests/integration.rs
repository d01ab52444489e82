// SPDX-License-Identifier: MPL-2.0
use image_carousel::carousel::{Carousel, Effect, Message};
use image_carousel::carousel::subcomponents::swipe::Point;
use image_carousel::config::{self, Options};
use image_carousel::driver;
use image_carousel::fullscreen::SimulatedFullscreen;
use image_carousel::surface::{RecordingSurface, SurfaceCommand};
use std::time::Duration;
use tempfile::tempdir;

fn armed_token(effect: Effect) -> image_carousel::carousel::subcomponents::autoplay::TimerToken {
    match effect {
        Effect::ArmTimer { token, .. } => token,
        other => panic!("expected ArmTimer effect, got {other:?}"),
    }
}

#[test]
fn full_user_session_walkthrough() {
    let options = Options {
        interval_ms: 4000,
        captions: vec![
            "Sunrise".to_string(),
            "Harbor".to_string(),
            "Forest".to_string(),
            "Night sky".to_string(),
        ],
        ..Options::default()
    };
    let (mut carousel, initial) = Carousel::new(
        RecordingSurface::new(4),
        SimulatedFullscreen::default(),
        options,
    );

    // Autoplay armed at construction, initial sync on the surface.
    let token = armed_token(initial);
    assert!(matches!(
        initial,
        Effect::ArmTimer { delay, .. } if delay == Duration::from_millis(4000)
    ));
    assert!(carousel
        .surface()
        .commands()
        .contains(&SurfaceCommand::Caption("Sunrise".to_string())));
    carousel.surface_mut().take_commands();

    // The one-shot fires: slide 1, renewed one-shot.
    let effect = carousel.handle(Message::AutoplayFired(token));
    assert_eq!(carousel.index(), 1);
    let token = armed_token(effect);

    // The user hovers; autoplay pauses and the pending fire goes stale.
    assert_eq!(carousel.handle(Message::PointerEntered), Effect::CancelTimer);
    assert_eq!(carousel.handle(Message::AutoplayFired(token)), Effect::None);
    assert_eq!(carousel.index(), 1);

    // A thumbnail click jumps directly to the last slide.
    carousel.handle(Message::SelectSlide(3));
    assert_eq!(carousel.index(), 3);
    assert!(carousel
        .surface()
        .commands()
        .contains(&SurfaceCommand::Caption("Night sky".to_string())));

    // A leftward swipe wraps back to the first slide and re-arms autoplay
    // even though the pointer never left the strip.
    carousel.handle(Message::DragStarted(Point::new(500.0, 300.0)));
    carousel.handle(Message::DragMoved(Point::new(420.0, 310.0)));
    let effect = carousel.handle(Message::DragEnded);
    assert_eq!(carousel.index(), 0);
    assert!(matches!(effect, Effect::ArmTimer { .. }));
    assert!(carousel.is_autoplay_running());

    // Full-screen round trip.
    carousel.handle(Message::ToggleFullscreen);
    assert!(carousel.is_fullscreen());
    carousel.handle(Message::ToggleFullscreen);
    assert!(!carousel.is_fullscreen());
}

#[test]
fn advancing_through_every_slide_returns_to_the_start() {
    let (mut carousel, _) = Carousel::new(
        RecordingSurface::new(6),
        SimulatedFullscreen::default(),
        Options::default(),
    );
    carousel.handle(Message::SelectSlide(2));

    for _ in 0..6 {
        carousel.handle(Message::NavigateNext);
    }
    assert_eq!(carousel.index(), 2);

    for _ in 0..6 {
        carousel.handle(Message::NavigatePrevious);
    }
    assert_eq!(carousel.index(), 2);
}

#[test]
fn eager_load_window_follows_navigation() {
    let (mut carousel, _) = Carousel::new(
        RecordingSurface::new(5),
        SimulatedFullscreen::default(),
        Options::default(),
    );
    carousel.surface_mut().take_commands();

    carousel.handle(Message::SelectSlide(4));
    let materialized: Vec<usize> = carousel
        .surface()
        .commands()
        .iter()
        .filter_map(|c| match c {
            SurfaceCommand::MaterializeSlide(i) => Some(*i),
            _ => None,
        })
        .collect();
    assert_eq!(materialized, vec![4, 3, 0]); // current, previous, wrapped next
}

#[test]
fn options_round_trip_through_a_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("carousel.toml");

    let options = Options {
        interval_ms: 2500,
        auto_play: false,
        captions: vec!["a".to_string()],
        swipe_threshold: 30.0,
        ..Options::default()
    };
    config::save_to_path(&options, &path).expect("failed to save options");
    let loaded = config::load_from_path(&path).expect("failed to load options");
    assert_eq!(loaded, options);

    dir.close().expect("failed to close temporary directory");
}

#[tokio::test]
async fn driver_runs_a_scripted_session() {
    let options = Options {
        auto_play: false,
        captions: vec!["first".to_string(), "second".to_string()],
        ..Options::default()
    };
    let (carousel, initial) = Carousel::new(
        RecordingSurface::new(2),
        SimulatedFullscreen::default(),
        options,
    );
    let (tx, handle) = driver::spawn(carousel, initial);

    tx.send(Message::NavigateNext).await.expect("send failed");
    tx.send(Message::DragStarted(Point::new(100.0, 100.0)))
        .await
        .expect("send failed");
    tx.send(Message::DragMoved(Point::new(30.0, 100.0)))
        .await
        .expect("send failed");
    tx.send(Message::DragEnded).await.expect("send failed");
    drop(tx);

    let carousel = tokio::time::timeout(Duration::from_millis(2000), handle)
        .await
        .expect("driver did not stop")
        .expect("driver task panicked");

    // NavigateNext moved to slide 1; the swipe advanced and wrapped back.
    assert_eq!(carousel.index(), 0);
    assert!(carousel
        .surface()
        .commands()
        .contains(&SurfaceCommand::Caption("second".to_string())));
    assert!(!carousel.is_autoplay_running());
}

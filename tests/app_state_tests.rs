// Integration tests for screen-local state, deferred tasks and their owners
mod common;

use crossterm::event::KeyCode;
use flimmer_challenge::models::{FlowEvent, FlowState, ModalState, Privacy};
use flimmer_challenge::ui::key_handler::handle_key_event;
use flimmer_challenge::ui::AppState;
use flimmer_challenge::util::{channel, Scheduler, TimerFired, TimerKind};
use tokio::time::{Duration, Instant};

fn to_confirmation(app: &mut AppState, scheduler: &mut Scheduler) {
    app.dispatch(FlowEvent::AcceptChallenge, scheduler).unwrap();
    app.dispatch(FlowEvent::CaptureComplete, scheduler).unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_repeated_shutter_presses_capture_once() {
    let timing = common::test_timing();
    let (mut scheduler, mut rx) = channel();
    let mut app = AppState::new(timing);
    app.dispatch(FlowEvent::AcceptChallenge, &mut scheduler).unwrap();

    let start = Instant::now();
    assert!(app.press_shutter(&mut scheduler));
    assert!(!app.press_shutter(&mut scheduler));
    handle_key_event(common::key(KeyCode::Char(' ')), &mut app, &mut scheduler);
    handle_key_event(common::key(KeyCode::Enter), &mut app, &mut scheduler);
    assert!(app.camera.is_capturing());

    let fired = rx.recv().await.expect("capture timer should fire");
    assert_eq!(fired.kind, TimerKind::CaptureFlash);
    assert!(start.elapsed() >= timing.capture_delay());

    let t = app
        .handle_timer(fired, &mut scheduler)
        .expect("capture should complete");
    assert_eq!(t.event, FlowEvent::CaptureComplete);
    assert_eq!(app.flow.current_state(), FlowState::Confirmation);

    // A duplicate delivery finds no owner
    assert!(app.handle_timer(fired, &mut scheduler).is_none());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());
    let captures = app
        .flow
        .history()
        .filter(|t| t.event == FlowEvent::CaptureComplete)
        .count();
    assert_eq!(captures, 1);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_camera_cancels_pending_capture() {
    let (mut scheduler, mut rx) = channel();
    let mut app = AppState::new(common::test_timing());
    app.dispatch(FlowEvent::AcceptChallenge, &mut scheduler).unwrap();

    assert!(app.press_shutter(&mut scheduler));
    let pending = app
        .camera
        .pending_capture()
        .expect("capture should be pending");

    handle_key_event(common::key(KeyCode::Esc), &mut app, &mut scheduler);
    assert_eq!(app.flow.current_state(), FlowState::Hook);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err(), "cancelled capture must not fire");

    // Even back on a fresh camera screen, the old task is not honoured
    app.dispatch(FlowEvent::AcceptChallenge, &mut scheduler).unwrap();
    let stale = TimerFired {
        id: pending,
        kind: TimerKind::CaptureFlash,
    };
    assert!(app.handle_timer(stale, &mut scheduler).is_none());
    assert_eq!(app.flow.current_state(), FlowState::Camera);
    assert!(!app.camera.is_capturing());
}

#[tokio::test(start_paused = true)]
async fn test_upload_overlay_completes_after_delay() {
    let timing = common::test_timing();
    let (mut scheduler, mut rx) = channel();
    let mut app = AppState::new(timing);
    to_confirmation(&mut app, &mut scheduler);

    let start = Instant::now();
    handle_key_event(common::key(KeyCode::Enter), &mut app, &mut scheduler);
    assert_eq!(app.flow.modal_state(), ModalState::Uploading);
    assert_eq!(app.flow.current_state(), FlowState::Confirmation);
    assert!(app.upload.is_some());
    assert!(app.success.is_none());

    // No keys while uploading
    assert_eq!(
        handle_key_event(common::key(KeyCode::Esc), &mut app, &mut scheduler),
        None
    );

    let fired = rx.recv().await.expect("upload timer should fire");
    assert_eq!(fired.kind, TimerKind::UploadProgress);
    assert!(start.elapsed() >= timing.upload_delay());

    app.handle_timer(fired, &mut scheduler).unwrap();
    assert_eq!(app.flow.modal_state(), ModalState::Success);
    assert!(app.upload.is_none());
    assert!(app.success.is_some());

    handle_key_event(common::key(KeyCode::Enter), &mut app, &mut scheduler);
    assert_eq!(app.flow.current_state(), FlowState::Hook);
    assert_eq!(app.flow.modal_state(), ModalState::Hidden);
    assert!(app.success.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_retry_from_success_opens_fresh_camera() {
    let (mut scheduler, mut rx) = channel();
    let mut app = AppState::new(common::test_timing());
    to_confirmation(&mut app, &mut scheduler);
    app.dispatch(FlowEvent::SharePhoto, &mut scheduler).unwrap();
    let fired = rx.recv().await.unwrap();
    app.handle_timer(fired, &mut scheduler).unwrap();

    handle_key_event(common::key(KeyCode::Right), &mut app, &mut scheduler);
    handle_key_event(common::key(KeyCode::Enter), &mut app, &mut scheduler);

    assert_eq!(app.flow.current_state(), FlowState::Camera);
    assert_eq!(app.flow.modal_state(), ModalState::Hidden);
    assert!(!app.camera.is_capturing());
    assert!(app.upload.is_none() && app.success.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_overlay_reopens_uploading_every_time() {
    let (mut scheduler, mut rx) = channel();
    let mut app = AppState::new(common::test_timing());
    to_confirmation(&mut app, &mut scheduler);

    for _ in 0..3 {
        app.dispatch(FlowEvent::SharePhoto, &mut scheduler).unwrap();
        assert_eq!(app.flow.modal_state(), ModalState::Uploading);
        assert!(app.success.is_none());

        let fired = rx.recv().await.unwrap();
        app.handle_timer(fired, &mut scheduler).unwrap();
        app.dispatch(FlowEvent::ChooseRetry, &mut scheduler).unwrap();
        app.dispatch(FlowEvent::CaptureComplete, &mut scheduler).unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn test_privacy_choice_does_not_change_the_flow() {
    let (mut scheduler, _rx) = channel();
    let mut app = AppState::new(common::test_timing());
    to_confirmation(&mut app, &mut scheduler);

    handle_key_event(common::key(KeyCode::Right), &mut app, &mut scheduler);
    assert_eq!(app.confirmation.privacy, Privacy::Private);
    handle_key_event(common::key(KeyCode::Tab), &mut app, &mut scheduler);
    assert_eq!(app.confirmation.privacy, Privacy::Everyone);
    handle_key_event(common::key(KeyCode::Right), &mut app, &mut scheduler);

    let t = app.dispatch(FlowEvent::SharePhoto, &mut scheduler).unwrap();
    assert_eq!(t.to, FlowState::Confirmation);
    assert_eq!(t.to_modal, ModalState::Uploading);
}

#[test]
fn test_screens_get_fresh_state_when_reopened() {
    // Nothing here schedules a deferred task, so no runtime is needed
    let (mut scheduler, _rx) = channel();
    let mut app = AppState::new(common::test_timing());
    to_confirmation(&mut app, &mut scheduler);
    app.confirmation.select_privacy(Privacy::Private);

    app.dispatch(FlowEvent::GoBack, &mut scheduler).unwrap();
    app.dispatch(FlowEvent::CaptureComplete, &mut scheduler).unwrap();
    assert_eq!(app.confirmation.privacy, Privacy::Everyone);
}

#[test]
fn test_shutter_only_works_on_camera() {
    let (mut scheduler, _rx) = channel();
    let mut app = AppState::new(common::test_timing());
    assert!(!app.press_shutter(&mut scheduler));
    assert!(!app.camera.is_capturing());
}

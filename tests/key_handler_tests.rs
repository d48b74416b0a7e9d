// Integration tests for key handling
mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flimmer_challenge::models::{FlowState, ModalState};
use flimmer_challenge::ui::key_handler::handle_key_event;
use flimmer_challenge::ui::{AppState, UiMode};
use flimmer_challenge::util::channel;

#[test]
fn test_hook_enter_accepts_challenge() {
    let (mut scheduler, _rx) = channel();
    let mut app = AppState::new(common::test_timing());

    let handled = handle_key_event(common::key(KeyCode::Enter), &mut app, &mut scheduler);
    assert_eq!(handled, Some(true));
    assert_eq!(app.flow.current_state(), FlowState::Camera);
}

#[test]
fn test_hook_decline_stays_on_hook() {
    let (mut scheduler, _rx) = channel();
    let mut app = AppState::new(common::test_timing());

    handle_key_event(common::key(KeyCode::Char('d')), &mut app, &mut scheduler);
    handle_key_event(common::key(KeyCode::Char('n')), &mut app, &mut scheduler);
    assert_eq!(app.flow.current_state(), FlowState::Hook);
    assert_eq!(app.flow.modal_state(), ModalState::Hidden);
    assert_eq!(app.flow.declines(), 2);
}

#[test]
fn test_hook_scroll_keys_are_handled() {
    let (mut scheduler, _rx) = channel();
    let mut app = AppState::new(common::test_timing());

    assert_eq!(
        handle_key_event(common::key(KeyCode::Down), &mut app, &mut scheduler),
        Some(true)
    );
    assert_eq!(
        handle_key_event(common::key(KeyCode::Up), &mut app, &mut scheduler),
        Some(true)
    );
    assert_eq!(
        handle_key_event(common::key(KeyCode::F(5)), &mut app, &mut scheduler),
        None
    );
    assert_eq!(app.flow.current_state(), FlowState::Hook);
}

#[test]
fn test_back_keys_walk_the_flow_backwards() {
    let (mut scheduler, _rx) = channel();
    let mut app = AppState::new(common::test_timing());
    handle_key_event(common::key(KeyCode::Enter), &mut app, &mut scheduler);

    handle_key_event(common::key(KeyCode::Backspace), &mut app, &mut scheduler);
    assert_eq!(app.flow.current_state(), FlowState::Hook);

    // Esc on the hook screen means nothing
    assert_eq!(
        handle_key_event(common::key(KeyCode::Esc), &mut app, &mut scheduler),
        None
    );
}

#[test]
fn test_quit_asks_for_confirmation() {
    let (mut scheduler, _rx) = channel();
    let mut app = AppState::new(common::test_timing());

    handle_key_event(common::key(KeyCode::Char('q')), &mut app, &mut scheduler);
    assert_eq!(app.mode, UiMode::ConfirmExit(true));

    // Keys go to the popup, not the screen below
    handle_key_event(common::key(KeyCode::Char('d')), &mut app, &mut scheduler);
    assert_eq!(app.flow.declines(), 0);

    handle_key_event(common::key(KeyCode::Right), &mut app, &mut scheduler);
    assert_eq!(app.mode, UiMode::ConfirmExit(false));
    assert_eq!(
        handle_key_event(common::key(KeyCode::Enter), &mut app, &mut scheduler),
        Some(true)
    );
    assert_eq!(app.mode, UiMode::Normal);
    assert_eq!(app.flow.current_state(), FlowState::Hook);

    handle_key_event(common::key(KeyCode::Char('q')), &mut app, &mut scheduler);
    assert_eq!(
        handle_key_event(common::key(KeyCode::Enter), &mut app, &mut scheduler),
        Some(false)
    );
}

#[test]
fn test_esc_closes_quit_popup() {
    let (mut scheduler, _rx) = channel();
    let mut app = AppState::new(common::test_timing());

    handle_key_event(common::key(KeyCode::Char('q')), &mut app, &mut scheduler);
    handle_key_event(common::key(KeyCode::Esc), &mut app, &mut scheduler);
    assert_eq!(app.mode, UiMode::Normal);
}

#[test]
fn test_ctrl_c_quits_immediately() {
    let (mut scheduler, _rx) = channel();
    let mut app = AppState::new(common::test_timing());

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(handle_key_event(ctrl_c, &mut app, &mut scheduler), Some(false));
}

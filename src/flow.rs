//! Screen-transition controller.
//!
//! Holds the active [`FlowState`] and the overlay [`ModalState`] and is the
//! only place either of them changes. Screens never mutate them; they send a
//! [`FlowEvent`] and the owner applies the returned [`FlowEffect`].

use std::collections::VecDeque;
use std::fmt;

use crate::models::{FlowEffect, FlowEvent, FlowState, ModalState, Transition};

/// Number of transitions kept for inspection.
pub const HISTORY_LIMIT: usize = 32;

#[derive(Debug)]
pub struct FlowController {
    state: FlowState,
    modal: ModalState,
    history: VecDeque<Transition>,
    declines: u64,
}

impl FlowController {
    pub fn new() -> Self {
        Self {
            state: FlowState::Hook,
            modal: ModalState::Hidden,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
            declines: 0,
        }
    }

    pub fn current_state(&self) -> FlowState {
        self.state
    }

    pub fn modal_state(&self) -> ModalState {
        self.modal
    }

    pub fn can_dispatch(&self, event: FlowEvent) -> bool {
        self.next(event).is_some()
    }

    /// Looks up the row for `event` without applying it.
    ///
    /// While the overlay is visible it covers the screen, so only overlay
    /// events have a row.
    pub fn next(&self, event: FlowEvent) -> Option<Transition> {
        use FlowEvent::*;
        use FlowState::*;

        let (to, to_modal, effect) = match (self.modal, self.state, event) {
            (ModalState::Hidden, Hook, AcceptChallenge) => {
                (Camera, ModalState::Hidden, FlowEffect::None)
            }
            (ModalState::Hidden, Hook, DeclineChallenge) => {
                (Hook, ModalState::Hidden, FlowEffect::RecordDecline)
            }
            (ModalState::Hidden, Camera, GoBack) => (Hook, ModalState::Hidden, FlowEffect::None),
            (ModalState::Hidden, Camera, CaptureComplete) => {
                (Confirmation, ModalState::Hidden, FlowEffect::None)
            }
            (ModalState::Hidden, Confirmation, GoBack) => {
                (Camera, ModalState::Hidden, FlowEffect::None)
            }
            (ModalState::Hidden, Confirmation, SharePhoto) => {
                (Confirmation, ModalState::Uploading, FlowEffect::OpenOverlay)
            }
            (ModalState::Uploading, screen, UploadComplete) => {
                (screen, ModalState::Success, FlowEffect::None)
            }
            (ModalState::Success, _, ChooseExit) => {
                (Hook, ModalState::Hidden, FlowEffect::CloseOverlay)
            }
            (ModalState::Success, _, ChooseRetry) => {
                (Camera, ModalState::Hidden, FlowEffect::CloseOverlay)
            }
            _ => return None,
        };

        Some(Transition {
            from: self.state,
            from_modal: self.modal,
            event,
            to,
            to_modal,
            effect,
        })
    }

    /// Applies `event`. Events without a row are ignored and leave the
    /// controller untouched.
    pub fn dispatch(&mut self, event: FlowEvent) -> Option<Transition> {
        let Some(transition) = self.next(event) else {
            log::debug!(
                "Ignoring '{}' on {} (overlay {})",
                event,
                self.state,
                self.modal
            );
            return None;
        };

        self.state = transition.to;
        self.modal = transition.to_modal;

        if transition.effect == FlowEffect::RecordDecline {
            self.declines += 1;
            log::info!("User declined challenge ({} so far)", self.declines);
        } else {
            log::info!(
                "{} -> {} on '{}' (overlay {} -> {})",
                transition.from,
                transition.to,
                event,
                transition.from_modal,
                transition.to_modal
            );
        }

        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(transition);

        Some(transition)
    }

    /// Back to the start screen with the overlay hidden.
    pub fn reset(&mut self) {
        self.state = FlowState::Hook;
        self.modal = ModalState::Hidden;
        self.history.clear();
    }

    /// Applied transitions, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Transition> {
        self.history.iter()
    }

    pub fn declines(&self) -> u64 {
        self.declines
    }
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlowController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (overlay {})", self.state, self.modal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_confirmation() -> FlowController {
        let mut flow = FlowController::new();
        flow.dispatch(FlowEvent::AcceptChallenge);
        flow.dispatch(FlowEvent::CaptureComplete);
        flow
    }

    #[test]
    fn every_event_on_every_state_is_defined_or_ignored() {
        let mut flow = FlowController::new();
        for _ in 0..3 {
            for event in FlowEvent::ALL {
                let before = (flow.current_state(), flow.modal_state());
                match flow.next(event) {
                    Some(t) => {
                        assert_eq!((t.from, t.from_modal), before);
                    }
                    None => {
                        assert!(flow.dispatch(event).is_none());
                        assert_eq!((flow.current_state(), flow.modal_state()), before);
                    }
                }
            }
            flow.dispatch(FlowEvent::AcceptChallenge);
        }
    }

    #[test]
    fn screen_events_are_ignored_under_the_overlay() {
        let mut flow = at_confirmation();
        flow.dispatch(FlowEvent::SharePhoto);
        assert_eq!(flow.modal_state(), ModalState::Uploading);

        assert!(flow.dispatch(FlowEvent::GoBack).is_none());
        assert!(flow.dispatch(FlowEvent::SharePhoto).is_none());
        assert!(flow.dispatch(FlowEvent::ChooseExit).is_none());
        assert_eq!(flow.current_state(), FlowState::Confirmation);
        assert_eq!(flow.modal_state(), ModalState::Uploading);
    }

    #[test]
    fn upload_complete_keeps_the_screen() {
        let mut flow = at_confirmation();
        flow.dispatch(FlowEvent::SharePhoto);
        let t = flow
            .dispatch(FlowEvent::UploadComplete)
            .expect("uploading -> success should transition");
        assert_eq!(t.to, FlowState::Confirmation);
        assert!(!t.changes_screen());
        assert!(t.changes_modal());
    }

    #[test]
    fn history_is_bounded() {
        let mut flow = FlowController::new();
        for _ in 0..HISTORY_LIMIT {
            flow.dispatch(FlowEvent::AcceptChallenge);
            flow.dispatch(FlowEvent::GoBack);
        }
        assert_eq!(flow.history().count(), HISTORY_LIMIT);
        let last = flow.history().last().expect("history should not be empty");
        assert_eq!(last.event, FlowEvent::GoBack);
    }

    #[test]
    fn reset_returns_to_hook_and_keeps_decline_count() {
        let mut flow = FlowController::new();
        flow.dispatch(FlowEvent::DeclineChallenge);
        flow.dispatch(FlowEvent::AcceptChallenge);
        flow.reset();
        assert_eq!(flow.current_state(), FlowState::Hook);
        assert_eq!(flow.modal_state(), ModalState::Hidden);
        assert_eq!(flow.history().count(), 0);
        assert_eq!(flow.declines(), 1);
        assert_eq!(flow.to_string(), "Hook (overlay Hidden)");
    }
}

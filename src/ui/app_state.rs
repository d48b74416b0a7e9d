use crate::flow::FlowController;
use crate::models::{FlowEffect, FlowEvent, FlowState, ModalState, Transition};
use crate::settings::TimingSettings;
use crate::util::{Scheduler, TimerFired, TimerKind};

use super::camera_screen::CameraState;
use super::confirmation_screen::ConfirmationState;
use super::hook_screen::HookState;
use super::success_overlay::SuccessState;
use super::upload_overlay::UploadState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    ConfirmExit(bool), // (selected_button: true=Yes, false=No)
}

/// Everything the event loop owns: the flow controller plus the local
/// state of each screen and overlay.
///
/// Screen state lives exactly as long as its screen is shown. Leaving a
/// screen drops its state, and with it any deferred task it was waiting on.
pub struct AppState {
    pub flow: FlowController,
    pub mode: UiMode,
    pub timing: TimingSettings,
    pub hook: HookState,
    pub camera: CameraState,
    pub confirmation: ConfirmationState,
    pub upload: Option<UploadState>,
    pub success: Option<SuccessState>,
}

impl AppState {
    pub fn new(timing: TimingSettings) -> Self {
        Self {
            flow: FlowController::new(),
            mode: UiMode::Normal,
            hook: HookState::new(timing.entrance()),
            camera: CameraState::new(&timing),
            confirmation: ConfirmationState::new(&timing),
            upload: None,
            success: None,
            timing,
        }
    }

    /// Sends `event` to the controller and carries out what the resulting
    /// transition asks for. Ignored events change nothing.
    pub fn dispatch(&mut self, event: FlowEvent, scheduler: &mut Scheduler) -> Option<Transition> {
        let transition = self.flow.dispatch(event)?;

        if transition.effect == FlowEffect::OpenOverlay {
            log::info!("Sharing photo, visible to {}", self.confirmation.privacy);
        }

        if transition.changes_screen() {
            self.remount(transition.from);
            self.remount(transition.to);
        }

        if transition.changes_modal() {
            self.apply_overlay(transition.to_modal, scheduler);
        }

        Some(transition)
    }

    /// Routes a fired deferred task to its owner. Messages from tasks whose
    /// owner is gone are dropped.
    pub fn handle_timer(
        &mut self,
        fired: TimerFired,
        scheduler: &mut Scheduler,
    ) -> Option<Transition> {
        match fired.kind {
            TimerKind::CaptureFlash => {
                if self.flow.current_state() == FlowState::Camera && self.camera.on_timer(&fired) {
                    self.dispatch(FlowEvent::CaptureComplete, scheduler)
                } else {
                    log::debug!("Capture timer {:?} outlived its screen", fired.id);
                    None
                }
            }
            TimerKind::UploadProgress => {
                let owned = self
                    .upload
                    .as_mut()
                    .is_some_and(|upload| upload.on_timer(&fired));
                if owned {
                    self.dispatch(FlowEvent::UploadComplete, scheduler)
                } else {
                    log::debug!("Upload timer {:?} outlived its overlay", fired.id);
                    None
                }
            }
        }
    }

    /// Shutter press on the camera screen. Returns true if a capture started.
    pub fn press_shutter(&mut self, scheduler: &mut Scheduler) -> bool {
        if self.flow.current_state() != FlowState::Camera || self.flow.modal_state().is_visible() {
            return false;
        }
        self.camera.press_shutter(scheduler, &self.timing)
    }

    /// Gives `screen` fresh local state, as if it had just been opened.
    fn remount(&mut self, screen: FlowState) {
        match screen {
            FlowState::Hook => self.hook = HookState::new(self.timing.entrance()),
            FlowState::Camera => self.camera = CameraState::new(&self.timing),
            FlowState::Confirmation => self.confirmation = ConfirmationState::new(&self.timing),
        }
    }

    fn apply_overlay(&mut self, modal: ModalState, scheduler: &mut Scheduler) {
        match modal {
            ModalState::Hidden => {
                self.upload = None;
                self.success = None;
            }
            ModalState::Uploading => {
                self.success = None;
                self.upload = Some(UploadState::start(scheduler, &self.timing));
            }
            ModalState::Success => {
                self.upload = None;
                self.success = Some(SuccessState::new(&self.timing));
            }
        }
    }
}

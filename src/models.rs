use std::fmt::{self, Display};

/// Top-level screen currently shown. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlowState {
    #[default]
    Hook,
    Camera,
    Confirmation,
}

impl Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FlowState::Hook => "Hook",
                FlowState::Camera => "Camera",
                FlowState::Confirmation => "Confirmation",
            }
        )
    }
}

/// Status overlay layered above the active screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModalState {
    #[default]
    Hidden,
    Uploading,
    Success,
}

impl ModalState {
    pub fn is_visible(self) -> bool {
        !matches!(self, ModalState::Hidden)
    }
}

impl Display for ModalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ModalState::Hidden => "Hidden",
                ModalState::Uploading => "Uploading",
                ModalState::Success => "Success",
            }
        )
    }
}

/// Intent signalled by a screen or by a finished deferred task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowEvent {
    AcceptChallenge,
    DeclineChallenge,
    GoBack,
    CaptureComplete,
    SharePhoto,
    UploadComplete,
    ChooseExit,
    ChooseRetry,
}

impl FlowEvent {
    pub const ALL: [FlowEvent; 8] = [
        FlowEvent::AcceptChallenge,
        FlowEvent::DeclineChallenge,
        FlowEvent::GoBack,
        FlowEvent::CaptureComplete,
        FlowEvent::SharePhoto,
        FlowEvent::UploadComplete,
        FlowEvent::ChooseExit,
        FlowEvent::ChooseRetry,
    ];
}

impl Display for FlowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FlowEvent::AcceptChallenge => "accept challenge",
                FlowEvent::DeclineChallenge => "decline challenge",
                FlowEvent::GoBack => "go back",
                FlowEvent::CaptureComplete => "capture complete",
                FlowEvent::SharePhoto => "share photo",
                FlowEvent::UploadComplete => "upload complete",
                FlowEvent::ChooseExit => "choose exit",
                FlowEvent::ChooseRetry => "choose retry",
            }
        )
    }
}

/// Side effect the owner of the controller has to carry out after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowEffect {
    None,
    RecordDecline,
    OpenOverlay,
    CloseOverlay,
}

/// One applied row of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: FlowState,
    pub from_modal: ModalState,
    pub event: FlowEvent,
    pub to: FlowState,
    pub to_modal: ModalState,
    pub effect: FlowEffect,
}

impl Transition {
    pub fn changes_screen(&self) -> bool {
        self.from != self.to
    }

    pub fn changes_modal(&self) -> bool {
        self.from_modal != self.to_modal
    }
}

/// Who may see the shared photo. Local to the confirmation screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Privacy {
    #[default]
    Everyone,
    Private,
}

impl Privacy {
    pub fn toggle(self) -> Self {
        match self {
            Privacy::Everyone => Privacy::Private,
            Privacy::Private => Privacy::Everyone,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Privacy::Everyone => "Alle 👥",
            Privacy::Private => "Kun mig 🔒",
        }
    }
}

impl Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Privacy::Everyone => write!(f, "everyone"),
            Privacy::Private => write!(f, "private"),
        }
    }
}

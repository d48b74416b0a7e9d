//! UI constants: mock content, footer hints and other shared strings.
//! The challenge copy is Danish, as shipped to the kids using the app.

// --- Hook screen (mock video + challenge) ---

pub const LOGO_TEXT: &str = "flimmer";
pub const VIDEO_EMOJI: &str = "🤸";
pub const CHANNEL_EMOJI: &str = "👧";
pub const VIDEO_TITLE: &str = "Fantastisk at stå på hænder!";
pub const VIDEO_CREATOR: &str = "Sarah & Venner";
pub const CHALLENGE_TITLE: &str = "Kan du stå på hænder sådan her?";
pub const CHALLENGE_SUBTITLE: &str = "Vis hvordan du bedst kan stå på hænder og tjen stjerner! ⭐";
pub const CHALLENGE_BUTTON: &str = "Tag billede";

/// Other kids' attempts shown as thumbnails above the challenge.
pub const ATTEMPTS: [(&str, &str); 10] = [
    ("🤸‍♀️", "Emma"),
    ("🤸‍♂️", "Lucas"),
    ("🤸", "Sofia"),
    ("🤸‍♀️", "Olivia"),
    ("🤸‍♂️", "Noah"),
    ("🤸", "Mia"),
    ("🤸‍♂️", "Liam"),
    ("🤸‍♀️", "Ella"),
    ("🤸‍♂️", "Oscar"),
    ("🤸", "Lily"),
];

// --- Camera screen ---

pub const CAMERA_TITLE: &str = "Optag Udfordring";
pub const CAMERA_EMOJI: &str = "📷";

// --- Confirmation screen ---

pub const SHARE_TITLE: &str = "Del billede";
pub const PHOTO_LABEL: &str = "Sådan stod du på hænder!";
pub const PRIVACY_QUESTION: &str = "Hvem kan se dit billede i appen?";
pub const PRIVACY_NOTICE: &str =
    "Alle billeder bliver godkendt af Flimmer - uanset indstillingen foroven.";
pub const SHARE_BUTTON: &str = "Del";

// --- Overlays ---

pub const UPLOAD_TITLE: &str = "Sender dit håndstående…";
pub const UPLOAD_SUBTITLE: &str = "Sikkerhedstjek af din video 👀";
pub const SUCCESS_EMOJI: &str = "🎉";
pub const SUCCESS_TITLE: &str = "Sendt til Sikkerhedstjek!";
pub const SUCCESS_REWARD: &str = "Du tjente 10⭐";
pub const SUCCESS_BACK_BUTTON: &str = "Tilbage til videoer";
pub const SUCCESS_AGAIN_BUTTON: &str = "Gør det igen";

// --- Footer hints ---

pub const HINT_QUIT: &str = "q: Quit";
pub const HINT_HOOK: &str = "Enter: Take photo · d: No thanks · ↑↓: Scroll";
pub const HINT_CAMERA: &str = "Space: Shutter · Esc: Back";
pub const HINT_CAMERA_CAPTURING: &str = "Capturing…";
pub const HINT_CONFIRMATION: &str = "←→: Privacy · Enter: Share · Esc: Back";
pub const HINT_UPLOADING: &str = "Uploading, please wait";
pub const HINT_SUCCESS: &str = "←→: Select · Enter: Confirm · r: Again · x: Back to videos";

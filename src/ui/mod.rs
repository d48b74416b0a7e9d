use ratatui::style::Color;

pub const PRIMARY_COLOR: Color = Color::Rgb(108, 92, 231); // #6C5CE7
pub const PRIMARY_DARK_COLOR: Color = Color::Rgb(91, 75, 199); // #5B4BC7
pub const BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0); // #000000
pub const SURFACE_COLOR: Color = Color::Rgb(26, 26, 26); // #1A1A1A
pub const SURFACE_LIGHT_COLOR: Color = Color::Rgb(42, 42, 42); // #2A2A2A
pub const TEXT_COLOR: Color = Color::Rgb(255, 255, 255);
pub const TEXT_SECONDARY_COLOR: Color = Color::Rgb(176, 176, 176); // #B0B0B0
pub const BORDER_COLOR: Color = Color::Rgb(58, 58, 58); // #3A3A3A
pub const SUCCESS_COLOR: Color = Color::Rgb(0, 214, 143); // #00D68F
pub const YELLOW_COLOR: Color = Color::Rgb(255, 217, 61); // #FFD93D
pub const YELLOW_BRIGHT_COLOR: Color = Color::Rgb(255, 193, 7); // #FFC107
pub const DARK_TEXT_COLOR: Color = Color::Rgb(44, 44, 44); // #2C2C2C
pub const LIGHT_GRAY_COLOR: Color = Color::Rgb(245, 245, 245); // #F5F5F5
pub const SHARE_TOP_COLOR: Color = Color::Rgb(147, 77, 255); // #934DFF
pub const SHARE_BOTTOM_COLOR: Color = Color::Rgb(52, 1, 129); // #340181

pub mod app_state;
pub mod camera_screen;
pub mod confirmation_screen;
pub mod constants;
pub mod draw;
pub mod exit_confirm;
pub mod helpers;
pub mod hook_screen;
pub mod key_handler;
pub mod status;
pub mod success_overlay;
pub mod upload_overlay;

pub use app_state::{AppState, UiMode};
pub use camera_screen::CameraState;
pub use confirmation_screen::ConfirmationState;
pub use draw::ui_draw;
pub use hook_screen::HookState;
pub use success_overlay::{SuccessChoice, SuccessState};
pub use upload_overlay::UploadState;

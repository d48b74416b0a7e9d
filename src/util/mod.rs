pub mod animation;
pub mod scheduler;

pub use animation::{ease_out, flash_intensity, slide_offset, spring, Timeline};
pub use scheduler::{channel, DeferredTask, Scheduler, TaskSlot, TimerFired, TimerId, TimerKind};

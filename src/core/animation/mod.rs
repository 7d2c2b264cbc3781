//! Entrance animation: easing, element styles, timelines and their playback.

mod easing;
mod entrance;
mod playback;
mod style;
mod timeline;

pub use easing::Ease;
pub use entrance::{
    CONTENT_OFFSET_Y, EntranceTarget, ILLUSTRATION_OFFSET, ILLUSTRATION_OVERSHOOT,
    entrance_timeline,
};
pub use playback::{FrameCallback, FrameId, FrameScheduler, Playback, PlaybackState, StyleSink};
pub use style::{ElementStyle, WillChange};
pub use timeline::{ScheduledStep, Step, Timeline, TrackedElement};

#[cfg(test)]
pub(crate) use playback::testing;

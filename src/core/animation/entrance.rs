//! The hero entrance sequence.

use super::easing::Ease;
use super::style::{ElementStyle, WillChange};
use super::timeline::{Step, Timeline};

/// Downward offset of hero content before it is revealed
pub const CONTENT_OFFSET_Y: f64 = 30.0;

/// Distance the illustrations travel in from
pub const ILLUSTRATION_OFFSET: f64 = 100.0;

/// Overshoot of the illustration settle
pub const ILLUSTRATION_OVERSHOOT: f64 = 1.2;

/// Elements animated on first render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntranceTarget {
    Root,
    LeftIllustration,
    RightIllustration,
    BottomIllustration,
    Title,
    Subtitle,
    Description,
    Form,
    Social,
}

impl EntranceTarget {
    /// Every target in reveal order
    pub const ALL: [EntranceTarget; 9] = [
        EntranceTarget::Root,
        EntranceTarget::LeftIllustration,
        EntranceTarget::RightIllustration,
        EntranceTarget::BottomIllustration,
        EntranceTarget::Title,
        EntranceTarget::Subtitle,
        EntranceTarget::Description,
        EntranceTarget::Form,
        EntranceTarget::Social,
    ];

    /// Style before the timeline plays
    pub fn initial_style(&self) -> ElementStyle {
        let hidden = ElementStyle::HIDDEN;
        match self {
            EntranceTarget::Root => hidden,
            EntranceTarget::LeftIllustration => hidden
                .with_offset(-ILLUSTRATION_OFFSET, 0.0)
                .with_rotation(-15.0),
            EntranceTarget::RightIllustration => hidden
                .with_offset(ILLUSTRATION_OFFSET, 0.0)
                .with_rotation(15.0),
            EntranceTarget::BottomIllustration => hidden
                .with_offset(0.0, ILLUSTRATION_OFFSET)
                .with_rotation(-10.0),
            _ => hidden.with_offset(0.0, CONTENT_OFFSET_Y),
        }
    }

    /// Rendering hint while the element animates
    pub fn hint(&self) -> WillChange {
        match self {
            EntranceTarget::Root => WillChange::Opacity,
            _ => WillChange::TransformOpacity,
        }
    }

    /// Inline style to render server-side so nothing flashes before hydration
    pub fn initial_css(&self) -> String {
        self.initial_style().to_css(self.hint())
    }

    /// `(duration, offset, ease)` of this target's step
    fn timing(&self) -> (f64, f64, Ease) {
        let settle = Ease::BackOut(ILLUSTRATION_OVERSHOOT);
        match self {
            EntranceTarget::Root => (0.4, 0.0, Ease::Power1InOut),
            EntranceTarget::LeftIllustration => (1.2, -0.2, settle),
            EntranceTarget::RightIllustration => (1.2, -1.1, settle),
            EntranceTarget::BottomIllustration => (1.2, -1.0, settle),
            EntranceTarget::Title => (0.8, -0.8, Ease::Power2Out),
            EntranceTarget::Subtitle => (0.8, -0.6, Ease::Power2Out),
            EntranceTarget::Description => (0.6, -0.4, Ease::Power2Out),
            EntranceTarget::Form => (0.6, -0.3, Ease::Power2Out),
            EntranceTarget::Social => (0.5, -0.3, Ease::Power2Out),
        }
    }
}

/// Build the entrance timeline: page fade-in, illustrations, then hero content.
pub fn entrance_timeline() -> Timeline<EntranceTarget> {
    let registered = EntranceTarget::ALL
        .iter()
        .fold(Timeline::new(), |timeline, target| {
            timeline.set(*target, target.initial_style(), target.hint())
        });

    EntranceTarget::ALL
        .iter()
        .fold(registered, |timeline, target| {
            let (duration, offset, ease) = target.timing();
            timeline.then(
                Step::new(*target, ElementStyle::SETTLED, duration)
                    .offset(offset)
                    .ease(ease),
            )
        })
}

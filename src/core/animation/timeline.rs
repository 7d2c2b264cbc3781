//! Declarative timeline of tweens with overlapping start offsets.
//!
//! Each step starts at `previous_end + offset`, so a negative offset makes it
//! overlap the step before it. Times are in seconds.

use super::easing::Ease;
use super::style::{ElementStyle, WillChange};

/// One tween: move `target` to `to` over `duration` seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step<T> {
    pub target: T,
    pub to: ElementStyle,
    pub duration: f64,
    /// Start relative to the end of the previous step
    pub offset: f64,
    pub ease: Ease,
}

impl<T> Step<T> {
    pub fn new(target: T, to: ElementStyle, duration: f64) -> Self {
        Self {
            target,
            to,
            duration,
            offset: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Step with its resolved absolute start time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledStep<T> {
    pub step: Step<T>,
    pub start: f64,
}

impl<T> ScheduledStep<T> {
    pub fn end(&self) -> f64 {
        self.start + self.step.duration
    }

    /// Linear progress of this step at time `t`
    fn progress(&self, t: f64) -> f64 {
        if self.step.duration <= 0.0 {
            return if t >= self.start { 1.0 } else { 0.0 };
        }
        ((t - self.start) / self.step.duration).clamp(0.0, 1.0)
    }
}

/// Initial state of an animated element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedElement<T> {
    pub target: T,
    pub initial: ElementStyle,
    pub hint: WillChange,
}

/// Ordered list of steps over a set of tracked elements
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<T> {
    elements: Vec<TrackedElement<T>>,
    steps: Vec<ScheduledStep<T>>,
}

impl<T: Copy + PartialEq> Timeline<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Register an element with the style it has before the timeline plays.
    /// Registering the same target again replaces its initial state.
    pub fn set(mut self, target: T, initial: ElementStyle, hint: WillChange) -> Self {
        let element = TrackedElement {
            target,
            initial,
            hint,
        };
        match self.elements.iter_mut().find(|e| e.target == target) {
            Some(existing) => *existing = element,
            None => self.elements.push(element),
        }
        self
    }

    /// Append a step after the current last step
    pub fn then(mut self, step: Step<T>) -> Self {
        let previous_end = self.steps.last().map(|s| s.end()).unwrap_or(0.0);
        let start = (previous_end + step.offset).max(0.0);
        self.steps.push(ScheduledStep { step, start });
        self
    }

    pub fn elements(&self) -> &[TrackedElement<T>] {
        &self.elements
    }

    pub fn steps(&self) -> &[ScheduledStep<T>] {
        &self.steps
    }

    pub fn start_of(&self, index: usize) -> Option<f64> {
        self.steps.get(index).map(|s| s.start)
    }

    /// Time at which the last tween finishes
    pub fn duration(&self) -> f64 {
        self.steps.iter().map(|s| s.end()).fold(0.0, f64::max)
    }

    /// Style of every tracked element at time `t`, in registration order.
    ///
    /// A step eases from whatever state the element's earlier steps leave it in.
    pub fn sample(&self, t: f64) -> Vec<(T, ElementStyle)> {
        self.elements
            .iter()
            .map(|element| {
                let mut style = element.initial;
                for scheduled in self.steps.iter().filter(|s| s.step.target == element.target) {
                    if t <= scheduled.start && scheduled.step.duration > 0.0 {
                        break;
                    }
                    let eased = scheduled.step.ease.apply(scheduled.progress(t));
                    style = style.lerp(&scheduled.step.to, eased);
                    if t < scheduled.end() {
                        break;
                    }
                    style = scheduled.step.to;
                }
                (element.target, style)
            })
            .collect()
    }
}

impl<T: Copy + PartialEq> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn style_of(samples: &[(char, ElementStyle)], target: char) -> ElementStyle {
        samples.iter().find(|(t, _)| *t == target).unwrap().1
    }

    fn two_step() -> Timeline<char> {
        Timeline::new()
            .set('a', ElementStyle::HIDDEN, WillChange::Opacity)
            .set('b', ElementStyle::HIDDEN.with_offset(0.0, 30.0), WillChange::TransformOpacity)
            .then(Step::new('a', ElementStyle::SETTLED, 1.0).ease(Ease::Linear))
            .then(
                Step::new('b', ElementStyle::SETTLED, 1.0)
                    .offset(-0.5)
                    .ease(Ease::Linear),
            )
    }

    #[test]
    fn test_overlapping_offsets() {
        let timeline = two_step();
        assert_eq!(timeline.start_of(0), Some(0.0));
        assert_eq!(timeline.start_of(1), Some(0.5));
        assert!((timeline.duration() - 1.5).abs() < EPS);
    }

    #[test]
    fn test_start_is_clamped_to_zero() {
        let timeline = Timeline::new()
            .set('a', ElementStyle::HIDDEN, WillChange::Opacity)
            .then(Step::new('a', ElementStyle::SETTLED, 0.5).offset(-2.0));
        assert_eq!(timeline.start_of(0), Some(0.0));
    }

    #[test]
    fn test_sample_before_start_is_initial() {
        let samples = two_step().sample(0.0);
        assert_eq!(style_of(&samples, 'a'), ElementStyle::HIDDEN);
        assert_eq!(
            style_of(&samples, 'b'),
            ElementStyle::HIDDEN.with_offset(0.0, 30.0)
        );
    }

    #[test]
    fn test_sample_midway() {
        let samples = two_step().sample(0.75);
        let a = style_of(&samples, 'a');
        let b = style_of(&samples, 'b');
        assert!((a.opacity - 0.75).abs() < EPS);
        assert!((b.opacity - 0.25).abs() < EPS);
        assert!((b.y - 22.5).abs() < EPS);
    }

    #[test]
    fn test_sample_at_end_is_settled() {
        let timeline = two_step();
        for (_, style) in timeline.sample(timeline.duration()) {
            assert!(style.is_settled());
        }
        for (_, style) in timeline.sample(100.0) {
            assert_eq!(style, ElementStyle::SETTLED);
        }
    }

    #[test]
    fn test_set_replaces_initial() {
        let timeline = Timeline::new()
            .set('a', ElementStyle::HIDDEN, WillChange::Opacity)
            .set('a', ElementStyle::SETTLED, WillChange::Auto);
        assert_eq!(timeline.elements().len(), 1);
        assert_eq!(timeline.elements()[0].initial, ElementStyle::SETTLED);
    }

    #[test]
    fn test_chained_steps_on_one_target() {
        let half = ElementStyle {
            opacity: 0.5,
            ..ElementStyle::HIDDEN
        };
        let timeline = Timeline::new()
            .set('a', ElementStyle::HIDDEN, WillChange::Opacity)
            .then(Step::new('a', half, 1.0).ease(Ease::Linear))
            .then(Step::new('a', ElementStyle::SETTLED, 1.0).ease(Ease::Linear));

        let at = |t: f64| style_of(&timeline.sample(t), 'a').opacity;
        assert!((at(0.5) - 0.25).abs() < EPS);
        assert!((at(1.0) - 0.5).abs() < EPS);
        assert!((at(1.5) - 0.75).abs() < EPS);
        assert!((at(2.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_zero_duration_step_jumps() {
        let timeline = Timeline::new()
            .set('a', ElementStyle::HIDDEN, WillChange::Opacity)
            .then(Step::new('a', ElementStyle::SETTLED, 0.0));
        assert_eq!(timeline.duration(), 0.0);
        assert!(style_of(&timeline.sample(0.0), 'a').is_settled());
    }
}

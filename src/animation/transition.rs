//! Timing of a transform write: how long it animates and along which curve.

use std::time::Duration;

use crate::util::easing::EasingFunction;

/// Default FLIP / snap-back duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// A timed transform transition.
///
/// A transform write carries `Option<TransformTransition>`: `None` means the
/// host applies it instantly, `Some` means it animates from whatever offset
/// is currently on screen to the new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformTransition {
    /// How long the host interpolates.
    pub duration: Duration,
    /// Interpolation curve.
    pub easing: EasingFunction,
}

impl TransformTransition {
    /// Transition with an explicit duration and curve.
    #[must_use]
    pub const fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self { duration, easing }
    }

    /// Standard smooth transition (500ms, cubic hermite ease-out).
    #[must_use]
    pub const fn smooth() -> Self {
        Self::new(DEFAULT_DURATION, EasingFunction::DEFAULT)
    }

    /// Same curve, different duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// CSS `transition` shorthand for the `transform` property.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "transform {}ms {}",
            self.duration.as_millis(),
            self.easing.css()
        )
    }
}

impl Default for TransformTransition {
    fn default() -> Self {
        Self::smooth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_smooth() {
        let t = TransformTransition::default();
        assert_eq!(t.duration, Duration::from_millis(500));
        assert_eq!(t.easing, EasingFunction::DEFAULT);
    }

    #[test]
    fn test_css_shorthand() {
        let t = TransformTransition::new(
            Duration::from_millis(250),
            EasingFunction::Linear,
        );
        assert_eq!(t.css(), "transform 250ms linear");
    }

    #[test]
    fn test_with_duration_keeps_curve() {
        let t = TransformTransition::new(
            Duration::from_millis(100),
            EasingFunction::QuadraticIn,
        )
        .with_duration(Duration::from_secs(1));
        assert_eq!(t.duration, Duration::from_secs(1));
        assert_eq!(t.easing, EasingFunction::QuadraticIn);
    }
}

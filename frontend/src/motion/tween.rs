//! Free-standing tweens: pointer micro-interactions, drawers, looping
//! decorations. They live outside any [`RevealSequencer`] and never touch its
//! playback state.
//!
//! [`RevealSequencer`]: super::sequencer::RevealSequencer

use super::cancel::CancelToken;
use super::ease::Ease;
use super::error::MotionError;
use super::props::PropertySet;

/// Something a frame loop can drive.
pub trait Animated {
    /// Advance by `dt` seconds. Returns `true` if the current values changed.
    fn tick(&mut self, dt: f64) -> bool;

    fn current(&self) -> &PropertySet;

    fn is_active(&self) -> bool;

    fn cancel(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    /// Extra cycles after the first one.
    Count(u32),
    Forever,
}

#[derive(Debug)]
pub struct Tween {
    from: PropertySet,
    to: PropertySet,
    current: PropertySet,
    duration: f64,
    ease: Ease,
    delay: f64,
    delay_left: f64,
    elapsed: f64,
    repeat: Repeat,
    yoyo: bool,
    cycles: u32,
    backwards: bool,
    active: bool,
    token: CancelToken,
}

impl Tween {
    pub fn new(initial: PropertySet) -> Self {
        Self {
            from: initial.clone(),
            to: initial.clone(),
            current: initial,
            duration: 0.0,
            ease: Ease::default(),
            delay: 0.0,
            delay_left: 0.0,
            elapsed: 0.0,
            repeat: Repeat::Count(0),
            yoyo: false,
            cycles: 0,
            backwards: false,
            active: false,
            token: CancelToken::new(),
        }
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Seconds to wait each time the tween is (re)started.
    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs.max(0.0);
        self
    }

    pub fn with_target(mut self, target: PropertySet, duration: f64, ease: Ease) -> Self {
        self.to(target, duration, ease);
        self
    }

    /// Animate from wherever the values are now towards `target`.
    pub fn to(&mut self, target: PropertySet, duration: f64, ease: Ease) {
        if self.token.is_cancelled() {
            return;
        }
        let mut from = self.current.clone();
        for prop in target.properties() {
            if from.get(prop).is_none() {
                from.set(prop, prop.rest());
            }
        }
        let mut to = self.current.clone();
        to.merge(&target);

        self.from = from;
        self.to = to;
        self.duration = duration.max(0.0);
        self.ease = ease;
        self.delay_left = self.delay;
        self.elapsed = 0.0;
        self.cycles = 0;
        self.backwards = false;
        self.active = true;
    }

    /// Go to `target` and come back `times` times, ending where it started.
    pub fn pulse(&mut self, target: PropertySet, duration: f64, times: u32) {
        self.repeat = Repeat::Count(times.saturating_mul(2).saturating_sub(1));
        self.yoyo = true;
        self.to(target, duration, Ease::Power2Out);
    }

    fn finish(&mut self) {
        self.current = if self.backwards {
            self.from.clone()
        } else {
            self.to.clone()
        };
        self.active = false;
    }
}

impl Animated for Tween {
    fn tick(&mut self, dt: f64) -> bool {
        if !self.active || self.token.is_cancelled() || dt <= 0.0 {
            return false;
        }

        let mut dt = dt;
        if self.delay_left > 0.0 {
            let waited = dt.min(self.delay_left);
            self.delay_left -= waited;
            dt -= waited;
            if dt <= 0.0 {
                return false;
            }
        }

        if self.duration <= 0.0 {
            self.finish();
            return true;
        }

        self.elapsed += dt;
        while self.elapsed >= self.duration {
            let more = match self.repeat {
                Repeat::Forever => true,
                Repeat::Count(n) => self.cycles < n,
            };
            if !more {
                self.finish();
                return true;
            }
            self.cycles += 1;
            self.elapsed -= self.duration;
            if self.yoyo {
                self.backwards = !self.backwards;
            }
        }

        let t = self.ease.apply(self.elapsed / self.duration);
        self.current = if self.backwards {
            PropertySet::lerp(&self.to, &self.from, t)
        } else {
            PropertySet::lerp(&self.from, &self.to, t)
        };
        true
    }

    fn current(&self) -> &PropertySet {
        &self.current
    }

    fn is_active(&self) -> bool {
        self.active && !self.token.is_cancelled()
    }

    fn cancel(&mut self) {
        self.token.cancel();
        self.active = false;
    }
}

/// A tween for pointer enter/leave. It only accepts transform properties, so
/// it can never fight a reveal sequence over opacity or blur.
#[derive(Debug)]
pub struct HoverTween {
    tween: Tween,
    rest: PropertySet,
    hovered: PropertySet,
    duration: f64,
    ease: Ease,
}

impl HoverTween {
    pub fn new(hovered: PropertySet, duration: f64) -> Result<Self, MotionError> {
        if let Some(prop) = hovered.properties().find(|p| !p.is_transform()) {
            return Err(MotionError::SharedProperty(prop));
        }
        let rest = hovered.at_rest();
        Ok(Self {
            tween: Tween::new(rest.clone()),
            rest,
            hovered,
            duration,
            ease: Ease::Power2Out,
        })
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn enter(&mut self) {
        self.tween.to(self.hovered.clone(), self.duration, self.ease);
    }

    pub fn leave(&mut self) {
        self.tween.to(self.rest.clone(), self.duration, self.ease);
    }
}

impl Animated for HoverTween {
    fn tick(&mut self, dt: f64) -> bool {
        self.tween.tick(dt)
    }

    fn current(&self) -> &PropertySet {
        self.tween.current()
    }

    fn is_active(&self) -> bool {
        self.tween.is_active()
    }

    fn cancel(&mut self) {
        self.tween.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::props::Property;

    fn run(anim: &mut impl Animated, secs: f64) {
        let mut left = secs;
        while left > 1e-9 {
            let dt = 0.01_f64.min(left);
            anim.tick(dt);
            left -= dt;
        }
    }

    fn scale(anim: &impl Animated) -> f64 {
        anim.current().get(Property::Scale).unwrap()
    }

    #[test]
    fn reaches_target_and_stops() {
        let mut tween = Tween::new(PropertySet::new().scale(1.0))
            .with_target(PropertySet::new().scale(1.2), 0.3, Ease::Linear);
        run(&mut tween, 0.5);
        assert!(!tween.is_active());
        assert_eq!(scale(&tween), 1.2);
    }

    #[test]
    fn retargeting_starts_from_current_values() {
        let mut tween = Tween::new(PropertySet::new().scale(1.0))
            .with_target(PropertySet::new().scale(2.0), 1.0, Ease::Linear);
        run(&mut tween, 0.5);
        let midway = scale(&tween);
        assert!((midway - 1.5).abs() < 1e-6);

        tween.to(PropertySet::new().scale(1.0), 1.0, Ease::Linear);
        tween.tick(0.01);
        assert!((scale(&tween) - midway).abs() < 0.01);
        run(&mut tween, 1.0);
        assert_eq!(scale(&tween), 1.0);
    }

    #[test]
    fn pulse_returns_to_start() {
        let mut tween = Tween::new(PropertySet::new().scale(1.0));
        tween.pulse(PropertySet::new().scale(0.95), 0.1, 1);
        run(&mut tween, 0.1);
        assert!(tween.is_active());
        run(&mut tween, 0.15);
        assert!(!tween.is_active());
        assert_eq!(scale(&tween), 1.0);
    }

    #[test]
    fn forever_yoyo_keeps_running_between_bounds() {
        let mut tween = Tween::new(PropertySet::new().y(0.0))
            .repeat(Repeat::Forever)
            .yoyo(true)
            .with_target(PropertySet::new().y(-30.0), 3.0, Ease::Power1InOut);
        for _ in 0..100 {
            run(&mut tween, 0.37);
            let y = tween.current().get(Property::Y).unwrap();
            assert!((-30.0..=0.0).contains(&y), "{y}");
        }
        assert!(tween.is_active());
    }

    #[test]
    fn delay_holds_the_start_value() {
        let mut tween = Tween::new(PropertySet::new().y(0.0))
            .delay(0.4)
            .with_target(PropertySet::new().y(-30.0), 1.0, Ease::Linear);
        assert!(!tween.tick(0.3));
        assert_eq!(tween.current().get(Property::Y), Some(0.0));
        assert!(tween.tick(0.2));
        assert!(tween.current().get(Property::Y).unwrap() < 0.0);
    }

    #[test]
    fn cancelled_tween_ignores_further_work() {
        let mut tween = Tween::new(PropertySet::new().scale(1.0))
            .with_target(PropertySet::new().scale(2.0), 1.0, Ease::Linear);
        tween.tick(0.1);
        let frozen = tween.current().clone();
        tween.cancel();
        tween.to(PropertySet::new().scale(3.0), 1.0, Ease::Linear);
        run(&mut tween, 2.0);
        assert_eq!(tween.current(), &frozen);
        assert!(!tween.is_active());
    }

    #[test]
    fn hover_rejects_reveal_owned_properties() {
        let err = HoverTween::new(PropertySet::new().scale(1.05).opacity(0.5), 0.3).unwrap_err();
        assert_eq!(err, MotionError::SharedProperty(Property::Opacity));
        assert!(HoverTween::new(PropertySet::new().blur(2.0), 0.3).is_err());
    }

    #[test]
    fn hover_enter_then_leave_settles_at_rest() {
        let mut hover = HoverTween::new(PropertySet::new().scale(1.05).rotation(2.0), 0.4).unwrap();
        hover.enter();
        run(&mut hover, 0.2);
        assert!(scale(&hover) > 1.0);
        hover.leave();
        run(&mut hover, 0.5);
        assert_eq!(scale(&hover), 1.0);
        assert_eq!(hover.current().get(Property::Rotation), Some(0.0));
        assert!(!hover.is_active());
    }
}

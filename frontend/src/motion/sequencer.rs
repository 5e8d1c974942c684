//! Staged reveal sequencer.
//!
//! A [`RevealSequencer`] plays one [`Schedule`] for one element, either once
//! when the page mounts or each time the element scrolls into view. Playback
//! is a playhead moving over the schedule: forward while `Playing`, backward
//! while `Reversing`. Switching direction keeps the playhead where it is, so
//! interrupted transitions continue from their current values.
//!
//! # Invariants
//!
//! 1. A `Once` sequencer plays at most one time and ignores visibility after
//!    completing.
//! 2. Only `Toggle` sequencers reverse.
//! 3. After [`RevealSequencer::cancel`], nothing changes and no completion
//!    callback fires.

use std::collections::BTreeMap;
use std::fmt;

use super::cancel::CancelToken;
use super::error::MotionError;
use super::props::PropertySet;
use super::schedule::{AnimationStage, Schedule, Target};
use super::visibility::{Crossing, Threshold};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Completed,
    Reversing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayPolicy {
    /// Play forward once, then stay put.
    Once,
    /// Play forward on enter, reverse on exit, as often as it happens.
    Toggle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Trigger {
    /// Start as soon as the element mounts.
    Mount,
    /// Start when the element crosses the threshold.
    Viewport(Threshold),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TriggerBinding {
    pub trigger: Trigger,
    pub policy: ReplayPolicy,
    /// Seconds to wait before the first forward play.
    pub delay: f64,
}

impl TriggerBinding {
    pub fn on_mount() -> Self {
        Self {
            trigger: Trigger::Mount,
            policy: ReplayPolicy::Once,
            delay: 0.0,
        }
    }

    pub fn on_enter(threshold: Threshold, policy: ReplayPolicy) -> Self {
        Self {
            trigger: Trigger::Viewport(threshold),
            policy,
            delay: 0.0,
        }
    }

    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs.max(0.0);
        self
    }
}

pub struct RevealSequencer {
    binding: TriggerBinding,
    schedule: Schedule,
    state: PlaybackState,
    playhead: f64,
    pending_delay: f64,
    started: bool,
    values: BTreeMap<Target, PropertySet>,
    token: CancelToken,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for RevealSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealSequencer")
            .field("state", &self.state)
            .field("playhead", &self.playhead)
            .field("total", &self.schedule.total())
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}

impl RevealSequencer {
    pub fn bind(binding: TriggerBinding, stages: Vec<AnimationStage>) -> Result<Self, MotionError> {
        let schedule = Schedule::build(stages)?;
        let values = schedule.sample(0.0);
        Ok(Self {
            binding,
            schedule,
            state: PlaybackState::Idle,
            playhead: 0.0,
            pending_delay: 0.0,
            started: false,
            values,
            token: CancelToken::new(),
            on_complete: None,
        })
    }

    pub fn on_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn binding(&self) -> &TriggerBinding {
        &self.binding
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn values(&self) -> &BTreeMap<Target, PropertySet> {
        &self.values
    }

    pub fn value(&self, target: &Target) -> Option<&PropertySet> {
        self.values.get(target)
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the next frame can change anything.
    pub fn is_animating(&self) -> bool {
        !self.is_cancelled()
            && matches!(self.state, PlaybackState::Playing | PlaybackState::Reversing)
    }

    /// Starts a mount-time sequence. Same as an enter event.
    pub fn start(&mut self) -> bool {
        self.enter()
    }

    pub fn enter(&mut self) -> bool {
        if self.is_cancelled() {
            return false;
        }
        match (self.state, self.binding.policy) {
            (PlaybackState::Idle, _) | (PlaybackState::Reversing, ReplayPolicy::Toggle) => {
                if !self.started {
                    self.started = true;
                    self.pending_delay = self.binding.delay;
                }
                self.transition(PlaybackState::Playing);
                true
            }
            _ => false,
        }
    }

    pub fn exit(&mut self) -> bool {
        if self.is_cancelled() || self.binding.policy == ReplayPolicy::Once {
            return false;
        }
        match self.state {
            PlaybackState::Playing | PlaybackState::Completed => {
                self.pending_delay = 0.0;
                self.transition(PlaybackState::Reversing);
                true
            }
            PlaybackState::Idle | PlaybackState::Reversing => false,
        }
    }

    pub fn apply(&mut self, crossing: Crossing) -> bool {
        match crossing {
            Crossing::Enter => self.enter(),
            Crossing::Exit => self.exit(),
        }
    }

    /// Advances playback by `dt` seconds. Returns `true` if any value changed.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.is_animating() || dt <= 0.0 {
            return false;
        }

        let total = self.schedule.total();
        match self.state {
            PlaybackState::Playing => {
                let mut dt = dt;
                if self.pending_delay > 0.0 {
                    let waited = dt.min(self.pending_delay);
                    self.pending_delay -= waited;
                    dt -= waited;
                    if dt <= 0.0 {
                        return false;
                    }
                }
                self.playhead = (self.playhead + dt).min(total);
                self.values = self.schedule.sample(self.playhead);
                if self.playhead >= total {
                    self.transition(PlaybackState::Completed);
                    if let Some(callback) = self.on_complete.as_mut() {
                        callback();
                    }
                }
            }
            PlaybackState::Reversing => {
                self.playhead = (self.playhead - dt).max(0.0);
                self.values = self.schedule.sample(self.playhead);
                if self.playhead <= 0.0 {
                    self.transition(PlaybackState::Idle);
                }
            }
            PlaybackState::Idle | PlaybackState::Completed => return false,
        }
        true
    }

    /// Stops playback for good. Idempotent.
    pub fn cancel(&mut self) {
        if !self.token.is_cancelled() {
            tracing::debug!(state = ?self.state, playhead = self.playhead, "sequence cancelled");
        }
        self.token.cancel();
        self.on_complete = None;
    }

    fn transition(&mut self, next: PlaybackState) {
        tracing::debug!(from = ?self.state, to = ?next, playhead = self.playhead, "playback transition");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::motion::props::Property;

    fn stages() -> Vec<AnimationStage> {
        let from = PropertySet::new().opacity(0.0).blur(10.0).y(50.0);
        vec![
            AnimationStage::reveal(Target::Root, from.clone(), 1.0),
            AnimationStage::reveal(Target::select(".body"), from, 0.8)
                .order(1.0)
                .overlap(0.4),
        ]
    }

    fn toggle() -> RevealSequencer {
        RevealSequencer::bind(
            TriggerBinding::on_enter(Threshold::default(), ReplayPolicy::Toggle),
            stages(),
        )
        .unwrap()
    }

    fn counted(policy: ReplayPolicy) -> (RevealSequencer, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let seq = RevealSequencer::bind(TriggerBinding::on_enter(Threshold::default(), policy), stages())
            .unwrap()
            .on_complete(move || seen.set(seen.get() + 1));
        (seq, count)
    }

    fn run(seq: &mut RevealSequencer, secs: f64) {
        let mut left = secs;
        while left > 0.0 {
            seq.tick(0.016_f64.min(left));
            left -= 0.016;
        }
    }

    fn assert_at_rest(seq: &RevealSequencer) {
        for values in seq.values().values() {
            assert_eq!(values.get(Property::Opacity), Some(1.0));
            assert_eq!(values.get(Property::Blur), Some(0.0));
            assert_eq!(values.get(Property::Y), Some(0.0));
        }
    }

    #[test]
    fn bind_rejects_empty_stage_list() {
        let err = RevealSequencer::bind(TriggerBinding::on_mount(), vec![]).unwrap_err();
        assert_eq!(err, MotionError::EmptySequence);
    }

    #[test]
    fn starts_idle_in_from_state() {
        let seq = toggle();
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.value(&Target::Root).unwrap().get(Property::Opacity), Some(0.0));
        assert!(!seq.is_animating());
    }

    #[test]
    fn once_policy_plays_exactly_once() {
        let (mut seq, completions) = counted(ReplayPolicy::Once);
        assert!(seq.enter());
        assert!(!seq.enter());
        run(&mut seq, 5.0);
        assert_eq!(seq.state(), PlaybackState::Completed);
        assert_eq!(completions.get(), 1);

        assert!(!seq.exit());
        assert!(!seq.enter());
        run(&mut seq, 5.0);
        assert_eq!(completions.get(), 1);
        assert_at_rest(&seq);
    }

    #[test]
    fn once_policy_ignores_exit_while_playing() {
        let mut seq = RevealSequencer::bind(
            TriggerBinding::on_enter(Threshold::default(), ReplayPolicy::Once),
            stages(),
        )
        .unwrap();
        seq.enter();
        run(&mut seq, 0.3);
        assert!(!seq.exit());
        assert_eq!(seq.state(), PlaybackState::Playing);
    }

    #[test]
    fn toggle_round_trip_ends_fully_forward() {
        let mut seq = toggle();
        seq.enter();
        run(&mut seq, 5.0);
        assert_eq!(seq.state(), PlaybackState::Completed);

        assert!(seq.exit());
        run(&mut seq, 5.0);
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.value(&Target::Root).unwrap().get(Property::Opacity), Some(0.0));

        assert!(seq.enter());
        run(&mut seq, 5.0);
        assert_eq!(seq.state(), PlaybackState::Completed);
        assert_at_rest(&seq);
    }

    #[test]
    fn direction_change_continues_from_current_values() {
        let mut seq = toggle();
        seq.enter();
        run(&mut seq, 0.5);
        let before = seq.value(&Target::Root).unwrap().get(Property::Opacity).unwrap();
        assert!(before > 0.0 && before < 1.0);

        assert!(seq.exit());
        assert_eq!(seq.state(), PlaybackState::Reversing);
        seq.tick(0.016);
        let after = seq.value(&Target::Root).unwrap().get(Property::Opacity).unwrap();
        assert!(after < before);
        assert!(before - after < 0.1, "snapped from {before} to {after}");

        assert!(seq.enter());
        assert_eq!(seq.state(), PlaybackState::Playing);
        seq.tick(0.016);
        let again = seq.value(&Target::Root).unwrap().get(Property::Opacity).unwrap();
        assert!(again > after && again - after < 0.1);
    }

    #[test]
    fn exit_before_enter_is_a_no_op() {
        let mut seq = toggle();
        assert!(!seq.exit());
        assert_eq!(seq.state(), PlaybackState::Idle);
    }

    #[test]
    fn cancel_mid_play_freezes_everything() {
        let (mut seq, completions) = counted(ReplayPolicy::Toggle);
        seq.enter();
        run(&mut seq, 0.2);
        let snapshot = seq.values().clone();

        seq.cancel();
        seq.cancel();
        run(&mut seq, 10.0);
        assert!(!seq.enter());
        assert!(!seq.exit());

        assert_eq!(seq.values(), &snapshot);
        assert_eq!(seq.state(), PlaybackState::Playing);
        assert!(!seq.is_animating());
        assert_eq!(completions.get(), 0);
    }

    #[test]
    fn cancel_through_a_shared_token() {
        let mut seq = toggle();
        let token = seq.cancel_token();
        seq.enter();
        token.cancel();
        assert!(!seq.tick(0.5));
    }

    #[test]
    fn delay_applies_to_the_first_play_only() {
        let mut seq = RevealSequencer::bind(
            TriggerBinding::on_enter(Threshold::default(), ReplayPolicy::Toggle).delay(0.5),
            stages(),
        )
        .unwrap();
        seq.enter();
        assert!(!seq.tick(0.4));
        assert_eq!(seq.playhead(), 0.0);
        assert!(seq.tick(0.2));
        assert!((seq.playhead() - 0.1).abs() < 1e-9);

        run(&mut seq, 5.0);
        seq.exit();
        run(&mut seq, 5.0);
        seq.enter();
        assert!(seq.tick(0.1));
        assert!((seq.playhead() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn mount_sequences_start_immediately() {
        let mut seq = RevealSequencer::bind(TriggerBinding::on_mount(), stages()).unwrap();
        assert!(seq.start());
        assert!(seq.is_animating());
        run(&mut seq, 5.0);
        assert_eq!(seq.state(), PlaybackState::Completed);
    }
}

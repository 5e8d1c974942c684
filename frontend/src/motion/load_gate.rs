use std::cell::Cell;
use std::rc::Rc;

use super::ease::Ease;
use super::error::MotionError;
use super::props::{Property, PropertySet};
use super::schedule::{AnimationStage, Target};
use super::sequencer::{RevealSequencer, TriggerBinding};

pub const LOADER_TEXT: &str = ".loader-text";
pub const LOADER_BAR: &str = ".loader-bar";

/// Lengths of the loading screen phases, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingTimings {
    pub text_in: f64,
    pub progress: f64,
    pub pause: f64,
    pub fade_out: f64,
}

impl LoadingTimings {
    pub fn total(&self) -> f64 {
        self.text_in + self.progress + self.pause + self.fade_out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    Loading,
    Ready,
}

/// One-way `Loading -> Ready` gate driven by the loading screen timeline.
#[derive(Debug)]
pub struct LoadGate {
    phase: GatePhase,
    finished: Rc<Cell<bool>>,
    timeline: RevealSequencer,
}

impl LoadGate {
    pub fn new(timings: LoadingTimings) -> Result<Self, MotionError> {
        let stages = vec![
            AnimationStage::reveal(
                Target::select(LOADER_TEXT),
                PropertySet::new().opacity(0.0).y(20.0),
                timings.text_in,
            ),
            AnimationStage::new(
                Target::select(LOADER_BAR),
                PropertySet::new().width(0.0),
                PropertySet::new().width(100.0),
                timings.progress,
            )
            .order(1.0),
            AnimationStage::pause(timings.pause).order(2.0),
            AnimationStage::new(
                Target::Root,
                PropertySet::new().opacity(1.0).scale(1.0),
                PropertySet::new().opacity(0.0).scale(0.9),
                timings.fade_out,
            )
            .ease(Ease::Power2InOut)
            .order(3.0),
        ];
        let finished = Rc::new(Cell::new(false));
        let mut timeline = RevealSequencer::bind(TriggerBinding::on_mount(), stages)?.on_complete({
            let finished = finished.clone();
            move || finished.set(true)
        });
        timeline.start();
        Ok(Self {
            phase: GatePhase::Loading,
            finished,
            timeline,
        })
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Progress bar fill, 0 to 100.
    pub fn progress(&self) -> f64 {
        self.timeline
            .value(&Target::select(LOADER_BAR))
            .and_then(|v| v.get(Property::Width))
            .unwrap_or(0.0)
    }

    pub fn values(&self) -> impl Iterator<Item = (&Target, &PropertySet)> {
        self.timeline.values().iter()
    }

    pub fn is_running(&self) -> bool {
        self.timeline.is_animating()
    }

    /// Advances the timeline. Returns `Some(GatePhase::Ready)` exactly once,
    /// on the tick that finishes the fade out.
    pub fn tick(&mut self, dt: f64) -> Option<GatePhase> {
        self.timeline.tick(dt);
        if self.phase == GatePhase::Loading && self.finished.get() {
            self.phase = GatePhase::Ready;
            tracing::debug!("load gate open");
            return Some(GatePhase::Ready);
        }
        None
    }

    pub fn cancel(&mut self) {
        self.timeline.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMINGS: LoadingTimings = LoadingTimings {
        text_in: 0.8,
        progress: 2.5,
        pause: 0.3,
        fade_out: 1.0,
    };

    #[test]
    fn opens_exactly_once_after_full_progress() {
        let mut gate = LoadGate::new(TIMINGS).unwrap();
        let mut opened_at = Vec::new();
        let mut elapsed = 0.0;
        for _ in 0..1000 {
            elapsed += 0.016;
            if let Some(phase) = gate.tick(0.016) {
                assert_eq!(phase, GatePhase::Ready);
                assert_eq!(gate.progress(), 100.0);
                opened_at.push(elapsed);
            }
        }
        assert_eq!(opened_at.len(), 1);
        assert!(opened_at[0] >= TIMINGS.total() - 1e-9);
        assert_eq!(gate.phase(), GatePhase::Ready);
        assert!(!gate.is_running());
    }

    #[test]
    fn progress_climbs_monotonically() {
        let mut gate = LoadGate::new(TIMINGS).unwrap();
        assert_eq!(gate.progress(), 0.0);
        let mut last = 0.0;
        for _ in 0..400 {
            gate.tick(0.016);
            let now = gate.progress();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn progress_is_full_before_the_fade_starts() {
        let mut gate = LoadGate::new(TIMINGS).unwrap();
        let mut t = 0.0;
        while t < TIMINGS.text_in + TIMINGS.progress + 0.05 {
            gate.tick(0.01);
            t += 0.01;
        }
        assert_eq!(gate.progress(), 100.0);
        assert_eq!(gate.phase(), GatePhase::Loading);
    }

    #[test]
    fn cancelled_gate_never_opens() {
        let mut gate = LoadGate::new(TIMINGS).unwrap();
        gate.tick(1.0);
        gate.cancel();
        for _ in 0..100 {
            assert_eq!(gate.tick(0.1), None);
        }
        assert_eq!(gate.phase(), GatePhase::Loading);
    }
}

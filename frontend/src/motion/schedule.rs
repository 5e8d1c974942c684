//! Explicit timelines.
//!
//! A [`Schedule`] is the sorted list of `(start offset, stage)` pairs a
//! sequencer plays. It is computed once from each stage's `order` and
//! `overlap` and can be inspected and sampled at any playhead position
//! without a running animation loop.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::ease::Ease;
use super::error::MotionError;
use super::props::PropertySet;

/// Element a stage animates, relative to the element the sequence is bound to.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    /// The bound element itself.
    Root,
    /// First descendant matching a CSS selector.
    Select(String),
}

impl Target {
    pub fn select(selector: impl Into<String>) -> Self {
        Self::Select(selector.into())
    }

    /// The `n`th (zero based) direct child of the bound element.
    pub fn child(n: usize) -> Self {
        Self::Select(format!(":scope > :nth-child({})", n + 1))
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Root => ":root",
            Self::Select(selector) => selector,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationStage {
    pub target: Target,
    pub from: PropertySet,
    pub to: PropertySet,
    /// Seconds.
    pub duration: f64,
    pub ease: Ease,
    /// Position in the sequence; stages are sorted by this before scheduling.
    pub order: f64,
    /// Seconds before the end of the previous stage at which this one starts.
    pub overlap: f64,
}

impl AnimationStage {
    pub fn new(target: Target, from: PropertySet, to: PropertySet, duration: f64) -> Self {
        Self {
            target,
            from,
            to,
            duration,
            ease: Ease::default(),
            order: 0.0,
            overlap: 0.0,
        }
    }

    /// Animate from `from` back to each property's rest value.
    pub fn reveal(target: Target, from: PropertySet, duration: f64) -> Self {
        let to = from.at_rest();
        Self::new(target, from, to, duration)
    }

    /// A stage that changes nothing, used to hold the timeline for `duration`.
    pub fn pause(duration: f64) -> Self {
        Self::new(Target::Root, PropertySet::new(), PropertySet::new(), duration)
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn order(mut self, order: f64) -> Self {
        self.order = order;
        self
    }

    pub fn overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }

    /// Copies of this stage for the first `count` children of the bound
    /// element, each starting `step` seconds after the previous one.
    pub fn stagger_children(&self, count: usize, step: f64) -> Vec<AnimationStage> {
        (0..count)
            .map(|n| {
                let mut stage = self.clone();
                stage.target = Target::child(n);
                stage.order = self.order + n as f64;
                if n > 0 {
                    stage.overlap = self.duration - step;
                }
                stage
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledStage {
    pub start: f64,
    pub stage: AnimationStage,
}

impl ScheduledStage {
    pub fn end(&self) -> f64 {
        self.start + self.stage.duration
    }

    fn eased_progress(&self, playhead: f64) -> f64 {
        if self.stage.duration <= 0.0 {
            return if playhead >= self.start { 1.0 } else { 0.0 };
        }
        let t = (playhead - self.start) / self.stage.duration;
        self.stage.ease.apply(t)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    entries: Vec<ScheduledStage>,
    total: f64,
}

impl Schedule {
    pub fn build(mut stages: Vec<AnimationStage>) -> Result<Self, MotionError> {
        if stages.is_empty() {
            return Err(MotionError::EmptySequence);
        }
        if let Some(bad) = stages
            .iter()
            .find(|s| !s.duration.is_finite() || s.duration < 0.0)
        {
            return Err(MotionError::InvalidDuration {
                target: bad.target.label().to_string(),
                duration: bad.duration,
            });
        }

        // Stable, so equal orders keep the caller's sequence.
        stages.sort_by(|a, b| a.order.total_cmp(&b.order));

        let mut entries: Vec<ScheduledStage> = Vec::with_capacity(stages.len());
        for stage in stages {
            let start = match entries.last() {
                None => 0.0,
                Some(prev) => (prev.end() - stage.overlap).max(0.0),
            };
            entries.push(ScheduledStage { start, stage });
        }
        let total = entries.iter().map(ScheduledStage::end).fold(0.0, f64::max);

        Ok(Self { entries, total })
    }

    pub fn entries(&self) -> &[ScheduledStage] {
        &self.entries
    }

    /// Length of the whole timeline in seconds.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Values of every target at `playhead`. A target's first stage is applied
    /// from time zero so elements start in their `from` state; later stages on
    /// the same target only apply once they have started.
    pub fn sample(&self, playhead: f64) -> BTreeMap<Target, PropertySet> {
        let mut out: BTreeMap<Target, PropertySet> = BTreeMap::new();
        for entry in &self.entries {
            let t = entry.eased_progress(playhead);
            let value = PropertySet::lerp(&entry.stage.from, &entry.stage.to, t);
            match out.entry(entry.stage.target.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(mut slot) => {
                    if playhead >= entry.start {
                        slot.get_mut().merge(&value);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::props::Property;

    fn fade(target: &str, duration: f64) -> AnimationStage {
        AnimationStage::reveal(
            Target::select(target),
            PropertySet::new().opacity(0.0).y(50.0),
            duration,
        )
    }

    fn starts(schedule: &Schedule) -> Vec<f64> {
        schedule.entries().iter().map(|e| e.start).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn overlaps_are_measured_from_the_previous_stage_end() {
        let schedule = Schedule::build(vec![
            fade(".headline", 1.2),
            fade(".subtitle", 1.0).order(1.0).overlap(0.6),
            fade(".cta", 0.8).order(2.0).overlap(0.4),
            fade(".panel", 1.5).order(3.0).overlap(0.8),
        ])
        .unwrap();

        let got = starts(&schedule);
        let want = [0.0, 0.6, 1.2, 1.2];
        for (g, w) in got.iter().zip(want) {
            assert!(approx(*g, w), "{got:?}");
        }
        assert!(approx(schedule.total(), 2.7));
    }

    #[test]
    fn stages_are_sorted_by_order() {
        let schedule = Schedule::build(vec![
            fade(".c", 1.0).order(3.0),
            fade(".a", 1.0).order(1.0),
            fade(".b", 1.0).order(2.0),
        ])
        .unwrap();
        let labels: Vec<&str> = schedule
            .entries()
            .iter()
            .map(|e| e.stage.target.label())
            .collect();
        assert_eq!(labels, vec![".a", ".b", ".c"]);
        assert_eq!(starts(&schedule), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn start_never_precedes_the_sequence_start() {
        let schedule = Schedule::build(vec![
            fade(".a", 0.5),
            fade(".b", 1.0).order(1.0).overlap(4.0),
        ])
        .unwrap();
        assert_eq!(starts(&schedule), vec![0.0, 0.0]);
        assert!(approx(schedule.total(), 1.0));
    }

    #[test]
    fn negative_overlap_leaves_a_gap() {
        let schedule = Schedule::build(vec![
            fade(".a", 1.0),
            fade(".b", 1.0).order(1.0).overlap(-0.3),
        ])
        .unwrap();
        assert!(approx(schedule.entries()[1].start, 1.3));
    }

    #[test]
    fn empty_and_invalid_sequences_are_rejected() {
        assert_eq!(Schedule::build(vec![]), Err(MotionError::EmptySequence));
        assert!(matches!(
            Schedule::build(vec![fade(".a", -1.0)]),
            Err(MotionError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn stagger_offsets_children_by_step() {
        let template = fade(".card", 0.8);
        let schedule = Schedule::build(template.stagger_children(3, 0.2)).unwrap();
        let got = starts(&schedule);
        assert!(approx(got[0], 0.0));
        assert!(approx(got[1], 0.2));
        assert!(approx(got[2], 0.4));
        assert_eq!(
            schedule.entries()[2].stage.target,
            Target::select(":scope > :nth-child(3)")
        );
    }

    #[test]
    fn sample_applies_from_state_before_start() {
        let schedule = Schedule::build(vec![
            fade(".a", 1.0),
            fade(".b", 1.0).order(1.0),
        ])
        .unwrap();

        let at_zero = schedule.sample(0.0);
        assert_eq!(at_zero[&Target::select(".b")].get(Property::Opacity), Some(0.0));

        let at_end = schedule.sample(schedule.total());
        for values in at_end.values() {
            assert_eq!(values.get(Property::Opacity), Some(1.0));
            assert_eq!(values.get(Property::Y), Some(0.0));
        }
    }

    #[test]
    fn later_stages_on_one_target_wait_for_their_start() {
        let target = Target::select(".loader");
        let schedule = Schedule::build(vec![
            AnimationStage::pause(0.3).order(0.0),
            AnimationStage::new(
                Target::Root,
                PropertySet::new().opacity(1.0),
                PropertySet::new().opacity(0.0),
                1.0,
            )
            .order(1.0),
            AnimationStage::reveal(target.clone(), PropertySet::new().opacity(0.0), 0.1)
                .order(2.0),
        ])
        .unwrap();

        assert!(schedule.sample(0.1)[&Target::Root].is_empty());
        let done = schedule.sample(schedule.total());
        assert_eq!(done[&Target::Root].get(Property::Opacity), Some(0.0));
    }
}

//! Geometry and scroll signals consumed by the tracker and the sequencers.

use std::fmt;
use std::str::FromStr;

use super::error::MotionError;

/// Offsets of an element relative to the document, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetBox {
    pub top: f64,
    pub height: f64,
}

/// Position of an element relative to the viewport, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRect {
    pub top: f64,
    pub height: f64,
}

/// Point-in-time layout reads. Implementations must not cache between calls;
/// layout changes on every resize.
pub trait LayoutProbe {
    /// Document offsets of the element with the given anchor id, or `None` if
    /// it is not mounted.
    fn offset_box(&self, anchor: &str) -> Option<OffsetBox>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// "Element edge reaches this fraction of the viewport height", written the
/// way the stylesheets do it: `"top 80%"`, `"center center"`, `"top bottom"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    pub edge: Edge,
    pub viewport_fraction: f64,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            edge: Edge::Top,
            viewport_fraction: 0.8,
        }
    }
}

impl Threshold {
    pub fn is_entered(&self, rect: ViewportRect, viewport_height: f64) -> bool {
        let edge = match self.edge {
            Edge::Top => rect.top,
            Edge::Center => rect.top + rect.height / 2.0,
            Edge::Bottom => rect.top + rect.height,
        };
        edge <= viewport_height * self.viewport_fraction
    }
}

impl FromStr for Threshold {
    type Err = MotionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || MotionError::InvalidThreshold(raw.to_string());
        let mut parts = raw.split_whitespace();
        let (Some(edge), Some(position), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let edge = match edge {
            "top" => Edge::Top,
            "center" => Edge::Center,
            "bottom" => Edge::Bottom,
            _ => return Err(invalid()),
        };
        let viewport_fraction = match position {
            "top" => 0.0,
            "center" => 0.5,
            "bottom" => 1.0,
            pct => {
                let value: f64 = pct
                    .strip_suffix('%')
                    .ok_or_else(invalid)?
                    .parse()
                    .map_err(|_| invalid())?;
                if !(0.0..=100.0).contains(&value) {
                    return Err(invalid());
                }
                value / 100.0
            }
        };

        Ok(Self {
            edge,
            viewport_fraction,
        })
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = match self.edge {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        };
        write!(f, "{} {}%", edge, self.viewport_fraction * 100.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    Enter,
    Exit,
}

/// Turns a stream of visibility samples into enter/exit events.
#[derive(Debug, Default)]
pub struct VisibilityEdge {
    last: Option<bool>,
}

impl VisibilityEdge {
    /// `None` means the element could not be measured; the sample is ignored.
    pub fn observe(&mut self, entered: Option<bool>) -> Option<Crossing> {
        let entered = entered?;
        let previous = self.last.replace(entered);
        match (previous, entered) {
            (None | Some(false), true) => Some(Crossing::Enter),
            (Some(true), false) => Some(Crossing::Exit),
            _ => None,
        }
    }
}

/// Collapses bursts of scroll events into one evaluation per frame.
#[derive(Debug, Default)]
pub struct ScrollCoalescer {
    pending: Option<f64>,
}

impl ScrollCoalescer {
    /// Records the latest offset. Returns `true` when this is the first event
    /// since the last drain, i.e. a frame needs to be requested.
    pub fn offer(&mut self, scroll_y: f64) -> bool {
        self.pending.replace(scroll_y).is_none()
    }

    pub fn take(&mut self) -> Option<f64> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_percent_and_keyword_positions() {
        let t: Threshold = "top 80%".parse().unwrap();
        assert_eq!(t, Threshold::default());

        let t: Threshold = "center bottom".parse().unwrap();
        assert_eq!(t.edge, Edge::Center);
        assert_eq!(t.viewport_fraction, 1.0);

        let t: Threshold = "top 90%".parse().unwrap();
        assert!((t.viewport_fraction - 0.9).abs() < 1e-12);
    }

    #[test]
    fn rejects_malformed_thresholds() {
        for raw in ["", "top", "left 80%", "top 80", "top 120%", "top 80% extra"] {
            assert!(raw.parse::<Threshold>().is_err(), "{raw:?}");
        }
    }

    #[test]
    fn top_edge_enters_at_eighty_percent() {
        let t = Threshold::default();
        let vh = 1000.0;
        assert!(!t.is_entered(ViewportRect { top: 801.0, height: 300.0 }, vh));
        assert!(t.is_entered(ViewportRect { top: 800.0, height: 300.0 }, vh));
        assert!(t.is_entered(ViewportRect { top: -2000.0, height: 300.0 }, vh));
    }

    #[test]
    fn edge_reports_only_changes() {
        let mut edge = VisibilityEdge::default();
        assert_eq!(edge.observe(Some(false)), None);
        assert_eq!(edge.observe(Some(true)), Some(Crossing::Enter));
        assert_eq!(edge.observe(Some(true)), None);
        assert_eq!(edge.observe(None), None);
        assert_eq!(edge.observe(Some(false)), Some(Crossing::Exit));
        assert_eq!(edge.observe(Some(false)), None);
    }

    #[test]
    fn first_sample_inside_the_viewport_enters() {
        let mut edge = VisibilityEdge::default();
        assert_eq!(edge.observe(Some(true)), Some(Crossing::Enter));
    }

    #[test]
    fn coalescer_requests_one_frame_per_burst() {
        let mut scroll = ScrollCoalescer::default();
        assert!(scroll.offer(10.0));
        assert!(!scroll.offer(20.0));
        assert!(!scroll.offer(30.0));
        assert_eq!(scroll.take(), Some(30.0));
        assert_eq!(scroll.take(), None);
        assert!(scroll.offer(40.0));
    }
}

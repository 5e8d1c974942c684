use thiserror::Error;

use super::props::Property;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("a sequence needs at least one stage")]
    EmptySequence,
    #[error("stage `{target}` has an invalid duration of {duration}s")]
    InvalidDuration { target: String, duration: f64 },
    #[error("{0:?} belongs to the reveal layer and cannot be driven by a pointer tween")]
    SharedProperty(Property),
    #[error("invalid trigger threshold `{0}`")]
    InvalidThreshold(String),
}

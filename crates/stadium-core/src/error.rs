use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("dome radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f32 },
    #[error("box min.{axis} ({min}) must be below max.{axis} ({max})")]
    InvertedBox { axis: Axis, min: f32, max: f32 },
    #[error("field footprint must lie within the stadium footprint")]
    FieldOutsideStadium,
    #[error("firework timeline has no phases")]
    EmptyTimeline,
    #[error("phase {phase} has a non-positive duration ({duration})")]
    NonPositivePhaseDuration { phase: usize, duration: f32 },
    #[error("phase {phase} starts at {start} before the previous phase ends at {previous_end}")]
    PhaseOutOfOrder {
        phase: usize,
        start: f32,
        previous_end: f32,
    },
    #[error("phase {phase} entry {entry} has a negative delay ({delay})")]
    NegativeDelay { phase: usize, entry: usize, delay: f32 },
    #[error("phase {phase} entry {entry} delay {delay} is not inside the phase duration")]
    DelayBeyondPhase { phase: usize, entry: usize, delay: f32 },
    #[error("firework initial size must be positive, got {size}")]
    NonPositiveInitialSize { size: f32 },
    #[error("movement speed must be positive, got {speed}")]
    NonPositiveSpeed { speed: f32 },
    #[error("minimum camera height must be zero or more, got {height}")]
    NegativeMinHeight { height: f32 },
    #[error("position report interval must be positive, got {interval}")]
    NonPositiveReportInterval { interval: f32 },
}

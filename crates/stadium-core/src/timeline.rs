//! One-shot, multi-phase firework show.
//!
//! The show is a table of consecutive phases. Inside the active phase an entry
//! is drawn once the show has been running longer than its delay, and grows
//! linearly until the phase ends. A rising edge on the trigger starts one
//! cycle; the cycle ends by itself once the last phase is over and the next
//! cycle needs a fresh edge.
//!
//! Scheduler state lives in a caller-owned [`TimelineState`] that is threaded
//! through [`FireworkTimeline::step`].

use glam::{Mat4, Vec3};
use log::info;
use smallvec::SmallVec;

use crate::constants::{
    firework_position, FIREWORK_DELAYS, FIREWORK_GROWTH_RATE, FIREWORK_INITIAL_SIZE,
    FIREWORK_PHASE_COUNT, FIREWORK_PHASE_SECS, FIREWORK_POSITIONS,
};
use crate::error::ConfigError;
use crate::props::{ModelHandle, Placement};

/// Draws yielded for one frame. Sized for the widest phase of the default show.
pub type FireworkDraws = SmallVec<[FireworkDraw; 5]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireworkEntry {
    /// Seconds after the trigger before the entry can appear.
    pub delay: f32,
    pub position: Vec3,
    pub model: ModelHandle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FireworkPhase {
    pub start: f32,
    pub duration: f32,
    pub entries: Vec<FireworkEntry>,
}

impl FireworkPhase {
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Half-open window `[start, end)`.
    pub fn contains(&self, elapsed: f32) -> bool {
        elapsed >= self.start && elapsed < self.end()
    }
}

/// Caller-owned scheduler state. Starts idle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimelineState {
    pub active: bool,
    pub start_time: f32,
}

impl TimelineState {
    pub fn is_running(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self, now: f32) -> Option<f32> {
        self.active.then(|| now - self.start_time)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireworkDraw {
    pub model: ModelHandle,
    pub transform: Mat4,
    pub position: Vec3,
    pub scale: f32,
}

impl From<FireworkDraw> for Placement {
    fn from(draw: FireworkDraw) -> Self {
        Placement::new(draw.model, draw.position, draw.scale)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FireworkTimeline {
    phases: Vec<FireworkPhase>,
    initial_size: f32,
    growth_rate: f32,
}

impl Default for FireworkTimeline {
    /// Three four-second phases over the five launch points, rotating which
    /// firework mesh each point uses from phase to phase.
    fn default() -> Self {
        let phases = (0..FIREWORK_PHASE_COUNT)
            .map(|p| FireworkPhase {
                start: p as f32 * FIREWORK_PHASE_SECS,
                duration: FIREWORK_PHASE_SECS,
                entries: FIREWORK_DELAYS
                    .iter()
                    .enumerate()
                    .map(|(i, &delay)| FireworkEntry {
                        delay,
                        position: firework_position(i),
                        model: ModelHandle::Firework(((i + p) % FIREWORK_POSITIONS.len()) as u8),
                    })
                    .collect(),
            })
            .collect();
        Self {
            phases,
            initial_size: FIREWORK_INITIAL_SIZE,
            growth_rate: FIREWORK_GROWTH_RATE,
        }
    }
}

impl FireworkTimeline {
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::default()
    }

    pub fn phases(&self) -> &[FireworkPhase] {
        &self.phases
    }

    pub fn initial_size(&self) -> f32 {
        self.initial_size
    }

    pub fn growth_rate(&self) -> f32 {
        self.growth_rate
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phases.is_empty() {
            return Err(ConfigError::EmptyTimeline);
        }
        if self.initial_size.is_nan() || self.initial_size <= 0.0 {
            return Err(ConfigError::NonPositiveInitialSize {
                size: self.initial_size,
            });
        }
        let mut previous_end = 0.0f32;
        for (p, phase) in self.phases.iter().enumerate() {
            if phase.duration.is_nan() || phase.duration <= 0.0 {
                return Err(ConfigError::NonPositivePhaseDuration {
                    phase: p,
                    duration: phase.duration,
                });
            }
            if phase.start.is_nan() || phase.start < previous_end {
                return Err(ConfigError::PhaseOutOfOrder {
                    phase: p,
                    start: phase.start,
                    previous_end,
                });
            }
            for (e, entry) in phase.entries.iter().enumerate() {
                if entry.delay.is_nan() || entry.delay < 0.0 {
                    return Err(ConfigError::NegativeDelay {
                        phase: p,
                        entry: e,
                        delay: entry.delay,
                    });
                }
                if entry.delay >= phase.duration {
                    return Err(ConfigError::DelayBeyondPhase {
                        phase: p,
                        entry: e,
                        delay: entry.delay,
                    });
                }
            }
            previous_end = phase.end();
        }
        Ok(())
    }

    pub fn cycle_length(&self) -> f32 {
        self.phases.last().map_or(0.0, FireworkPhase::end)
    }

    pub fn active_phase(&self, elapsed: f32) -> Option<&FireworkPhase> {
        self.phases.iter().find(|phase| phase.contains(elapsed))
    }

    /// Not clamped. Entries of later phases start below `initial_size`.
    pub fn entry_scale(&self, phase: &FireworkPhase, entry: &FireworkEntry, elapsed: f32) -> f32 {
        let progress = (elapsed - phase.start - entry.delay) / phase.duration;
        self.initial_size + progress * self.growth_rate
    }

    pub fn visible_at(&self, elapsed: f32) -> FireworkDraws {
        let Some(phase) = self.active_phase(elapsed) else {
            return FireworkDraws::new();
        };
        phase
            .entries
            .iter()
            .filter(|entry| elapsed > entry.delay)
            .map(|entry| {
                let scale = self.entry_scale(phase, entry, elapsed);
                FireworkDraw {
                    model: entry.model,
                    transform: Mat4::from_translation(entry.position)
                        * Mat4::from_scale(Vec3::splat(scale)),
                    position: entry.position,
                    scale,
                }
            })
            .collect()
    }

    /// Advance the scheduler one frame.
    ///
    /// Idle state starts a cycle only on a rising edge (`pressed` and not
    /// `was_pressed`). A running cycle ignores the trigger and returns to idle
    /// once `elapsed` reaches [`cycle_length`](Self::cycle_length).
    pub fn step(
        &self,
        state: TimelineState,
        now: f32,
        pressed: bool,
        was_pressed: bool,
    ) -> (TimelineState, FireworkDraws) {
        let mut state = state;
        if !state.active && pressed && !was_pressed {
            info!("Firework show started at t={now:.2}s");
            state = TimelineState {
                active: true,
                start_time: now,
            };
        }
        let Some(elapsed) = state.elapsed(now) else {
            return (state, FireworkDraws::new());
        };
        // An edge landing on the finishing frame is consumed here; the next
        // cycle needs a release first.
        if elapsed >= self.cycle_length() {
            info!("Firework show finished after {elapsed:.2}s");
            return (TimelineState::default(), FireworkDraws::new());
        }
        (state, self.visible_at(elapsed))
    }
}

#[derive(Clone, Debug)]
pub struct TimelineBuilder {
    phases: Vec<FireworkPhase>,
    initial_size: f32,
    growth_rate: f32,
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self {
            phases: Vec::new(),
            initial_size: FIREWORK_INITIAL_SIZE,
            growth_rate: FIREWORK_GROWTH_RATE,
        }
    }
}

impl TimelineBuilder {
    pub fn initial_size(mut self, size: f32) -> Self {
        self.initial_size = size;
        self
    }

    pub fn growth_rate(mut self, rate: f32) -> Self {
        self.growth_rate = rate;
        self
    }

    /// Append a phase starting where the previous one ends.
    pub fn phase(self, duration: f32, entries: impl IntoIterator<Item = FireworkEntry>) -> Self {
        let start = self.phases.last().map_or(0.0, FireworkPhase::end);
        self.phase_at(start, duration, entries)
    }

    pub fn phase_at(
        mut self,
        start: f32,
        duration: f32,
        entries: impl IntoIterator<Item = FireworkEntry>,
    ) -> Self {
        self.phases.push(FireworkPhase {
            start,
            duration,
            entries: entries.into_iter().collect(),
        });
        self
    }

    pub fn build(self) -> Result<FireworkTimeline, ConfigError> {
        let timeline = FireworkTimeline {
            phases: self.phases,
            initial_size: self.initial_size,
            growth_rate: self.growth_rate,
        };
        timeline.validate()?;
        Ok(timeline)
    }
}

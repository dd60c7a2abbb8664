//! Per-frame driver tying camera movement, the firework show and the lineup
//! props together. Frontends feed it key state and clock readings and draw the
//! placements it reports.

use glam::Vec3;
use log::{debug, info, trace};

use crate::camera::FlyCamera;
use crate::clock::{FrameTime, IntervalGate};
use crate::constants::{CAMERA_START, MIN_CAMERA_HEIGHT, MOVEMENT_SPEED, POSITION_REPORT_INTERVAL_SEC};
use crate::containment::World;
use crate::error::ConfigError;
use crate::input::{Action, KeyLatch, KeyState};
use crate::movement::{step_camera, MoveIntent, MoveOutcome};
use crate::props::{fixed_props, lineup, Placement};
use crate::timeline::{FireworkDraws, FireworkTimeline, TimelineState};

/// Startup configuration. `Default` is the stadium scene.
#[derive(Clone, Debug)]
pub struct WalkthroughParams {
    pub world: World,
    pub timeline: FireworkTimeline,
    pub camera_start: Vec3,
    pub movement_speed: f32,
    pub min_height: f32,
    /// Seconds between camera position log lines.
    pub report_interval: f32,
}

impl Default for WalkthroughParams {
    fn default() -> Self {
        Self {
            world: World::default(),
            timeline: FireworkTimeline::default(),
            camera_start: CAMERA_START,
            movement_speed: MOVEMENT_SPEED,
            min_height: MIN_CAMERA_HEIGHT,
            report_interval: POSITION_REPORT_INTERVAL_SEC,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub moved: MoveOutcome,
    pub fireworks: FireworkDraws,
    pub lineup_visible: bool,
}

pub struct Walkthrough {
    camera: FlyCamera,
    world: World,
    timeline: FireworkTimeline,
    timeline_state: TimelineState,
    trigger: KeyLatch,
    lineup: Vec<Placement>,
    min_height: f32,
    report: IntervalGate,
}

impl Walkthrough {
    pub fn new(params: WalkthroughParams) -> Result<Self, ConfigError> {
        params.world.validate()?;
        params.timeline.validate()?;
        if params.movement_speed.is_nan() || params.movement_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed {
                speed: params.movement_speed,
            });
        }
        if params.min_height.is_nan() || params.min_height < 0.0 {
            return Err(ConfigError::NegativeMinHeight {
                height: params.min_height,
            });
        }
        if params.report_interval.is_nan() || params.report_interval <= 0.0 {
            return Err(ConfigError::NonPositiveReportInterval {
                interval: params.report_interval,
            });
        }
        let mut camera = FlyCamera::new(params.camera_start);
        camera.movement_speed = params.movement_speed;
        Ok(Self {
            camera,
            world: params.world,
            timeline: params.timeline,
            timeline_state: TimelineState::default(),
            trigger: KeyLatch::default(),
            lineup: lineup(),
            min_height: params.min_height,
            report: IntervalGate::new(params.report_interval),
        })
    }

    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn timeline(&self) -> &FireworkTimeline {
        &self.timeline
    }

    pub fn timeline_state(&self) -> TimelineState {
        self.timeline_state
    }

    pub fn look(&mut self, dx: f32, dy: f32) {
        self.camera.process_mouse_movement(dx, dy, true);
    }

    pub fn scroll(&mut self, dy: f32) {
        self.camera.process_mouse_scroll(dy);
    }

    pub fn frame(&mut self, keys: &impl KeyState, time: FrameTime) -> FrameOutput {
        let intent = MoveIntent::from_keys(keys);
        let moved = step_camera(&mut self.camera, &intent, time.dt, &self.world, self.min_height);
        if let MoveOutcome::Blocked(rule) = moved {
            debug!("Move blocked by {rule:?} at {:?}", self.camera.position);
        }

        let pressed = keys.is_down(Action::Fireworks);
        let was_pressed = self.trigger.was_down();
        self.trigger.update(pressed);
        let (state, fireworks) = self
            .timeline
            .step(self.timeline_state, time.now, pressed, was_pressed);
        self.timeline_state = state;
        trace!("{} fireworks visible", fireworks.len());

        if self.report.ready(time.now) {
            let p = self.camera.position;
            info!("Camera position: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
        }

        FrameOutput {
            moved,
            fireworks,
            lineup_visible: keys.is_down(Action::Lineup),
        }
    }

    /// Everything to draw for `out`: fixed props, the lineup when shown and
    /// the visible fireworks.
    pub fn placements(&self, out: &FrameOutput) -> Vec<Placement> {
        let mut placements = Vec::with_capacity(2 + self.lineup.len() + out.fireworks.len());
        placements.extend(fixed_props());
        if out.lineup_visible {
            placements.extend_from_slice(&self.lineup);
        }
        placements.extend(out.fireworks.iter().copied().map(Placement::from));
        placements
    }
}

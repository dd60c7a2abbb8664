use glam::Vec3;

use crate::camera::FlyCamera;
use crate::containment::{Rule, World};
use crate::input::{Action, KeyState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub ascend: bool,
    pub descend: bool,
}

impl MoveIntent {
    pub fn from_keys(keys: &impl KeyState) -> Self {
        Self {
            forward: keys.is_down(Action::Forward),
            backward: keys.is_down(Action::Backward),
            left: keys.is_down(Action::StrafeLeft),
            right: keys.is_down(Action::StrafeRight),
            ascend: keys.is_down(Action::Ascend),
            descend: keys.is_down(Action::Descend),
        }
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.ascend || self.descend
    }
}

/// Position the camera would reach this frame if nothing blocked it.
///
/// Horizontal motion follows `front` flattened onto the ground plane, so
/// walking never changes height. Ascend/descend add a separate vertical term;
/// descent is dropped when it would put the camera at or below `min_height`.
pub fn proposed_position(
    position: Vec3,
    front: Vec3,
    speed: f32,
    dt: f32,
    intent: &MoveIntent,
    min_height: f32,
) -> Vec3 {
    let step = speed * dt;
    let flat_front = Vec3::new(front.x, 0.0, front.z).normalize_or_zero();
    let flat_right = flat_front.cross(Vec3::Y).normalize_or_zero();

    let mut delta = Vec3::ZERO;
    if intent.forward {
        delta += flat_front * step;
    }
    if intent.backward {
        delta -= flat_front * step;
    }
    if intent.left {
        delta -= flat_right * step;
    }
    if intent.right {
        delta += flat_right * step;
    }
    if intent.ascend {
        delta.y += step;
    }
    if intent.descend && position.y - step > min_height {
        delta.y -= step;
    }
    position + delta
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Idle,
    Moved(Rule),
    Blocked(Rule),
}

/// Apply one frame of movement to `camera`, gated by `world`.
pub fn step_camera(
    camera: &mut FlyCamera,
    intent: &MoveIntent,
    dt: f32,
    world: &World,
    min_height: f32,
) -> MoveOutcome {
    if !intent.any() {
        return MoveOutcome::Idle;
    }
    let proposed = proposed_position(
        camera.position,
        camera.forward(),
        camera.movement_speed,
        dt,
        intent,
        min_height,
    );
    let resolution = world.resolve(camera.position, proposed);
    camera.position = resolution.position;
    if resolution.committed() {
        MoveOutcome::Moved(resolution.rule)
    } else {
        MoveOutcome::Blocked(resolution.rule)
    }
}

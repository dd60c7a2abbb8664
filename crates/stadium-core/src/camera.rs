//! Free-look fly camera.
//!
//! Orientation is kept as yaw/pitch in degrees and the orthonormal basis is
//! recomputed whenever either changes. Position is only written by the
//! movement step after containment has approved the move.

use glam::{Mat4, Vec3};

use crate::constants::{
    CAMERA_PITCH_DEG, CAMERA_START, CAMERA_YAW_DEG, MOUSE_SENSITIVITY, MOVEMENT_SPEED,
    PITCH_LIMIT_DEG, ZOOM_DEG, ZOOM_MAX_DEG, ZOOM_MIN_DEG, Z_FAR, Z_NEAR,
};

#[derive(Clone, Debug)]
pub struct FlyCamera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(CAMERA_START)
    }
}

impl FlyCamera {
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: CAMERA_YAW_DEG,
            pitch: CAMERA_PITCH_DEG,
            movement_speed: MOVEMENT_SPEED,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            zoom: ZOOM_DEG,
        };
        camera.update_vectors();
        camera
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.front
    }

    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        }
        self.update_vectors();
    }

    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(ZOOM_MIN_DEG, ZOOM_MAX_DEG);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, Z_NEAR, Z_FAR)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn update_vectors(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

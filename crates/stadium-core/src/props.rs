//! Renderable handles and the small prop placements the core knows about.

use glam::{Mat4, Vec3};

use crate::constants::{BALL_POSITION, BALL_SCALE, PLAYER_SCALE, TROPHY_POSITION, TROPHY_SCALE};

/// Identifies the mesh a placement should be drawn with. Loading the meshes
/// is up to the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelHandle {
    Ball,
    Trophy,
    Player,
    Firework(u8),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub model: ModelHandle,
    pub translation: Vec3,
    pub scale: f32,
}

impl Placement {
    pub const fn new(model: ModelHandle, translation: Vec3, scale: f32) -> Self {
        Self {
            model,
            translation,
            scale,
        }
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.translation) * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

/// Ball and trophy on the centre spot.
pub fn fixed_props() -> [Placement; 2] {
    [
        Placement::new(ModelHandle::Ball, BALL_POSITION, BALL_SCALE),
        Placement::new(ModelHandle::Trophy, TROPHY_POSITION, TROPHY_SCALE),
    ]
}

/// Team lineup shown while the lineup control is held.
pub fn lineup() -> Vec<Placement> {
    let player =
        |x: f32, z: f32| Placement::new(ModelHandle::Player, Vec3::new(x, 0.0, z), PLAYER_SCALE);

    let mut players = Vec::with_capacity(21);
    // strikers
    players.push(player(0.117488, 2.1629));
    players.push(player(0.228094, 4.38508));
    // back two rows of four, stepping towards the near goal
    for row in 0..2 {
        for col in 0..4 {
            players.push(player(-1.15691 + col as f32, 3.87968 - row as f32));
        }
    }
    // front two rows of four
    for row in 0..2 {
        for col in 0..4 {
            players.push(player(-1.06649 + col as f32, 0.108762 + row as f32));
        }
    }
    // keeper
    players.push(player(0.0881392, -0.396865));
    // midfield pair
    for i in 0..2 {
        players.push(player(-0.0881392 + i as f32, 1.65189));
    }
    players
}

use glam::Vec3;

// Scene tuning constants shared by the core and the native viewer.

// World volumes
pub const DOME_CENTER: Vec3 = Vec3::ZERO;
pub const DOME_RADIUS: f32 = 19.3; // sky dome is scaled to ~20 units, keep the camera just inside
pub const DOME_MAX_HEIGHT: f32 = 19.3; // carried with the dome, not consulted by containment
pub const STADIUM_MIN: Vec3 = Vec3::new(-4.8, 0.0, -4.2);
pub const STADIUM_MAX: Vec3 = Vec3::new(4.8, 1.7, 8.1);
pub const FIELD_MIN: Vec3 = Vec3::new(-1.75, 0.0, -1.3);
pub const FIELD_MAX: Vec3 = Vec3::new(1.9, 1.7, 5.2);

// Camera
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 3.0);
pub const CAMERA_YAW_DEG: f32 = -90.0; // looking down -Z
pub const CAMERA_PITCH_DEG: f32 = 0.0;
pub const PITCH_LIMIT_DEG: f32 = 89.0;
pub const MOVEMENT_SPEED: f32 = 3.0; // world units per second
pub const MOUSE_SENSITIVITY: f32 = 0.1; // degrees per pixel
pub const ZOOM_DEG: f32 = 45.0; // vertical fov
pub const ZOOM_MIN_DEG: f32 = 1.0;
pub const ZOOM_MAX_DEG: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

// Descent is refused once the camera would reach this height
pub const MIN_CAMERA_HEIGHT: f32 = 0.12;

// Firework show
pub const FIREWORK_INITIAL_SIZE: f32 = 0.1;
pub const FIREWORK_GROWTH_RATE: f32 = 0.2; // added scale over one full phase
pub const FIREWORK_PHASE_SECS: f32 = 4.0;
pub const FIREWORK_PHASE_COUNT: usize = 3;
pub const FIREWORK_DELAYS: [f32; 5] = [0.0, 0.3, 0.6, 0.9, 1.2]; // seconds after the trigger

// Launch points above the stands
pub const FIREWORK_POSITIONS: [[f32; 3]; 5] = [
    [2.82727, 1.89701, 3.29813],
    [2.66769, 1.78559, 0.45395],
    [-2.68553, 1.87859, 3.6442],
    [-2.9926, 1.80539, 0.855825],
    [-0.230177, 3.02766, 1.84074],
];

// Props
pub const PLAYER_SCALE: f32 = 0.0012; // source meshes are authored in centimetres
pub const BALL_POSITION: Vec3 = Vec3::new(0.229368, 0.0, 1.97711);
pub const BALL_SCALE: f32 = 0.05;
pub const TROPHY_POSITION: Vec3 = Vec3::new(0.229368, 0.0, 1.97711);
pub const TROPHY_SCALE: f32 = 0.05;

// Logging
pub const POSITION_REPORT_INTERVAL_SEC: f32 = 2.0;

#[inline]
pub fn firework_position(index: usize) -> Vec3 {
    Vec3::from(FIREWORK_POSITIONS[index % FIREWORK_POSITIONS.len()])
}

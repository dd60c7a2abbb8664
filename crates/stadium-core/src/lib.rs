pub mod camera;
pub mod clock;
pub mod constants;
pub mod containment;
pub mod error;
pub mod geometry;
pub mod input;
pub mod movement;
pub mod props;
pub mod timeline;
pub mod walkthrough;

pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use containment::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use movement::*;
pub use props::*;
pub use timeline::*;
pub use walkthrough::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

//! Bounding volumes and the point containment predicates used to gate camera
//! movement.
//!
//! All bounds are inclusive on both ends. The predicates are total: any point
//! is either inside or outside, there is no failure mode.

use glam::Vec3;

use crate::error::{Axis, ConfigError};

/// Upper half of a sphere: the domed outer wall of the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hemisphere {
    pub center: Vec3,
    pub radius: f32,
    /// Carried with the dome but not consulted by [`inside_hemisphere`].
    pub max_height: f32,
}

impl Hemisphere {
    pub fn new(center: Vec3, radius: f32, max_height: f32) -> Result<Self, ConfigError> {
        let dome = Self {
            center,
            radius,
            max_height,
        };
        dome.validate()?;
        Ok(dome)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius.is_nan() || self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius {
                radius: self.radius,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        inside_hemisphere(p, self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, ConfigError> {
        let b = Self { min, max };
        b.validate()?;
        Ok(b)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, min, max) in [
            (Axis::X, self.min.x, self.max.x),
            (Axis::Y, self.min.y, self.max.y),
            (Axis::Z, self.min.z, self.max.z),
        ] {
            // written so NaN extents fail too
            if !(min < max) {
                return Err(ConfigError::InvertedBox { axis, min, max });
            }
        }
        Ok(())
    }

    /// True when the x/z footprint of `self` lies within the footprint of `outer`.
    pub fn footprint_within(&self, outer: &Aabb) -> bool {
        self.min.x >= outer.min.x
            && self.max.x <= outer.max.x
            && self.min.z >= outer.min.z
            && self.max.z <= outer.max.z
    }

    #[inline]
    pub fn contains_footprint(&self, p: Vec3) -> bool {
        inside_box_footprint(p, self)
    }

    #[inline]
    pub fn contains_volume(&self, p: Vec3) -> bool {
        inside_box_volume(p, self)
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
        ]
    }
}

/// Within `radius` of the center (all three axes) and not below the center.
/// `max_height` is ignored.
#[inline]
pub fn inside_hemisphere(p: Vec3, h: &Hemisphere) -> bool {
    p.distance(h.center) <= h.radius && p.y >= h.center.y
}

/// Within the x/z extents and not below the floor. There is no ceiling: walls
/// stop sideways exits but not flying over them.
#[inline]
pub fn inside_box_footprint(p: Vec3, b: &Aabb) -> bool {
    (b.min.x..=b.max.x).contains(&p.x) && (b.min.z..=b.max.z).contains(&p.z) && p.y >= b.min.y
}

/// Within the x, y and z extents.
#[inline]
pub fn inside_box_volume(p: Vec3, b: &Aabb) -> bool {
    (b.min.x..=b.max.x).contains(&p.x)
        && (b.min.y..=b.max.y).contains(&p.y)
        && (b.min.z..=b.max.z).contains(&p.z)
}

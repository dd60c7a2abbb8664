//! Movement gating against the nested world volumes.
//!
//! A proposed camera position is checked against an ordered rule table. The
//! first rule whose predicate holds decides whether the move is committed or
//! dropped. Dropped moves leave the camera where it was; nothing is clamped to
//! the boundary.

use glam::Vec3;

use crate::constants::{
    DOME_CENTER, DOME_MAX_HEIGHT, DOME_RADIUS, FIELD_MAX, FIELD_MIN, STADIUM_MAX, STADIUM_MIN,
};
use crate::error::ConfigError;
use crate::geometry::{Aabb, Hemisphere};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct World {
    pub dome: Hemisphere,
    pub stadium: Aabb,
    pub field: Aabb,
}

impl Default for World {
    fn default() -> Self {
        Self {
            dome: Hemisphere {
                center: DOME_CENTER,
                radius: DOME_RADIUS,
                max_height: DOME_MAX_HEIGHT,
            },
            stadium: Aabb {
                min: STADIUM_MIN,
                max: STADIUM_MAX,
            },
            field: Aabb {
                min: FIELD_MIN,
                max: FIELD_MAX,
            },
        }
    }
}

impl World {
    pub fn new(dome: Hemisphere, stadium: Aabb, field: Aabb) -> Result<Self, ConfigError> {
        let world = Self {
            dome,
            stadium,
            field,
        };
        world.validate()?;
        Ok(world)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dome.validate()?;
        self.stadium.validate()?;
        self.field.validate()?;
        if !self.field.footprint_within(&self.stadium) {
            return Err(ConfigError::FieldOutsideStadium);
        }
        Ok(())
    }

    /// First rule of [`Rule::ORDER`] that applies to `proposed`.
    pub fn classify(&self, proposed: Vec3) -> Rule {
        Rule::ORDER
            .into_iter()
            .find(|rule| rule.applies(proposed, self))
            .unwrap_or(Rule::InsideWall)
    }

    pub fn resolve(&self, current: Vec3, proposed: Vec3) -> Resolution {
        let rule = self.classify(proposed);
        let position = match rule.verdict() {
            Verdict::Commit => proposed,
            Verdict::Reject => current,
        };
        Resolution { rule, position }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Commit,
    Reject,
}

/// One row of the movement decision table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    OutsideDome,
    OpenGround,
    InsideField,
    AboveField,
    /// On the stadium footprint at wall height but off the field.
    InsideWall,
}

impl Rule {
    /// Evaluation order. Each predicate assumes all earlier rules did not apply.
    pub const ORDER: [Rule; 5] = [
        Rule::OutsideDome,
        Rule::OpenGround,
        Rule::InsideField,
        Rule::AboveField,
        Rule::InsideWall,
    ];

    pub fn applies(self, p: Vec3, world: &World) -> bool {
        match self {
            Rule::OutsideDome => !world.dome.contains(p),
            Rule::OpenGround => !world.stadium.contains_footprint(p),
            Rule::InsideField => world.field.contains_volume(p),
            Rule::AboveField => p.y > world.field.max.y,
            Rule::InsideWall => true,
        }
    }

    pub fn verdict(self) -> Verdict {
        match self {
            Rule::OutsideDome | Rule::InsideWall => Verdict::Reject,
            Rule::OpenGround | Rule::InsideField | Rule::AboveField => Verdict::Commit,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub rule: Rule,
    pub position: Vec3,
}

impl Resolution {
    #[inline]
    pub fn committed(&self) -> bool {
        self.rule.verdict() == Verdict::Commit
    }
}

/// Returns `proposed` when the move is legal in `world`, otherwise `current`.
#[inline]
pub fn resolve_movement(current: Vec3, proposed: Vec3, world: &World) -> Vec3 {
    world.resolve(current, proposed).position
}

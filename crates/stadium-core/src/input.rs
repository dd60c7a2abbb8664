use fnv::FnvHashSet;
use glam::Vec2;

/// Logical controls, independent of the windowing layer's key codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    Ascend,
    Descend,
    /// Rising edge starts the firework show.
    Fireworks,
    Lineup,
    Quit,
}

/// Per-frame "is this control currently down" query.
pub trait KeyState {
    fn is_down(&self, action: Action) -> bool;
}

#[derive(Clone, Debug, Default)]
pub struct HeldKeys {
    down: FnvHashSet<Action>,
}

impl HeldKeys {
    pub fn press(&mut self, action: Action) {
        self.down.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.down.remove(&action);
    }

    pub fn set(&mut self, action: Action, down: bool) {
        if down {
            self.press(action);
        } else {
            self.release(action);
        }
    }

    pub fn clear(&mut self) {
        self.down.clear();
    }
}

impl KeyState for HeldKeys {
    #[inline]
    fn is_down(&self, action: Action) -> bool {
        self.down.contains(&action)
    }
}

/// Remembers last frame's level of one control to detect rising edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyLatch {
    was_down: bool,
}

impl KeyLatch {
    #[inline]
    pub fn was_down(&self) -> bool {
        self.was_down
    }

    /// Record this frame's level; true on a not-pressed to pressed transition.
    pub fn update(&mut self, down: bool) -> bool {
        let rising = down && !self.was_down;
        self.was_down = down;
        rising
    }
}

/// Turns absolute cursor positions into look offsets.
///
/// The first sample only seeds the tracker so the view does not jump when the
/// cursor enters the window. The y offset is reversed since window y grows
/// downwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct MouseLook {
    last: Option<Vec2>,
}

impl MouseLook {
    pub fn offset(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let current = Vec2::new(x, y);
        let last = self.last.replace(current)?;
        Some(Vec2::new(current.x - last.x, last.y - current.y))
    }

    /// Raw pointer motion from a grabbed cursor, with y reversed the same way.
    pub fn motion(dx: f64, dy: f64) -> Vec2 {
        Vec2::new(dx as f32, -dy as f32)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

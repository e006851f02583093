//! Exponential smoothing used by the pointer-driven animators.

use crate::config::Tuning;
use glam::Vec2;

/// `current += (target - current) * k` once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed {
    pub current: Vec2,
    pub target: Vec2,
    k: f32,
}

impl Smoothed {
    /// `k` is clamped into (0, 1] so a step never overshoots the target.
    pub fn new(initial: Vec2, k: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            k: k.clamp(f32::EPSILON, 1.0),
        }
    }

    #[inline]
    pub fn k(&self) -> f32 {
        self.k
    }

    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * self.k;
        self.current
    }

    #[inline]
    pub fn is_settled(&self, eps: f32) -> bool {
        (self.target - self.current).abs().max_element() <= eps
    }
}

/// Hero decorations drift with the pointer, farther for later elements.
#[derive(Clone, Copy, Debug)]
pub struct PointerFollow {
    pub pos: Smoothed,
    step_px: f32,
}

impl PointerFollow {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Smoothed::new(Vec2::splat(0.5), tuning.hero_follow_k),
            step_px: tuning.hero_follow_step,
        }
    }

    /// Pointer position in client pixels over a viewport of `viewport` size.
    pub fn pointer_moved(&mut self, client: Vec2, viewport: Vec2) {
        if viewport.x > 0.0 && viewport.y > 0.0 {
            self.pos.target = client / viewport;
        }
    }

    #[inline]
    pub fn step(&mut self) {
        self.pos.step();
    }

    /// Pixel offset for decoration `index` (0-based).
    #[inline]
    pub fn offset_for(&self, index: usize) -> Vec2 {
        (self.pos.current - Vec2::splat(0.5)) * ((index + 1) as f32 * self.step_px)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    /// Degrees around the horizontal axis.
    pub rotate_x: f32,
    /// Degrees around the vertical axis.
    pub rotate_y: f32,
    pub scale: f32,
}

/// Hover tilt for one image. `rotation` holds (rotateX, rotateY) in degrees.
#[derive(Clone, Copy, Debug)]
pub struct Tilt {
    pub rotation: Smoothed,
    pub hovering: bool,
    sensitivity: f32,
    hover_scale: f32,
}

impl Tilt {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            rotation: Smoothed::new(Vec2::ZERO, tuning.tilt_k),
            hovering: false,
            sensitivity: tuning.tilt_sensitivity,
            hover_scale: tuning.tilt_hover_scale,
        }
    }

    pub fn enter(&mut self) {
        self.hovering = true;
    }

    pub fn leave(&mut self) {
        self.hovering = false;
        self.rotation.target = Vec2::ZERO;
    }

    /// `local` is the pointer position inside the element box of `size`.
    /// Ignored unless hovering.
    pub fn pointer_moved(&mut self, local: Vec2, size: Vec2) {
        if !self.hovering {
            return;
        }
        let center = size / 2.0;
        self.rotation.target = Vec2::new(
            (local.y - center.y) / self.sensitivity,
            (center.x - local.x) / self.sensitivity,
        );
    }

    pub fn step(&mut self) -> TiltPose {
        let r = self.rotation.step();
        TiltPose {
            rotate_x: r.x,
            rotate_y: r.y,
            scale: if self.hovering { self.hover_scale } else { 1.0 },
        }
    }
}

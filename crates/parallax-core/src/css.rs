//! Inline style values and the stylesheet injected at startup.

use crate::constants::{
    FLOAT_BASE_DURATION_MS, FLOAT_DELAY_STEP_MS, FLOAT_DURATION_STEP_MS,
    REVEAL_OBSERVED_OFFSET_PX,
};
use crate::smoothing::TiltPose;
use glam::Vec2;

pub const REVEAL_TRANSITION: &str =
    "opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1), transform 0.8s cubic-bezier(0.4, 0, 0.2, 1)";
pub const BODY_FADE_TRANSITION: &str = "opacity 0.6s cubic-bezier(0.4, 0, 0.2, 1)";
pub const REVEALED_TRANSFORM: &str = "translateY(0)";
pub const VISIBLE_CLASS: &str = "visible";
pub const SCROLLED_CLASS: &str = "scrolled";

#[inline]
pub fn translate3d_y(y: f64) -> String {
    format!("translate3d(0, {}px, 0)", y)
}

#[inline]
pub fn translate_y(px: f64) -> String {
    format!("translateY({}px)", px)
}

#[inline]
pub fn translate_2d(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

pub fn tilt_transform(pose: TiltPose, perspective_px: f32) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
        perspective_px, pose.rotate_x, pose.rotate_y, pose.scale
    )
}

#[inline]
pub fn opacity(value: f64) -> String {
    format!("{}", value)
}

/// `animation` value for floating decoration `index`; later elements float
/// slower and start later so the group never moves in lockstep.
pub fn float_animation(index: usize) -> String {
    let i = index as u32;
    let duration = FLOAT_BASE_DURATION_MS + i * FLOAT_DURATION_STEP_MS;
    let delay = i * FLOAT_DELAY_STEP_MS;
    format!("gentleFloat {}ms ease-in-out {}ms infinite", duration, delay)
}

/// Global rules: floating keyframes, hidden defaults for observed reveal
/// elements, the `.visible` override and the compositing hint for animated
/// elements.
pub fn global_stylesheet() -> String {
    format!(
        r#"
    @keyframes gentleFloat {{
        0%, 100% {{ transform: translate(0, 0) rotate(0deg); }}
        25% {{ transform: translate(10px, -10px) rotate(2deg); }}
        50% {{ transform: translate(-5px, -20px) rotate(-2deg); }}
        75% {{ transform: translate(-10px, -10px) rotate(1deg); }}
    }}

    .text-content, .image-parallax, .mock-image {{
        opacity: 0;
        transform: translateY({offset}px);
        transition: {transition};
    }}

    .{visible} {{
        opacity: 1 !important;
        transform: translateY(0) !important;
    }}

    * {{
        scroll-behavior: smooth;
    }}

    [data-speed],
    .mock-image,
    .floating-yarn,
    .floating-element {{
        will-change: transform;
        backface-visibility: hidden;
        transform: translateZ(0);
    }}
"#,
        offset = REVEAL_OBSERVED_OFFSET_PX,
        transition = REVEAL_TRANSITION,
        visible = VISIBLE_CLASS,
    )
}

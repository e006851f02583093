pub mod pointer;

pub use pointer::{wire_hero_pointer, wire_tilt_handlers};

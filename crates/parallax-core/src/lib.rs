//! Platform-independent state and arithmetic behind the page effects.
//!
//! Nothing in here touches the DOM. The web front-end reads geometry and
//! pointer samples, feeds them through these types, and writes the results
//! back as inline styles.

pub mod config;
pub mod constants;
pub mod css;
pub mod dispatch;
pub mod effects;
pub mod reveal;
pub mod scene;
pub mod smoothing;

pub use config::*;
pub use dispatch::*;
pub use effects::*;
pub use reveal::*;
pub use scene::*;
pub use smoothing::*;

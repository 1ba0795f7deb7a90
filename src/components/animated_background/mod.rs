//! Decorative animated background for the MarketVision pages.
//!
//! Paints a full-viewport canvas behind the page content with:
//! - A near-black vertical gradient
//! - Translucent wave bands oscillating with wall-clock time
//! - Drifting particles that wrap around the viewport edges
//!
//! The animation core ([`Scene`], [`RenderLoop`]) is independent of the
//! browser: it draws through the [`Surface`] trait and schedules frames
//! through [`FrameHost`], so it runs unchanged against test doubles.
//!
//! # Example
//!
//! ```ignore
//! use marketvision::{AnimatedBackground, Theme};
//!
//! view! { <AnimatedBackground theme=Theme::minimal() seed=Some(7) /> }
//! ```

mod component;
pub mod particles;
pub mod random;
mod render;
pub mod state;
pub mod surface;
#[cfg(test)]
mod testing;
pub mod theme;
mod types;
pub mod waves;

pub use component::AnimatedBackground;
pub use random::RandomSource;
pub use state::{FrameHost, RenderLoop, Scene};
pub use surface::Surface;
pub use theme::Theme;
pub use types::BackdropConfig;

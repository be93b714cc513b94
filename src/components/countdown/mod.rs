//! Countdown screen internals.
//!
//! Two loosely coupled pieces make up the visible behavior:
//! - A once-per-second schedule that recomputes the time remaining until a
//!   fixed target instant and publishes it through a signal.
//! - A canvas particle field whose visible population is the countdown's
//!   total remaining whole minutes, shrinking as the deadline approaches.
//!
//! The pieces communicate only through that derived visible-particle
//! budget; the schedule is the single writer, the field the reader.
//!
//! # Example
//!
//! ```ignore
//! use launch_countdown::{ParticleFieldCanvas, clock};
//!
//! let remaining = start_countdown(target_ms);
//! let budget = Signal::derive(move || clock::visible_budget(remaining.get()));
//!
//! view! { <ParticleFieldCanvas budget=budget fullscreen=true /> }
//! ```

pub mod clock;
mod component;
mod particles;
mod render;
mod schedule;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use particles::{POOL_SIZE, Particle, ParticleField};
pub use schedule::start_countdown;
pub use theme::Theme;

//! Reusable components shared by every page section.

mod button;
mod icon;
mod pill;
mod reveal;
mod section;

pub use button::*;
pub use icon::*;
pub use pill::*;
pub use reveal::*;
pub use section::*;

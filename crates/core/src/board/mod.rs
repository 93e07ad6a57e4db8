#![forbid(unsafe_code)]

mod categorize;
mod detail;
mod drag;
mod filter;
mod geometry;
mod intent;
mod layout;
mod registry;
mod render;
mod session;

pub use categorize::*;
pub use detail::*;
pub use drag::*;
pub use filter::*;
pub use geometry::*;
pub use intent::*;
pub use layout::*;
pub use registry::*;
pub use render::*;
pub use session::*;

#[cfg(test)]
mod tests;

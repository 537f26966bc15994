//! Content models for the PESCE website.
//!
//! Field names serialize as camelCase so the stored JSON matches what the
//! site and admin panel read.

mod blog;
mod chapter;
mod event;
mod gallery;
mod resource;
mod settings;
mod team;

pub use blog::*;
pub use chapter::*;
pub use event::*;
pub use gallery::*;
pub use resource::*;
pub use settings::*;
pub use team::*;

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]
//! Tile cells, section files and the world access contract used by the editing crate.

mod error;
pub use error::*;

mod geometry;
pub use geometry::*;

mod frame_importance;
pub use frame_importance::*;

mod tile;
pub use tile::*;

mod world;
pub use world::*;

pub mod section;
pub use section::{
    CONTAINER_SLOTS, ClipboardHeader, Container, HeaderConvention, ItemStack, RegionHeader, SectionFormat, SectionHeader, SectionReader, place_grid,
};

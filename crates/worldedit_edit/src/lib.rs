#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Clipboard paste, region saves and per-account undo/redo on top of `worldedit_engine`.

pub mod config;
pub use config::EditConfig;

mod storage;
pub use storage::*;

mod counters;
pub use counters::*;

mod protection;
pub use protection::*;

mod viewers;
pub use viewers::*;

mod history;
pub use history::*;

mod paste;
pub use paste::*;

mod editor;
pub use editor::*;

pub use worldedit_engine::{
    ClipboardHeader, Container, EngineError, FrameImportance, HeaderConvention, ItemStack, LiquidKind, MAX_CONTAINERS, Position, Rectangle, Result, SectionFormat,
    SectionHeader, Size, Tile, TileFlags, TileGrid, WallFlags, World,
};

//! Turns coastline polygons into water polygons per tile and a summary of fully
//! seaside tiles.
//!
//! The entry point is [`process_coastlines`], fed by [`loader::load_coastlines`] and
//! writing into a [`storage::TileStore`].

pub mod coastline;
pub mod config;
pub mod loader;
pub mod storage;

pub use coastline::{Coastline, CoastlineReport, process_coastlines};
pub use config::CoastlineConfig;

//! # gridmap-geo: Spatial Tables for Network Components
//!
//! Extracts mapping-ready spatial tables from a power-network model.
//!
//! The network supplies component tables whose geometry travels as
//! well-known-text strings. This crate projects each table onto a stable
//! column set, parses the geometry into `geo-types` values, and tags each
//! result with the network's coordinate reference system, yielding one
//! [`GeoFrame`] per component kind.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gridmap_core::Network;
//! use gridmap_geo::extract_geometries;
//!
//! fn main() -> gridmap_core::GridmapResult<()> {
//!     let mut network = Network::empty();
//!     // ... populate component tables ...
//!
//!     let (buses, lines, links, converters, transformers) =
//!         extract_geometries(&mut network)?;
//!
//!     println!("{} buses at CRS {}", buses.len(), buses.crs());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`extract`] - The component geometry extractor
//! - [`frame`] - The [`GeoFrame`] spatial table and GeoJSON export

pub mod extract;
pub mod frame;

pub use extract::{extract_geometries, extract_geometries_with, ExtractConfig};
pub use frame::GeoFrame;

//! # gridmap-core: Power Network Table Model
//!
//! Provides the tabular network container and shared infrastructure for the
//! gridmap workspace.
//!
//! ## Design Philosophy
//!
//! A network is modeled as a set of **component tables** — one dataframe per
//! component kind (buses, lines, links, transformers) — plus a coordinate
//! reference system identifier. Tables keep the wire-format column names of
//! the source model, including the capitalized identifier columns (`Bus`,
//! `Line`, `Link`, `Transformer`), so schemas stay stable for downstream
//! consumers.
//!
//! Links double as AC/DC converters: a link whose identifier starts with
//! `"conv"` is a conversion asset rather than a transmission link. The
//! split happens at extraction time, not here.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gridmap_core::{Diagnostics, Network};
//! use polars::df;
//!
//! let buses = df!(
//!     "Bus" => ["bus1"],
//!     "v_nom" => [380.0],
//!     "carrier" => ["AC"],
//!     "symbol" => ["substation"],
//!     "under_construction" => [false],
//!     "tags" => [""],
//!     "geometry" => ["POINT (7.1 51.2)"],
//! )?;
//!
//! let mut network = Network::empty();
//! network.buses = buses;
//!
//! let mut diag = Diagnostics::new();
//! network.validate_into(&mut diag);
//! # Ok::<(), polars::prelude::PolarsError>(())
//! ```
//!
//! ## Modules
//!
//! - [`diagnostics`] - Validation and diagnostic reporting
//! - [`error`] - Unified error type for the workspace
//! - [`schema`] - Stable column lists per component table

use polars::prelude::*;

pub mod diagnostics;
pub mod error;
pub mod schema;

pub use diagnostics::{DiagnosticIssue, Diagnostics, Severity};
pub use error::{GridmapError, GridmapResult};

/// Default geographic coordinate reference system (WGS 84).
pub const GEO_CRS: &str = "EPSG:4326";

/// The core power network container: component tables plus CRS metadata.
///
/// Tables are plain dataframes owned by the caller. Operations in this
/// workspace read them; the only documented mutation is the derived `dc`
/// column written onto `buses` during geometry extraction.
#[derive(Debug, Clone)]
pub struct Network {
    pub buses: DataFrame,
    pub lines: DataFrame,
    pub links: DataFrame,
    pub transformers: DataFrame,
    /// Coordinate reference system shared by every geometry column.
    pub crs: String,
}

impl Default for Network {
    fn default() -> Self {
        Self::empty()
    }
}

impl Network {
    /// Create a network from its component tables.
    pub fn new(
        buses: DataFrame,
        lines: DataFrame,
        links: DataFrame,
        transformers: DataFrame,
        crs: impl Into<String>,
    ) -> Self {
        Self {
            buses,
            lines,
            links,
            transformers,
            crs: crs.into(),
        }
    }

    /// Create a network with empty component tables and the default CRS.
    pub fn empty() -> Self {
        Self {
            buses: DataFrame::empty(),
            lines: DataFrame::empty(),
            links: DataFrame::empty(),
            transformers: DataFrame::empty(),
            crs: GEO_CRS.to_string(),
        }
    }

    /// Compute basic statistics about the network
    pub fn stats(&self) -> NetworkStats {
        NetworkStats {
            num_buses: self.buses.height(),
            num_lines: self.lines.height(),
            num_links: self.links.height(),
            num_transformers: self.transformers.height(),
        }
    }

    /// Validate the component tables against their expected schemas.
    ///
    /// Populates the provided `Diagnostics` with any warnings/errors found:
    /// a missing expected column is an error, an empty table or empty CRS is
    /// a warning. Validation never mutates the network.
    pub fn validate_into(&self, diag: &mut Diagnostics) {
        if self.crs.is_empty() {
            diag.add_warning("structure", "network has no coordinate reference system");
        }

        check_table(&self.buses, "buses", schema::BUS_INPUT_COLUMNS, diag);
        check_table(&self.lines, "lines", schema::LINE_INPUT_COLUMNS, diag);
        check_table(&self.links, "links", schema::LINK_INPUT_COLUMNS, diag);
        check_table(
            &self.transformers,
            "transformers",
            schema::TRANSFORMER_INPUT_COLUMNS,
            diag,
        );
    }
}

fn check_table(df: &DataFrame, table: &str, required: &[&str], diag: &mut Diagnostics) {
    if df.height() == 0 {
        diag.add_warning_with_entity("structure", "table is empty", table);
        return;
    }

    let present = df.get_column_names();
    for column in required {
        if !present.contains(column) {
            diag.add_error_with_entity(
                "schema",
                &format!("missing expected column '{}'", column),
                table,
            );
        }
    }
}

/// Statistics about a network's size
#[derive(Debug, Clone, Default)]
pub struct NetworkStats {
    pub num_buses: usize,
    pub num_lines: usize,
    pub num_links: usize,
    pub num_transformers: usize,
}

impl std::fmt::Display for NetworkStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} buses, {} lines, {} links, {} transformers",
            self.num_buses, self.num_lines, self.num_links, self.num_transformers
        )
    }
}

//! Stable column schemas for network component tables.
//!
//! Downstream consumers (plotting, export) rely on fixed column sets in a
//! fixed order, so the projections live here as constants rather than being
//! assembled ad hoc at the call site. `*_INPUT_COLUMNS` lists what a table
//! must carry on the way in; `*_OUTPUT_COLUMNS` lists the attribute columns
//! of the corresponding spatial table (the geometry column is carried
//! separately as parsed geometry, never as an attribute).

use polars::prelude::DataFrame;

use crate::error::{GridmapError, GridmapResult};

/// Identifier column of the bus table.
pub const BUS_ID: &str = "Bus";
/// Identifier column of the line table.
pub const LINE_ID: &str = "Line";
/// Identifier column of the link table (converters included).
pub const LINK_ID: &str = "Link";
/// Identifier column of the transformer table.
pub const TRANSFORMER_ID: &str = "Transformer";

/// Well-known-text geometry column present on every input table.
pub const GEOMETRY: &str = "geometry";
/// Bus energy-carrier column ("DC", "AC", or anything else).
pub const CARRIER: &str = "carrier";
/// Derived DC flag written onto the bus table.
pub const DC: &str = "dc";
/// Link voltage column as supplied by the network model.
pub const VOLTAGE: &str = "voltage";
/// Nominal-voltage column name used on output tables.
pub const V_NOM: &str = "v_nom";

/// Links whose identifier starts with this prefix are AC/DC converter
/// assets, not transmission links.
pub const CONVERTER_PREFIX: &str = "conv";

pub const BUS_INPUT_COLUMNS: &[&str] = &[
    BUS_ID,
    "v_nom",
    CARRIER,
    "symbol",
    "under_construction",
    "tags",
    GEOMETRY,
];

pub const BUS_OUTPUT_COLUMNS: &[&str] =
    &[BUS_ID, "v_nom", DC, "symbol", "under_construction", "tags"];

pub const LINE_INPUT_COLUMNS: &[&str] = &[
    LINE_ID,
    "bus0",
    "bus1",
    "v_nom",
    "i_nom",
    "num_parallel",
    "s_nom",
    "r",
    "x",
    "b",
    "length",
    "underground",
    "under_construction",
    "type",
    "tags",
    GEOMETRY,
];

pub const LINE_OUTPUT_COLUMNS: &[&str] = &[
    LINE_ID,
    "bus0",
    "bus1",
    "v_nom",
    "i_nom",
    "num_parallel",
    "s_nom",
    "r",
    "x",
    "b",
    "length",
    "underground",
    "under_construction",
    "type",
    "tags",
];

pub const LINK_INPUT_COLUMNS: &[&str] = &[
    LINK_ID,
    "bus0",
    "bus1",
    VOLTAGE,
    "p_nom",
    "length",
    "underground",
    "under_construction",
    "tags",
    GEOMETRY,
];

pub const LINK_OUTPUT_COLUMNS: &[&str] = &[
    LINK_ID,
    "bus0",
    "bus1",
    V_NOM,
    "p_nom",
    "length",
    "underground",
    "under_construction",
    "tags",
];

/// Converters keep only the electrical essentials; routing attributes like
/// length and underground status do not apply to a conversion asset.
pub const CONVERTER_OUTPUT_COLUMNS: &[&str] = &[LINK_ID, "bus0", "bus1", V_NOM, "p_nom"];

pub const TRANSFORMER_INPUT_COLUMNS: &[&str] = &[
    TRANSFORMER_ID,
    "bus0",
    "bus1",
    "voltage_bus0",
    "voltage_bus1",
    "s_nom",
    GEOMETRY,
];

pub const TRANSFORMER_OUTPUT_COLUMNS: &[&str] = &[
    TRANSFORMER_ID,
    "bus0",
    "bus1",
    "voltage_bus0",
    "voltage_bus1",
    "s_nom",
];

/// Fail with [`GridmapError::MissingColumn`] unless `df` carries `column`.
pub fn require_column(
    df: &DataFrame,
    table: &'static str,
    column: &'static str,
) -> GridmapResult<()> {
    if df.get_column_names().contains(&column) {
        Ok(())
    } else {
        Err(GridmapError::MissingColumn { table, column })
    }
}

//! Component geometry extraction.
//!
//! Turns the component tables of a [`Network`] into spatial tables for
//! mapping: one [`GeoFrame`] each for buses, lines, links, converters, and
//! transformers. Each output table carries a fixed column projection, the
//! geometry column parsed from well-known text, and the network's CRS.
//!
//! Extraction is a one-shot, synchronous transformation. The single side
//! effect is the derived `dc` column written onto the caller's bus table;
//! everything else is read-only.

use geo_types::Geometry;
use gridmap_core::{schema, GridmapError, GridmapResult, Network};
use polars::prelude::*;
use wkt::TryFromWkt;

use crate::frame::GeoFrame;

/// Configuration for geometry extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Links whose identifier starts with this prefix are routed to the
    /// converters table instead of the links table.
    pub converter_prefix: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            converter_prefix: schema::CONVERTER_PREFIX.to_string(),
        }
    }
}

/// Extract spatial component tables from a network.
///
/// Returns `(buses, lines, links, converters, transformers)`, each carrying
/// the network's CRS. Links are partitioned by the default converter prefix.
///
/// The bus table gains a derived `dc` column (carrier "DC" → true, "AC" →
/// false, anything else → null) as an observable mutation of the input;
/// callers must be aware the network is written to, not just read.
///
/// A missing expected column or a malformed geometry string fails the whole
/// operation; no partial output is returned.
pub fn extract_geometries(
    network: &mut Network,
) -> GridmapResult<(GeoFrame, GeoFrame, GeoFrame, GeoFrame, GeoFrame)> {
    extract_geometries_with(network, &ExtractConfig::default())
}

/// Extract spatial component tables with an explicit configuration.
pub fn extract_geometries_with(
    network: &mut Network,
    cfg: &ExtractConfig,
) -> GridmapResult<(GeoFrame, GeoFrame, GeoFrame, GeoFrame, GeoFrame)> {
    derive_dc_flag(&mut network.buses)?;

    let buses = project_table(
        &network.buses,
        "buses",
        schema::BUS_OUTPUT_COLUMNS,
        schema::BUS_ID,
        &network.crs,
    )?;

    let lines = project_table(
        &network.lines,
        "lines",
        schema::LINE_OUTPUT_COLUMNS,
        schema::LINE_ID,
        &network.crs,
    )?;

    let (plain_links, converter_links) = partition_links(&network.links, cfg)?;
    let links = project_table(
        &plain_links,
        "links",
        schema::LINK_OUTPUT_COLUMNS,
        schema::LINK_ID,
        &network.crs,
    )?;
    let converters = project_table(
        &converter_links,
        "converters",
        schema::CONVERTER_OUTPUT_COLUMNS,
        schema::LINK_ID,
        &network.crs,
    )?;

    let transformers = project_table(
        &network.transformers,
        "transformers",
        schema::TRANSFORMER_OUTPUT_COLUMNS,
        schema::TRANSFORMER_ID,
        &network.crs,
    )?;

    Ok((buses, lines, links, converters, transformers))
}

/// Write the derived `dc` column onto the bus table.
///
/// Carrier "DC" maps to true, "AC" to false. Any other carrier yields a
/// null flag for that row; unknown carriers pass through without error.
fn derive_dc_flag(buses: &mut DataFrame) -> GridmapResult<()> {
    schema::require_column(buses, "buses", schema::CARRIER)?;

    let carrier = buses.column(schema::CARRIER)?.utf8()?;
    let dc: Vec<Option<bool>> = carrier
        .into_iter()
        .map(|value| match value {
            Some("DC") => Some(true),
            Some("AC") => Some(false),
            _ => None,
        })
        .collect();

    buses.with_column(Series::new(schema::DC, dc))?;
    Ok(())
}

/// Split the link table into plain links and converter links.
///
/// Membership is decided solely by the identifier prefix; the two parts are
/// disjoint and together cover every link. Both parts get the `voltage`
/// column renamed to `v_nom`.
fn partition_links(links: &DataFrame, cfg: &ExtractConfig) -> GridmapResult<(DataFrame, DataFrame)> {
    schema::require_column(links, "links", schema::LINK_ID)?;
    schema::require_column(links, "links", schema::VOLTAGE)?;

    let ids = links.column(schema::LINK_ID)?.utf8()?;
    let is_converter: BooleanChunked = ids
        .into_iter()
        .map(|id| Some(id.map_or(false, |s| s.starts_with(cfg.converter_prefix.as_str()))))
        .collect();

    let keep_plain = !&is_converter;
    let mut plain = links.filter(&keep_plain)?;
    let mut converters = links.filter(&is_converter)?;

    plain.rename(schema::VOLTAGE, schema::V_NOM)?;
    converters.rename(schema::VOLTAGE, schema::V_NOM)?;

    Ok((plain, converters))
}

/// Project a component table onto its output columns and parse its geometry.
fn project_table(
    df: &DataFrame,
    table: &'static str,
    columns: &[&'static str],
    id_column: &'static str,
    crs: &str,
) -> GridmapResult<GeoFrame> {
    for &column in columns {
        schema::require_column(df, table, column)?;
    }
    schema::require_column(df, table, schema::GEOMETRY)?;

    let attributes = df.select(columns.iter().copied())?;
    let geometry = parse_geometry_column(df, table, id_column)?;
    GeoFrame::new(attributes, geometry, crs)
}

/// Parse the well-known-text geometry column of a table.
///
/// Fail-fast: the first null or malformed entry aborts the table with an
/// error naming the offending row's identifier.
fn parse_geometry_column(
    df: &DataFrame,
    table: &'static str,
    id_column: &'static str,
) -> GridmapResult<Vec<Geometry<f64>>> {
    let wkt_strings = df.column(schema::GEOMETRY)?.utf8()?;
    let ids = df.column(id_column)?.utf8()?;

    let mut parsed = Vec::with_capacity(df.height());
    for (row, raw) in wkt_strings.into_iter().enumerate() {
        let raw = raw.ok_or_else(|| GridmapError::Geometry {
            table,
            id: row_id(ids, row),
            message: "geometry is null".to_string(),
        })?;
        let geometry = Geometry::<f64>::try_from_wkt_str(raw).map_err(|err| {
            GridmapError::Geometry {
                table,
                id: row_id(ids, row),
                message: err.to_string(),
            }
        })?;
        parsed.push(geometry);
    }
    Ok(parsed)
}

fn row_id(ids: &Utf8Chunked, row: usize) -> String {
    ids.get(row)
        .map(str::to_string)
        .unwrap_or_else(|| row.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_derive_dc_flag_tri_state() {
        let mut buses = df!(
            "Bus" => ["bus1", "bus2", "bus3"],
            "carrier" => ["DC", "AC", "heat"],
        )
        .unwrap();

        derive_dc_flag(&mut buses).unwrap();

        let dc = buses.column("dc").unwrap().bool().unwrap();
        assert_eq!(dc.get(0), Some(true));
        assert_eq!(dc.get(1), Some(false));
        assert_eq!(dc.get(2), None);
    }

    #[test]
    fn test_derive_dc_flag_requires_carrier() {
        let mut buses = df!("Bus" => ["bus1"]).unwrap();
        let err = derive_dc_flag(&mut buses).unwrap_err();
        assert!(matches!(
            err,
            GridmapError::MissingColumn {
                table: "buses",
                column: "carrier"
            }
        ));
    }

    #[test]
    fn test_partition_links_prefix() {
        let links = df!(
            "Link" => ["link1", "conv_link1", "converter2", "dc_link"],
            "voltage" => [320.0, 320.0, 400.0, 525.0],
        )
        .unwrap();

        let (plain, converters) = partition_links(&links, &ExtractConfig::default()).unwrap();

        let plain_ids: Vec<Option<&str>> =
            plain.column("Link").unwrap().utf8().unwrap().into_iter().collect();
        assert_eq!(plain_ids, vec![Some("link1"), Some("dc_link")]);

        let converter_ids: Vec<Option<&str>> = converters
            .column("Link")
            .unwrap()
            .utf8()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(converter_ids, vec![Some("conv_link1"), Some("converter2")]);

        // Both partitions carry the renamed voltage column.
        assert!(plain.get_column_names().contains(&"v_nom"));
        assert!(converters.get_column_names().contains(&"v_nom"));
        assert!(!plain.get_column_names().contains(&"voltage"));
    }

    #[test]
    fn test_partition_links_custom_prefix() {
        let links = df!(
            "Link" => ["hvdc1", "conv1"],
            "voltage" => [320.0, 320.0],
        )
        .unwrap();

        let cfg = ExtractConfig {
            converter_prefix: "hvdc".to_string(),
        };
        let (plain, converters) = partition_links(&links, &cfg).unwrap();
        assert_eq!(plain.height(), 1);
        assert_eq!(converters.height(), 1);
    }

    #[test]
    fn test_parse_geometry_column_fail_fast() {
        let df = df!(
            "Line" => ["line1", "line2"],
            "geometry" => ["LINESTRING (0 0, 1 1)", "LINESTRING (banana)"],
        )
        .unwrap();

        let err = parse_geometry_column(&df, "lines", "Line").unwrap_err();
        match err {
            GridmapError::Geometry { table, id, .. } => {
                assert_eq!(table, "lines");
                assert_eq!(id, "line2");
            }
            other => panic!("expected Geometry error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_geometry_column_null_entry() {
        let df = df!(
            "Bus" => ["bus1"],
            "geometry" => [None::<&str>],
        )
        .unwrap();

        let err = parse_geometry_column(&df, "buses", "Bus").unwrap_err();
        assert!(matches!(err, GridmapError::Geometry { .. }));
    }
}

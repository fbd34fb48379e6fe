//! Spatial component tables.
//!
//! A [`GeoFrame`] pairs an attribute dataframe with a parallel geometry
//! column and the coordinate reference system the coordinates live in. The
//! CRS is table metadata, not a column; the geometry column holds parsed
//! geometry values, never their textual serialization.

use geo_types::Geometry;
use geojson::{Feature, FeatureCollection, JsonObject};
use gridmap_core::{GridmapError, GridmapResult};
use polars::prelude::*;

/// A component table with geometry and CRS metadata.
///
/// Invariant: the geometry column has exactly one entry per table row.
/// Construction goes through [`GeoFrame::new`], which enforces this.
#[derive(Debug, Clone)]
pub struct GeoFrame {
    table: DataFrame,
    geometry: Vec<Geometry<f64>>,
    crs: String,
}

impl GeoFrame {
    /// Create a spatial table from attributes, geometry, and CRS.
    pub fn new(
        table: DataFrame,
        geometry: Vec<Geometry<f64>>,
        crs: impl Into<String>,
    ) -> GridmapResult<Self> {
        if table.height() != geometry.len() {
            return Err(GridmapError::Schema(format!(
                "geometry column has {} entries for {} table rows",
                geometry.len(),
                table.height()
            )));
        }
        Ok(Self {
            table,
            geometry,
            crs: crs.into(),
        })
    }

    /// Attribute columns, in projection order.
    pub fn table(&self) -> &DataFrame {
        &self.table
    }

    /// Parsed geometry values, one per row.
    pub fn geometry(&self) -> &[Geometry<f64>] {
        &self.geometry
    }

    /// Coordinate reference system identifier (e.g. "EPSG:4326").
    pub fn crs(&self) -> &str {
        &self.crs
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.geometry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
    }

    /// Attribute column names, in projection order.
    pub fn column_names(&self) -> Vec<&str> {
        self.table.get_column_names()
    }

    /// Consume the frame, returning its parts.
    pub fn into_inner(self) -> (DataFrame, Vec<Geometry<f64>>, String) {
        (self.table, self.geometry, self.crs)
    }

    /// Serialize to a GeoJSON feature collection.
    ///
    /// One feature per row; attribute columns become feature properties.
    /// The CRS is not embedded (GeoJSON mandates WGS 84); callers working in
    /// another CRS should reproject before export.
    pub fn to_geojson(&self) -> GridmapResult<FeatureCollection> {
        let mut features = Vec::with_capacity(self.len());
        for (row, geometry) in self.geometry.iter().enumerate() {
            let mut properties = JsonObject::new();
            for column in self.table.get_columns() {
                let value = any_value_to_json(&column.get(row)?);
                properties.insert(column.name().to_string(), value);
            }
            features.push(Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(geometry))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            });
        }
        Ok(FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        })
    }
}

fn any_value_to_json(value: &AnyValue) -> serde_json::Value {
    match value {
        AnyValue::Null => serde_json::Value::Null,
        AnyValue::Boolean(b) => serde_json::Value::Bool(*b),
        AnyValue::Utf8(s) => serde_json::Value::String((*s).to_string()),
        AnyValue::Utf8Owned(s) => serde_json::Value::String(s.to_string()),
        AnyValue::Float64(v) => serde_json::Number::from_f64(*v)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        AnyValue::Float32(v) => serde_json::Number::from_f64(f64::from(*v))
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        AnyValue::Int64(v) => serde_json::Value::Number((*v).into()),
        AnyValue::Int32(v) => serde_json::Value::Number((*v).into()),
        AnyValue::UInt64(v) => serde_json::Value::Number((*v).into()),
        AnyValue::UInt32(v) => serde_json::Value::Number((*v).into()),
        other => serde_json::Value::String(other.to_string()),
    }
}

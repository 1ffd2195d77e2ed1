use crate::cell::GeohashCell;
use crate::error::GeohashError;
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use rayon::prelude::*;
use serde_json::json;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Converts one cell to a GeoJSON Polygon feature keyed by its hash.
pub fn cell_to_feature(cell: &GeohashCell) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("geohash".to_string(), json!(cell.hash));
    properties.insert("precision".to_string(), json!(cell.precision));
    properties.insert("latitude".to_string(), json!(cell.latitude()));
    properties.insert("longitude".to_string(), json!(cell.longitude()));

    Feature {
        bbox: Some(vec![
            cell.bbox.min_lon,
            cell.bbox.min_lat,
            cell.bbox.max_lon,
            cell.bbox.max_lat,
        ]),
        geometry: Some(Geometry::new(Value::from(&cell.to_polygon()))),
        id: Some(Id::String(cell.hash.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Trait for exporting collections of [`GeohashCell`]s as GeoJSON.
///
/// Implemented for `[GeohashCell]` and `Vec<GeohashCell>`.
pub trait CellsToGeoJson {
    /// One Polygon feature per cell, in order.
    fn to_feature_collection(&self) -> FeatureCollection;
    /// Serializes the feature collection to a JSON string.
    fn to_geojson_string(&self) -> Result<String, GeohashError>;
    /// Writes the feature collection to a file.
    fn write_geojson(&self, path: impl AsRef<Path>) -> Result<(), GeohashError>;
}

impl CellsToGeoJson for [GeohashCell] {
    fn to_feature_collection(&self) -> FeatureCollection {
        let features: Vec<Feature> = self.par_iter().map(cell_to_feature).collect();
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    fn to_geojson_string(&self) -> Result<String, GeohashError> {
        serde_json::to_string(&self.to_feature_collection())
            .map_err(|e| GeohashError::IoError(e.to_string()))
    }

    fn write_geojson(&self, path: impl AsRef<Path>) -> Result<(), GeohashError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.to_feature_collection())
            .map_err(|e| GeohashError::IoError(e.to_string()))?;
        writer.flush()?;
        Ok(())
    }
}

impl CellsToGeoJson for Vec<GeohashCell> {
    fn to_feature_collection(&self) -> FeatureCollection {
        self.as_slice().to_feature_collection()
    }

    fn to_geojson_string(&self) -> Result<String, GeohashError> {
        self.as_slice().to_geojson_string()
    }

    fn write_geojson(&self, path: impl AsRef<Path>) -> Result<(), GeohashError> {
        self.as_slice().write_geojson(path)
    }
}

pub mod geojson;

pub use self::geojson::{CellsToGeoJson, cell_to_feature};

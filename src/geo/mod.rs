mod error;
mod latlng;

pub use error::GeoError;
pub use latlng::LatLng;

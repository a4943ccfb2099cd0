use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GeoError {
    #[error("Coordinate is not finite: lat={lat}, lng={lng}")]
    NonFinite { lat: f64, lng: f64 },
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::GeoError;

/// An immutable pair of latitude and longitude, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees, within [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, within [-180, 180)
    pub lng: f64,
}

impl LatLng {
    /// Construct a point, clamping latitude to [-90, 90] and wrapping
    /// longitude into [-180, 180).
    ///
    /// Non-finite inputs are passed through unchanged; use [`LatLng::try_new`]
    /// to reject them instead.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lng: wrap_longitude(lng),
        }
    }

    /// Like [`LatLng::new`], but fails on NaN or infinite input.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeoError::NonFinite { lat, lng });
        }
        Ok(Self::new(lat, lng))
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Wrap a longitude into [-180, 180). Leaves non-finite values alone.
fn wrap_longitude(lng: f64) -> f64 {
    if !lng.is_finite() {
        return lng;
    }
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

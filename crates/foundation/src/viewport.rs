use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::LatLon;

/// Camera parameters for a map view.
///
/// Invariant (checked by [`Viewport::validate`], never enforced by clamping):
/// - `zoom >= 0`
/// - `center.lat ∈ [-90, 90]`, `center.lon ∈ [-180, 180]`
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLon,
    pub zoom: f64,
    #[serde(default)]
    pub bearing: f64,
    #[serde(default)]
    pub pitch: f64,
}

impl Viewport {
    pub const fn new(center: LatLon, zoom: f64, bearing: f64, pitch: f64) -> Self {
        Self {
            center,
            zoom,
            bearing,
            pitch,
        }
    }

    /// Flat camera (no bearing, no pitch).
    pub const fn looking_at(center: LatLon, zoom: f64) -> Self {
        Self::new(center, zoom, 0.0, 0.0)
    }

    pub fn validate(&self) -> Result<(), ViewportError> {
        validate_position(self.center)?;
        check_zoom(self.zoom)?;
        check_finite("bearing", self.bearing)?;
        check_finite("pitch", self.pitch)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::looking_at(LatLon::new(35.0, 15.0), 3.0)
    }
}

/// Camera change reported by the render surface after a pan, zoom or rotate.
///
/// The surface always reports where the camera is centred; the remaining
/// fields may be omitted and are then inherited from the previous viewport.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportEvent {
    pub center: LatLon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
}

impl ViewportEvent {
    pub const fn at(center: LatLon) -> Self {
        Self {
            center,
            zoom: None,
            bearing: None,
            pitch: None,
        }
    }

    pub const fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub const fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = Some(bearing);
        self
    }

    pub const fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// The viewport this event describes, filling omitted fields from `previous`.
    pub fn resolve(&self, previous: &Viewport) -> Viewport {
        Viewport {
            center: self.center,
            zoom: self.zoom.unwrap_or(previous.zoom),
            bearing: self.bearing.unwrap_or(previous.bearing),
            pitch: self.pitch.unwrap_or(previous.pitch),
        }
    }

    /// Boundary validation for events arriving from outside the process.
    pub fn validate(&self) -> Result<(), ViewportError> {
        validate_position(self.center)?;
        if let Some(zoom) = self.zoom {
            check_zoom(zoom)?;
        }
        if let Some(bearing) = self.bearing {
            check_finite("bearing", bearing)?;
        }
        if let Some(pitch) = self.pitch {
            check_finite("pitch", pitch)?;
        }
        Ok(())
    }
}

impl From<Viewport> for ViewportEvent {
    fn from(v: Viewport) -> Self {
        Self {
            center: v.center,
            zoom: Some(v.zoom),
            bearing: Some(v.bearing),
            pitch: Some(v.pitch),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
    #[error("latitude {0} outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} outside [-180, 180]")]
    Longitude(f64),
    #[error("zoom {0} is negative")]
    NegativeZoom(f64),
}

fn check_finite(field: &'static str, v: f64) -> Result<(), ViewportError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ViewportError::NonFinite { field })
    }
}

/// Finite and within WGS84 latitude/longitude ranges.
pub fn validate_position(center: LatLon) -> Result<(), ViewportError> {
    check_finite("latitude", center.lat)?;
    check_finite("longitude", center.lon)?;
    if !center.lat_in_range() {
        return Err(ViewportError::Latitude(center.lat));
    }
    if !center.lon_in_range() {
        return Err(ViewportError::Longitude(center.lon));
    }
    Ok(())
}

fn check_zoom(zoom: f64) -> Result<(), ViewportError> {
    check_finite("zoom", zoom)?;
    if zoom < 0.0 {
        return Err(ViewportError::NegativeZoom(zoom));
    }
    Ok(())
}

use std::net::SocketAddr;

use clap::Parser;
use foundation::geo::LatLon;
use foundation::viewport::Viewport;

use crate::error::ServerError;

pub const DEFAULT_STYLE_URL: &str = "https://demotiles.maplibre.org/style.json";

/// Every flag can also come from the environment; flags win.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Interactive map with toggleable layers")]
pub struct Config {
    /// Listen address
    #[arg(long, env = "MAP_ADDR", default_value = "0.0.0.0:8050")]
    pub addr: SocketAddr,

    /// Basemap style handed to the render surface
    #[arg(long, env = "MAP_STYLE_URL", default_value = DEFAULT_STYLE_URL)]
    pub style_url: String,

    /// Startup camera latitude (degrees)
    #[arg(long, env = "MAP_CENTER_LAT", default_value_t = 35.0, allow_negative_numbers = true)]
    pub center_lat: f64,

    /// Startup camera longitude (degrees)
    #[arg(long, env = "MAP_CENTER_LON", default_value_t = 15.0, allow_negative_numbers = true)]
    pub center_lon: f64,

    /// Startup zoom level
    #[arg(long, env = "MAP_ZOOM", default_value_t = 3.0)]
    pub zoom: f64,

    /// Marker click radius (degrees)
    #[arg(long, env = "MAP_PICK_TOLERANCE_DEG", default_value_t = 0.5)]
    pub pick_tolerance_deg: f64,
}

impl Config {
    /// The startup viewport, rejected if it breaks the viewport invariants.
    pub fn initial_viewport(&self) -> Result<Viewport, ServerError> {
        let center = LatLon::new(self.center_lat, self.center_lon);
        let viewport = Viewport::looking_at(center, self.zoom);
        viewport.validate()?;
        Ok(viewport)
    }

    pub fn pick_tolerance(&self) -> Result<f64, ServerError> {
        let t = self.pick_tolerance_deg;
        if t.is_finite() && t >= 0.0 {
            Ok(t)
        } else {
            Err(ServerError::PickTolerance(t))
        }
    }
}

use foundation::color::Rgb;
use serde::Serialize;

const TEAL: Rgb = Rgb::new(0x00, 0x88, 0x88);
const VERMILION: Rgb = Rgb::new(0xff, 0x33, 0x00);

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RegionStyle {
    pub fill_color: Rgb,
    pub fill_opacity: f64,
    pub outline_color: Rgb,
    pub outline_width: f64,
}

impl RegionStyle {
    pub const fn new(
        fill_color: Rgb,
        fill_opacity: f64,
        outline_color: Rgb,
        outline_width: f64,
    ) -> Self {
        Self {
            fill_color,
            fill_opacity,
            outline_color,
            outline_width,
        }
    }
}

impl Default for RegionStyle {
    fn default() -> Self {
        Self::new(TEAL, 0.4, TEAL, 2.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    /// Circle radius in screen pixels.
    pub radius: f64,
    pub color: Rgb,
    pub stroke_color: Rgb,
    pub stroke_width: f64,
}

impl MarkerStyle {
    pub const fn new(radius: f64, color: Rgb, stroke_color: Rgb, stroke_width: f64) -> Self {
        Self {
            radius,
            color,
            stroke_color,
            stroke_width,
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::new(8.0, VERMILION, Rgb::WHITE, 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkerStyle, RegionStyle};

    #[test]
    fn default_styles_serialise_with_hex_colors() {
        let json = serde_json::to_value(RegionStyle::default()).unwrap();
        assert_eq!(json["fill_color"], "#008888");
        assert_eq!(json["fill_opacity"].as_f64(), Some(0.4));

        let json = serde_json::to_value(MarkerStyle::default()).unwrap();
        assert_eq!(json["color"], "#ff3300");
        assert_eq!(json["radius"].as_f64(), Some(8.0));
    }
}

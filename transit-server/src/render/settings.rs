//! Map rendering configuration.

use serde::Deserialize;

use super::svg::{Color, Point};

/// Error returned when render settings are out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderSettingsError {
    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("padding {padding} must be less than half of the smaller canvas side {side}")]
    PaddingTooLarge { padding: f64, side: f64 },
}

/// Canvas size, stroke widths, fonts and colors for the route map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: Point,
    pub stop_label_font_size: u32,
    pub stop_label_offset: Point,
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    /// Route colors, assigned to buses in name order and cycled.
    #[serde(default)]
    pub color_palette: Vec<Color>,
}

impl RenderSettings {
    /// Check that sizes are non-negative and the padding fits the canvas.
    pub fn validate(&self) -> Result<(), RenderSettingsError> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
            ("line_width", self.line_width),
            ("stop_radius", self.stop_radius),
            ("underlayer_width", self.underlayer_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RenderSettingsError::Negative { field, value });
            }
        }

        let side = self.width.min(self.height);
        if side > 0.0 && self.padding >= side / 2.0 {
            return Err(RenderSettingsError::PaddingTooLarge {
                padding: self.padding,
                side,
            });
        }
        Ok(())
    }

    /// Palette color for the `index`-th drawn route.
    pub fn route_color(&self, index: usize) -> Color {
        if self.color_palette.is_empty() {
            return Color::None;
        }
        self.color_palette[index % self.color_palette.len()].clone()
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: Point::new(7.0, 15.0),
            stop_label_font_size: 20,
            stop_label_offset: Point::new(7.0, -3.0),
            underlayer_color: Color::Rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![
                Color::from("green"),
                Color::Rgb(255, 160, 0),
                Color::from("red"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json() {
        let json = r#"{
            "width": 600, "height": 400, "padding": 50,
            "line_width": 14, "stop_radius": 5,
            "bus_label_font_size": 20, "bus_label_offset": [7, 15],
            "stop_label_font_size": 18, "stop_label_offset": [7, -3],
            "underlayer_color": [255, 255, 255, 0.85], "underlayer_width": 3,
            "color_palette": ["green", [255, 160, 0], "red"]
        }"#;
        let settings: RenderSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.width, 600.0);
        assert_eq!(settings.stop_label_font_size, 18);
        assert_eq!(settings.stop_label_offset, Point::new(7.0, -3.0));
        assert_eq!(settings.underlayer_color, Color::Rgba(255, 255, 255, 0.85));
        assert_eq!(settings.color_palette.len(), 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn missing_palette_is_empty() {
        let settings: RenderSettings = serde_json::from_value(serde_json::json!({
            "width": 100, "height": 100, "padding": 10,
            "line_width": 1, "stop_radius": 1,
            "bus_label_font_size": 1, "bus_label_offset": [0, 0],
            "stop_label_font_size": 1, "stop_label_offset": [0, 0],
            "underlayer_color": "white", "underlayer_width": 1
        }))
        .unwrap();
        assert!(settings.color_palette.is_empty());
        assert_eq!(settings.route_color(3), Color::None);
    }

    #[test]
    fn palette_cycles() {
        let settings = RenderSettings::default();
        assert_eq!(settings.route_color(0), Color::from("green"));
        assert_eq!(settings.route_color(1), Color::Rgb(255, 160, 0));
        assert_eq!(settings.route_color(3), Color::from("green"));
    }

    #[test]
    fn rejects_negative_sizes() {
        let settings = RenderSettings {
            line_width: -1.0,
            ..RenderSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(RenderSettingsError::Negative {
                field: "line_width",
                value: -1.0
            })
        );
    }

    #[test]
    fn rejects_oversized_padding() {
        let settings = RenderSettings {
            width: 100.0,
            height: 400.0,
            padding: 50.0,
            ..RenderSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(RenderSettingsError::PaddingTooLarge { .. })
        ));
    }
}

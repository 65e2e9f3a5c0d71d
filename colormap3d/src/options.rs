use crate::error::{ColorMapError, Result};

/// Layout of the static scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub point_size: u32,
    /// Rotation about the vertical axis, radians.
    pub yaw: f64,
    /// Tilt towards the viewer, radians.
    pub pitch: f64,
}

impl PlotOptions {
    pub fn new() -> PlotOptionsBuilder {
        PlotOptionsBuilder::default()
    }
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 700,
            title: "3D Color Map".to_string(),
            point_size: 3,
            yaw: 0.7,
            pitch: 0.3,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlotOptionsBuilder {
    options: PlotOptions,
}

impl PlotOptionsBuilder {
    pub fn width(mut self, width: u32) -> Self {
        self.options.width = width;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.options.height = height;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = title.into();
        self
    }

    pub fn point_size(mut self, point_size: u32) -> Self {
        self.options.point_size = point_size;
        self
    }

    pub fn yaw(mut self, yaw: f64) -> Self {
        self.options.yaw = yaw;
        self
    }

    pub fn pitch(mut self, pitch: f64) -> Self {
        self.options.pitch = pitch;
        self
    }

    pub fn build(self) -> Result<PlotOptions> {
        let o = self.options;
        if o.width == 0 || o.height == 0 {
            return Err(ColorMapError::InvalidOptions(format!(
                "plot size must be non-zero, got {}x{}",
                o.width, o.height
            )));
        }
        if o.point_size == 0 {
            return Err(ColorMapError::InvalidOptions(
                "point size must be at least 1".to_string(),
            ));
        }
        if !o.yaw.is_finite() || !o.pitch.is_finite() {
            return Err(ColorMapError::InvalidOptions(
                "yaw and pitch must be finite".to_string(),
            ));
        }
        Ok(o)
    }
}

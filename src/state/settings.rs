/// Render and export tunables
///
/// There is no settings file; these are the values every run uses.

/// PDF user space is 72 points per inch
const POINTS_PER_INCH: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Magnification used for the on-screen preview raster
    pub preview_scale: f32,
    /// Resolution of exported images
    pub export_dpi: u32,
    /// JPEG quality (1-100) for JPG output
    pub jpeg_quality: u8,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            preview_scale: 1.5,
            export_dpi: 200,
            jpeg_quality: 95,
        }
    }
}

impl RenderSettings {
    /// Scale factor that turns page points into export pixels
    pub fn export_scale(&self) -> f32 {
        self.export_dpi as f32 / POINTS_PER_INCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_scale_follows_dpi() {
        let settings = RenderSettings { export_dpi: 144, ..RenderSettings::default() };
        assert!((settings.export_scale() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.preview_scale, 1.5);
        assert_eq!(settings.export_dpi, 200);
    }
}

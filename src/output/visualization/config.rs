//! Plot configuration for band diagrams

use plotters::prelude::*;

/// Configuration for customizing band-diagram plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `conduction_color`, `valence_color`, `fermi_color`, `vacuum_color`:
///   per-band line colors
/// - `series_colors`: Optional palette for comparison plots (one per profile)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use junction_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::band_diagram("Al / p-Si Contact");
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// config.vacuum_color = BLACK;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Band Diagram")
    pub title: String,

    /// X-axis label (default: "Position (nm)")
    pub xlabel: String,

    /// Y-axis label (default: "Energy (eV)")
    pub ylabel: String,

    /// Conduction band color (default: BLUE)
    pub conduction_color: RGBColor,

    /// Valence band color (default: RED)
    pub valence_color: RGBColor,

    /// Fermi level color (default: BLACK)
    pub fermi_color: RGBColor,

    /// Vacuum level color (default: GREEN)
    pub vacuum_color: RGBColor,

    /// Optional colors for comparison plots (one per profile)
    ///
    /// If None, uses default palette: [BLUE, RED, GREEN, MAGENTA, CYAN, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Band Diagram".to_string(),
            xlabel: "Position (nm)".to_string(),
            ylabel: "Energy (eV)".to_string(),
            conduction_color: BLUE,
            valence_color: RED,
            fermi_color: BLACK,
            vacuum_color: GREEN,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for a band diagram with optional custom title
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // With custom title (no Some() needed!)
    /// let config = PlotConfig::band_diagram("p-n Silicon Junction");
    /// let config = PlotConfig::band_diagram(format!("Na = 1e{}", exp));
    ///
    /// // With default title
    /// let config = PlotConfig::band_diagram(NO_TITLE);
    /// ```
    pub fn band_diagram(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Band Diagram".to_string());
        config
    }

    /// Create config for comparison plots with custom colors
    pub fn comparison_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.series_colors = Some(colors);
        config
    }

    /// Get color for the profile at index i in a comparison plot
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if series_index < colors.len() {
                return colors[series_index];
            }
        }

        // Default palette
        let default_colors = vec![
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert_eq!(config.xlabel, "Position (nm)");
        assert!(config.show_grid);
    }

    #[test]
    fn test_band_diagram_config_default() {
        let config = PlotConfig::band_diagram(NO_TITLE);
        assert_eq!(config.title, "Band Diagram");
    }

    #[test]
    fn test_band_diagram_config_with_str() {
        let config = PlotConfig::band_diagram("Al / p-Si Contact");
        assert_eq!(config.title, "Al / p-Si Contact");
    }

    #[test]
    fn test_band_diagram_config_with_string() {
        let config = PlotConfig::band_diagram(format!("Na = 1e{}", 17));
        assert_eq!(config.title, "Na = 1e17");
    }

    #[test]
    fn test_get_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), BLUE);
        assert_eq!(config.get_series_color(1), RED);
        assert_eq!(config.get_series_color(8), BLUE); // Wraparound
    }

    #[test]
    fn test_get_series_color_custom() {
        use plotters::style::full_palette::{LIGHTBLUE, ORANGE};
        let config = PlotConfig::comparison_colors(vec![ORANGE, LIGHTBLUE]);
        assert_eq!(config.get_series_color(0), ORANGE);
        assert_eq!(config.get_series_color(1), LIGHTBLUE);
    }
}

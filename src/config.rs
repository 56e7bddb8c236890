use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

/// Constants shared by the hydraulic parameters and the scour equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Gravitational acceleration [m/s²].
    pub gravity: f64,
    /// Water density [kg/m³].
    pub water_density: f64,
    /// Critical Shields parameter [-].
    pub critical_shields: f64,
    /// Strickler coefficient in the bed shear stress estimate.
    pub strickler: f64,
    /// Leading coefficient of the Komura (1966) live-bed equation.
    pub komura_coefficient: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            water_density: 1000.0,
            critical_shields: 0.047,
            strickler: 21.1,
            komura_coefficient: 1.45,
        }
    }
}

// ---------------------------------------------------------------------------
// Figure settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FigureSettings {
    /// Width of one square panel in pixels.
    pub panel_size: u32,
    /// Height reserved under the grid for the legend.
    pub legend_height: u32,
    /// Both axes run from 0 to this depth [m].
    pub axis_max: f64,
    pub marker_size: i32,
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            panel_size: 600,
            legend_height: 140,
            axis_max: 0.5,
            marker_size: 6,
        }
    }
}

impl FigureSettings {
    /// Full image size: a 2×2 grid of panels plus the legend strip.
    pub fn image_size(&self) -> (u32, u32) {
        (2 * self.panel_size, 2 * self.panel_size + self.legend_height)
    }
}

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Everything a run needs. The paths are relative to the working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub constants: PhysicalConstants,
    pub figure: FigureSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("../Data/CIVIL_608_Data.csv"),
            output_path: PathBuf::from("../Figures/Scour_depth_live_bed.png"),
            constants: PhysicalConstants::default(),
            figure: FigureSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_leaves_room_for_legend() {
        let fig = FigureSettings::default();
        let (w, h) = fig.image_size();
        assert_eq!(w, 1200);
        assert_eq!(h, 1200 + fig.legend_height);
    }
}

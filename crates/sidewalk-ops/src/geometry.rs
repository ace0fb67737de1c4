//! Printer geometry.

use serde::{Deserialize, Serialize};

/// Default printable width in inches.
pub const DEFAULT_WIDTH_INCHES: u32 = 24;

/// Default printer resolution in dots per inch.
pub const DEFAULT_DPI: u32 = 4;

/// Physical print width and resolution.
///
/// # Example
///
/// ```rust
/// use sidewalk_ops::PrinterGeometry;
///
/// assert_eq!(PrinterGeometry::default().target_width(), 96);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterGeometry {
    /// Printable width in inches.
    pub width_inches: u32,
    /// Dots per inch across the print width.
    pub dpi: u32,
}

impl PrinterGeometry {
    /// Creates a geometry.
    pub const fn new(width_inches: u32, dpi: u32) -> Self {
        Self { width_inches, dpi }
    }

    /// Pixel width an image must have to fill the print width.
    pub const fn target_width(&self) -> u32 {
        self.width_inches.saturating_mul(self.dpi)
    }
}

impl Default for PrinterGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH_INCHES, DEFAULT_DPI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_width() {
        assert_eq!(PrinterGeometry::new(10, 30).target_width(), 300);
        assert_eq!(PrinterGeometry::new(0, 30).target_width(), 0);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let g: PrinterGeometry = serde_yaml::from_str("dpi: 8").unwrap();
        assert_eq!(g, PrinterGeometry::new(DEFAULT_WIDTH_INCHES, 8));
    }
}

//! The fixed 4K classification criteria.

use std::path::Path;

use crate::types::Resolution;

/// Resolution threshold and the file extensions treated as images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criteria {
    /// Minimum width for an image to count as 4K
    pub min_width: u32,
    /// Minimum height for an image to count as 4K
    pub min_height: u32,
    /// Lower-case extensions, without the dot
    pub extensions: &'static [&'static str],
}

impl Criteria {
    /// UHD 4K (3840x2160) over the common raster formats plus SVG and ICO.
    pub const STANDARD: Criteria = Criteria {
        min_width: 3840,
        min_height: 2160,
        extensions: &[
            "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp", "svg", "ico",
        ],
    };

    /// Below 4K if either side falls short.
    pub fn is_low_res(&self, resolution: Resolution) -> bool {
        resolution.width < self.min_width || resolution.height < self.min_height
    }

    /// Case-insensitive extension match.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.extensions.iter().any(|known| *known == ext_lower)
            })
            .unwrap_or(false)
    }

    /// The threshold as a resolution, e.g. for display.
    pub fn threshold(&self) -> Resolution {
        Resolution::new(self.min_width, self.min_height)
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self::STANDARD
    }
}

//! Cleanup configuration types

/// Configuration for the logo cleanup pipeline.
///
/// The thresholds are tuned constants, not derived from the image; they are
/// exposed here so the heuristics can be exercised against inputs of
/// different resolutions.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// A pixel whose red, green and blue channels all exceed this value is
    /// treated as background and made transparent.
    pub white_threshold: u8,
    /// A pixel with alpha below this value is treated as background
    /// regardless of color.
    pub alpha_threshold: u8,
    /// Number of consecutive empty rows after the first content block that
    /// must be exceeded before the image is split.
    pub gap_threshold: u32,
    /// Whether to reject decoded images with a zero dimension.
    pub validate_dimensions: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            white_threshold: 200,
            alpha_threshold: 50,
            gap_threshold: 10,
            validate_dimensions: true,
        }
    }
}

impl CleanupConfig {
    pub fn builder() -> CleanupConfigBuilder {
        CleanupConfigBuilder::default()
    }
}

/// Builder for CleanupConfig
#[derive(Default)]
pub struct CleanupConfigBuilder {
    white_threshold: Option<u8>,
    alpha_threshold: Option<u8>,
    gap_threshold: Option<u32>,
    validate_dimensions: Option<bool>,
}

impl CleanupConfigBuilder {
    pub fn white_threshold(mut self, threshold: u8) -> Self {
        self.white_threshold = Some(threshold);
        self
    }

    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = Some(threshold);
        self
    }

    pub fn gap_threshold(mut self, threshold: u32) -> Self {
        self.gap_threshold = Some(threshold);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> CleanupConfig {
        let default = CleanupConfig::default();
        CleanupConfig {
            white_threshold: self.white_threshold.unwrap_or(default.white_threshold),
            alpha_threshold: self.alpha_threshold.unwrap_or(default.alpha_threshold),
            gap_threshold: self.gap_threshold.unwrap_or(default.gap_threshold),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
        }
    }
}

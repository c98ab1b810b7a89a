/// Validation configuration

/// Settings for comparing device readbacks against generated reference data
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Maximum number of channel mismatches kept per subresource report.
    /// Mismatches past this limit are still counted.
    pub max_reported_mismatches: usize,
    /// Log every kept mismatch at WARN severity
    pub log_mismatches: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_reported_mismatches: 64,
            log_mismatches: true,
        }
    }
}

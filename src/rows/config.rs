//! Configuration for row conversion

use serde::{Deserialize, Serialize};

/// Configuration for converting external rows to and from structures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowConfig {
    /// Omit null-valued attributes when importing a row
    pub drop_nulls: bool,

    /// Maximum number of attributes accepted per row (0 = unlimited)
    pub max_attributes: usize,

    /// Import unsigned integers above `i64::MAX` as floats instead of rejecting them
    pub large_integers_as_float: bool,

    /// Emit null-valued attributes when exporting a structure
    pub include_nulls_on_export: bool,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            drop_nulls: false,
            max_attributes: 0, // Unlimited
            large_integers_as_float: true,
            include_nulls_on_export: true,
        }
    }
}

impl RowConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> RowConfigBuilder {
        RowConfigBuilder::default()
    }
}

/// Builder for RowConfig
#[derive(Debug, Default)]
pub struct RowConfigBuilder {
    config: RowConfig,
}

impl RowConfigBuilder {
    /// Drop null-valued attributes on import
    pub fn drop_nulls(mut self, drop: bool) -> Self {
        self.config.drop_nulls = drop;
        self
    }

    /// Set the maximum attribute count per row (0 = unlimited)
    pub fn max_attributes(mut self, max: usize) -> Self {
        self.config.max_attributes = max;
        self
    }

    /// Accept out-of-range unsigned integers as floats
    pub fn large_integers_as_float(mut self, widen: bool) -> Self {
        self.config.large_integers_as_float = widen;
        self
    }

    /// Keep null-valued attributes on export
    pub fn include_nulls_on_export(mut self, include: bool) -> Self {
        self.config.include_nulls_on_export = include;
        self
    }

    /// Build the configuration
    pub fn build(self) -> RowConfig {
        self.config
    }
}

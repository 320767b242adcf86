//! Configuration for cellset
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for building and querying cells
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Cell Configuration
    // -------------------------------------------------------------------------
    /// Stride (maximum element length in bytes) for cells loaded without an
    /// explicit stride
    pub default_stride: usize,

    /// Largest stride accepted from a snapshot header
    pub max_stride: usize,

    // -------------------------------------------------------------------------
    // Batch Query Configuration
    // -------------------------------------------------------------------------
    /// Minimum number of queries before a batch is split across workers
    pub parallel_threshold: usize,

    /// Number of worker threads used for batch queries
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_stride: 80,
            max_stride: 4096,
            parallel_threshold: 4096,
            workers: 4,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the default stride for new cells
    pub fn default_stride(mut self, stride: usize) -> Self {
        self.config.default_stride = stride;
        self
    }

    /// Set the largest stride a snapshot may declare
    pub fn max_stride(mut self, stride: usize) -> Self {
        self.config.max_stride = stride;
        self
    }

    /// Set the query count at which batches go parallel
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Set the number of batch workers
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{parse_config, ConfigError};

/// Metadata describing the buffer library being characterized.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BufferLibConfig {
    /// Number of buffer subcircuits, indexed `0..buffer_num`.
    pub buffer_num: usize,
}

impl BufferLibConfig {
    #[inline]
    pub fn indices(&self) -> std::ops::Range<usize> {
        0..self.buffer_num
    }
}

pub fn parse_buffer_config(path: impl AsRef<Path>) -> Result<BufferLibConfig, ConfigError> {
    parse_config(path)
}

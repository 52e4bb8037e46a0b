//! Region configuration parameters.

/// Configuration for a [`Region`](crate::Region).
///
/// Immutable once the region is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionConfig {
    /// How many resets a handle survives.
    ///
    /// Default: 1, so handles from the current and the previous
    /// generation resolve. The caller buffer is split into
    /// `max_generation_age + 1` equal banks, one per live generation,
    /// and each generation only allocates from its own bank.
    pub max_generation_age: u32,
}

impl RegionConfig {
    /// Default generation age: current plus previous.
    pub const DEFAULT_MAX_GENERATION_AGE: u32 = 1;

    /// Config with the given generation age.
    pub fn new(max_generation_age: u32) -> Self {
        Self { max_generation_age }
    }

    /// Number of banks the buffer is divided into.
    pub fn bank_count(&self) -> usize {
        (self.max_generation_age as usize).saturating_add(1)
    }

    /// Bytes each generation may allocate out of a buffer of `total` bytes.
    pub fn bank_bytes(&self, total: usize) -> usize {
        total / self.bank_count()
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_GENERATION_AGE)
    }
}

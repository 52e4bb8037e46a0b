//! Generation-tagged bump allocation over a caller buffer.

use std::fmt;
use std::ops::Range;

use keel_view::{ReadOnlySpan, Span, Str};

use crate::config::RegionConfig;
use crate::error::RegionError;
use crate::handle::Handle;

/// A bump allocator over caller memory that hands out [`Handle`]s.
///
/// The buffer is split into [`RegionConfig::bank_count`] banks. Each
/// generation allocates from one bank; [`reset`](Region::reset) moves to
/// the next bank and rewinds it. A bank is reused only after
/// `max_generation_age` further resets, which is exactly when the
/// handles pointing into it start resolving to
/// [`RegionError::StaleHandle`].
///
/// The generation counter never wraps: once it reaches `u32::MAX`,
/// [`reset`](Region::reset) fails with
/// [`RegionError::GenerationOverflow`].
pub struct Region<'a> {
    buf: &'a mut [u8],
    config: RegionConfig,
    bank_size: usize,
    /// Bank the current generation allocates from.
    bank: usize,
    /// Bytes used in the current bank.
    cursor: usize,
    generation: u32,
}

impl<'a> Region<'a> {
    /// Region over `buf` with the default config.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self::with_config(buf, RegionConfig::default())
    }

    /// Region over `buf` with an explicit config.
    pub fn with_config(buf: &'a mut [u8], config: RegionConfig) -> Self {
        let bank_size = config.bank_bytes(buf.len());
        Self {
            buf,
            config,
            bank_size,
            bank: 0,
            cursor: 0,
            generation: 0,
        }
    }

    /// The config this region was created with.
    pub fn config(&self) -> &RegionConfig {
        &self.config
    }

    /// The current generation.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Bytes allocated in the current generation.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Bytes each generation may allocate.
    pub fn capacity(&self) -> usize {
        self.bank_size
    }

    /// Bytes left in the current generation.
    pub fn remaining(&self) -> usize {
        self.bank_size - self.cursor
    }

    fn bank_start(&self, bank: usize) -> usize {
        bank * self.bank_size
    }

    /// Reserve `len` zeroed bytes in the current generation.
    pub fn alloc(&mut self, len: usize) -> Result<Handle, RegionError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(RegionError::CapacityExceeded {
                requested: len,
                remaining,
            });
        }
        let offset = self.bank_start(self.bank) + self.cursor;
        self.cursor += len;
        self.buf[offset..offset + len].fill(0);
        Ok(Handle::new(self.generation, offset, len))
    }

    /// Copy `bytes` into the current generation.
    pub fn store(&mut self, bytes: &[u8]) -> Result<Handle, RegionError> {
        let handle = self.alloc(bytes.len())?;
        self.buf[handle.offset..handle.offset + handle.len].copy_from_slice(bytes);
        Ok(handle)
    }

    /// Copy the bytes of `s` into the current generation.
    pub fn store_str(&mut self, s: Str<'_>) -> Result<Handle, RegionError> {
        self.store(s.as_bytes())
    }

    /// Byte range `handle` names, if it still resolves.
    fn check(&self, handle: Handle) -> Result<Range<usize>, RegionError> {
        if handle.generation > self.generation {
            return Err(RegionError::ForeignHandle {
                handle_generation: handle.generation,
                current: self.generation,
            });
        }
        let age = self.generation - handle.generation;
        if age > self.config.max_generation_age {
            return Err(RegionError::StaleHandle {
                handle_generation: handle.generation,
                oldest_live: self.generation - self.config.max_generation_age,
            });
        }

        let banks = self.config.bank_count();
        // age < banks, so this steps back at most one full lap.
        let bank = (self.bank + banks - age as usize) % banks;
        let start = self.bank_start(bank);
        let limit = if age == 0 {
            start + self.cursor
        } else {
            start + self.bank_size
        };

        let out_of_range = RegionError::OutOfRange {
            offset: handle.offset,
            len: handle.len,
        };
        let end = handle.offset.checked_add(handle.len).ok_or(out_of_range)?;
        if handle.offset < start || end > limit {
            return Err(out_of_range);
        }
        Ok(handle.offset..end)
    }

    /// Read-only view of the bytes `handle` names.
    pub fn resolve(&self, handle: Handle) -> Result<ReadOnlySpan<'_, u8>, RegionError> {
        let range = self.check(handle)?;
        Ok(ReadOnlySpan::new(&self.buf[range]))
    }

    /// The bytes `handle` names, as text.
    pub fn resolve_str(&self, handle: Handle) -> Result<Str<'_>, RegionError> {
        let range = self.check(handle)?;
        Ok(Str::from_bytes(&self.buf[range]))
    }

    /// Mutable view of the bytes `handle` names.
    pub fn resolve_mut(&mut self, handle: Handle) -> Result<Span<'_, u8>, RegionError> {
        let range = self.check(handle)?;
        Ok(Span::new(&mut self.buf[range]))
    }

    /// Start a new generation in the next bank.
    ///
    /// Handles more than `max_generation_age` generations old stop
    /// resolving. Returns the new generation, or
    /// [`RegionError::GenerationOverflow`] without touching the region
    /// once the counter is exhausted.
    pub fn reset(&mut self) -> Result<u32, RegionError> {
        let next = self
            .generation
            .checked_add(1)
            .ok_or(RegionError::GenerationOverflow)?;
        self.generation = next;
        self.bank = (self.bank + 1) % self.config.bank_count();
        self.cursor = 0;
        Ok(next)
    }
}

impl fmt::Debug for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("generation", &self.generation)
            .field("used", &self.cursor)
            .field("capacity", &self.bank_size)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_resolve() {
        let mut buf = [0u8; 64];
        let mut region = Region::new(&mut buf);
        let h = region.store(b"keel").unwrap();
        assert_eq!(region.resolve(h).unwrap().as_slice(), b"keel");
        assert_eq!(region.used(), 4);
        assert_eq!(region.capacity(), 32);
        assert_eq!(region.remaining(), 28);
    }

    #[test]
    fn alloc_zeroes_reused_bytes() {
        let mut buf = [0xAAu8; 8];
        let mut region = Region::with_config(&mut buf, RegionConfig::new(0));
        let h = region.alloc(4).unwrap();
        assert_eq!(region.resolve(h).unwrap().as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn capacity_exceeded_reports_remaining() {
        let mut buf = [0u8; 8];
        let mut region = Region::with_config(&mut buf, RegionConfig::new(0));
        region.alloc(5).unwrap();
        assert_eq!(
            region.alloc(4),
            Err(RegionError::CapacityExceeded {
                requested: 4,
                remaining: 3
            })
        );
        assert_eq!(region.used(), 5);
    }

    #[test]
    fn previous_generation_survives_one_reset() {
        let mut buf = [0u8; 16];
        let mut region = Region::new(&mut buf);
        let old = region.store(b"old").unwrap();
        region.reset().unwrap();
        let new = region.store(b"new").unwrap();
        assert_eq!(region.resolve(old).unwrap().as_slice(), b"old");
        assert_eq!(region.resolve(new).unwrap().as_slice(), b"new");
    }

    #[test]
    fn handle_goes_stale_after_max_age() {
        let mut buf = [0u8; 16];
        let mut region = Region::new(&mut buf);
        let h = region.store(b"gone").unwrap();
        region.reset().unwrap();
        region.reset().unwrap();
        assert_eq!(
            region.resolve(h),
            Err(RegionError::StaleHandle {
                handle_generation: 0,
                oldest_live: 1
            })
        );
    }

    #[test]
    fn zero_age_invalidates_on_every_reset() {
        let mut buf = [0u8; 16];
        let mut region = Region::with_config(&mut buf, RegionConfig::new(0));
        let h = region.store(b"x").unwrap();
        region.reset().unwrap();
        assert!(matches!(
            region.resolve(h),
            Err(RegionError::StaleHandle { .. })
        ));
    }

    #[test]
    fn handle_past_cursor_is_out_of_range() {
        let mut buf = [0u8; 16];
        let mut region = Region::new(&mut buf);
        let h = region.alloc(2).unwrap();
        let forged = Handle::new(h.generation, h.offset, 6);
        assert_eq!(
            region.resolve(forged),
            Err(RegionError::OutOfRange { offset: 0, len: 6 })
        );
        let overflow = Handle::new(0, usize::MAX, 2);
        assert!(region.resolve(overflow).is_err());
    }

    #[test]
    fn future_generation_is_foreign() {
        let mut buf = [0u8; 4];
        let region = Region::new(&mut buf);
        assert!(matches!(
            region.resolve(Handle::new(5, 0, 0)),
            Err(RegionError::ForeignHandle { .. })
        ));
    }

    #[test]
    fn resolve_mut_writes_through() {
        let mut buf = [0u8; 8];
        let mut region = Region::new(&mut buf);
        let h = region.alloc(2).unwrap();
        region.resolve_mut(h).unwrap().fill(b'z');
        assert_eq!(region.resolve_str(h).unwrap(), "zz");
    }

    #[test]
    fn reset_refuses_to_wrap() {
        let mut buf = [0u8; 16];
        let mut region = Region::new(&mut buf);
        region.generation = u32::MAX - 1;
        let older = region.store(b"old").unwrap();
        assert_eq!(region.reset(), Ok(u32::MAX));
        let last = region.store(b"last").unwrap();

        assert_eq!(region.reset(), Err(RegionError::GenerationOverflow));
        assert_eq!(region.generation(), u32::MAX);
        assert_eq!(region.used(), 4);
        assert_eq!(region.resolve(last).unwrap().as_slice(), b"last");
        assert_eq!(region.resolve(older).unwrap().as_slice(), b"old");
        assert!(matches!(
            region.resolve(Handle::new(0, 0, 3)),
            Err(RegionError::StaleHandle { .. })
        ));
    }
}

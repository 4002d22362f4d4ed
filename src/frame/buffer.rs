use crate::foundation::core::{FrameDims, SequenceId, Timestamp};
use crate::foundation::error::{RtvidError, RtvidResult};

/// One synthesized frame: a row-major grid of 8-bit samples plus its sequence id and capture
/// time.
///
/// `samples().len() == width * height` always holds. The metadata is fixed at construction;
/// only the sample values are mutable, and only through [`FrameBuffer::samples_mut`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    sequence_id: SequenceId,
    dims: FrameDims,
    samples: Vec<u8>,
    captured_at: Timestamp,
}

impl FrameBuffer {
    /// Allocate a zero-filled frame.
    ///
    /// Storage is reserved fallibly so an allocation failure surfaces as
    /// [`RtvidError::ResourceExhaustion`] instead of aborting inside the allocator.
    pub fn alloc(
        sequence_id: SequenceId,
        dims: FrameDims,
        captured_at: Timestamp,
    ) -> RtvidResult<Self> {
        let len = dims.sample_count().ok_or_else(|| {
            RtvidError::resource_exhaustion("frame sample count overflows usize")
        })?;

        let mut samples = Vec::new();
        samples.try_reserve_exact(len).map_err(|e| {
            RtvidError::resource_exhaustion(format!(
                "allocate {len} samples for frame {}: {e}",
                sequence_id.0
            ))
        })?;
        samples.resize(len, 0);

        Ok(Self {
            sequence_id,
            dims,
            samples,
            captured_at,
        })
    }

    /// Wrap caller-provided samples. Fails if `samples.len() != width * height`.
    pub fn from_samples(
        sequence_id: SequenceId,
        dims: FrameDims,
        samples: Vec<u8>,
        captured_at: Timestamp,
    ) -> RtvidResult<Self> {
        if dims.sample_count() != Some(samples.len()) {
            return Err(RtvidError::validation(format!(
                "frame expects {}x{} samples, got {}",
                dims.width(),
                dims.height(),
                samples.len()
            )));
        }
        Ok(Self {
            sequence_id,
            dims,
            samples,
            captured_at,
        })
    }

    pub fn sequence_id(&self) -> SequenceId {
        self.sequence_id
    }

    pub fn dims(&self) -> FrameDims {
        self.dims
    }

    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    pub fn captured_at(&self) -> Timestamp {
        self.captured_at
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Mutable view of the samples. The slice cannot grow or shrink, so the length invariant
    /// is preserved.
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Diagnostic sample at index 0.
    pub fn sample0(&self) -> u8 {
        // Dims are non-zero, so there is always at least one sample.
        self.samples[0]
    }

    /// Sample at `(x, y)`, or `None` when out of bounds.
    pub fn sample_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = (y as usize) * (self.width() as usize) + (x as usize);
        self.samples.get(idx).copied()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.samples.chunks_exact(self.width() as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/buffer.rs"]
mod tests;

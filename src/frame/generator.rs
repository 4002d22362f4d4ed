use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::foundation::core::{FrameDims, SequenceId, Timestamp};
use crate::foundation::error::RtvidResult;
use crate::frame::buffer::FrameBuffer;

/// Produces frames of fixed dimensions filled with uniform pseudo-random samples.
///
/// The generator owns its RNG, seeded once when it is built. Two generators built with the
/// same seed and dims produce identical sample sequences.
#[derive(Debug)]
pub struct FrameGenerator {
    dims: FrameDims,
    rng: StdRng,
    seed: u64,
}

impl FrameGenerator {
    /// Seed from the current wall clock. Runs are not reproducible.
    pub fn time_seeded(dims: FrameDims) -> Self {
        Self::with_seed(dims, time_seed())
    }

    /// Seed explicitly for reproducible output.
    pub fn with_seed(dims: FrameDims, seed: u64) -> Self {
        Self {
            dims,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn dims(&self) -> FrameDims {
        self.dims
    }

    /// Seed the RNG was built with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Allocate a new frame stamped with the current time and fill every sample i.i.d. from
    /// `[0, 255]`.
    #[tracing::instrument(level = "trace", skip(self), fields(seq = sequence_id.0))]
    pub fn generate(&mut self, sequence_id: SequenceId) -> RtvidResult<FrameBuffer> {
        let mut frame = FrameBuffer::alloc(sequence_id, self.dims, Timestamp::now())?;
        self.rng.fill(frame.samples_mut());
        Ok(frame)
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/frame/generator.rs"]
mod tests;

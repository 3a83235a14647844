//! SampleBuffer - Structure of Arrays for the spring chain
//!
//! Two parallel arrays instead of `Vec<Sample>` so the displacement slice can
//! be handed to the renderer as-is (N contiguous f32, index 0 = leftmost).

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Displacement/velocity storage for N springs. Length is fixed at creation.
pub struct SampleBuffer {
    len: usize,
    pub displacements: Vec<f32>,
    pub velocities: Vec<f32>,
}

impl SampleBuffer {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            displacements: vec![0.0; len],
            velocities: vec![0.0; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn displacement(&self, idx: usize) -> f32 {
        self.displacements[idx]
    }

    #[inline]
    pub fn velocity(&self, idx: usize) -> f32 {
        self.velocities[idx]
    }

    /// Zero both fields of every sample
    pub fn clear(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.displacements.par_iter_mut().for_each(|d| *d = 0.0);
            self.velocities.par_iter_mut().for_each(|v| *v = 0.0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.displacements.fill(0.0);
            self.velocities.fill(0.0);
        }
    }

    /// Bytes backing the displacement array
    pub fn displacement_byte_len(&self) -> usize {
        self.len * std::mem::size_of::<f32>()
    }
}

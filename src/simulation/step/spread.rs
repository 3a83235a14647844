//! Pass 2: horizontal spread.
//!
//! Reads only the post-integration displacement snapshot and writes only
//! velocity, so every index can be updated independently: iteration order
//! (or splitting the work across threads) does not change the result. Each
//! index adds its left contribution before its right one, which keeps the
//! serial and parallel paths bit-identical.
//!
//! Ends are open: index 0 and N-1 only couple to their single neighbour.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::spatial::samples::SampleBuffer;

#[inline]
fn spread_into(displacements: &[f32], idx: usize, rate: f32, velocity: &mut f32) {
    let here = displacements[idx];
    if idx > 0 {
        *velocity += rate * (displacements[idx - 1] - here);
    }
    if idx + 1 < displacements.len() {
        *velocity += rate * (displacements[idx + 1] - here);
    }
}

pub(super) fn spread_waves(samples: &mut SampleBuffer, spread_speed: f32, dt: f32) {
    let rate = spread_speed * dt;
    if rate == 0.0 {
        return;
    }

    let SampleBuffer { displacements, velocities, .. } = samples;
    let displacements: &[f32] = displacements;

    #[cfg(feature = "parallel")]
    {
        velocities
            .par_iter_mut()
            .enumerate()
            .for_each(|(idx, v)| spread_into(displacements, idx, rate, v));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (idx, v) in velocities.iter_mut().enumerate() {
            spread_into(displacements, idx, rate, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pairwise formulation: each adjacent pair pushes velocity into both members.
    fn spread_pairwise(d: &[f32], v: &mut [f32], rate: f32) {
        for i in 0..d.len() - 1 {
            v[i] += rate * (d[i + 1] - d[i]);
            v[i + 1] += rate * (d[i] - d[i + 1]);
        }
    }

    #[test]
    fn matches_pairwise_coupling() {
        let mut samples = SampleBuffer::new(6);
        samples.displacements.copy_from_slice(&[0.3, -1.2, 2.5, 0.0, 0.75, -0.1]);
        samples.velocities.copy_from_slice(&[1.0, 0.0, -0.5, 0.25, 0.0, 3.0]);

        let mut expected = samples.velocities.clone();
        spread_pairwise(&samples.displacements, &mut expected, 600.0 * 0.02);

        spread_waves(&mut samples, 600.0, 0.02);
        assert_eq!(samples.velocities, expected);
    }

    #[test]
    fn leaves_displacement_untouched() {
        let mut samples = SampleBuffer::new(5);
        samples.displacements[2] = 1.0;
        spread_waves(&mut samples, 10.0, 0.1);
        assert_eq!(samples.displacements, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(samples.velocities, vec![0.0, 1.0, -2.0, 1.0, 0.0]);
    }

    #[test]
    fn edges_are_one_sided() {
        let mut samples = SampleBuffer::new(3);
        samples.displacements.copy_from_slice(&[1.0, 0.0, 0.0]);
        spread_waves(&mut samples, 1.0, 1.0);
        // No wraparound: the right edge sees nothing from the left edge.
        assert_eq!(samples.velocities, vec![-1.0, 1.0, 0.0]);
    }

    #[test]
    fn zero_speed_is_a_no_op() {
        let mut samples = SampleBuffer::new(3);
        samples.displacements.copy_from_slice(&[5.0, -5.0, 5.0]);
        spread_waves(&mut samples, 0.0, 0.5);
        assert!(samples.velocities.iter().all(|&v| v == 0.0));
    }
}

use crate::domain::config::SimulationParams;
use crate::spatial::samples::SampleBuffer;

/// Pass 1: damped spring update for every sample.
///
/// The displacement moves with the velocity from before this tick's force,
/// and the force is built from pre-update state. Returns the largest
/// post-update displacement.
pub(super) fn integrate_springs(samples: &mut SampleBuffer, params: &SimulationParams, dt: f32) -> f32 {
    let k = params.spring_constant;
    let c = params.damping;
    // Seeded below any real value so the max only ever reflects updated displacements.
    let mut max_dy = f32::NEG_INFINITY;

    for (d, v) in samples.displacements.iter_mut().zip(samples.velocities.iter_mut()) {
        let force = k * *d + c * *v;
        *d += *v * dt;
        *v -= force * dt;
        max_dy = max_dy.max(*d);
    }

    max_dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_pre_force_velocity_for_position() {
        let mut samples = SampleBuffer::new(3);
        samples.displacements[1] = 2.0;
        samples.velocities[1] = 1.0;
        let params = SimulationParams {
            spring_constant: 10.0,
            damping: 1.0,
            spread_speed: 0.0,
            stabilizing_time: 1.0,
        };

        let max_dy = integrate_springs(&mut samples, &params, 0.5);

        // force = 10*2 + 1*1 = 21
        assert_eq!(samples.displacement(1), 2.5);
        assert_eq!(samples.velocity(1), 1.0 - 21.0 * 0.5);
        assert_eq!(max_dy, 2.5);
    }

    #[test]
    fn max_tracks_updated_values_even_when_all_negative() {
        let mut samples = SampleBuffer::new(3);
        samples.displacements.copy_from_slice(&[-3.0, -1.0, -2.0]);
        let max_dy = integrate_springs(&mut samples, &SimulationParams::frozen(1.0), 0.1);
        assert_eq!(max_dy, -1.0);
    }
}

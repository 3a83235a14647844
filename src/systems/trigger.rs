//! WaterTrigger - reference collision responder
//!
//! Turns body contacts into surface impacts and pushes bodies riding the
//! waves upward. It only talks to the surface through its public
//! impact/query API, so hosts with their own physics can replace it.

use serde::{Deserialize, Serialize};

use crate::core::math::Vec2;
use crate::simulation::WaterSurface;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerSettings {
    /// Base force pushing bodies up along waves
    pub wave_displacement_force: f32,
    /// Floor for the impulse of an entering body
    pub min_impulse: f32,
    /// Impact radius per unit of impulse
    pub impulse_radius_ratio: f32,
    /// Larger half-life keeps the wave push strong at greater distances
    pub depth_decay_distance_half_life: f32,
    /// Waves lower than this do not push
    pub wave_push_minimum_height: f32,
    /// Bodies deeper than this (negative distance) are not pushed
    pub wave_push_minimum_depth: f32,
}

impl Default for TriggerSettings {
    fn default() -> Self {
        Self {
            wave_displacement_force: 20.0,
            min_impulse: 1.0,
            impulse_radius_ratio: 0.01,
            depth_decay_distance_half_life: 0.001,
            wave_push_minimum_height: 0.1,
            wave_push_minimum_depth: -0.5,
        }
    }
}

/// Motion of a body that has rigid-body physics
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyMotion {
    pub velocity: Vec2,
    pub mass: f32,
}

/// A body overlapping the water volume, in the volume's local frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyContact {
    pub position: Vec2,
    pub motion: Option<BodyMotion>,
}

impl BodyContact {
    pub fn new(position: Vec2, motion: Option<BodyMotion>) -> Self {
        Self { position, motion }
    }

    /// Contact for a body at a world position, mapped through the surface's transform
    pub fn from_world(surface: &WaterSurface, world_position: Vec2, motion: Option<BodyMotion>) -> Self {
        Self::new(surface.world_to_local(world_position), motion)
    }
}

#[derive(Clone, Debug, Default)]
pub struct WaterTrigger {
    pub settings: TriggerSettings,
}

impl WaterTrigger {
    pub fn new(settings: TriggerSettings) -> Self {
        Self { settings }
    }

    /// Size for the host's trigger box
    pub fn collider_size(surface: &WaterSurface) -> Vec2 {
        surface.size()
    }

    /// Rest surface height for a buoyancy effector
    pub fn surface_level(surface: &WaterSurface) -> f32 {
        surface.extents().y
    }

    /// Closest point on (or in) the volume's box to `point`
    pub fn closest_point(surface: &WaterSurface, point: Vec2) -> Vec2 {
        let e = surface.extents();
        point.clamp(Vec2::new(-e.x, -e.y), e)
    }

    /// Impulse and radius an entering body produces
    pub fn impact_for(&self, body: &BodyContact) -> (f32, f32) {
        let impulse = match body.motion {
            Some(m) => m.velocity.length() * m.mass,
            None => 1.0,
        };
        let impulse = impulse.max(self.settings.min_impulse);
        (impulse, impulse * self.settings.impulse_radius_ratio)
    }

    /// A body entered the volume. Returns the number of springs hit.
    pub fn on_enter(&self, surface: &mut WaterSurface, body: &BodyContact) -> usize {
        let point = Self::closest_point(surface, body.position);
        let (impulse, radius) = self.impact_for(body);
        surface.surface_impact(point, radius, impulse)
    }

    /// A body is still inside the volume. Returns the upward force to apply,
    /// or `None` when the wave under it is too small or the body too deep.
    pub fn on_stay(&self, surface: &WaterSurface, body: &BodyContact) -> Option<Vec2> {
        if body.motion.is_none() {
            return None;
        }

        let point = Self::closest_point(surface, body.position);
        let distance = surface.distance_to_surface(point);
        let displacement = surface.displacement_at(point);

        if distance < self.settings.wave_push_minimum_depth
            || displacement <= self.settings.wave_push_minimum_height
        {
            return None;
        }

        let half_life = self.settings.depth_decay_distance_half_life;
        let decay = half_life / (half_life + distance.max(0.0));
        Some(Vec2::UP * (decay * self.settings.wave_displacement_force))
    }
}

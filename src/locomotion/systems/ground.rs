//! Locomotion domain: ground proximity sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::components::{GameLayer, LocomotionState, PLAYER_SIZE, Player};
use crate::locomotion::resources::LocomotionTuning;

/// Probe footprint: slightly narrower than the body and a few units tall so
/// it straddles whatever surface the player is standing on.
const GROUND_PROBE_SIZE: Vec2 = Vec2::new(22.0, 4.0);

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&Transform, &mut LocomotionState), With<Player>>,
) {
    // Only ground-layer geometry counts; everything else is invisible to
    // the probe.
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let probe = Collider::rectangle(GROUND_PROBE_SIZE.x, GROUND_PROBE_SIZE.y);

    for (transform, mut state) in &mut query {
        let feet = transform.translation.truncate() - Vec2::new(0.0, PLAYER_SIZE.y / 2.0);
        let overlapping = !spatial_query
            .shape_intersections(&probe, feet, 0.0, &ground_filter)
            .is_empty();

        let was_airborne = state.grounded_countdown <= 0.0;
        state.refresh_ground_contact(overlapping, tuning.coyote_time);
        if was_airborne && state.grounded_countdown > 0.0 {
            debug!("Ground contact regained");
        }
    }
}

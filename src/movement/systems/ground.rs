//! Movement domain: ground detection against avian's spatial query.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GroundProbe;

/// Casts the character's own collider a short distance downward and
/// reports whether it hits anything on the ground mask.
pub(crate) struct ShapeCastGroundProbe<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub shape: &'a Collider,
    pub origin: Vec2,
    pub distance: f32,
    pub filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> ShapeCastGroundProbe<'a, 'w, 's> {
    pub fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        shape: &'a Collider,
        origin: Vec2,
        distance: f32,
        ground_mask: u32,
        owner: Entity,
    ) -> Self {
        Self {
            spatial_query,
            shape,
            origin,
            distance,
            filter: SpatialQueryFilter::from_mask(LayerMask(ground_mask))
                .with_excluded_entities([owner]),
        }
    }
}

impl GroundProbe for ShapeCastGroundProbe<'_, '_, '_> {
    fn is_grounded(&self) -> bool {
        // Nothing to stand on with an empty mask
        if self.filter.mask == LayerMask::NONE {
            return false;
        }

        self.spatial_query
            .cast_shape(
                self.shape,
                self.origin,
                0.0,
                Dir2::NEG_Y,
                &ShapeCastConfig::from_max_distance(self.distance),
                &self.filter,
            )
            .is_some()
    }
}

use crate::{
    distance::{Distance, Meters},
    geopoint::GeoPoint,
};

/// Length of the straight connection between two locations.
///
/// Implementations must be non-negative, symmetric and satisfy the triangle
/// inequality: the A* search relies on it to stay optimal.
pub trait DistanceOracle: Send + Sync {
    fn distance(&self, from: &GeoPoint, to: &GeoPoint) -> Distance<Meters>;
}

/// Great-circle distance on a spherical earth.
#[derive(Clone, Copy, Debug, Default)]
pub struct HaversineDistance;

impl DistanceOracle for HaversineDistance {
    #[inline(always)]
    fn distance(&self, from: &GeoPoint, to: &GeoPoint) -> Distance<Meters> {
        from.haversine_distance(to)
    }
}

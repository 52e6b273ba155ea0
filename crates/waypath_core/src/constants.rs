pub(crate) const INVALID_NODE: usize = usize::MAX;

pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

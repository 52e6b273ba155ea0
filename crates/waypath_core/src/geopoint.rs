use std::f64::consts::PI;

use crate::{
    constants::EARTH_RADIUS_METERS,
    distance::{Distance, Meters},
};

/// A WGS84 coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> Distance<Meters> {
        let lat1 = self.lat.to_radians();
        let lng1 = self.lng.to_radians();
        let lat2 = other.lat.to_radians();
        let lng2 = other.lng.to_radians();

        let dlat = lat2 - lat1;
        let dlng = lng2 - lng1;

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from(EARTH_RADIUS_METERS * c)
    }

    /// Spherical mercator projection, in meters.
    pub fn project(&self) -> [f64; 2] {
        let lat_rad = self.lat.to_radians();
        let lng_rad = self.lng.to_radians();

        let x = EARTH_RADIUS_METERS * lng_rad;
        let y = EARTH_RADIUS_METERS * (lat_rad / 2.0 + PI / 4.0).tan().ln();
        [x, y]
    }
}

impl From<&GeoPoint> for [f64; 2] {
    fn from(point: &GeoPoint) -> Self {
        point.project()
    }
}

use waypath_core::{
    geopoint::GeoPoint,
    map_data::{MapData, RawNode, RawWay},
};

/// Regular pentagon of roughly 100 m sides near Hanoi, nodes 1..=5 in order
/// around the cycle, every side a two-way street.
pub fn pentagon() -> MapData {
    let mut data = MapData::default();
    let (lat, lng) = (21.0285, 105.8542);
    // ~85 m circumradius gives sides of ~100 m
    let radius_deg = 85.0 / 111_320.0;

    for i in 0..5 {
        let angle = (90.0 + 72.0 * i as f64).to_radians();
        data.add_node(RawNode::new(
            i + 1,
            GeoPoint::new(
                lat + radius_deg * angle.sin(),
                lng + radius_deg * angle.cos() / lat.to_radians().cos(),
            ),
        ));
    }

    for i in 0..5 {
        data.add_highway(RawWay {
            id: 100 + i,
            nodes: vec![i + 1, (i + 1) % 5 + 1],
            oneway: false,
        });
    }

    data
}

/// `width` x `height` street grid, node `(x, y)` has id and index
/// `y * width + x`. Every third column is a one-way street going north.
pub fn grid(width: usize, height: usize) -> MapData {
    let mut data = MapData::default();
    let id = |x: usize, y: usize| (y * width + x) as i64;

    for y in 0..height {
        for x in 0..width {
            // Slight shear so that no two routes tie exactly
            let lat = 48.0 + y as f64 * 0.0005 + x as f64 * 0.000_003;
            let lng = 11.0 + x as f64 * 0.0007 + (y * y) as f64 * 0.000_001;
            data.add_node(RawNode::new(id(x, y), GeoPoint::new(lat, lng)));
        }
    }

    let mut way_id = 0;
    for y in 0..height {
        data.add_highway(RawWay {
            id: way_id,
            nodes: (0..width).map(|x| id(x, y)).collect(),
            oneway: false,
        });
        way_id += 1;
    }
    for x in 0..width {
        data.add_highway(RawWay {
            id: way_id,
            nodes: (0..height).map(|y| id(x, y)).collect(),
            oneway: x % 3 == 0,
        });
        way_id += 1;
    }

    data
}

use jiff::SpanRelativeTo;
use waypath_core::geopoint::GeoPoint;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

/// Parses `lat,lng` in degrees.
pub fn parse_geopoint(input: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = input
        .split_once(',')
        .ok_or_else(|| String::from("Expected <lat>,<lng>"))?;

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("Invalid latitude `{lat}`"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("Invalid longitude `{lng}`"))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("Latitude {lat} is out of range"));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(format!("Longitude {lng} is out of range"));
    }

    Ok(GeoPoint::new(lat, lng))
}

use std::time::Duration;

use waypath_core::distance::{Distance, Meters};

pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs_f64();
    if seconds < 1e-3 {
        format!("{:.2}µs", seconds * 1e6)
    } else if seconds < 1.0 {
        format!("{:.2}ms", seconds * 1e3)
    } else {
        format!("{seconds:.2}s")
    }
}

pub fn format_bytes(bytes: usize) -> String {
    if bytes >= 1 << 20 {
        format!("{:.2}MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1 << 10 {
        format!("{:.2}KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes}B")
    }
}

pub fn format_distance(distance: Distance<Meters>) -> String {
    let meters = distance.value();
    if meters >= 1000.0 {
        format!("{:.2}km", meters * 1e-3)
    } else {
        format!("{meters:.2}m")
    }
}

#[cfg(test)]
mod tests {
    use waypath_core::meters;

    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_nanos(1500)), "1.50µs");
        assert_eq!(format_duration(Duration::from_micros(2500)), "2.50ms");
        assert_eq!(format_duration(Duration::from_millis(3250)), "3.25s");
    }

    #[test]
    fn bytes() {
        assert_eq!(format_bytes(512), "512B");
        assert_eq!(format_bytes(1536), "1.50KiB");
        assert_eq!(format_bytes(3 << 20), "3.00MiB");
    }

    #[test]
    fn distances() {
        assert_eq!(format_distance(meters!(12.346)), "12.35m");
        assert_eq!(format_distance(meters!(1500)), "1.50km");
    }
}

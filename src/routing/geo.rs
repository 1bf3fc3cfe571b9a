use serde::{Deserialize, Serialize};

/// WGS84 coordinates in decimal degrees. Registry exports often carry
/// extra fields (street address and the like); those are ignored here.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points via the haversine formula.
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_same_point() {
        let p = Coordinates {
            lat: 27.0238,
            lng: 74.2179,
        };
        assert!(distance_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinates {
            lat: 27.0238,
            lng: 74.2179,
        };
        let b = Coordinates {
            lat: 26.9124,
            lng: 75.7873,
        };
        let d1 = distance_km(a, b);
        let d2 = distance_km(b, a);
        assert!((d1 - d2).abs() < 1e-9);
        assert!(d1 > 0.0);
    }

    #[test]
    fn test_known_distance_delhi_jaipur() {
        // Delhi to Jaipur is roughly 240 km great-circle
        let delhi = Coordinates {
            lat: 28.6139,
            lng: 77.2090,
        };
        let jaipur = Coordinates {
            lat: 26.9124,
            lng: 75.7873,
        };
        let d = distance_km(delhi, jaipur);
        assert!((d - 240.0).abs() < 10.0, "got {}", d);
    }

    #[test]
    fn test_one_degree_latitude() {
        // One degree of latitude is about 111.2 km anywhere on the sphere
        let a = Coordinates { lat: 10.0, lng: 50.0 };
        let b = Coordinates { lat: 11.0, lng: 50.0 };
        let d = distance_km(a, b);
        assert!((d - 111.2).abs() < 0.5, "got {}", d);
    }
}

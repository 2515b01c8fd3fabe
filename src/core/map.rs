//! Projects geographic coordinates onto the display viewport.

use crate::prelude::*;

/// The fixed map region that positions are projected onto.
#[derive(Deserialize, Debug, Clone)]
pub struct BoundingBox {
    /// Latitude of the northern edge.
    #[serde(default = "default_north_lat")]
    pub north_lat: f64,

    /// Longitude of the western edge.
    #[serde(default = "default_west_lng")]
    pub west_lng: f64,

    /// Latitude span towards the south.
    #[serde(default = "default_lat_span")]
    pub lat_span: f64,

    /// Longitude span towards the east.
    #[serde(default = "default_lng_span")]
    pub lng_span: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            north_lat: default_north_lat(),
            west_lng: default_west_lng(),
            lat_span: default_lat_span(),
            lng_span: default_lng_span(),
        }
    }
}

// The Tshwane service area.
fn default_north_lat() -> f64 {
    -25.4
}

fn default_west_lng() -> f64 {
    27.9
}

fn default_lat_span() -> f64 {
    0.5
}

fn default_lng_span() -> f64 {
    0.6
}

/// Marker position in viewport percents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl BoundingBox {
    /// Affine projection: longitude grows east, display y grows south.
    /// Positions outside the box project outside the [0, 100] range and
    /// render off-canvas.
    pub fn project(&self, position: Position) -> MapPoint {
        MapPoint {
            x: (position.lng - self.west_lng) / self.lng_span * 100.0,
            y: (self.north_lat - position.lat) / self.lat_span * 100.0,
        }
    }
}

/// A sensor paired with its projected marker position.
#[derive(Debug, Clone)]
pub struct Marker {
    pub sensor: Sensor,
    pub point: MapPoint,
}

/// Project all the given sensors, preserving their order.
pub fn markers(sensors: &[Sensor], bounding_box: &BoundingBox) -> Vec<Marker> {
    sensors
        .iter()
        .map(|sensor| Marker {
            sensor: sensor.clone(),
            point: bounding_box.project(sensor.position),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_box_center_lands_in_the_viewport_center() {
        let point = BoundingBox::default().project(Position { lat: -25.65, lng: 28.2 });
        assert!((point.x - 50.0).abs() < 1e-9);
        assert!((point.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn equal_latitudes_project_to_equal_y() {
        let bounding_box = BoundingBox::default();
        let left = bounding_box.project(Position { lat: -25.7, lng: 28.0 });
        let right = bounding_box.project(Position { lat: -25.7, lng: 28.4 });
        assert_eq!(left.y, right.y);
        assert!(left.x < right.x);
    }

    #[test]
    fn equal_longitudes_project_to_equal_x() {
        let bounding_box = BoundingBox::default();
        let north = bounding_box.project(Position { lat: -25.5, lng: 28.1 });
        let south = bounding_box.project(Position { lat: -25.8, lng: 28.1 });
        assert_eq!(north.x, south.x);
        assert!(north.y < south.y);
    }

    #[test]
    fn out_of_box_positions_are_not_clamped() {
        let point = BoundingBox::default().project(Position { lat: -26.0, lng: 27.0 });
        assert!(point.y > 100.0);
        assert!(point.x < 0.0);
    }
}

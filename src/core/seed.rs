//! The built-in sensor fleet covering the Tshwane service area.

use crate::prelude::*;

/// Returns the seeded fleet with staggered last-update offsets.
pub fn sensors() -> Vec<Sensor> {
    let now = Local::now();
    vec![
        Sensor {
            id: "TWW001".into(),
            name: "Mamelodi Flow Sensor".into(),
            location: "Mamelodi Extension 2".into(),
            position: Position { lat: -25.7308, lng: 28.3228 },
            status: Status::Online,
            metrics: Metrics::Flow {
                water_flow: 45.2,
                pressure: 2.3,
                temperature: 24.1,
            },
            wifi_strength: 85.0,
            battery_level: 92.0,
            last_update: now - Duration::minutes(5),
        },
        Sensor {
            id: "TWW002".into(),
            name: "Soshanguve Quality Monitor".into(),
            location: "Soshanguve Block L".into(),
            position: Position { lat: -25.5372, lng: 28.1103 },
            status: Status::Online,
            metrics: Metrics::Quality {
                water_flow: 32.1,
                pressure: 1.8,
                temperature: 22.8,
                ph: 7.2,
                turbidity: 1.4,
            },
            wifi_strength: 72.0,
            battery_level: 78.0,
            last_update: now - Duration::minutes(2),
        },
        Sensor {
            id: "TWW003".into(),
            name: "Pretoria CBD Pressure".into(),
            location: "Pretoria CBD, Church Street".into(),
            position: Position { lat: -25.7479, lng: 28.2293 },
            status: Status::Warning,
            metrics: Metrics::Pressure {
                water_flow: 18.7,
                pressure: 0.9,
                temperature: 26.3,
            },
            wifi_strength: 45.0,
            battery_level: 34.0,
            last_update: now - Duration::minutes(15),
        },
        Sensor {
            id: "TWW004".into(),
            name: "Centurion Flow Control".into(),
            location: "Centurion Central".into(),
            position: Position { lat: -25.8598, lng: 28.1888 },
            status: Status::Online,
            metrics: Metrics::Flow {
                water_flow: 67.4,
                pressure: 3.1,
                temperature: 23.5,
            },
            wifi_strength: 91.0,
            battery_level: 85.0,
            last_update: now - Duration::minutes(8),
        },
        Sensor {
            id: "TWW005".into(),
            name: "Hammanskraal Monitor".into(),
            location: "Hammanskraal".into(),
            position: Position { lat: -25.4167, lng: 28.2667 },
            status: Status::Offline,
            metrics: Metrics::Level {
                water_flow: 0.0,
                pressure: 0.0,
                temperature: 0.0,
            },
            wifi_strength: 0.0,
            battery_level: 12.0,
            last_update: now - Duration::hours(2),
        },
        Sensor {
            id: "TWW006".into(),
            name: "Akasia Water Quality".into(),
            location: "Akasia".into(),
            position: Position { lat: -25.6167, lng: 28.1167 },
            status: Status::Maintenance,
            metrics: Metrics::Quality {
                water_flow: 0.0,
                pressure: 0.0,
                temperature: 0.0,
                ph: 0.0,
                turbidity: 0.0,
            },
            wifi_strength: 67.0,
            battery_level: 45.0,
            last_update: now - Duration::minutes(30),
        },
        Sensor {
            id: "TWW007".into(),
            name: "Wonderboom Flow Meter".into(),
            location: "Wonderboom".into(),
            position: Position { lat: -25.6833, lng: 28.1333 },
            status: Status::Online,
            metrics: Metrics::Flow {
                water_flow: 52.8,
                pressure: 2.7,
                temperature: 25.2,
            },
            wifi_strength: 78.0,
            battery_level: 91.0,
            last_update: now - Duration::minutes(1),
        },
        Sensor {
            id: "TWW008".into(),
            name: "Ga-Rankuwa Pressure".into(),
            location: "Ga-Rankuwa".into(),
            position: Position { lat: -25.6333, lng: 27.9833 },
            status: Status::Online,
            metrics: Metrics::Pressure {
                water_flow: 38.9,
                pressure: 2.1,
                temperature: 24.8,
            },
            wifi_strength: 82.0,
            battery_level: 76.0,
            last_update: now - Duration::minutes(3),
        },
    ]
}

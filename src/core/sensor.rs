//! Describes a sensor and its telemetry payload.

use crate::prelude::*;

/// A monitored endpoint somewhere in the water network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Unique stable identifier, assigned at seed time.
    pub id: String,

    pub name: String,

    pub location: String,

    /// Geographic position, immutable after creation.
    pub position: Position,

    pub status: Status,

    /// Current readings. The variant also encodes the sensor type.
    pub metrics: Metrics,

    /// Signal strength gauge in percents, pinned to zero while offline.
    pub wifi_strength: f64,

    /// Battery gauge in percents. It only ever drains.
    pub battery_level: f64,

    /// Refreshed together with the metrics.
    pub last_update: DateTime<Local>,
}

impl Sensor {
    /// Sensors in these statuses keep reporting, the others are frozen.
    pub fn is_live(&self) -> bool {
        matches!(self.status, Status::Online | Status::Warning)
    }

    pub fn type_(&self) -> Type {
        self.metrics.type_()
    }

    /// Case-insensitive substring match over the name, location and ID.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.location.to_lowercase().contains(&query)
            || self.id.to_lowercase().contains(&query)
    }
}

/// Geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

/// Sensor status. There are no automatic transitions, the status is only
/// ever changed by an external actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    Offline,
    Warning,
    Maintenance,
}

/// Sensor type, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Flow,
    Quality,
    Level,
    Pressure,
}

/// Telemetry payload keyed by the sensor type: each variant carries exactly
/// the readings that type reports. Only quality monitors measure pH and
/// turbidity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Metrics {
    Flow {
        water_flow: f64,
        pressure: f64,
        temperature: f64,
    },
    Quality {
        water_flow: f64,
        pressure: f64,
        temperature: f64,
        ph: f64,
        turbidity: f64,
    },
    Level {
        water_flow: f64,
        pressure: f64,
        temperature: f64,
    },
    Pressure {
        water_flow: f64,
        pressure: f64,
        temperature: f64,
    },
}

impl Metrics {
    pub fn type_(&self) -> Type {
        match self {
            Metrics::Flow { .. } => Type::Flow,
            Metrics::Quality { .. } => Type::Quality,
            Metrics::Level { .. } => Type::Level,
            Metrics::Pressure { .. } => Type::Pressure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;

    #[test]
    fn metrics_encode_the_type() {
        let sensors = seed::sensors();
        assert_eq!(sensors[0].type_(), Type::Flow);
        assert_eq!(sensors[1].type_(), Type::Quality);
        assert_eq!(sensors[4].type_(), Type::Level);
    }

    #[test]
    fn query_matches_case_insensitively() {
        let sensors = seed::sensors();
        assert!(sensors[0].matches_query("MAMELODI"));
        assert!(sensors[0].matches_query("tww001"));
        assert!(sensors[0].matches_query("extension 2"));
        assert!(!sensors[0].matches_query("soshanguve"));
    }

    #[test]
    fn empty_query_matches() {
        assert!(seed::sensors()[0].matches_query(""));
    }
}

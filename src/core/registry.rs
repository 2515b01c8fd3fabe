//! In-memory sensor registry.

use crate::prelude::*;

/// The full sensor collection at a given instant. Readers hold it as an
/// immutable whole, so a concurrent tick can never expose partial state.
pub type Snapshot = Arc<Vec<Sensor>>;

/// Owns the authoritative snapshot of all sensors. The simulator prepares
/// the next snapshot aside and publishes it with a single swap.
#[derive(Clone)]
pub struct Registry {
    snapshot: Arc<Mutex<Snapshot>>,
}

impl Registry {
    pub fn new(sensors: Vec<Sensor>) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(Arc::new(sensors))),
        }
    }

    /// Returns the current snapshot, in the seeding order.
    pub fn get_all(&self) -> Snapshot {
        self.snapshot.lock().unwrap().clone()
    }

    /// Atomically replaces the registry contents and returns the new snapshot.
    pub fn replace(&self, sensors: Vec<Sensor>) -> Snapshot {
        let snapshot = Arc::new(sensors);
        *self.snapshot.lock().unwrap() = snapshot.clone();
        snapshot
    }

    pub fn count_by_status(&self) -> StatusCounts {
        let snapshot = self.get_all();
        let mut counts = StatusCounts {
            total: snapshot.len(),
            ..Default::default()
        };
        for sensor in snapshot.iter() {
            match sensor.status {
                Status::Online => counts.online += 1,
                Status::Offline => counts.offline += 1,
                Status::Warning => counts.warning += 1,
                Status::Maintenance => counts.maintenance += 1,
            }
        }
        counts
    }
}

/// Fleet overview totals.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub warning: usize,
    pub maintenance: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;

    #[test]
    fn replace_does_not_touch_the_old_snapshot() {
        let registry = Registry::new(seed::sensors());
        let before = registry.get_all();
        let mut changed = seed::sensors();
        changed[0].battery_level = 1.0;
        registry.replace(changed);
        assert_eq!(before[0].battery_level, 92.0);
        assert_eq!(registry.get_all()[0].battery_level, 1.0);
    }

    #[test]
    fn counts_the_seeded_fleet() {
        let counts = Registry::new(seed::sensors()).count_by_status();
        assert_eq!(
            counts,
            StatusCounts {
                total: 8,
                online: 5,
                offline: 1,
                warning: 1,
                maintenance: 1,
            }
        );
    }

    #[test]
    fn preserves_the_seeding_order() {
        let registry = Registry::new(seed::sensors());
        let snapshot = registry.get_all();
        let ids: Vec<&str> = snapshot.iter().map(|sensor| sensor.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["TWW001", "TWW002", "TWW003", "TWW004", "TWW005", "TWW006", "TWW007", "TWW008"],
        );
    }
}

//! # Feed simulator
//!
//! Emulates live telemetry by nudging the readings of every online and
//! warning sensor on a fixed cadence. Offline and maintenance sensors are
//! left frozen, which keeps "paused" distinguishable from "degraded".

use std::time::Duration as StdDuration;

use crossbeam_channel::{RecvTimeoutError, Sender};
use rand::Rng;

use crate::prelude::*;
use crate::settings::{Settings, Tuning};

pub struct Simulator {
    registry: Registry,
    interval: StdDuration,
    tuning: Tuning,
}

impl Simulator {
    pub fn new(registry: Registry, settings: &Settings) -> Self {
        Self {
            registry,
            interval: StdDuration::from_millis(settings.interval_ms),
            tuning: settings.tuning.clone(),
        }
    }

    /// Spawn the simulator worker thread.
    ///
    /// The worker runs one full tick per interval: it derives the next
    /// snapshot from the current one, publishes it with a single swap and
    /// emits it on the bus. Ticks cannot overlap, there is only the one
    /// worker and it sleeps between ticks.
    pub fn spawn(self, bus: &mut Bus) -> Result<Handle> {
        let tx = bus.add_tx();
        let (stop_tx, stop_rx) = crossbeam_channel::bounded(1);

        let join = thread::Builder::new()
            .name("aquamon::simulator".into())
            .spawn(move || {
                let mut rng = rand::thread_rng();
                loop {
                    match stop_rx.recv_timeout(self.interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                    let now = Local::now();
                    let next = tick(&self.registry.get_all(), &self.tuning, &mut rng, now);
                    let snapshot = self.registry.replace(next);
                    debug!("Ticked {} sensors", snapshot.len());
                    Update { snapshot, at: now }.send_and_forget(&tx);
                }
            })?;

        Ok(Handle {
            stop_tx,
            join: Mutex::new(Some(join)),
        })
    }
}

/// Controls a running simulator.
pub struct Handle {
    stop_tx: Sender<()>,
    join: Mutex<Option<thread::JoinHandle<()>>>,
}

impl Handle {
    /// Stop the simulation and wait for the worker to finish. Once this
    /// returns, the registry is no longer mutated. Stopping an already
    /// stopped simulator is a no-op.
    pub fn stop(&self) {
        // Already stopped simulators fail to send here, which is fine.
        let _ = self.stop_tx.try_send(());
        if let Some(join) = self.join.lock().unwrap().take() {
            if join.join().is_err() {
                error!("The simulator worker has panicked");
            }
        }
    }
}

/// Derive the next snapshot from the current one. Pure apart from the
/// supplied random source, so tests can run it seeded.
pub fn tick<R: Rng>(sensors: &[Sensor], tuning: &Tuning, rng: &mut R, now: DateTime<Local>) -> Vec<Sensor> {
    sensors
        .iter()
        .map(|sensor| {
            if !sensor.is_live() {
                return sensor.clone();
            }
            Sensor {
                metrics: perturb(&sensor.metrics, tuning, rng),
                wifi_strength: (sensor.wifi_strength + tuning.wifi_step * unit(rng)).clamp(0.0, 100.0),
                battery_level: (sensor.battery_level - rng.gen_range(0.0..=tuning.battery_drain)).max(0.0),
                last_update: now,
                ..sensor.clone()
            }
        })
        .collect()
}

fn perturb<R: Rng>(metrics: &Metrics, tuning: &Tuning, rng: &mut R) -> Metrics {
    match *metrics {
        Metrics::Flow {
            water_flow,
            pressure,
            temperature,
        } => Metrics::Flow {
            water_flow: jitter(water_flow, tuning.relative_jitter, rng).max(0.0),
            pressure: jitter(pressure, tuning.relative_jitter, rng).max(0.0),
            temperature: jitter(temperature, tuning.relative_jitter, rng),
        },
        Metrics::Quality {
            water_flow,
            pressure,
            temperature,
            ph,
            turbidity,
        } => Metrics::Quality {
            water_flow: jitter(water_flow, tuning.relative_jitter, rng).max(0.0),
            pressure: jitter(pressure, tuning.relative_jitter, rng).max(0.0),
            temperature: jitter(temperature, tuning.relative_jitter, rng),
            ph: ph + tuning.ph_jitter * unit(rng),
            turbidity: jitter(turbidity, tuning.relative_jitter, rng).max(0.0),
        },
        Metrics::Level {
            water_flow,
            pressure,
            temperature,
        } => Metrics::Level {
            water_flow: jitter(water_flow, tuning.relative_jitter, rng).max(0.0),
            pressure: jitter(pressure, tuning.relative_jitter, rng).max(0.0),
            temperature: jitter(temperature, tuning.relative_jitter, rng),
        },
        Metrics::Pressure {
            water_flow,
            pressure,
            temperature,
        } => Metrics::Pressure {
            water_flow: jitter(water_flow, tuning.relative_jitter, rng).max(0.0),
            pressure: jitter(pressure, tuning.relative_jitter, rng).max(0.0),
            temperature: jitter(temperature, tuning.relative_jitter, rng),
        },
    }
}

/// Nudge the value by up to the given fraction of its magnitude.
fn jitter<R: Rng>(value: f64, fraction: f64, rng: &mut R) -> f64 {
    value + value.abs() * fraction * unit(rng)
}

fn unit<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(-1.0..=1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::AtomicU64;
    use std::time::Duration as StdDuration;

    #[test]
    fn live_sensors_advance() {
        let mut rng = StdRng::seed_from_u64(1);
        let before = seed::sensors();
        let now = Local::now() + Duration::minutes(1);
        let after = tick(&before, &Tuning::default(), &mut rng, now);
        for (before, after) in before.iter().zip(&after).filter(|(before, _)| before.is_live()) {
            assert_eq!(after.last_update, now);
            assert!(after.last_update > before.last_update);
            assert!(after.battery_level <= before.battery_level);
            assert!((0.0..=100.0).contains(&after.battery_level));
            assert!((0.0..=100.0).contains(&after.wifi_strength));
        }
    }

    #[test]
    fn frozen_sensors_survive_ten_ticks_untouched() {
        let mut rng = StdRng::seed_from_u64(42);
        let seeded = seed::sensors();
        let mut current = seeded.clone();
        for minute in 1..=10 {
            let now = Local::now() + Duration::minutes(minute);
            current = tick(&current, &Tuning::default(), &mut rng, now);
        }
        let mut advanced = 0;
        for (before, after) in seeded.iter().zip(&current) {
            if before.is_live() {
                assert_ne!(before.last_update, after.last_update);
                advanced += 1;
            } else {
                assert_eq!(before, after);
            }
        }
        assert_eq!(advanced, 6);
    }

    #[test]
    fn the_type_survives_the_tick() {
        let mut rng = StdRng::seed_from_u64(2);
        let before = seed::sensors();
        let after = tick(&before, &Tuning::default(), &mut rng, Local::now());
        for (before, after) in before.iter().zip(&after) {
            assert_eq!(before.type_(), after.type_());
        }
    }

    #[test]
    fn negative_seed_readings_get_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sensors = seed::sensors();
        if let Metrics::Flow { ref mut water_flow, .. } = sensors[0].metrics {
            *water_flow = -5.0;
        }
        let after = tick(&sensors, &Tuning::default(), &mut rng, Local::now());
        match after[0].metrics {
            Metrics::Flow { water_flow, .. } => assert_eq!(water_flow, 0.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn stop_is_idempotent_and_freezes_the_feed() -> Result {
        let registry = Registry::new(seed::sensors());
        let mut bus = Bus::new(Arc::new(AtomicU64::new(0)));
        let rx = bus.add_rx();
        let settings = Settings {
            interval_ms: 1,
            ..Settings::default()
        };
        let handle = Simulator::new(registry.clone(), &settings).spawn(&mut bus)?;
        bus.spawn()?;

        // Let at least one tick land, then stop twice.
        rx.recv_timeout(StdDuration::from_secs(5))?;
        handle.stop();
        handle.stop();

        // Many tick periods later the snapshot must not have moved.
        let frozen = registry.get_all();
        thread::sleep(StdDuration::from_millis(50));
        assert!(Arc::ptr_eq(&frozen, &registry.get_all()));
        Ok(())
    }

    #[test]
    fn publishes_updates_on_the_bus() -> Result {
        let registry = Registry::new(seed::sensors());
        let mut bus = Bus::new(Arc::new(AtomicU64::new(0)));
        let rx = bus.add_rx();
        let settings = Settings {
            interval_ms: 1,
            ..Settings::default()
        };
        let handle = Simulator::new(registry.clone(), &settings).spawn(&mut bus)?;
        bus.spawn()?;

        let update = rx.recv_timeout(StdDuration::from_secs(5))?;
        assert_eq!(update.snapshot.len(), 8);
        handle.stop();
        Ok(())
    }
}

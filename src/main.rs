//! Entry point.

use std::sync::atomic::AtomicU64;

use structopt::StructOpt;

use crate::core::{map, query, seed};
use crate::core::simulator::Simulator;
use crate::opts::Opts;
use crate::prelude::*;

pub mod core;
pub mod format;
pub mod logging;
pub mod opts;
pub mod prelude;
pub mod settings;

fn main() -> Result {
    let opts = Opts::from_args();
    logging::init(&opts)?;

    info!("Reading settings…");
    let settings = settings::read(&opts.settings)?;
    debug!("Settings: {:?}", &settings);

    let registry = Registry::new(seed::sensors());
    let counts = registry.count_by_status();
    info!(
        "Seeded {} sensors: {} online, {} warning, {} offline, {} maintenance.",
        counts.total, counts.online, counts.warning, counts.offline, counts.maintenance,
    );

    if opts.export {
        println!("{}", serde_json::to_string_pretty(&*registry.get_all())?);
        return Ok(());
    }

    let criteria = Criteria {
        query: opts.query.clone().unwrap_or_default(),
        status: opts.status.as_str().into(),
        type_: opts.type_.as_str().into(),
    };
    let bounding_box = settings.bounding_box.clone();

    let mut bus = Bus::new(Arc::new(AtomicU64::new(0)));
    let rx = bus.add_rx();

    info!("Starting the feed simulator…");
    let simulator = Simulator::new(registry.clone(), &settings).spawn(&mut bus)?;
    bus.spawn()?;

    for (number, update) in rx.iter().enumerate() {
        let visible = query::filter(&update.snapshot, &criteria);
        info!(
            "{}: showing {} of {} sensors.",
            update.at.format("%T"),
            visible.len(),
            update.snapshot.len(),
        );
        for marker in map::markers(&visible, &bounding_box) {
            debug!(
                "[{}] {} at ({:.1}%, {:.1}%): {}",
                marker.sensor.id,
                marker.sensor.name,
                marker.point.x,
                marker.point.y,
                format::human_readings(&marker.sensor.metrics),
            );
        }
        if opts.ticks.map_or(false, |ticks| number as u64 + 1 >= ticks) {
            break;
        }
    }

    info!("Stopping the feed simulator…");
    simulator.stop();
    Ok(())
}

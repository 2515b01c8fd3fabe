//! # Update bus
//!
//! Fans every published snapshot out to all subscribers, so that any number
//! of views can follow the feed without blocking the simulator.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::{Receiver, Sender};

use crate::prelude::*;

/// One published snapshot alongside the tick time.
#[derive(Debug, Clone)]
pub struct Update {
    pub snapshot: Snapshot,
    pub at: DateTime<Local>,
}

pub struct Bus {
    /// Subscriber inbox senders.
    subscriber_txs: Vec<Sender<Update>>,

    /// The bus inbox sender.
    tx: Sender<Update>,

    /// The bus inbox receiver.
    rx: Receiver<Update>,

    update_counter: Arc<AtomicU64>,
}

impl Bus {
    pub fn new(update_counter: Arc<AtomicU64>) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            tx,
            rx,
            update_counter,
            subscriber_txs: Vec::new(),
        }
    }

    /// Get a new update sender. Essentially, it makes a clone of the bus inbox.
    pub fn add_tx(&self) -> Sender<Update> {
        self.tx.clone()
    }

    /// Get a new receiver to subscribe to the bus.
    pub fn add_rx(&mut self) -> Receiver<Update> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscriber_txs.push(tx);
        rx
    }

    /// Spawn the bus dispatcher thread.
    pub fn spawn(self) -> Result {
        info!("Spawning the update bus…");
        thread::Builder::new().name("aquamon::bus".into()).spawn(move || {
            for update in &self.rx {
                for tx in self.subscriber_txs.iter() {
                    update.clone().send_and_forget(tx);
                }
                let number = self.update_counter.fetch_add(1, Ordering::Relaxed);
                debug!("Dispatched update #{} of {} sensors", number, update.snapshot.len());
            }
        })?;
        Ok(())
    }
}

impl Update {
    /// Send the update via the specified sender, logging and ignoring any errors.
    pub fn send_and_forget(self, tx: &Sender<Update>) {
        if let Err(error) = tx.send(self) {
            debug!("Could not send the update: {}", error.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;
    use std::time::Duration as StdDuration;

    #[test]
    fn dispatches_to_all_subscribers() -> Result {
        let mut bus = Bus::new(Arc::new(AtomicU64::new(0)));
        let first = bus.add_rx();
        let second = bus.add_rx();
        let tx = bus.add_tx();
        bus.spawn()?;

        Update {
            snapshot: Arc::new(seed::sensors()),
            at: Local::now(),
        }
        .send_and_forget(&tx);

        assert_eq!(first.recv_timeout(StdDuration::from_secs(5))?.snapshot.len(), 8);
        assert_eq!(second.recv_timeout(StdDuration::from_secs(5))?.snapshot.len(), 8);
        Ok(())
    }
}

//! Periodic broadcast driver thread.
//!
//! The ticker owns a [`BroadcastAgent`] on a dedicated thread and calls
//! it on every tick of a crossbeam `tick` channel. Stopping disconnects
//! the stop channel; the thread then performs one last flush so nothing
//! committed before the stop is left undelivered.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{select, Sender};
use plaza_board::ConfigError;
use tracing::{info, warn};

use crate::agent::BroadcastAgent;

/// Configuration for [`BroadcastTicker`].
#[derive(Clone, Debug)]
pub struct TickerConfig {
    /// Time between flushes. Clamped to at least 1 ms. Default: 20 ms.
    pub interval: Duration,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(20),
        }
    }
}

/// Handle to the broadcast driver thread.
///
/// Dropping the handle stops the thread and waits for it.
pub struct BroadcastTicker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl BroadcastTicker {
    /// Start flushing through `agent` every `config.interval`.
    pub fn spawn(agent: BroadcastAgent, config: TickerConfig) -> Result<Self, ConfigError> {
        let interval = config.interval.max(Duration::from_millis(1));
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(1);
        let ticks = crossbeam_channel::tick(interval);

        let handle = thread::Builder::new()
            .name("plaza-broadcast".into())
            .spawn(move || {
                info!(?interval, "broadcast ticker started");
                let mut flushes = 0u64;
                loop {
                    select! {
                        recv(ticks) -> _ => {
                            agent.request_broadcast();
                            flushes += 1;
                        }
                        recv(stop_rx) -> _ => break,
                    }
                }
                agent.request_broadcast();
                flushes += 1;
                info!(flushes, "broadcast ticker stopped");
                flushes
            })
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("broadcast ticker: {e}"),
            })?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Stop the thread, wait for its final flush, and return how many
    /// flushes it performed in total.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        // Disconnecting the channel wakes the select.
        drop(self.stop_tx.take());
        match self.handle.take().map(JoinHandle::join) {
            Some(Ok(flushes)) => flushes,
            Some(Err(_)) => {
                warn!("broadcast ticker thread panicked");
                0
            }
            None => 0,
        }
    }
}

impl Drop for BroadcastTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

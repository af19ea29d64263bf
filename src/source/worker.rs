//! Background fetch execution.
//!
//! [`FetchWorker`] owns one long-lived thread that runs submitted
//! [`FetchTicket`]s in order and delivers each [`FetchOutcome`] over a
//! channel the event loop drains on every tick.
//!
//! Tickets are never cancelled once running. Tickets still queued when the
//! thread becomes free collapse to the newest one per resource, since the
//! table would discard the older outcomes as stale anyway. Holding a paging
//! key therefore costs at most one running request plus one queued request
//! per table. While a request runs, the other table's requests wait behind
//! it for at most the configured timeout.

use super::PageFetcher;
use crate::model::{FetchError, ResourceKind};
use crate::state::{FetchOutcome, FetchTicket};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error};

/// Runs fetch tickets off the UI thread.
pub struct FetchWorker {
    tickets: Sender<FetchTicket>,
    outcomes: Receiver<FetchOutcome>,
}

impl FetchWorker {
    /// Start the worker thread, running every submitted ticket against `fetcher`.
    ///
    /// The thread exits once the worker is dropped.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::WorkerUnavailable` if the thread cannot be spawned.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Result<Self, FetchError> {
        let (tickets, ticket_rx) = mpsc::channel();
        let (outcome_tx, outcomes) = mpsc::channel();

        thread::Builder::new()
            .name("fetch-worker".to_string())
            .spawn(move || run_tickets(fetcher.as_ref(), &ticket_rx, &outcome_tx))
            .map_err(|e| {
                error!(error = %e, "Failed to spawn fetch worker");
                FetchError::WorkerUnavailable
            })?;

        Ok(Self { tickets, outcomes })
    }

    /// Queue `ticket` for the worker thread.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::WorkerUnavailable` if the worker thread has stopped.
    pub fn submit(&self, ticket: FetchTicket) -> Result<(), FetchError> {
        debug!(resource = %ticket.resource, seq = ticket.seq, "Submitting fetch");
        self.tickets.send(ticket).map_err(|_| {
            error!("Fetch worker thread has stopped");
            FetchError::WorkerUnavailable
        })
    }

    /// Every outcome that has arrived so far. Never blocks.
    pub fn drain(&self) -> Vec<FetchOutcome> {
        self.outcomes.try_iter().collect()
    }

    /// Wait up to `timeout` for the next outcome.
    #[cfg(test)]
    pub(crate) fn recv_timeout(&self, timeout: std::time::Duration) -> Option<FetchOutcome> {
        self.outcomes.recv_timeout(timeout).ok()
    }
}

/// Worker thread body. Returns when either channel is closed.
fn run_tickets(
    fetcher: &dyn PageFetcher,
    tickets: &Receiver<FetchTicket>,
    outcomes: &Sender<FetchOutcome>,
) {
    while let Ok(first) = tickets.recv() {
        let queued = std::iter::once(first).chain(tickets.try_iter());
        for ticket in latest_per_resource(queued) {
            let result = fetcher.fetch_page(&ticket.request);
            if outcomes.send(FetchOutcome::for_ticket(&ticket, result)).is_err() {
                // Receiver gone means the app is shutting down
                return;
            }
        }
    }
}

/// Keep only the newest ticket of each resource, in first-seen order.
fn latest_per_resource(queued: impl IntoIterator<Item = FetchTicket>) -> Vec<FetchTicket> {
    let mut latest: Vec<FetchTicket> = Vec::with_capacity(ResourceKind::ALL.len());
    for ticket in queued {
        match latest.iter_mut().find(|kept| kept.resource == ticket.resource) {
            Some(kept) if kept.seq < ticket.seq => {
                debug!(resource = %ticket.resource, seq = kept.seq, "Dropping superseded ticket");
                *kept = ticket;
            }
            Some(_) => {}
            None => latest.push(ticket),
        }
    }
    latest
}

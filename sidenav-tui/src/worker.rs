//! Background worker thread — every data-source call runs here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The worker
//! owns a private rayon::ThreadPool (not the global pool) and spawns each
//! fetch onto it, so simulated latencies overlap instead of queueing.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};

use sidenav_core::model::{ContentData, Cursor, ItemId, ItemsData};
use sidenav_core::{DataSource, LoadKind, Request, SourceError};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Fetch(Request),
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    Children {
        parent: ItemId,
        kind: LoadKind,
        result: Result<ItemsData, SourceError>,
    },
    Page {
        parent: ItemId,
        cursor: Cursor,
        result: Result<ItemsData, SourceError>,
    },
    Content {
        item: ItemId,
        ticket: u64,
        result: Result<ContentData, SourceError>,
    },
}

/// Spawn the background worker thread with a `threads`-wide fetch pool.
pub fn spawn_worker(
    source: Arc<dyn DataSource>,
    page_size: usize,
    threads: usize,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> Result<JoinHandle<()>> {
    // Create a private rayon thread pool (not the global one).
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("sidenav-fetch-{i}"))
        .build()
        .context("failed to build fetch pool")?;

    thread::Builder::new()
        .name("sidenav-worker".into())
        .spawn(move || worker_loop(pool, source, page_size, rx, tx))
        .context("failed to spawn worker thread")
}

fn worker_loop(
    pool: rayon::ThreadPool,
    source: Arc<dyn DataSource>,
    page_size: usize,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) {
    tracing::debug!(source = source.name(), "worker started");
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Fetch(request)) => {
                let source = Arc::clone(&source);
                let tx = tx.clone();
                pool.spawn(move || {
                    let label = request.describe();
                    let response = execute(source.as_ref(), page_size, request);
                    if tx.send(response).is_err() {
                        tracing::debug!(request = %label, "response dropped, UI is gone");
                    }
                });
            }
        }
    }
    tracing::debug!("worker stopped");
}

/// Run one request against `source`. Blocks for the source's latency.
pub fn execute(source: &dyn DataSource, page_size: usize, request: Request) -> WorkerResponse {
    match request {
        Request::Children { parent, kind } => {
            let result = source.fetch_children(&parent, None, page_size);
            WorkerResponse::Children {
                parent,
                kind,
                result,
            }
        }
        Request::NextPage { parent, cursor } => {
            let result = source.fetch_children(&parent, Some(&cursor), page_size);
            WorkerResponse::Page {
                parent,
                cursor,
                result,
            }
        }
        Request::Content { item, ticket } => {
            let result = source.fetch_content(&item);
            WorkerResponse::Content {
                item,
                ticket,
                result,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    use sidenav_core::MockSource;

    fn spawn() -> (Sender<WorkerCommand>, Receiver<WorkerResponse>, JoinHandle<()>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let source: Arc<dyn DataSource> = Arc::new(MockSource::instant(11));
        let handle = spawn_worker(source, 20, 2, cmd_rx, resp_tx).unwrap();
        (cmd_tx, resp_rx, handle)
    }

    #[test]
    fn worker_shutdown() {
        let (cmd_tx, _resp_rx, handle) = spawn();
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().expect("worker should join cleanly");
    }

    #[test]
    fn worker_exits_when_ui_hangs_up() {
        let (cmd_tx, _resp_rx, handle) = spawn();
        drop(cmd_tx);
        handle.join().expect("worker should join cleanly");
    }

    #[test]
    fn worker_uses_private_pool() {
        let global_threads = rayon::current_num_threads();
        let (cmd_tx, _resp_rx, handle) = spawn();
        assert_eq!(rayon::current_num_threads(), global_threads);
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn fetch_round_trip() {
        let (cmd_tx, resp_rx, handle) = spawn();
        cmd_tx
            .send(WorkerCommand::Fetch(Request::Children {
                parent: ItemId::new("users"),
                kind: LoadKind::Prefetch,
            }))
            .unwrap();

        let response = resp_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        match response {
            WorkerResponse::Children {
                parent,
                kind,
                result,
            } => {
                assert_eq!(parent.as_str(), "users");
                assert_eq!(kind, LoadKind::Prefetch);
                assert_eq!(result.unwrap().items.len(), 20);
            }
            other => panic!("unexpected response {other:?}"),
        }

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn execute_carries_ticket_and_cursor() {
        let source = MockSource::instant(3);
        let response = execute(
            &source,
            20,
            Request::Content {
                item: ItemId::new("reports-4"),
                ticket: 9,
            },
        );
        assert!(matches!(response, WorkerResponse::Content { ticket: 9, ref result, .. } if result.is_ok()));

        let cursor = Cursor::after(&ItemId::new("reports-19"));
        let response = execute(
            &source,
            20,
            Request::NextPage {
                parent: ItemId::new("reports"),
                cursor: cursor.clone(),
            },
        );
        match response {
            WorkerResponse::Page { cursor: echoed, result, .. } => {
                assert_eq!(echoed, cursor);
                assert_eq!(result.unwrap().items[0].id.as_str(), "reports-20");
            }
            other => panic!("unexpected response {other:?}"),
        }
    }
}

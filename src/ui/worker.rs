//! Runs fetch commands on a single-threaded tokio runtime.
//!
//! All fetches share one cooperative task queue; the UI thread only queues
//! commands and never blocks on the network.

use std::io;
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc;

use crate::ui::app::{UiCommand, UiCommandSender};

const COMMAND_BUFFER: usize = 64;

pub struct FetchWorker {
    tx: Option<UiCommandSender>,
    handle: Option<JoinHandle<()>>,
}

impl FetchWorker {
    pub fn spawn() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);

        let handle = thread::Builder::new()
            .name("fetch-worker".to_string())
            .spawn(move || runtime.block_on(serve(rx)))?;

        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
        })
    }

    pub fn sender(&self) -> Option<UiCommandSender> {
        self.tx.clone()
    }

    /// Stop accepting commands and wait for the worker thread.
    ///
    /// Every other sender must be dropped first. Fetches still in flight
    /// are abandoned.
    pub fn shutdown(&mut self) {
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("Fetch worker panicked");
            }
        }
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn serve(mut rx: mpsc::Receiver<UiCommand>) {
    while let Some(command) = rx.recv().await {
        tracing::debug!(?command, "Fetch command received");
        tokio::spawn(execute(command));
    }
    tracing::debug!("Fetch worker stopped");
}

async fn execute(command: UiCommand) {
    let (kind, status) = match command {
        UiCommand::Fetch(panel) => (panel.kind(), panel.fetch().await),
        UiCommand::Retry(panel) => (panel.kind(), panel.retry().await),
    };
    tracing::debug!(resource = %kind, ?status, "Fetch settled");
}

//! Cancellable background document read
//!
//! The read runs on its own thread and reports over a channel. Cancelling
//! (explicitly or by dropping the task) stops a result from being delivered,
//! so a draft that was reset or closed never sees a stale completion.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::error::{LedgerError, LedgerResult};

use super::document::{read_document, EncodedDocument};

/// Outcome of a finished read
pub type UploadResult = LedgerResult<EncodedDocument>;

/// Handle to an in-flight document read
#[derive(Debug)]
pub struct UploadTask {
    path: PathBuf,
    mime: &'static str,
    cancelled: Arc<AtomicBool>,
    receiver: Receiver<UploadResult>,
}

impl UploadTask {
    /// Start reading `path` on a background thread
    pub fn spawn(path: impl Into<PathBuf>, mime: &'static str) -> Self {
        let path = path.into();
        let cancelled = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = mpsc::channel();

        {
            let path = path.clone();
            let cancelled = Arc::clone(&cancelled);
            thread::spawn(move || {
                let result = read_document(&path, mime);
                if cancelled.load(Ordering::SeqCst) {
                    return;
                }
                // Receiver gone means the task was dropped
                let _ = sender.send(result);
            });
        }

        Self {
            path,
            mime,
            cancelled,
            receiver,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Stop the pending read from delivering a result
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Non-blocking check for completion
    pub fn try_finish(&self) -> Option<UploadResult> {
        if self.is_cancelled() {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(reader_stopped())),
        }
    }

    /// Block until the read completes or `timeout` elapses
    pub fn wait(&self, timeout: Duration) -> Option<UploadResult> {
        if self.is_cancelled() {
            return None;
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(reader_stopped())),
        }
    }
}

impl Drop for UploadTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn reader_stopped() -> LedgerError {
    LedgerError::Upload("Document reader stopped unexpectedly".into())
}

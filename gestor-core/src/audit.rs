//! Best-effort audit trail of attempted mutations.
//!
//! An entry is produced for every intent handed to the orchestrator, before
//! any mapping or validation, so rejected attempts are recorded too. Sinks
//! may fail; the recorder logs the failure and carries on.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Action, Entity, EntityKind};

/// Actor recorded on every entry until user identity is threaded through.
pub const SYSTEM_ACTOR: &str = "system";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub action: Action,
    pub entity_kind: EntityKind,
    pub actor: String,
    /// Snapshot of the application-shape payload as submitted.
    pub payload: serde_json::Value,
}

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Audit sink unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write audit log {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),

    #[error("Failed to encode audit entry: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Destination for audit entries.
pub trait AuditSink: Send + Sync {
    fn record(&self, entry: &AuditEntry) -> Result<(), AuditError>;
}

/// Builds entries and forwards them to a sink, never failing the caller.
#[derive(Clone)]
pub struct AuditRecorder {
    sink: Arc<dyn AuditSink>,
}

impl AuditRecorder {
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink }
    }

    /// A recorder that only emits structured log events.
    pub fn tracing() -> Self {
        Self::new(Arc::new(TracingSink))
    }

    pub fn record(&self, action: Action, kind: EntityKind, payload: &Entity) -> AuditEntry {
        let payload = serde_json::to_value(payload).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not snapshot audit payload");
            serde_json::Value::Null
        });
        let entry = AuditEntry {
            timestamp: Utc::now(),
            action,
            entity_kind: kind,
            actor: SYSTEM_ACTOR.to_string(),
            payload,
        };

        if let Err(e) = self.sink.record(&entry) {
            tracing::warn!(%action, %kind, error = %e, "Audit record dropped");
        }
        entry
    }
}

/// Emits each entry as an `info` event on the `audit` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn record(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        tracing::info!(
            target: "audit",
            action = %entry.action,
            kind = %entry.entity_kind,
            actor = %entry.actor,
            payload = %entry.payload,
            "{} {}",
            entry.action,
            entry.entity_kind
        );
        Ok(())
    }
}

/// Keeps entries in memory, mostly for tests and inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<AuditEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemorySink {
    fn record(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| AuditError::Unavailable(e.to_string()))?;
        entries.push(entry.clone());
        Ok(())
    }
}

/// Appends one JSON object per line to a file.
///
/// Lines are written by a dedicated thread; `record` only enqueues.
/// Dropping the sink waits for pending lines to reach the file.
#[derive(Debug)]
pub struct JsonlFileSink {
    path: PathBuf,
    sender: Option<Sender<String>>,
    writer: Option<JoinHandle<()>>,
}

impl JsonlFileSink {
    /// Opens (or creates) the log, creating parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AuditError::Io(parent.to_path_buf(), e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| AuditError::Io(path.clone(), e))?;

        let (sender, receiver) = mpsc::channel::<String>();
        let writer_path = path.clone();
        let writer = thread::Builder::new()
            .name("audit-writer".to_string())
            .spawn(move || write_lines(file, &writer_path, receiver))
            .map_err(|e| AuditError::Io(path.clone(), e))?;

        Ok(Self {
            path,
            sender: Some(sender),
            writer: Some(writer),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_lines(mut file: File, path: &Path, lines: Receiver<String>) {
    for line in lines {
        if let Err(e) = file.write_all(line.as_bytes()) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write audit entry");
        }
    }
    if let Err(e) = file.flush() {
        tracing::warn!(path = %path.display(), error = %e, "Failed to flush audit log");
    }
}

impl AuditSink for JsonlFileSink {
    fn record(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| AuditError::Unavailable("audit writer closed".to_string()))?;
        sender
            .send(line)
            .map_err(|_| AuditError::Unavailable("audit writer stopped".to_string()))
    }
}

impl Drop for JsonlFileSink {
    fn drop(&mut self) {
        // Closing the channel ends the writer loop.
        drop(self.sender.take());
        if let Some(writer) = self.writer.take() {
            if writer.join().is_err() {
                tracing::warn!(path = %self.path.display(), "Audit writer panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Client;
    use tempfile::TempDir;

    struct FailingSink;

    impl AuditSink for FailingSink {
        fn record(&self, _entry: &AuditEntry) -> Result<(), AuditError> {
            Err(AuditError::Unavailable("disk full".to_string()))
        }
    }

    #[test]
    fn test_record_uses_system_actor() {
        let sink = Arc::new(MemorySink::new());
        let recorder = AuditRecorder::new(sink.clone());
        let client: Entity = Client::new("Kianda Lda", "5417000001").into();

        let entry = recorder.record(Action::Create, EntityKind::Client, &client);

        assert_eq!(entry.actor, SYSTEM_ACTOR);
        assert_eq!(entry.action, Action::Create);
        assert_eq!(entry.entity_kind, EntityKind::Client);
        assert_eq!(entry.payload["nome"], "Kianda Lda");
        assert_eq!(sink.entries(), vec![entry]);
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        let recorder = AuditRecorder::new(Arc::new(FailingSink));
        let entry = recorder.record(
            Action::Delete,
            EntityKind::Product,
            &Entity::blank(EntityKind::Product),
        );
        assert_eq!(entry.action, Action::Delete);
    }

    #[test]
    fn test_jsonl_sink_appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("audit.jsonl");
        let sink = Arc::new(JsonlFileSink::open(&path).unwrap());
        assert_eq!(sink.path(), path.as_path());
        let recorder = AuditRecorder::new(sink);

        recorder.record(Action::Create, EntityKind::Client, &Client::default().into());
        recorder.record(Action::Update, EntityKind::Client, &Client::default().into());
        drop(recorder);

        let contents = std::fs::read_to_string(&path).unwrap();
        let entries: Vec<AuditEntry> = contents
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].action, Action::Update);
        assert_eq!(entries[0].entity_kind, EntityKind::Client);
    }

    #[tokio::test]
    async fn test_jsonl_sink_records_from_concurrent_tasks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("audit.jsonl");
        let recorder = AuditRecorder::new(Arc::new(JsonlFileSink::open(&path).unwrap()));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let recorder = recorder.clone();
                tokio::spawn(async move {
                    recorder.record(Action::Create, EntityKind::Product, &Entity::blank(EntityKind::Product));
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }
        drop(recorder);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 8);
        for line in contents.lines() {
            let entry: AuditEntry = serde_json::from_str(line).unwrap();
            assert_eq!(entry.entity_kind, EntityKind::Product);
        }
    }

    #[test]
    fn test_tracing_sink_never_fails() {
        let entry = AuditRecorder::tracing().record(
            Action::Create,
            EntityKind::Warehouse,
            &Entity::blank(EntityKind::Warehouse),
        );
        assert!(TracingSink.record(&entry).is_ok());
    }
}

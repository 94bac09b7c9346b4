//! Upload task domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the lifecycle stage of a simulated upload.
///
/// A task transitions `Uploading → Completed` exactly once and is never
/// resurrected; removal from the active collection is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    /// Progress is still advancing.
    Uploading,
    /// Progress reached 100; the task lingers briefly before expiry.
    Completed,
}

/// A file descriptor submitted to the upload pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file_name: String,
    pub size_bytes: u64,
}

impl UploadRequest {
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
        }
    }

    /// Display label for the file size, e.g. "2.50 MB".
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / (1024.0 * 1024.0))
    }
}

/// One in-flight simulated upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTask {
    /// Unique task id.
    pub id: String,
    pub file_name: String,
    pub size_label: String,
    /// Monotonically non-decreasing, in [0, 100].
    pub progress: f64,
    pub status: UploadStatus,
}

impl UploadTask {
    /// Creates a fresh task in `Uploading` state with zero progress.
    pub(crate) fn new(request: &UploadRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            file_name: request.file_name.clone(),
            size_label: request.size_label(),
            progress: 0.0,
            status: UploadStatus::Uploading,
        }
    }

    /// Advances progress by `increment`, clamping at 100.
    ///
    /// Completed tasks are unaffected; the transition happens once.
    pub(crate) fn advance(&mut self, increment: f64) -> UploadStatus {
        if self.status == UploadStatus::Completed {
            return self.status;
        }
        self.progress = (self.progress + increment.max(0.0)).min(100.0);
        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.status = UploadStatus::Completed;
        }
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == UploadStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_label_formatting() {
        let request = UploadRequest::new("a.pdf", 2 * 1024 * 1024 + 512 * 1024);
        assert_eq!(request.size_label(), "2.50 MB");
    }

    #[test]
    fn test_new_task_starts_uploading_at_zero() {
        let task = UploadTask::new(&UploadRequest::new("a.pdf", 1024));
        assert_eq!(task.progress, 0.0);
        assert_eq!(task.status, UploadStatus::Uploading);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_advance_clamps_and_completes_once() {
        let mut task = UploadTask::new(&UploadRequest::new("a.pdf", 1024));
        assert_eq!(task.advance(60.0), UploadStatus::Uploading);
        assert_eq!(task.progress, 60.0);
        assert_eq!(task.advance(60.0), UploadStatus::Completed);
        assert_eq!(task.progress, 100.0);
        // Further ticks leave a completed task untouched.
        assert_eq!(task.advance(60.0), UploadStatus::Completed);
        assert_eq!(task.progress, 100.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut task = UploadTask::new(&UploadRequest::new("a.pdf", 1024));
        let mut last = task.progress;
        for increment in [3.0, 0.0, 14.9, 7.5, 50.0, 50.0] {
            task.advance(increment);
            assert!(task.progress >= last);
            last = task.progress;
        }
    }
}

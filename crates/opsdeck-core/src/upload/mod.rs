//! Upload pipeline domain module.
//!
//! Uploads are simulated: each submitted file gets an independent
//! timer-driven timeline that advances progress until completion, then
//! expires the task out of the active collection. No bytes move.

mod model;

pub use model::{UploadRequest, UploadStatus, UploadTask};

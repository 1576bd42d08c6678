//! Document Upload Domain
//!
//! This crate owns the life of a claim document between the moment the user
//! picks it and the moment its hosted URL is attached to the claim record:
//!
//! - `file` - the per-file record with progress, error, and result fields
//! - `failure` - categorization of upload failures into user-facing kinds
//! - `ports` - the `DocumentUploader` port and its in-memory adapter
//! - `orchestrator` - concurrent per-file uploads, retry, removal with task
//!   abort, and the aggregate upload-all-outstanding pass used at submission
//!
//! Every file starts uploading the instant it is added; there is no queue.
//! All mutation of the file list goes through the orchestrator by `FileId`.

pub mod file;
pub mod failure;
pub mod ports;
pub mod orchestrator;

pub use file::{FileSnapshot, FileSource, NewFile, UploadedFile};
pub use failure::{UploadErrorKind, UploadFailure};
pub use ports::{
    DocumentUploader, InMemoryUploader, ProgressSink, RawUploadResponse, UploadRequest,
    CLAIM_DOCUMENT_TYPE,
};
pub use orchestrator::{CompletedUpload, UploadContext, UploadOrchestrator, UploadsError};

// Post domain types and user-facing auto-upload messaging.

pub mod auto_upload;

/// Status of a post on the hosted service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStatus {
    Draft,
    Pending,
    Publish,
    PublishPrivate,
    Scheduled,
    Trash,
}

/// Outcome of the background auto-upload attempts for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoUploadAttemptState {
    /// No upload has been attempted yet.
    NotAttempted,
    /// An upload was attempted and will be retried.
    Attempted,
    /// The retry limit was reached; no further attempts will be made.
    ReachedLimit,
}

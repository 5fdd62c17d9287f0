// User-facing message strings for the post auto-upload flow.
// Static lookup tables keyed by post status; shown in notices when a post
// fails to upload or an upload is cancelled.

use super::{AutoUploadAttemptState, PostStatus};

pub const POST_WILL_BE_PUBLISHED: &str =
    "Post will be published next time your device is online";
pub const DRAFT_WILL_BE_UPLOADED: &str =
    "Draft will be uploaded next time your device is online";
pub const PAGE_FAILED_TO_UPLOAD: &str = "Page failed to upload";
pub const POST_FAILED_TO_UPLOAD: &str = "Post failed to upload";
pub const CHANGES_WILL_BE_UPLOADED: &str =
    "Changes will be uploaded next time your device is online";
pub const WILL_ATTEMPT_TO_PUBLISH_LATER: &str =
    "Post couldn't be published. We'll try again later";
pub const WILL_NOT_ATTEMPT_TO_PUBLISH_LATER: &str =
    "Couldn't perform operation. Post not published";
pub const WILL_SUBMIT_LATER: &str =
    "Post will be submitted for review when your device is back online";
pub const WILL_ATTEMPT_TO_SUBMIT_LATER: &str =
    "Post couldn't be submitted. We'll try again later";
pub const WILL_NOT_ATTEMPT_TO_SUBMIT_LATER: &str =
    "Couldn't perform operation. Post not submitted";
pub const PRIVATE_WILL_BE_UPLOADED: &str =
    "Private post will be published when your device is back online";
pub const WILL_ATTEMPT_TO_PUBLISH_PRIVATE_LATER: &str =
    "Private post couldn't be published. We'll try again later";
pub const WILL_NOT_ATTEMPT_TO_PUBLISH_PRIVATE_LATER: &str =
    "Couldn't perform operation. Private post not published";
pub const SCHEDULED_WILL_BE_UPLOADED: &str =
    "Post will be scheduled when your device is back online";
pub const WILL_ATTEMPT_TO_SCHEDULE_LATER: &str =
    "Post couldn't be scheduled. We'll try again later";
pub const WILL_NOT_ATTEMPT_TO_SCHEDULE_LATER: &str =
    "Couldn't perform operation. Post not scheduled";
pub const CHANGES_WILL_NOT_BE_PUBLISHED: &str = "Changes will not be published";
pub const CHANGES_WILL_NOT_BE_SUBMITTED: &str = "Changes will not be submitted";
pub const CHANGES_WILL_NOT_BE_SCHEDULED: &str = "Changes will not be scheduled";
pub const CHANGES_WILL_NOT_BE_SAVED: &str =
    "We won't save the latest changes to your draft.";
pub const FAILED_MEDIA: &str = "Couldn't upload media.";
pub const FAILED_MEDIA_FOR_PUBLISH: &str = "Couldn't upload media. Post not published";
pub const FAILED_MEDIA_FOR_PRIVATE: &str =
    "Couldn't upload media. Private post not published";
pub const FAILED_MEDIA_FOR_SCHEDULED: &str = "Couldn't upload media. Post not scheduled";
pub const FAILED_MEDIA_FOR_PENDING: &str = "Couldn't upload media. Post not submitted";

/// Notice shown when the user cancels a pending auto-upload.
pub fn cancel_message(status: Option<PostStatus>) -> &'static str {
    match status {
        Some(PostStatus::Publish) | Some(PostStatus::PublishPrivate) => {
            CHANGES_WILL_NOT_BE_PUBLISHED
        }
        Some(PostStatus::Scheduled) => CHANGES_WILL_NOT_BE_SCHEDULED,
        Some(PostStatus::Draft) => CHANGES_WILL_NOT_BE_SAVED,
        _ => CHANGES_WILL_NOT_BE_SUBMITTED,
    }
}

/// Notice shown after a failed upload attempt, chosen by how far the retry
/// cycle has progressed. `NotAttempted` yields no message.
pub fn attempt_failure_message(
    status: Option<PostStatus>,
    state: AutoUploadAttemptState,
    has_failed_media: bool,
) -> Option<&'static str> {
    match state {
        AutoUploadAttemptState::Attempted => Some(will_attempt_to_auto_upload(status)),
        AutoUploadAttemptState::ReachedLimit => {
            if has_failed_media {
                Some(failed_media_message(status))
            } else {
                Some(will_not_attempt_to_auto_upload(status))
            }
        }
        AutoUploadAttemptState::NotAttempted => None,
    }
}

/// Notice shown when media belonging to the post failed to upload.
pub fn failed_media_message(status: Option<PostStatus>) -> &'static str {
    match status {
        Some(PostStatus::Publish) => FAILED_MEDIA_FOR_PUBLISH,
        Some(PostStatus::PublishPrivate) => FAILED_MEDIA_FOR_PRIVATE,
        Some(PostStatus::Scheduled) => FAILED_MEDIA_FOR_SCHEDULED,
        Some(PostStatus::Pending) => FAILED_MEDIA_FOR_PENDING,
        _ => FAILED_MEDIA,
    }
}

fn will_attempt_to_auto_upload(status: Option<PostStatus>) -> &'static str {
    match status {
        Some(PostStatus::Publish) => WILL_ATTEMPT_TO_PUBLISH_LATER,
        Some(PostStatus::PublishPrivate) => WILL_ATTEMPT_TO_PUBLISH_PRIVATE_LATER,
        Some(PostStatus::Scheduled) => WILL_ATTEMPT_TO_SCHEDULE_LATER,
        _ => WILL_ATTEMPT_TO_SUBMIT_LATER,
    }
}

fn will_not_attempt_to_auto_upload(status: Option<PostStatus>) -> &'static str {
    match status {
        Some(PostStatus::Publish) => WILL_NOT_ATTEMPT_TO_PUBLISH_LATER,
        Some(PostStatus::PublishPrivate) => WILL_NOT_ATTEMPT_TO_PUBLISH_PRIVATE_LATER,
        Some(PostStatus::Scheduled) => WILL_NOT_ATTEMPT_TO_SCHEDULE_LATER,
        _ => WILL_NOT_ATTEMPT_TO_SUBMIT_LATER,
    }
}

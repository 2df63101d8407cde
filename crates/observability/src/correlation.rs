//! Request correlation ids.

use uuid::Uuid;

/// Fresh correlation id for one inbound request.
///
/// UUIDv7, so ids sort by arrival time when grepping logs.
pub fn request_id() -> String {
    Uuid::now_v7().to_string()
}

use crate::room::RoomId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or validating a campus.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Two rooms share the same identifier.
    #[error("duplicate room id: {0}")]
    DuplicateRoom(RoomId),

    /// A room used the reserved "no exit" identifier.
    #[error("room \"{0}\" uses reserved id 0")]
    ReservedRoomId(String),

    /// An item or puzzle refers to a room that does not exist.
    #[error("{what} refers to unknown room {room}")]
    UnknownRoom {
        /// Description of the referring record.
        what: String,
        /// The missing room id.
        room: RoomId,
    },

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),

    /// Campus file could not be read.
    #[error("failed to read campus file: {0}")]
    Io(#[from] std::io::Error),

    /// Campus file is not valid JSON for the campus schema.
    #[error("failed to parse campus data: {0}")]
    Json(#[from] serde_json::Error),
}

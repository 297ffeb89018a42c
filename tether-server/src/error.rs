use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HubError {
    /// The hub loop has exited and no longer accepts commands.
    #[error("signaling hub has shut down")]
    Closed,
}

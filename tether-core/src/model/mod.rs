mod connection;
mod room;
mod signaling;

pub use connection::ConnectionId;
pub use room::{RoomId, is_valid_room_id};
pub use signaling::{InboundMessage, OutboundMessage};

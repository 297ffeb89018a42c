mod envelope;
pub mod peer_discovery;
mod room_advertisement;
mod signaling_relay;

pub use envelope::*;
pub use room_advertisement::*;
pub use signaling_relay::*;

use crate::error::ProtocolError;
use crate::model::connection::ConnectionId;
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frames a browser sends to the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum InboundMessage {
    Join {
        room: RoomId,
    },
    /// Leaves every room the connection is in.
    Leave,
    #[serde(rename = "relay-sdp")]
    RelaySessionDescription {
        #[serde(rename = "peerID")]
        peer_id: ConnectionId,
        #[serde(rename = "sessionDescription")]
        session_description: Value,
    },
    #[serde(rename = "relay-ice")]
    RelayIceCandidate {
        #[serde(rename = "peerID")]
        peer_id: ConnectionId,
        #[serde(rename = "iceCandidate")]
        ice_candidate: Value,
    },
}

impl InboundMessage {
    /// Parse one text frame.
    ///
    /// `leave` has no fields, so whatever payload a client attaches to it
    /// (none, `null`, `{}`) is discarded before the frame is matched.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let mut frame: Value = serde_json::from_str(text).map_err(ProtocolError::Malformed)?;
        if frame["type"] == "leave" {
            if let Some(fields) = frame.as_object_mut() {
                fields.remove("payload");
            }
        }

        let message = Self::deserialize(frame).map_err(ProtocolError::Malformed)?;

        if let Self::Join { room } = &message {
            if room.as_str().is_empty() {
                return Err(ProtocolError::EmptyRoom);
            }
        }

        Ok(message)
    }
}

/// Frames the relay sends to a browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum OutboundMessage {
    /// First frame on every connection: the id other peers will know it by.
    Welcome {
        #[serde(rename = "peerID")]
        peer_id: ConnectionId,
    },
    AddPeer {
        #[serde(rename = "peerID")]
        peer_id: ConnectionId,
        #[serde(rename = "createOffer")]
        create_offer: bool,
    },
    RemovePeer {
        #[serde(rename = "peerID")]
        peer_id: ConnectionId,
    },
    SessionDescription {
        #[serde(rename = "peerID")]
        peer_id: ConnectionId,
        #[serde(rename = "sessionDescription")]
        session_description: Value,
    },
    IceCandidate {
        #[serde(rename = "peerID")]
        peer_id: ConnectionId,
        #[serde(rename = "iceCandidate")]
        ice_candidate: Value,
    },
    ShareRooms {
        rooms: Vec<RoomId>,
    },
}

impl OutboundMessage {
    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }
}

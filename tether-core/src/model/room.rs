use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::{Uuid, Variant, Version};

/// Length of the canonical hyphenated UUID text form.
const CANONICAL_UUID_LEN: usize = 36;

/// Name of a room as sent by the client.
///
/// Any non-empty string can be joined. Only names that pass
/// [`is_valid_room_id`] are advertised to other connections.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    /// Mint a fresh advertisable room name.
    pub fn random() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        is_valid_room_id(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room-ID validity predicate: canonical hyphenated RFC 4122 UUID with
/// version nibble 4. Braced, URN and simple forms are rejected, case is not
/// significant.
pub fn is_valid_room_id(candidate: &str) -> bool {
    if candidate.len() != CANONICAL_UUID_LEN {
        return false;
    }

    match Uuid::try_parse(candidate) {
        Ok(uuid) => {
            uuid.get_version() == Some(Version::Random) && uuid.get_variant() == Variant::RFC4122
        }
        Err(_) => false,
    }
}

//! Identity generator
//!
//! Snippet identifiers are 25 characters long: a `c` marker followed by 24
//! base36 digits derived from a UUID v7. The fixed length is what the import
//! classifier keys on to recognise a local store key.

use uuid::Uuid;

/// Length of every generated identifier
pub const ID_LEN: usize = 25;

const ID_PREFIX: char = 'c';
const BODY_LEN: usize = ID_LEN - 1;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh snippet identifier
///
/// Time-ordered (UUID v7 under the hood), so ids sort roughly by creation.
pub fn new_id() -> String {
    encode(Uuid::now_v7())
}

/// Encode a UUID as a 25-character identifier
///
/// The lowest 4 bits are dropped so the value fits in 24 base36 digits
/// (36^24 > 2^124).
pub fn encode(uuid: Uuid) -> String {
    let mut value = uuid.as_u128() >> 4;
    let mut digits = [b'0'; BODY_LEN];

    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(value % 36) as usize];
        value /= 36;
    }

    let mut id = String::with_capacity(ID_LEN);
    id.push(ID_PREFIX);
    id.extend(digits.iter().map(|&b| b as char));
    id
}

//! Widget identifiers.

use uuid::Uuid;

/// Identifier of a widget (12 lowercase hex characters) or the page sentinel.
pub type WidgetId = String;

/// Sentinel id used by the page and by top-level widgets' `parent`.
pub const PAGE_UUID: &str = "-1";

/// Length of generated widget ids.
pub const UUID_LEN: usize = 12;

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Generate a fresh widget id.
///
/// Draws from the random bits of a v4 UUID, one nibble per character, so every id is
/// `UUID_LEN` characters taken from `0-9a-f`.
pub fn generate_uuid() -> WidgetId {
    let bytes = Uuid::new_v4().into_bytes();
    // The first six bytes precede the version and variant bits.
    bytes[..UUID_LEN / 2]
        .iter()
        .flat_map(|b| [b >> 4, b & 0x0f])
        .map(|nibble| ALPHABET[nibble as usize] as char)
        .collect()
}

/// Check whether an id refers to the page.
pub fn is_page_id(id: &str) -> bool {
    id == PAGE_UUID
}

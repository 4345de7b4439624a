//! Stable note identity: GUIDs and sort-field checksums.

use sha1::Sha1;
use sha2::{Digest, Sha256};

const BASE91_TABLE: &[u8; 91] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&()*+,-./:;<=>?@[]^_`{|}~";

/// GUID for a note, derived from its field values so re-imports match up.
pub fn guid_for(fields: &[&str]) -> String {
    let digest = Sha256::digest(fields.join("__").as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    base91(u64::from_be_bytes(prefix))
}

/// Checksum of the sort field, used by Anki for duplicate detection:
/// the first 32 bits of the SHA-1 of the stripped field.
pub fn field_checksum(field: &str) -> i64 {
    let digest = Sha1::digest(field.trim().as_bytes());
    let mut prefix = [0u8; 4];
    prefix.copy_from_slice(&digest[..4]);
    i64::from(u32::from_be_bytes(prefix))
}

fn base91(mut value: u64) -> String {
    let mut reversed = Vec::new();
    while value > 0 {
        reversed.push(BASE91_TABLE[(value % 91) as usize]);
        value /= 91;
    }
    reversed.iter().rev().map(|&b| b as char).collect()
}

//! Checksum validation for migrations
//!
//! SHA-256 over the migration SQL, used to detect edits to applied migrations

use sha2::{Digest, Sha256};

/// Compute the SHA-256 checksum of migration SQL
///
/// Line endings are normalized first so a CRLF checkout hashes the same.
pub fn compute_checksum(content: &str) -> String {
    let normalized = content.replace("\r\n", "\n");
    hex::encode(Sha256::digest(normalized.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_hex_sha256() {
        let checksum = compute_checksum("SELECT 1");
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_line_endings_do_not_matter() {
        assert_eq!(
            compute_checksum("CREATE TABLE t (x);\r\nSELECT 1;\r\n"),
            compute_checksum("CREATE TABLE t (x);\nSELECT 1;\n")
        );
    }
}

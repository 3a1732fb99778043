//! Checksum sidecar files (MD5, SHA-1, SHA-256) published next to each file.

use quay_util::hash::{md5_bytes, sha1_bytes, sha256_bytes};

/// Sidecar extensions, in the order they are published.
pub const ALGORITHMS: [&str; 3] = ["md5", "sha1", "sha256"];

/// Checksum sidecars for `file_name`: `(sidecar file name, lowercase hex digest)`.
pub fn sidecars(file_name: &str, data: &[u8]) -> Vec<(String, String)> {
    ALGORITHMS
        .iter()
        .map(|algo| {
            let digest = match *algo {
                "md5" => md5_bytes(data),
                "sha1" => sha1_bytes(data),
                _ => sha256_bytes(data),
            };
            (format!("{file_name}.{algo}"), digest)
        })
        .collect()
}

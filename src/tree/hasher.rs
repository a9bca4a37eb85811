//! Content hashing for regular files using SHA-256
//!
//! A failed open or read abandons the file. The one exception is a read that
//! reports `Interrupted` (EINTR): no data was transferred, so it is reissued.

use crate::error::HashError;
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Chunk size used when streaming file contents into the digest.
pub const BUFFER_SIZE: usize = 4096;

/// Length of a rendered digest: two hex characters per byte of a 256-bit hash.
pub const DIGEST_HEX_LEN: usize = 64;

/// Lowercase hexadecimal SHA-256 digest of a file's contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(String);

impl Digest {
    fn from_bytes(bytes: &[u8]) -> Self {
        Digest(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash the file at `path`.
///
/// The file handle is dropped on every return path. A path that can be
/// opened but not read (a directory swapped in after classification, an
/// I/O error mid-stream) yields `HashError::Read`.
pub fn hash_file(path: &Path) -> Result<Digest, HashError> {
    let file = File::open(path).map_err(|source| HashError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    hash_reader(file).map_err(|source| HashError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Stream `reader` to end-of-file in `BUFFER_SIZE` chunks and return its digest.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<Digest> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; BUFFER_SIZE];

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(Digest::from_bytes(&hasher.finalize()))
}

/// Compute the digest of an in-memory byte slice.
pub fn compute_content_hash(content: &[u8]) -> Digest {
    Digest::from_bytes(&Sha256::digest(content))
}

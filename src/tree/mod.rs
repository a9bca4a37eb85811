//! Directory tree traversal and content hashing
//!
//! The walker discovers regular files under a root; the hasher turns each
//! into a SHA-256 digest.

pub mod hasher;
pub mod path;
pub mod walker;

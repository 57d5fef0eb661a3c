/// Filesystem helpers for document dumps and report files.
pub mod fs;

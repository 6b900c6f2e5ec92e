//! File System Helpers
//!
//! Atomic writes, advisory locks and data directory resolution used by the
//! file-backed stores.

mod atomic;
mod data_dir;
mod lock;

pub use atomic::atomic_write;
pub use data_dir::{default_data_dir, DATA_DIR_VAR};
pub use lock::{lock_path_for, sibling_with_suffix, FileLock};

//! Data shapes for files and directory entries.

pub mod dto;
pub mod fs;

pub use dto::{DirentResult, read_dir};
pub use fs::{Dirent, File, FileEncoding, FileMetadata, FileType};

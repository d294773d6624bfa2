use anyhow::{Result, Context};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @generates: Output path next to the input, extension swapped
    // @params: input_file, extension
    pub fn output_path_for<P: AsRef<Path>>(input_file: P, extension: &str) -> PathBuf {
        input_file
            .as_ref()
            .with_extension(extension.trim_start_matches('.'))
    }

    /// Find files with a specific extension in a directory
    ///
    /// The match is case-insensitive. Without `recursive` only the directory's
    /// own entries are considered. Results come back sorted by file name within
    /// each directory so that batch runs are reproducible.
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str, recursive: bool) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let wanted = extension.trim_start_matches('.');

        let mut walker = WalkDir::new(dir.as_ref())
            .follow_links(true)
            .sort_by_file_name();
        if !recursive {
            walker = walker.max_depth(1);
        }

        for entry in walker {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(wanted) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }
}

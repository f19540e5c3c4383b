// SPDX-License-Identifier: MPL-2.0
//! Gallery scanner module for finding and sorting gallery images.
//!
//! This module scans the configured gallery directory for supported image
//! formats, filters them, and sorts them alphabetically. The resulting list is
//! fixed for the lifetime of the lightbox that consumes it.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Image file extensions the gallery accepts.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// An alphabetically sorted list of gallery image paths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    files: Vec<PathBuf>,
}

impl ImageList {
    /// Creates a new empty ImageList.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Scans a directory for supported image files and sorts them by file name.
    ///
    /// Returns an error if the directory cannot be read. Subdirectories are
    /// not descended into.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            }
        }

        files.sort();

        Ok(Self { files })
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.files.get(index).map(|p| p.as_path())
    }

    /// Returns the total number of images in the list.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Checks if the image list is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates over the image paths in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|p| p.as_path())
    }
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

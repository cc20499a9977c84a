//! Loads product catalogs from JSON on disk.
//!
//! A catalog is either one file holding a JSON array of products, or a
//! directory tree of such files. Files in a directory are read in path order
//! so the resulting "featured" order is stable across runs.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::Product;

#[derive(Debug, Default)]
pub struct CatalogLoader {
    limit: Option<usize>,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops after `limit` products.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn load(&self, path: &Path) -> Result<Vec<Product>> {
        if path.is_dir() {
            self.load_directory(path)
        } else if path.is_file() {
            let mut products = read_products(path)?;
            self.truncate(&mut products);
            info!(path = %path.display(), products = products.len(), "loaded catalog");
            Ok(products)
        } else {
            Err(Error::NotFound(format!("catalog {}", path.display())))
        }
    }

    /// Reads every `*.json` file under `dir`; unreadable or malformed files
    /// are skipped.
    pub fn load_directory(&self, dir: &Path) -> Result<Vec<Product>> {
        let files = list_json_files(dir);
        if files.is_empty() {
            warn!(dir = %dir.display(), "no .json catalog files found");
            return Ok(vec![]);
        }
        let mut products = Vec::new();
        let mut skipped = 0usize;
        for file in &files {
            match read_products(file) {
                Ok(batch) => {
                    debug!(file = %file.display(), products = batch.len(), "read catalog file");
                    products.extend(batch);
                }
                Err(e) => {
                    warn!(file = %file.display(), error = %e, "skipping catalog file");
                    skipped += 1;
                }
            }
            if self.limit.is_some_and(|limit| products.len() >= limit) {
                break;
            }
        }
        self.truncate(&mut products);
        info!(
            dir = %dir.display(),
            files = files.len(),
            skipped,
            products = products.len(),
            "loaded catalog"
        );
        Ok(products)
    }

    fn truncate(&self, products: &mut Vec<Product>) {
        if let Some(limit) = self.limit {
            products.truncate(limit);
        }
    }
}

fn read_products(path: &Path) -> Result<Vec<Product>> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn list_json_files(root: &Path) -> Vec<PathBuf> {
    let mut json_files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    json_files.sort();
    json_files
}

//! JSON-lines directory store
//!
//! Each collection is a `<collection>.jsonl` file in one directory, holding
//! one JSON object per line. Blank lines are skipped.

use crate::adapters::store::traits::{DocumentCursor, DocumentStore, WriteResult};
use crate::domain::context::ResultExt;
use crate::domain::{Document, Result, ShroudError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter, Lines};

/// File extension of collection files
pub const COLLECTION_EXTENSION: &str = "jsonl";

/// Store backed by a directory of JSON-lines files
#[derive(Debug, Clone)]
pub struct JsonlStore {
    directory: PathBuf,
    create_missing: bool,
}

impl JsonlStore {
    /// Store over an existing directory
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            create_missing: false,
        }
    }

    /// Store that creates its directory on first use
    pub fn create_if_missing(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            create_missing: true,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.directory
            .join(format!("{collection}.{COLLECTION_EXTENSION}"))
    }
}

/// Streams documents from one file
struct JsonlCursor {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

#[async_trait]
impl DocumentCursor for JsonlCursor {
    async fn next_batch(&mut self, max: usize) -> Result<Vec<Document>> {
        let mut batch = Vec::with_capacity(max.min(1024));

        while batch.len() < max {
            let Some(line) = self
                .lines
                .next_line()
                .await
                .with_context(|| format!("Failed to read {}", self.path.display()))?
            else {
                break;
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            let document: Document = serde_json::from_str(&line).map_err(|e| {
                ShroudError::Serialization(format!(
                    "{}:{}: {}",
                    self.path.display(),
                    self.line_number,
                    e
                ))
            })?;
            batch.push(document);
        }

        Ok(batch)
    }
}

#[async_trait]
impl DocumentStore for JsonlStore {
    async fn test_connection(&self) -> Result<()> {
        if self.create_missing {
            fs::create_dir_all(&self.directory).await.with_context(|| {
                format!("Failed to create directory {}", self.directory.display())
            })?;
        }

        let metadata = fs::metadata(&self.directory).await.map_err(|e| {
            ShroudError::Connection(format!(
                "Directory not accessible {}: {}",
                self.directory.display(),
                e
            ))
        })?;

        if !metadata.is_dir() {
            return Err(ShroudError::Connection(format!(
                "Not a directory: {}",
                self.directory.display()
            )));
        }

        tracing::debug!(directory = %self.directory.display(), "JSON-lines directory available");
        Ok(())
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.directory)
            .await
            .with_context(|| format!("Failed to list {}", self.directory.display()))?;

        let mut collections = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(COLLECTION_EXTENSION) {
                continue;
            }
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                collections.push(stem.to_string());
            }
        }

        collections.sort();
        Ok(collections)
    }

    async fn open_cursor(&self, collection: &str) -> Result<Box<dyn DocumentCursor>> {
        let path = self.collection_path(collection);
        let file = File::open(&path).await.map_err(|e| {
            ShroudError::Storage(format!("Failed to open collection {}: {}", path.display(), e))
        })?;

        Ok(Box::new(JsonlCursor {
            path,
            lines: BufReader::new(file).lines(),
            line_number: 0,
        }))
    }

    async fn write_batch(&self, collection: &str, documents: Vec<Document>) -> Result<WriteResult> {
        if self.create_missing {
            fs::create_dir_all(&self.directory).await?;
        }

        let path = self.collection_path(collection);

        // Serialize everything first so a bad document leaves the file untouched
        let mut buffer = String::new();
        for document in &documents {
            buffer.push_str(&serde_json::to_string(document)?);
            buffer.push('\n');
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .with_context(|| format!("Failed to open {} for writing", path.display()))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(buffer.as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        writer.flush().await?;

        Ok(WriteResult {
            written: documents.len(),
        })
    }

    async fn drop_collection_if_non_empty(&self, collection: &str) -> Result<bool> {
        let path = self.collection_path(collection);

        match fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() && metadata.len() > 0 => {
                fs::remove_file(&path)
                    .await
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
                Ok(true)
            }
            Ok(_) => Ok(false),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        format!("jsonl:{}", self.directory.display())
    }
}

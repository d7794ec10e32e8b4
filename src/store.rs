use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::{Book, BookInput};

/// On-disk layout of the books database
///
/// Only `books` is interpreted; every other top-level key is carried
/// through unchanged.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    books: Vec<Book>,
    #[serde(flatten)]
    other: Map<String, JsonValue>,
}

/// Field criteria for looking up a single book
///
/// Every populated field must match exactly. A book without a title or
/// author never matches a query on that field. An empty query matches any
/// book.
#[derive(Debug, Default, Clone, Copy)]
pub struct BookQuery<'a> {
    pub id: Option<&'a str>,
    pub title: Option<&'a str>,
    pub author: Option<&'a str>,
}

impl<'a> BookQuery<'a> {
    pub fn by_id(id: &'a str) -> Self {
        Self { id: Some(id), ..Self::default() }
    }

    pub fn by_title(title: &'a str) -> Self {
        Self { title: Some(title), ..Self::default() }
    }

    pub fn by_author(author: &'a str) -> Self {
        Self { author: Some(author), ..Self::default() }
    }

    fn matches(&self, book: &Book) -> bool {
        self.id.is_none_or(|id| book.id == id)
            && self.title.is_none_or(|title| book.title.as_deref() == Some(title))
            && self.author.is_none_or(|author| book.author.as_deref() == Some(author))
    }
}

/// JSON-file backed book collection
///
/// The whole document is held in memory and rewritten after every mutation.
#[derive(Debug)]
pub struct BookStore {
    path: PathBuf,
    document: Document,
}

impl BookStore {
    /// Load the database at `path`
    ///
    /// A missing or blank file is seeded with an empty `books` collection
    /// and written out straight away.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read books database at {}", path.display())
                });
            }
        };

        let seed = bytes.iter().all(u8::is_ascii_whitespace);
        let document = if seed {
            Document::default()
        } else {
            serde_json::from_slice(&bytes).with_context(|| {
                format!("Failed to parse books database at {}", path.display())
            })?
        };

        let store = Self { path, document };
        if seed {
            tracing::info!("Seeding empty books database at {}", store.path.display());
            store.write()?;
        }

        tracing::info!(
            "Loaded {} books from {}",
            store.document.books.len(),
            store.path.display()
        );
        Ok(store)
    }

    /// Path to the backing JSON file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All books in insertion order
    pub fn list_books(&self) -> &[Book] {
        &self.document.books
    }

    /// First book matching `query`, in insertion order
    pub fn find_book(&self, query: &BookQuery<'_>) -> Option<&Book> {
        self.document.books.iter().find(|book| query.matches(book))
    }

    /// Append a book and flush
    pub fn push(&mut self, book: Book) -> Result<()> {
        tracing::debug!("Appending book with id: {}", book.id);
        self.document.books.push(book);
        self.write()
    }

    /// Merge `patch` onto the book with `id` and flush
    ///
    /// Returns `Ok(None)` without touching the file when no book has that id.
    pub fn update(&mut self, id: &str, patch: BookInput) -> Result<Option<Book>> {
        let Some(book) = self.document.books.iter_mut().find(|book| book.id == id) else {
            return Ok(None);
        };
        book.merge(patch);
        let updated = book.clone();

        self.write()?;
        tracing::debug!("Updated book with id: {}", id);
        Ok(Some(updated))
    }

    /// Remove every book with `id` and flush
    ///
    /// Returns `Ok(false)` without touching the file when nothing matched.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.document.books.len();
        self.document.books.retain(|book| book.id != id);
        if self.document.books.len() == before {
            return Ok(false);
        }

        self.write()?;
        tracing::debug!("Removed book with id: {}", id);
        Ok(true)
    }

    /// Serialize the whole document and atomically replace the file
    ///
    /// Blocking: this runs synchronous file I/O on the calling thread, and
    /// handlers call it while holding the store's write guard.
    pub fn write(&self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.document)
            .context("Failed to serialize books database")?;

        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("json");
        let tmp = self.path.with_extension(format!("{ext}.tmp"));

        fs::write(&tmp, bytes)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }

    /// Check that the backing file is still reachable
    pub fn health_check(&self) -> Result<()> {
        fs::metadata(&self.path).with_context(|| {
            format!("Books database missing at {}", self.path.display())
        })?;
        Ok(())
    }
}

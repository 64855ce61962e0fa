/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the library store and the UI layer. They never carry view handles;
/// the shelf keeps its own mapping from book id to card.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Opaque, immutable identifier of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(Uuid);

impl BookId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        BookId(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

/// Represents a single book in the library
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Unique identifier, fixed for the lifetime of the store
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Thumbnail source (URL or local path), empty when there is none
    pub img_src: String,
    pub tags: Vec<String>,
    pub have_read: bool,
    /// When the book was added to the shelf
    pub added_at: DateTime<Utc>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        img_src: impl Into<String>,
        tags: Vec<String>,
        have_read: bool,
    ) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
            img_src: img_src.into(),
            tags,
            have_read,
            added_at: Utc::now(),
        }
    }

    /// Whether the card for this book should show a thumbnail
    pub fn has_thumbnail(&self) -> bool {
        !self.img_src.is_empty()
    }

    /// Flip the read status and return the new value
    pub fn toggle_status(&mut self) -> bool {
        self.have_read = !self.have_read;
        self.have_read
    }
}

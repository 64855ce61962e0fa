use tracing::debug;

use super::data::{Book, BookId};

/// Literal seed books inserted on first load: (title, author, thumbnail, tags)
const SEED_BOOKS: [(&str, &str, &str, &[&str]); 3] = [
    (
        "DSA Made Easy",
        "Narasimha Karumanchi",
        "https://m.media-amazon.com/images/I/714+tgyHDRL._SY385_.jpg",
        &["DSA", "Algorithms", "Data structures", "Programming"],
    ),
    (
        "Atomic Habits",
        "James Clear",
        "https://m.media-amazon.com/images/I/51b4CfdTSDL._SY445_SX342_FMwebp_.jpg",
        &["Habits", "Self-help"],
    ),
    (
        "So Good They Can't Ignore You",
        "Cal Newport",
        "https://m.media-amazon.com/images/I/71KLTWMGdrL._SY466_.jpg",
        &["Work", "Self-help", "Value", "Career"],
    ),
];

/// The Library is the authoritative in-memory collection of books.
/// It lives as long as the application session; nothing is persisted.
///
/// Books are kept in insertion order. The shelf displays them newest first.
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library pre-filled with the seed books, all unread
    pub fn with_seed_books() -> Self {
        let mut library = Self::new();
        for (title, author, img_src, tags) in SEED_BOOKS {
            let tags = tags.iter().map(|tag| tag.to_string()).collect();
            library.add_book(title, author, img_src, tags, false);
        }
        library
    }

    /// Add a new book and return its id.
    /// Inputs are stored as given; validation belongs to the caller.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        img_src: impl Into<String>,
        tags: Vec<String>,
        have_read: bool,
    ) -> BookId {
        let book = Book::new(title, author, img_src, tags, have_read);
        let id = book.id;
        debug!(%id, title = %book.title, "book added");
        self.books.push(book);
        id
    }

    /// Remove a book by id. Unknown ids are ignored.
    /// Returns true if a book was removed.
    pub fn remove_book(&mut self, id: BookId) -> bool {
        match self.books.iter().position(|book| book.id == id) {
            Some(index) => {
                let book = self.books.remove(index);
                debug!(%id, title = %book.title, "book removed");
                true
            }
            None => false,
        }
    }

    /// Look up a book by id
    pub fn find_book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Flip the read status of a book. Unknown ids are ignored.
    /// Returns the new status if the book exists.
    pub fn toggle_read_status(&mut self, id: BookId) -> Option<bool> {
        let book = self.books.iter_mut().find(|book| book.id == id)?;
        let have_read = book.toggle_status();
        debug!(%id, have_read, "read status toggled");
        Some(have_read)
    }

    /// Number of books in the library
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Iterate newest first (display order)
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().rev()
    }

    /// Count of books already read
    pub fn read_count(&self) -> usize {
        self.books.iter().filter(|book| book.have_read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(library: &mut Library, title: &str) -> BookId {
        library.add_book(title, "Someone", "", vec![], false)
    }

    #[test]
    fn test_add_and_find() {
        let mut library = Library::new();
        let id = library.add_book("Dune", "Frank Herbert", "", vec!["SciFi".into()], false);

        let book = library.find_book(id).unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.tags, vec!["SciFi".to_string()]);
        assert!(!book.have_read);
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_duplicates_are_distinct_books() {
        let mut library = Library::new();
        let a = sample(&mut library, "Same");
        let b = sample(&mut library, "Same");
        assert_ne!(a, b);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut library = Library::new();
        sample(&mut library, "One");
        sample(&mut library, "Two");
        let before: Vec<Book> = library.iter().cloned().collect();

        assert!(!library.remove_book(BookId::new()));

        let after: Vec<Book> = library.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut library = Library::new();
        let id = sample(&mut library, "One");
        sample(&mut library, "Two");

        assert!(library.remove_book(id));
        assert!(!library.remove_book(id));
        assert_eq!(library.len(), 1);
        assert!(library.find_book(id).is_none());
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let mut library = Library::new();
        let id = sample(&mut library, "One");

        assert_eq!(library.toggle_read_status(id), Some(true));
        assert_eq!(library.toggle_read_status(id), Some(false));
        assert!(!library.find_book(id).unwrap().have_read);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut library = Library::new();
        sample(&mut library, "One");
        assert_eq!(library.toggle_read_status(BookId::new()), None);
        assert_eq!(library.read_count(), 0);
    }

    #[test]
    fn test_newest_first_order() {
        let mut library = Library::new();
        sample(&mut library, "First");
        sample(&mut library, "Second");
        sample(&mut library, "Third");

        let titles: Vec<&str> = library.iter_newest_first().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
    }

    #[test]
    fn test_seed_books() {
        let library = Library::with_seed_books();
        let titles: Vec<&str> = library.iter().map(|b| b.title.as_str()).collect();

        assert_eq!(
            titles,
            vec!["DSA Made Easy", "Atomic Habits", "So Good They Can't Ignore You"]
        );
        assert!(library.iter().all(|b| !b.have_read));
        assert!(library.iter().all(|b| b.has_thumbnail()));
    }
}

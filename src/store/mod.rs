//! # Book Store
//!
//! The authoritative in-memory collection of [`Book`] records and all of its
//! mutation and query logic. Request handlers go through this module; nothing
//! else constructs or mutates a `Book`.

mod book;

pub use book::{Book, BookDraft, BookPatch};

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No book carries the requested id
    #[error("Book with ID {0} not found")]
    NotFound(u64),
}

/// Ordered in-memory collection of books.
///
/// Insertion order is preserved. Ids are recomputed from the live contents on
/// every insert, so deleting the highest-id book lets the next insert reuse
/// that id.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Create a store pre-loaded with the seed catalog the service boots with
    pub fn with_seed_catalog() -> Self {
        let seed = [
            (
                "To Kill a Mockingbird",
                "Harper Lee",
                "English",
                "978-0-06-112008-4",
                1960,
                "Fiction",
            ),
            (
                "1984",
                "George Orwell",
                "English",
                "978-0-452-28423-4",
                1949,
                "Dystopian Fiction",
            ),
            (
                "Pride and Prejudice",
                "Jane Austen",
                "English",
                "978-0-14-143951-8",
                1813,
                "Romance",
            ),
            (
                "The Great Gatsby",
                "F. Scott Fitzgerald",
                "English",
                "978-0-7432-7356-5",
                1925,
                "Fiction",
            ),
            (
                "One Hundred Years of Solitude",
                "Gabriel García Márquez",
                "Spanish",
                "978-0-06-088328-7",
                1967,
                "Magical Realism",
            ),
            (
                "The Catcher in the Rye",
                "J.D. Salinger",
                "English",
                "978-0-316-76948-0",
                1951,
                "Fiction",
            ),
            (
                "Don Quixote",
                "Miguel de Cervantes",
                "Spanish",
                "978-0-06-093434-4",
                1605,
                "Adventure",
            ),
        ];

        let mut store = Self::new();
        for (title, author, language, isbn, year, genre) in seed {
            store.insert(BookDraft {
                title: title.to_string(),
                author: author.to_string(),
                language: language.to_string(),
                isbn: Some(isbn.to_string()),
                published_year: Some(year),
                genre: Some(genre.to_string()),
            });
        }
        store
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books currently held
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Find a book by id
    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Next id to assign: `max(existing) + 1`, or 1 when empty.
    ///
    /// Recomputed from the current contents each call rather than kept as a
    /// counter, so a deleted maximum id is handed out again.
    fn next_id(&self) -> u64 {
        self.books.iter().map(|b| b.id).max().map_or(1, |max| max + 1)
    }

    /// Construct a book from the draft, assign it an id, and append it
    pub fn insert(&mut self, draft: BookDraft) -> Book {
        let book = Book {
            id: self.next_id(),
            title: draft.title,
            author: draft.author,
            language: draft.language,
            isbn: draft.isbn,
            published_year: draft.published_year,
            genre: draft.genre,
        };
        self.books.push(book.clone());
        book
    }

    /// Overwrite the fields whose keys were present in the patch.
    ///
    /// Presence governs, not value: a key carrying `null` still overwrites
    /// its field. Absent keys leave the field untouched.
    pub fn update(&mut self, id: u64, patch: BookPatch) -> StoreResult<Book> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(title) = patch.title {
            book.title = title.unwrap_or_default();
        }
        if let Some(author) = patch.author {
            book.author = author.unwrap_or_default();
        }
        if let Some(language) = patch.language {
            book.language = language.unwrap_or_default();
        }
        if let Some(isbn) = patch.isbn {
            book.isbn = isbn;
        }
        if let Some(published_year) = patch.published_year {
            book.published_year = published_year;
        }
        if let Some(genre) = patch.genre {
            book.genre = genre;
        }

        Ok(book.clone())
    }

    /// Remove a book by id, returning it
    pub fn remove(&mut self, id: u64) -> StoreResult<Book> {
        let idx = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.books.remove(idx))
    }

    /// Full-scan substring search over title, author, and language.
    ///
    /// Expects a query already lower-cased and trimmed by the caller; blank
    /// queries are rejected at the handler boundary before reaching here.
    /// Matches come back in collection order.
    pub fn search(&self, query: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(query)
                    || b.author.to_lowercase().contains(query)
                    || b.language.to_lowercase().contains(query)
            })
            .cloned()
            .collect()
    }
}

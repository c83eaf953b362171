//! # Response Envelopes
//!
//! Standard response types for the REST API. Every body carries a `status`
//! marker; success envelopes add `data` and, where applicable, `total`,
//! `query`, or a human-readable `message`.

use serde::Serialize;

use crate::store::Book;

/// Outcome marker carried by every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Full-collection listing
#[derive(Debug, Clone, Serialize)]
pub struct ListEnvelope {
    pub status: Status,
    pub data: Vec<Book>,
    pub total: usize,
}

impl ListEnvelope {
    pub fn new(data: Vec<Book>) -> Self {
        let total = data.len();
        Self {
            status: Status::Success,
            data,
            total,
        }
    }
}

/// Single book
#[derive(Debug, Clone, Serialize)]
pub struct BookEnvelope {
    pub status: Status,
    pub data: Book,
}

impl BookEnvelope {
    pub fn new(data: Book) -> Self {
        Self {
            status: Status::Success,
            data,
        }
    }
}

/// Create/update acknowledgement carrying the affected book
#[derive(Debug, Clone, Serialize)]
pub struct MutationEnvelope {
    pub status: Status,
    pub message: String,
    pub data: Book,
}

impl MutationEnvelope {
    pub fn created(data: Book) -> Self {
        Self {
            status: Status::Success,
            message: "Book created successfully".to_string(),
            data,
        }
    }

    pub fn updated(data: Book) -> Self {
        Self {
            status: Status::Success,
            message: "Book updated successfully".to_string(),
            data,
        }
    }
}

/// Delete acknowledgement naming the removed id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteEnvelope {
    pub status: Status,
    pub message: String,
}

impl DeleteEnvelope {
    pub fn deleted(id: u64) -> Self {
        Self {
            status: Status::Success,
            message: format!("Book with ID {id} deleted successfully"),
        }
    }
}

/// Search results echoing the normalized query
#[derive(Debug, Clone, Serialize)]
pub struct SearchEnvelope {
    pub status: Status,
    pub data: Vec<Book>,
    pub total: usize,
    pub query: String,
}

impl SearchEnvelope {
    pub fn new(data: Vec<Book>, query: String) -> Self {
        let total = data.len();
        Self {
            status: Status::Success,
            data,
            total,
            query,
        }
    }
}

/// Error body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub status: Status,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: String) -> Self {
        Self {
            status: Status::Error,
            message,
        }
    }
}

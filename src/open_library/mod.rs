pub mod client;
pub mod models;

pub use client::{BookSearch, OpenLibraryClient, OpenLibraryError};
pub use models::{BookRecord, CoverId, LinkBases, SearchDoc, SearchResponse};

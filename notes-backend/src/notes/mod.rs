//! Notes system: in-memory note store and extractive summaries
//!
//! Notes live only for the lifetime of the process. The summary endpoint
//! runs the summarizer over every stored note, newest first.

pub mod store;
pub mod summarizer;

pub use store::NoteStore;
pub use summarizer::{summarize, SUMMARY_MAX_SENTENCES};

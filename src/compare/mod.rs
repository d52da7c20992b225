// Vocabulary comparison between two documents.

pub mod overlap;

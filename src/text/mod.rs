// Text processing: stopword resources, tokenization, and frequency tables.

pub mod frequency;
pub mod resources;
pub mod tokenize;

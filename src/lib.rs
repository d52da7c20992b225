// Distant reading: quantitative comparison of two historical texts.
//
// This is the library root. Each module corresponds to one stage of the
// analysis pipeline; `pipeline` wires them together in order.

pub mod compare;
pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod sentiment;
pub mod text;

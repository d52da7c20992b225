// Pipelines: end-to-end workflows that tie the analysis stages together.

pub mod analysis;

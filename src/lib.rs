pub mod charts;
pub mod ingest;
pub mod labels;
pub mod normalize;
pub mod pipeline;
pub mod reshape;
pub mod statistics;

//! salesviz: synthesize a sales dataset, aggregate it, render four charts
//! and write a text summary. See [`pipeline::run`] for the whole flow.

pub mod pipeline;
pub mod report;

//! Quarterly balance and return reporting for investor transaction exports.
//!
//! [`pipeline::run`] is the pure core: it turns one investor's raw records into
//! chronologically chained quarterly rows and headline statistics. [`engine::AsyncEngine`]
//! wraps it for whole dataset files, running one pipeline per investor.

pub mod actors;
pub mod dataset;
pub mod engine;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod storage;
pub mod types;

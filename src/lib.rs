//! Social network metrics for plays.
//!
//! A play is given as a sequence of segments (scenes), each listing the
//! speakers present. Speakers sharing a segment are linked in an undirected
//! co-occurrence graph, and [`compute_metrics`] reports its size, density,
//! path lengths, clustering, connectivity and per-character centralities.

pub mod analysis;
pub mod centrality;
pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod storage;

pub use analysis::{analyze_graph, compute_metrics, MetricsResult, NodeMetrics};
pub use config::MetricsConfig;
pub use data::Segment;
pub use error::{MetricsError, Result};

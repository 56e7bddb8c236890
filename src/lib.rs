//! Live-bed contraction scour: predicted vs. measured flow depth at the
//! contracted reach for four empirical equations.

pub mod config;
pub mod data;
pub mod hydraulics;
pub mod pipeline;
pub mod render;
pub mod scour;

// Public API exports
pub mod cluster;
pub mod geo;

// Re-export main types for convenience
pub use geo::{GeoError, LatLng};

pub use cluster::{Cluster, ClusterItem, SimpleCluster};

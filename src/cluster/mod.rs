mod item;
mod simple;


pub use item::ClusterItem;
pub use simple::SimpleCluster;

use crate::geo::LatLng;

/// Read side of a cluster, consumed by the rendering layer to draw one
/// aggregated marker.
pub trait Cluster<T: ClusterItem> {
    /// The representative position of the cluster
    fn position(&self) -> LatLng;

    /// The items grouped under this cluster
    fn items(&self) -> &[T];

    /// Number of items in the cluster
    fn size(&self) -> usize;
}

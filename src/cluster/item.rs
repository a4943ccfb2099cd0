use crate::geo::LatLng;

/// A point-item that can be grouped into clusters.
///
/// Equality drives [`SimpleCluster::remove`](crate::SimpleCluster::remove),
/// so two items should compare equal only when they denote the same marker.
pub trait ClusterItem: PartialEq {
    /// The geographic position of the item
    fn position(&self) -> LatLng;

    /// Title shown in the marker's info window, if any
    fn title(&self) -> Option<&str> {
        None
    }

    /// Snippet shown below the title in the info window, if any
    fn snippet(&self) -> Option<&str> {
        None
    }
}

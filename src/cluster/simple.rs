use std::cell::Cell;
use std::fmt;

use crate::cluster::{Cluster, ClusterItem};
use crate::geo::LatLng;

/// A cluster whose center is determined on demand.
///
/// The center is a cached value: mutating the item list does not refresh it.
/// Call [`recompute_center`](SimpleCluster::recompute_center) after editing
/// the items and before the next [`position`](SimpleCluster::position) read.
pub struct SimpleCluster<T: ClusterItem> {
    center: Cell<Option<LatLng>>,
    items: Vec<T>,
}

impl<T: ClusterItem> SimpleCluster<T> {
    /// Create an empty cluster with no center set
    pub fn new() -> Self {
        Self {
            center: Cell::new(None),
            items: Vec::new(),
        }
    }

    /// Create an empty cluster with an explicit initial center
    pub fn with_center(center: LatLng) -> Self {
        Self {
            center: Cell::new(Some(center)),
            items: Vec::new(),
        }
    }

    /// Append an item to the cluster. Duplicates are allowed; insertion
    /// order is preserved.
    ///
    /// Always returns true. The cached center is left stale; call
    /// [`recompute_center`](SimpleCluster::recompute_center) before the next
    /// position read if you need it up to date.
    pub fn add(&mut self, item: T) -> bool {
        self.items.push(item);
        true
    }

    /// Remove the first item equal to `item`.
    ///
    /// Returns true if an element was removed, false if no match was found.
    /// Same staleness caveat as [`add`](SimpleCluster::add).
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Force the center calculation.
    ///
    /// The center is the plain arithmetic mean of the item latitudes and
    /// longitudes, which is not valid for latitude/longitude near the poles
    /// or the antimeridian, but it's faster/easier. On an empty cluster the
    /// division by zero goes through and the center becomes (NaN, NaN).
    pub fn recompute_center(&self) {
        let mut lat = 0.0;
        let mut lng = 0.0;
        for item in &self.items {
            let position = item.position();
            lat += position.lat;
            lng += position.lng;
        }
        let size = self.items.len() as f64;
        self.center.set(Some(LatLng {
            lat: lat / size,
            lng: lng / size,
        }));
    }

    /// Mutable access to the item list.
    ///
    /// Edits made here bypass [`add`](SimpleCluster::add) and
    /// [`remove`](SimpleCluster::remove) but fall under the same staleness
    /// contract: recompute the center before relying on the next read.
    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}

impl<T: ClusterItem> Cluster<T> for SimpleCluster<T> {
    /// The cached center. Computed on first read if never set; never
    /// refreshed automatically after that.
    fn position(&self) -> LatLng {
        if self.center.get().is_none() {
            self.recompute_center();
        }
        self.center.get().unwrap_or(LatLng {
            lat: f64::NAN,
            lng: f64::NAN,
        })
    }

    fn items(&self) -> &[T] {
        &self.items
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T: ClusterItem> Default for SimpleCluster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ClusterItem> fmt::Debug for SimpleCluster<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleCluster")
            .field("center", &self.center.get())
            .field("items.len", &self.items.len())
            .finish()
    }
}

impl<T: ClusterItem> fmt::Display for SimpleCluster<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.center.get() {
            Some(center) => write!(f, "SimpleCluster{{center={}, items.len={}}}", center, self.items.len()),
            None => write!(f, "SimpleCluster{{center=unset, items.len={}}}", self.items.len()),
        }
    }
}

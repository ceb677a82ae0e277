use crate::error::QueueError;

pub mod heap_queue;

/// A min priority queue of distinct keys of type `K`, each associated with an
/// extrinsic priority of type `P`.
///
/// If several keys tie for the smallest priority, which one `get` and
/// `remove` report is unspecified.
pub trait MinQueue<K, P> {
    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Returns a key with the smallest priority, the same one `remove` would
    /// take out next.
    fn get(&self) -> Result<&K, QueueError>;

    fn min_priority(&self) -> Result<P, QueueError>;

    /// Inserts `key` with `priority`, or changes its priority to `priority`
    /// if it is already contained. Never fails.
    fn add_or_update(&mut self, key: K, priority: P);

    /// Removes and returns a key with the smallest priority.
    fn remove(&mut self) -> Result<K, QueueError>;

    fn clear(&mut self);
}

//! Holder for the most recently built page map.
//!
//! The hosting application creates one [`PageMapCache`], hands it to the
//! [`BuildHook`](crate::hook::BuildHook) that fills it before every
//! compilation, and reads it while rendering pages.
//!
//! ```text
//! BuildHook::rebuild ──set──▶ PageMapCache ◀──get── renderer
//!                               (ArcSwapOption)
//! ```
//!
//! Reads are lock-free. The last `set` wins; there is no versioning and no
//! detection of overlapping rebuilds.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::page::PageMapSnapshot;

#[derive(Debug)]
pub struct PageMapCache {
	slot: ArcSwapOption<PageMapSnapshot>,
}

impl Default for PageMapCache {
	fn default() -> Self {
		Self::new()
	}
}

impl PageMapCache {
	/// Create a cache holding the empty snapshot.
	pub fn new() -> Self {
		Self {
			slot: ArcSwapOption::new(Some(Arc::new(PageMapSnapshot::default()))),
		}
	}

	/// Replace the held snapshot.
	///
	/// Snapshots previously returned by [`PageMapCache::get`] are unaffected.
	pub fn set(&self, snapshot: impl Into<Arc<PageMapSnapshot>>) {
		self.slot.store(Some(snapshot.into()));
	}

	/// Drop the held snapshot. [`PageMapCache::get`] returns `None` until the
	/// next [`PageMapCache::set`].
	pub fn clear(&self) {
		self.slot.store(None);
	}

	/// The currently held snapshot, or `None` after [`PageMapCache::clear`].
	pub fn get(&self) -> Option<Arc<PageMapSnapshot>> {
		self.slot.load_full()
	}

	pub fn is_cleared(&self) -> bool {
		self.slot.load().is_none()
	}
}

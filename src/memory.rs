//! Allocation tracking for the benchmark driver. `TrackingAllocator` wraps the
//! system allocator and counts live and peak bytes; the binary installs it as
//! the global allocator. When it is not installed (library tests, criterion)
//! the counters stay at zero and measured deltas degrade to zero instead of
//! failing.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

static LIVE: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);

pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
  unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
    let ptr = unsafe { System.alloc(layout) };
    if !ptr.is_null() {
      record_alloc(layout.size());
    }
    ptr
  }

  unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
    unsafe { System.dealloc(ptr, layout) };
    LIVE.fetch_sub(layout.size(), Ordering::Relaxed);
  }

  unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
    let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
    if !new_ptr.is_null() {
      LIVE.fetch_sub(layout.size(), Ordering::Relaxed);
      record_alloc(new_size);
    }
    new_ptr
  }
}

fn record_alloc(size: usize) {
  let live = LIVE.fetch_add(size, Ordering::Relaxed) + size;
  PEAK.fetch_max(live, Ordering::Relaxed);
}

// bytes currently handed out by the allocator
pub fn live_bytes() -> usize {
  LIVE.load(Ordering::Relaxed)
}

// highest live_bytes value observed since the last reset
pub fn peak_bytes() -> usize {
  PEAK.load(Ordering::Relaxed)
}

// restarts peak tracking from the current live figure
pub fn reset_peak() {
  PEAK.store(LIVE.load(Ordering::Relaxed), Ordering::Relaxed);
}

//! Fixed-interval selection for multi-image shots.

/// Index of the item on screen at `frame` when each of `count` items is
/// shown for `frames_per_item` frames.
///
/// Once the cycle has run out the last item stays up, so the result never
/// exceeds `count - 1`. Returns 0 for an empty cycle.
pub fn cycle_index(frame: f64, frames_per_item: f64, count: usize) -> usize {
    if count == 0 || !(frames_per_item > 0.0) || !(frame > 0.0) {
        return 0;
    }
    let index = (frame / frames_per_item).floor();
    if index >= (count - 1) as f64 {
        count - 1
    } else {
        index as usize
    }
}

//! Slot-gap-preserving reorder.
//!
//! Swapping two adjacent items is not just a swap of their timings: the gap
//! in front of each timeline *slot* stays where it is, while each item's
//! duration travels with the item. After a swap, every slot is re-laid-out
//! left to right so the original gap structure survives the permutation.

use serde::{Deserialize, Serialize};

use super::range::{round4, FracRange, Spanned};

/// Floor for an item's duration during re-layout, so a corrupt or zero-width
/// item never degenerates the cursor walk.
pub const MIN_DURATION: f64 = 0.001;

/// Direction of a single-step move within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Swap the item at `index` with its immediate neighbor and re-layout.
///
/// Returns `None` when the move is structurally impossible (first item up,
/// last item down, index out of range): callers treat that as a no-op.
///
/// The recalculation is deliberately asymmetric: each item keeps its own
/// pre-swap duration (duration follows identity), while the gap preceding
/// slot `i` is taken from the pre-swap layout at that same slot (gaps follow
/// position). Collapsing this into a plain swap of the two items' timings
/// would change behavior whenever the list has uneven gaps.
pub fn reorder_and_recalculate<T>(items: &[T], index: usize, direction: Direction) -> Option<Vec<T>>
where
    T: Spanned + Clone,
{
    if index >= items.len() {
        return None;
    }
    let neighbor = match direction {
        Direction::Up => index.checked_sub(1)?,
        Direction::Down => {
            if index + 1 >= items.len() {
                return None;
            }
            index + 1
        }
    };

    let mut reordered = items.to_vec();
    reordered.swap(index, neighbor);

    // Gaps belong to slots: computed once from the pre-swap order.
    let mut gaps = Vec::with_capacity(items.len());
    let mut prev_end = 0.0;
    for item in items {
        let span = item.span();
        gaps.push((span.start - prev_end).max(0.0));
        prev_end = span.end;
    }

    let mut pos = 0.0;
    for (item, gap) in reordered.iter_mut().zip(gaps) {
        let duration = item.span().duration().max(MIN_DURATION);
        let start = round4(pos + gap);
        let end = round4(start + duration);
        item.set_span(FracRange::new(start, end));
        pos = end;
    }

    Some(reordered)
}

//! Main-axis space allocation for box containers.
//!
//! [`allocate`] distributes an available main-axis extent among an ordered
//! sequence of children in deterministic passes:
//!
//! 1. every child is brought up to its minimum hint, in order, best effort —
//!    when space runs out mid-pass, later children are simply starved;
//! 2. `Preferred` and `Maximum` children grow to their preferred hints
//!    (`Minimum` children stay at their minimum: their hint-driven growth is
//!    capped there);
//! 3. `Expanding` children absorb the entire remainder, one cell per child
//!    per round;
//! 4. with no `Expanding` child present, the remainder is water-filled over
//!    the `Minimum`/`Preferred` pool: the smallest allocations always grow
//!    first, keeping the pool as equal as possible. `Maximum` children never
//!    take part, which is what caps them at their preferred size.
//!
//! Running out of space is not an error; it degrades by the rules above and
//! the sum of the result never exceeds `available`.

use crate::widget::SizePolicy;

/// One child's view of the negotiation: its hints and policy along the axis
/// being allocated.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AllocItem {
    /// Main-axis minimum size hint.
    pub minimum: i32,
    /// Main-axis preferred size hint.
    pub preferred: i32,
    /// Growth policy along this axis.
    pub policy: SizePolicy,
}

/// Distribute `available` cells among `items`, returning one extent per item
/// in order. Pure function of its inputs.
pub(crate) fn allocate(available: i32, items: &[AllocItem]) -> Vec<i32> {
    let mut cells = vec![0; items.len()];
    if items.is_empty() {
        return cells;
    }
    let mut remaining = available.max(0);

    // Minimums first: in order, best effort under starvation.
    for (i, item) in items.iter().enumerate() {
        if !grow_to(&mut cells[i], item.minimum, &mut remaining) {
            return cells;
        }
    }

    // Preferred sizes for the policies that may exceed their minimum.
    for (i, item) in items.iter().enumerate() {
        if !matches!(item.policy, SizePolicy::Preferred | SizePolicy::Maximum) {
            continue;
        }
        if !grow_to(&mut cells[i], item.preferred, &mut remaining) {
            return cells;
        }
    }

    // Expanding children swallow everything that is left.
    let expanding: Vec<usize> = indices_with(items, SizePolicy::Expanding);
    if !expanding.is_empty() && remaining > 0 {
        let share = remaining / expanding.len() as i32;
        let odd = remaining % expanding.len() as i32;
        for (rank, &i) in expanding.iter().enumerate() {
            // Earlier children take the cells that don't divide evenly.
            cells[i] += share + i32::from((rank as i32) < odd);
        }
        return cells;
    }

    // Fair leftover pass: grow whichever eligible children are currently
    // smallest, one cell at a time, until space is gone.
    let pool: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, it)| matches!(it.policy, SizePolicy::Minimum | SizePolicy::Preferred))
        .map(|(i, _)| i)
        .collect();
    if pool.is_empty() {
        // Only Maximum children (and no Expanding): the rest goes unspent.
        return cells;
    }
    while remaining > 0 {
        let low = pool.iter().map(|&i| cells[i]).min().unwrap_or(0);
        for &i in &pool {
            if remaining == 0 {
                return cells;
            }
            if cells[i] == low {
                cells[i] += 1;
                remaining -= 1;
            }
        }
    }

    cells
}

/// Grow `cell` up to `target` while `remaining` lasts. Returns `false` when
/// space ran out before the target was reached, which stops the whole
/// allocation.
fn grow_to(cell: &mut i32, target: i32, remaining: &mut i32) -> bool {
    let need = (target - *cell).max(0);
    let granted = need.min(*remaining);
    *cell += granted;
    *remaining -= granted;
    granted == need
}

fn indices_with(items: &[AllocItem], policy: SizePolicy) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, it)| it.policy == policy)
        .map(|(i, _)| i)
        .collect()
}

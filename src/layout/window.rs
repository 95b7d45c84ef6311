/// One rendered card: which item it shows and where it sits relative to the
/// hero (negative = left of the hero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Index into the backing sequence.
    pub item_index: usize,
    /// Signed offset from the hero position, in cards.
    pub position: i32,
}

/// Wrap `index` into `[0, len)`; `None` when `len == 0`.
#[must_use]
pub fn wrap_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(index.rem_euclid(len as i64) as usize)
}

/// Slots for positions `-side_count..=side_count` around `hero`.
///
/// Empty when the backing sequence is empty. Short sequences repeat, so a
/// two-item palette still fills the viewport.
#[must_use]
pub fn visible_window(hero: usize, len: usize, side_count: usize) -> Vec<Slot> {
    if len == 0 {
        return Vec::new();
    }
    let side = side_count as i64;
    (-side..=side)
        .filter_map(|position| {
            wrap_index(hero as i64 + position, len).map(|item_index| Slot {
                item_index,
                position: position as i32,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        assert_eq!(wrap_index(-1, 5), Some(4));
        assert_eq!(wrap_index(5, 5), Some(0));
        assert_eq!(wrap_index(-11, 5), Some(4));
        assert_eq!(wrap_index(3, 0), None);
    }

    #[test]
    fn window_is_centered_on_hero() {
        let slots = visible_window(0, 3, 2);
        let items: Vec<usize> = slots.iter().map(|s| s.item_index).collect();
        let positions: Vec<i32> = slots.iter().map(|s| s.position).collect();
        assert_eq!(items, vec![1, 2, 0, 1, 2]);
        assert_eq!(positions, vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn single_item_repeats() {
        let slots = visible_window(0, 1, 3);
        assert_eq!(slots.len(), 7);
        assert!(slots.iter().all(|s| s.item_index == 0));
    }

    #[test]
    fn empty_sequence_renders_nothing() {
        assert!(visible_window(0, 0, 4).is_empty());
    }
}

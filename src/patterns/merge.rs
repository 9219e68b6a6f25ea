// ============================================================
// Layer 5 — Range Merger
// ============================================================
// Collapses an unordered pile of [start, end) intervals into
// the minimal sorted covering set.
//
// Algorithm (classic interval-union sweep):
//   1. Stable sort by start                        O(n log n)
//   2. Walk once, keeping a running interval       O(n)
//        next.start <= current.end → extend current
//        otherwise                 → close it, start a new one
//
// Touching intervals merge: [0,5) and [5,10) become [0,10).
// This keeps the blackout view from showing a one-character
// black bar between two adjacent revealed words.
//
// Example:
//   in:  (3,8) (0,5) (12,14) (14,20) (30,31)
//   out: (0,8) (12,20) (30,31)

use crate::domain::span::VisibleRange;

/// Merge overlapping and touching intervals.
pub fn merge_ranges<I>(ranges: I) -> Vec<VisibleRange>
where
    I: IntoIterator<Item = VisibleRange>,
{
    let mut sorted: Vec<VisibleRange> = ranges.into_iter().collect();

    // sort_by_key is stable: equal starts keep their input order
    sorted.sort_by_key(|&(start, _)| start);

    let mut merged: Vec<VisibleRange> = Vec::with_capacity(sorted.len());

    for (start, end) in sorted {
        match merged.last_mut() {
            Some(current) if start <= current.1 => {
                current.1 = current.1.max(end);
            }
            _ => merged.push((start, end)),
        }
    }

    merged
}

/// True if `ranges` is already in merged form: every interval
/// well-formed, sorted by start, and separated from the next
/// one by at least one uncovered character.
pub fn is_merged(ranges: &[VisibleRange]) -> bool {
    ranges.iter().all(|&(start, end)| start <= end)
        && ranges.windows(2).all(|pair| pair[0].1 < pair[1].0)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_overlapping_ranges_merge() {
        assert_eq!(merge_ranges(vec![(0, 5), (3, 8)]), vec![(0, 8)]);
    }

    #[test]
    fn test_touching_ranges_merge() {
        // start == current end counts as a touch
        assert_eq!(merge_ranges(vec![(0, 5), (5, 10)]), vec![(0, 10)]);
    }

    #[test]
    fn test_disjoint_ranges_stay_apart() {
        assert_eq!(merge_ranges(vec![(6, 9), (0, 5)]), vec![(0, 5), (6, 9)]);
    }

    #[test]
    fn test_contained_range_is_absorbed() {
        assert_eq!(merge_ranges(vec![(0, 20), (4, 6), (19, 20)]), vec![(0, 20)]);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(merge_ranges(vec![(2, 4), (2, 4), (2, 4)]), vec![(2, 4)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_ranges(Vec::new()).is_empty());
    }

    #[test]
    fn test_doc_example() {
        let out = merge_ranges(vec![(3, 8), (0, 5), (12, 14), (14, 20), (30, 31)]);
        assert_eq!(out, vec![(0, 8), (12, 20), (30, 31)]);
    }

    #[test]
    fn test_is_merged() {
        assert!(is_merged(&[]));
        assert!(is_merged(&[(0, 3), (4, 9)]));
        assert!(!is_merged(&[(0, 3), (3, 9)]));
        assert!(!is_merged(&[(4, 9), (0, 3)]));
        assert!(!is_merged(&[(5, 2)]));
    }

    #[test]
    fn test_random_inputs_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(0x0d3e_a115);

        for _ in 0..500 {
            let count = rng.gen_range(0..25);
            let input: Vec<VisibleRange> = (0..count)
                .map(|_| {
                    let start = rng.gen_range(0..100);
                    (start, start + rng.gen_range(0..12))
                })
                .collect();

            let merged = merge_ranges(input.clone());

            // Sorted, non-overlapping, maximal
            assert!(is_merged(&merged), "not merged: {merged:?} from {input:?}");

            // Idempotent
            assert_eq!(merge_ranges(merged.clone()), merged);

            // Covers exactly the same characters
            for pos in 0..120 {
                let before = input.iter().any(|&(s, e)| s <= pos && pos < e);
                let after  = merged.iter().any(|&(s, e)| s <= pos && pos < e);
                assert_eq!(before, after, "position {pos} differs for {input:?}");
            }
        }
    }
}

//! The character confusion model used by the correction search.
//!
//! Recognition engines confuse characters with similar shapes in predictable
//! ways: a flat-topped `S` reads as `Z`, a slashed zero as `O`, and so on.
//! The model is a fixed, hand-curated list of such confusions. Its ordering
//! is load-bearing: correctors try pairs in sequence and the first valid hit
//! wins, so the list order is the tie-break precedence.

/// A directional character substitution.
///
/// `observed` is what an engine emitted, `intended` is what the printed
/// character plausibly was. Applying a pair means replacing `observed`
/// with `intended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionPair {
    /// The character the engine produced.
    pub observed: char,
    /// The character it is commonly mistaken for.
    pub intended: char,
}

impl ConfusionPair {
    /// Creates a pair.
    pub const fn new(observed: char, intended: char) -> Self {
        Self { observed, intended }
    }

    /// The same confusion read in the opposite direction.
    pub const fn reversed(self) -> Self {
        Self {
            observed: self.intended,
            intended: self.observed,
        }
    }
}

/// Shape confusions seen across engine output, most common first.
const BASE_PAIRS: [ConfusionPair; 11] = [
    ConfusionPair::new('S', 'Z'),
    ConfusionPair::new('Z', '2'),
    ConfusionPair::new('O', '0'),
    ConfusionPair::new('L', '1'),
    ConfusionPair::new('4', 'A'),
    ConfusionPair::new('B', '8'),
    ConfusionPair::new('Q', 'O'),
    ConfusionPair::new('Q', '0'),
    ConfusionPair::new('Z', '7'),
    ConfusionPair::new('S', '7'),
    ConfusionPair::new('Y', '7'),
];

/// An immutable confusion table with its derived search sequence.
///
/// The expanded sequence lists every base pair in order, then every base
/// pair reversed, in the same relative order. It is computed once at
/// construction; the table is a plain value passed explicitly into the
/// correctors, so two tables built from the same pairs always search in
/// the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionTable {
    pairs: Vec<ConfusionPair>,
    expanded: Vec<ConfusionPair>,
}

impl ConfusionTable {
    /// The built-in confusion model.
    pub fn new() -> Self {
        Self::from_pairs(BASE_PAIRS.to_vec())
    }

    /// Builds a table from an explicit pair list, preserving its order.
    pub fn from_pairs(pairs: Vec<ConfusionPair>) -> Self {
        let mut expanded = pairs.clone();
        expanded.extend(pairs.iter().map(|pair| pair.reversed()));
        Self { pairs, expanded }
    }

    /// The hand-curated pairs in their original order.
    pub fn pairs(&self) -> &[ConfusionPair] {
        &self.pairs
    }

    /// The full search sequence: originals first, then each reverse.
    pub fn expanded_pairs(&self) -> &[ConfusionPair] {
        &self.expanded
    }
}

impl Default for ConfusionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_doubles_pair_count() {
        let table = ConfusionTable::new();
        assert_eq!(table.expanded_pairs().len(), table.pairs().len() * 2);
    }

    #[test]
    fn expansion_preserves_original_prefix() {
        let table = ConfusionTable::new();
        let n = table.pairs().len();
        assert_eq!(&table.expanded_pairs()[..n], table.pairs());
    }

    #[test]
    fn reverses_follow_in_original_order() {
        let table = ConfusionTable::new();
        let n = table.pairs().len();
        for (i, pair) in table.pairs().iter().enumerate() {
            assert_eq!(table.expanded_pairs()[n + i], pair.reversed());
        }
    }

    #[test]
    fn duplicate_observed_entries_survive_expansion() {
        // Q maps to both O and 0; expansion must not deduplicate or reorder.
        let table = ConfusionTable::new();
        let q_targets: Vec<char> = table
            .pairs()
            .iter()
            .filter(|p| p.observed == 'Q')
            .map(|p| p.intended)
            .collect();
        assert_eq!(q_targets, vec!['O', '0']);
    }

    #[test]
    fn expansion_is_deterministic() {
        assert_eq!(
            ConfusionTable::new().expanded_pairs(),
            ConfusionTable::new().expanded_pairs()
        );
    }

    #[test]
    fn reversed_swaps_direction() {
        let pair = ConfusionPair::new('S', 'Z');
        assert_eq!(pair.reversed(), ConfusionPair::new('Z', 'S'));
    }
}

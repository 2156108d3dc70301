//! Substitution search over a noisy candidate string.
//!
//! Two tiers of correction are available. The single-position corrector
//! changes one character at a time and is the more targeted fix; the global
//! corrector rewrites every occurrence of a confused character at once,
//! which handles failure modes where an engine misreads the same glyph
//! consistently throughout the string. Callers escalate from single to
//! global, never the other way around.
//!
//! Both searches are greedy and order-sensitive: the first substitution
//! that validates wins, in pair order then position order. When several
//! substitutions could validate this picks the earliest, which is a known
//! ambiguity of the model rather than a defect.

use super::confusion::ConfusionPair;
use super::validator::is_valid_code;

/// Tries replacing one character at a time until the candidate validates.
///
/// Pairs form the outer loop and positions the inner loop, left to right,
/// so a hit on an earlier pair beats any hit on a later pair regardless of
/// position. Positions that do not hold the pair's observed character cost
/// no validator call. Returns the corrected string, or `None` when no
/// single substitution validates.
pub fn correct_single_position(candidate: &str, pairs: &[ConfusionPair]) -> Option<String> {
    let chars: Vec<char> = candidate.chars().collect();
    for pair in pairs {
        for (i, &c) in chars.iter().enumerate() {
            if c != pair.observed {
                continue;
            }
            let mut substituted = chars.clone();
            substituted[i] = pair.intended;
            let substituted: String = substituted.into_iter().collect();
            if is_valid_code(&substituted) {
                return Some(substituted);
            }
        }
    }
    None
}

/// Tries replacing every occurrence of a confused character at once.
///
/// Pairs are tried in order; the first whole-string replacement that
/// validates wins. Pairs whose observed character does not occur are
/// skipped without a validator call. Returns `None` when no pair yields
/// a valid string.
pub fn correct_global(candidate: &str, pairs: &[ConfusionPair]) -> Option<String> {
    for pair in pairs {
        if !candidate.contains(pair.observed) {
            continue;
        }
        let substituted = candidate.replace(pair.observed, &pair.intended.to_string());
        if is_valid_code(&substituted) {
            return Some(substituted);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recon::confusion::ConfusionTable;

    fn expanded() -> Vec<ConfusionPair> {
        ConfusionTable::new().expanded_pairs().to_vec()
    }

    #[test]
    fn single_position_recovers_forward_confusion() {
        // 037833100 with the leading zero read as the letter O.
        let fixed = correct_single_position("O37833100", &expanded()).unwrap();
        assert_eq!(fixed, "037833100");
    }

    #[test]
    fn single_position_recovers_reversed_confusion() {
        // 594918104 with the trailing 4 read as the letter A; the fix lives
        // in the reversed half of the expanded sequence.
        let fixed = correct_single_position("59491810A", &expanded()).unwrap();
        assert_eq!(fixed, "594918104");
    }

    #[test]
    fn single_position_recovers_letter_bearing_code() {
        // 17275R102 with the 2 read as Z; letters elsewhere in the code
        // must survive untouched.
        let fixed = correct_single_position("17Z75R102", &expanded()).unwrap();
        assert_eq!(fixed, "17275R102");
    }

    #[test]
    fn single_position_fixes_check_digit_position() {
        // The trailing check digit itself misread as the letter O.
        let fixed = correct_single_position("03783310O", &expanded()).unwrap();
        assert_eq!(fixed, "037833100");
    }

    #[test]
    fn single_position_preserves_length() {
        let input = "O37833100";
        let fixed = correct_single_position(input, &expanded()).unwrap();
        assert_eq!(fixed.chars().count(), input.chars().count());
    }

    #[test]
    fn single_position_gives_up_on_garbage() {
        assert_eq!(correct_single_position("AAA", &expanded()), None);
        assert_eq!(correct_single_position("", &expanded()), None);
    }

    #[test]
    fn single_position_cannot_fix_repeated_corruption() {
        // 459200101 with both ones read as L; one substitution is never
        // enough, including the check digit position.
        assert_eq!(correct_single_position("459200L0L", &expanded()), None);
    }

    #[test]
    fn global_recovers_repeated_corruption() {
        let fixed = correct_global("459200L0L", &expanded()).unwrap();
        assert_eq!(fixed, "459200101");
    }

    #[test]
    fn global_skips_pairs_without_occurrences() {
        // No confusable characters at all: every pair is skipped and the
        // search returns None rather than validating unchanged strings.
        assert_eq!(correct_global("888888888", &[]), None);
        assert_eq!(correct_global("###", &expanded()), None);
    }

    #[test]
    fn correctors_are_deterministic() {
        let pairs = expanded();
        assert_eq!(
            correct_single_position("O37833100", &pairs),
            correct_single_position("O37833100", &pairs)
        );
        assert_eq!(
            correct_global("459200L0L", &pairs),
            correct_global("459200L0L", &pairs)
        );
    }

    #[test]
    fn empty_pair_list_never_corrects() {
        assert_eq!(correct_single_position("O37833100", &[]), None);
        assert_eq!(correct_global("O37833100", &[]), None);
    }
}

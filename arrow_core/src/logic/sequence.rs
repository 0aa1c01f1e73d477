use crate::engine::RandomSource;
use crate::logic::direction::Direction;

/// Result of checking the latest input against the target sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMatch {
    /// The last entered direction differs from the target at its index.
    Mismatch,
    /// Every entry matches so far; more input is needed.
    Partial,
    /// The input equals the target sequence.
    Complete,
}

/// `length` directions drawn uniformly with replacement.
pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, length: usize) -> Vec<Direction> {
    (0..length)
        .map(|_| {
            let idx = rng.next_index(Direction::ALL.len());
            Direction::ALL.get(idx).copied().unwrap_or(Direction::Up)
        })
        .collect()
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<R: RandomSource + ?Sized>(rng: &mut R, sequence: &mut [Direction]) {
    for i in (1..sequence.len()).rev() {
        let j = rng.next_index(i + 1);
        sequence.swap(i, j);
    }
}

/// Checks the newest entry of `input` against `sequence`. Earlier entries
/// are assumed to have matched already.
#[must_use]
pub fn check(sequence: &[Direction], input: &[Direction]) -> InputMatch {
    let Some((last, _)) = input.split_last() else {
        return InputMatch::Partial;
    };
    let idx = input.len() - 1;
    match sequence.get(idx) {
        Some(expected) if expected == last => {
            if input.len() == sequence.len() {
                InputMatch::Complete
            } else {
                InputMatch::Partial
            }
        }
        _ => InputMatch::Mismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, 3, 5, 7, 32] {
            assert_eq!(generate(&mut rng, len).len(), len);
        }
    }

    #[test]
    fn test_generate_covers_all_directions() {
        let mut rng = StdRng::seed_from_u64(42);
        let seq = generate(&mut rng, 400);
        for dir in Direction::ALL {
            assert!(seq.contains(&dir), "{dir} never generated");
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let original = generate(&mut rng, 7);
        let mut shuffled = original.clone();
        shuffle(&mut rng, &mut shuffled);

        let count = |seq: &[Direction], d: Direction| seq.iter().filter(|x| **x == d).count();
        for dir in Direction::ALL {
            assert_eq!(count(&original, dir), count(&shuffled, dir));
        }
    }

    #[test]
    fn test_shuffle_short_sequences() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: Vec<Direction> = Vec::new();
        shuffle(&mut rng, &mut empty);
        assert!(empty.is_empty());

        let mut one = vec![Direction::Left];
        shuffle(&mut rng, &mut one);
        assert_eq!(one, vec![Direction::Left]);
    }

    #[test]
    fn test_check() {
        use Direction::{Down, Left, Up};
        let seq = [Up, Up, Down];
        assert_eq!(check(&seq, &[]), InputMatch::Partial);
        assert_eq!(check(&seq, &[Up]), InputMatch::Partial);
        assert_eq!(check(&seq, &[Up, Up]), InputMatch::Partial);
        assert_eq!(check(&seq, &[Up, Up, Down]), InputMatch::Complete);
        assert_eq!(check(&seq, &[Left]), InputMatch::Mismatch);
        assert_eq!(check(&seq, &[Up, Down]), InputMatch::Mismatch);
        // Overlong input never matches.
        assert_eq!(check(&seq, &[Up, Up, Down, Up]), InputMatch::Mismatch);
    }
}

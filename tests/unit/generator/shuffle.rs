//! Tests for seeded randomness and Fisher–Yates shuffling

#[cfg(test)]
mod tests {
    use bingo_master::generator::shuffle::{CardRng, shuffle_in_place, shuffled};

    // Tests equal seeds give equal permutations
    // Verified by seeding from entropy
    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let pool: Vec<u32> = (0..50).collect();
        let first = shuffled(&pool, &mut CardRng::seeded(7));
        let second = shuffled(&pool, &mut CardRng::seeded(7));

        assert_eq!(first, second);
    }

    // Tests the shuffled copy is a permutation and the input is untouched
    // Verified by shuffling the input slice in place
    #[test]
    fn test_shuffled_copies_pool() {
        let pool: Vec<u32> = (0..30).collect();
        let mut result = shuffled(&pool, &mut CardRng::seeded(3));

        assert_eq!(pool, (0..30).collect::<Vec<_>>());
        assert_ne!(result, pool);
        result.sort_unstable();
        assert_eq!(result, pool);
    }

    // Tests every position receives every value across many shuffles
    // Verified by swapping with j in [0, i)
    #[test]
    fn test_shuffle_reaches_all_positions() {
        let mut rng = CardRng::seeded(11);
        let mut seen = [[false; 4]; 4];

        for _ in 0..500 {
            let mut items = [0_usize, 1, 2, 3];
            shuffle_in_place(&mut items, &mut rng);
            for (position, value) in items.iter().enumerate() {
                if let Some(slot) = seen.get_mut(position).and_then(|row| row.get_mut(*value)) {
                    *slot = true;
                }
            }
        }

        assert!(seen.iter().flatten().all(|hit| *hit));
    }

    // Tests shuffling empty and single-element slices
    // Verified by starting the loop at index 0
    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = CardRng::seeded(1);
        let mut empty: [u8; 0] = [];
        shuffle_in_place(&mut empty, &mut rng);

        let mut single = [9_u8];
        shuffle_in_place(&mut single, &mut rng);
        assert_eq!(single, [9]);
    }

    // Tests tokens are lowercase alphanumerics of the requested length
    // Verified by including upper-case letters in the alphabet
    #[test]
    fn test_token_alphabet() {
        let mut rng = CardRng::seeded(5);
        let token = rng.token(9);

        assert_eq!(token.len(), 9);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
        assert_ne!(rng.token(9), token);
    }

    // Tests index draws stay within the inclusive bound
    // Verified by drawing from 0..upper
    #[test]
    fn test_index_up_to_bounds() {
        let mut rng = CardRng::from_seed_option(Some(2));
        let draws: Vec<usize> = (0..200).map(|_| rng.index_up_to(3)).collect();

        assert!(draws.iter().all(|&d| d <= 3));
        assert!(draws.contains(&3));
        assert!(draws.contains(&0));
    }
}

use mktest::models::params::{CONSONANTS, VOWELS};
use mktest::{CountryPool, generate_row, generate_token};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn is_token_byte(b: u8) -> bool {
    CONSONANTS.contains(&b) || VOWELS.contains(&b)
}

proptest! {
    #[test]
    fn prop_token_shape(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..32 {
            let token = generate_token(&mut rng);
            prop_assert!((1..=7).contains(&token.len()));
            prop_assert!(token.as_str().bytes().all(is_token_byte));
        }
    }

    #[test]
    fn prop_pool_size(seed in any::<u64>()) {
        let pool = CountryPool::build(&mut StdRng::seed_from_u64(seed));
        prop_assert!((8..=12).contains(&pool.len()));
    }

    #[test]
    fn prop_row_invariants(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = CountryPool::build(&mut rng);
        for _ in 0..16 {
            let row = generate_row(&pool, &mut rng);
            prop_assert!(row.visited.contains(&row.country));
            prop_assert!(row.visited.iter().all(|t| pool.contains(t)));
            prop_assert!((1.0..=100.0).contains(&row.restlessness));
            prop_assert!((1.0..=100.0).contains(&row.mobility));
        }
    }
}

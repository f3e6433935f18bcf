//! Property-based tests for the combo search and strategy selection.

use proptest::prelude::*;

use shutbox::combos::find_all;
use shutbox::strategy::{GreedyMax, MinTiles, Strategy as SelectionPolicy};

/// Strategy: a sorted set of distinct up tiles drawn from 1..=9.
fn tiles_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::btree_set(1u8..=9, 0..=9).prop_map(|set| set.into_iter().collect())
}

/// Strategy: a roll total reachable with two six-sided dice.
fn total_strategy() -> impl Strategy<Value = u32> {
    1u32..=12
}

/// Reference count of non-empty subsets summing to `target`, by plain
/// include/exclude recursion.
fn reference_count(tiles: &[u8], target: i64) -> usize {
    if target == 0 {
        return 1;
    }
    if target < 0 || tiles.is_empty() {
        return 0;
    }
    reference_count(&tiles[1..], target) + reference_count(&tiles[1..], target - i64::from(tiles[0]))
}

proptest! {
    // 1. Every combo is a subset of the up tiles and sums to the target
    #[test]
    fn combos_are_valid(tiles in tiles_strategy(), total in total_strategy()) {
        for combo in find_all(&tiles, total) {
            prop_assert_eq!(combo.sum(), total);
            for tile in combo.tiles() {
                prop_assert!(tiles.contains(tile), "{tile} not up in {tiles:?}");
            }
        }
    }

    // 2. No combo appears twice
    #[test]
    fn combos_are_distinct(tiles in tiles_strategy(), total in total_strategy()) {
        let combos = find_all(&tiles, total);
        for (i, a) in combos.iter().enumerate() {
            for b in &combos[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    // 3. The search is exhaustive: it agrees with a naive recursive count
    #[test]
    fn search_is_exhaustive(tiles in tiles_strategy(), total in total_strategy()) {
        let found = find_all(&tiles, total).len();
        let expected = reference_count(&tiles, i64::from(total));
        prop_assert_eq!(found, expected, "tiles {:?} total {}", tiles, total);
    }

    // 4. Strategies pick from the search, and bust exactly when it is empty
    #[test]
    fn selection_comes_from_search(tiles in tiles_strategy(), total in total_strategy()) {
        let combos = find_all(&tiles, total);
        for strategy in [&GreedyMax as &dyn SelectionPolicy, &MinTiles] {
            match strategy.select(total, &tiles) {
                Some(c) => prop_assert!(
                    combos.contains(&c),
                    "{} picked {} for {} over {:?}",
                    strategy.name(), c, total, tiles
                ),
                None => prop_assert!(combos.is_empty()),
            }
        }
    }

    // 5. Selection is a pure function of its inputs
    #[test]
    fn selection_is_deterministic(tiles in tiles_strategy(), total in total_strategy()) {
        prop_assert_eq!(GreedyMax.select(total, &tiles), GreedyMax.select(total, &tiles));
        prop_assert_eq!(MinTiles.select(total, &tiles), MinTiles.select(total, &tiles));
    }

    // 6. A full game conserves the board no matter the seed
    #[test]
    fn games_conserve_the_board(seed in any::<u64>()) {
        use shutbox::core::GameSpec;
        use shutbox::engine::run_game;
        use shutbox::events::NullSink;

        let spec = GameSpec::new("greedy_max", "min_tiles");
        let record = run_game(&spec, seed, &mut NullSink).unwrap();
        for turn in &record.turns {
            let flipped: u32 = turn
                .moves
                .iter()
                .filter_map(|m| m.combo.as_ref())
                .map(|c| c.sum())
                .sum();
            prop_assert_eq!(flipped + turn.score, 45);
            prop_assert_eq!(turn.shut, turn.score == 0);
        }
    }
}

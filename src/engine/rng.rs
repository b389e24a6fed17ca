/// Deterministic stand-in for a real RNG: scale the seed by an
/// irrational-looking constant, run it through a sine, keep the
/// fractional part. A pure function of its arguments, so a replayed
/// session rolls exactly the same events from the same step counts.
/// Do not swap this for a stateful generator.
pub fn pseudo_random(seed: u64, modulo: u64) -> u64 {
    debug_assert!(modulo > 0, "modulo must be positive");

    let x = (seed as f64 * 12.9898).sin() * 43758.5453;
    let fractional = x - x.floor();
    (fractional * modulo as f64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_inputs_same_output() {
        for seed in 0..200 {
            assert_eq!(pseudo_random(seed, 10), pseudo_random(seed, 10));
        }
    }

    #[test]
    fn result_stays_below_modulo() {
        for seed in 0..2000 {
            for modulo in 1..12 {
                let r = pseudo_random(seed, modulo);
                assert!(r < modulo, "seed {seed} modulo {modulo} gave {r}");
            }
        }
    }

    #[test]
    fn sequential_seeds_spread_across_the_range() {
        // Not a statistical test; just guard against a formula change
        // that collapses everything onto one value.
        let mut seen = std::collections::HashSet::new();
        for seed in 0..100 {
            seen.insert(pseudo_random(seed, 10));
        }
        assert!(seen.len() >= 5, "only {} distinct values", seen.len());
    }

    proptest! {
        #[test]
        fn prop_pure(seed in any::<u64>(), modulo in 1u64..1_000_000) {
            prop_assert_eq!(
                pseudo_random(seed, modulo),
                pseudo_random(seed, modulo)
            );
        }

        #[test]
        fn prop_in_range(seed in any::<u64>(), modulo in 1u64..1_000_000) {
            prop_assert!(pseudo_random(seed, modulo) < modulo);
        }
    }
}

use proptest::prelude::*;
use rand_core::{RngCore, SeedableRng};
use seedpass::Xorshift64;
use seedpass::rng::DEFAULT_SEED;

#[test]
fn test_seed_one_first_draw() {
    let mut rng = Xorshift64::seed(1);

    assert_eq!(rng.next(), 1082269761);
}

#[test]
fn test_seed_one_reference_sequence() {
    let mut rng = Xorshift64::seed(1);

    let draws = [rng.next(), rng.next(), rng.next()];

    assert_eq!(
        draws,
        [1082269761, 1152992998833853505, 11177516664432764457]
    );
}

#[test]
fn test_zero_seed_matches_default_seed() {
    let mut zero = Xorshift64::seed(0);
    let mut default = Xorshift64::seed(DEFAULT_SEED);

    assert_eq!(zero, default);
    for _ in 0..64 {
        assert_eq!(zero.next(), default.next());
    }
}

#[test]
fn test_zero_seed_never_yields_zero() {
    let mut rng = Xorshift64::seed(0);

    assert_eq!(rng.next(), 15860402102123842989);
    for _ in 0..1000 {
        assert_ne!(rng.next(), 0);
    }
}

#[test]
fn test_new_is_seed() {
    let mut a = Xorshift64::new(99);
    let mut b = Xorshift64::seed(99);

    assert_eq!(a.next(), b.next());
}

#[test]
fn test_next_bounded_one_is_always_zero() {
    let mut rng = Xorshift64::seed(12345);

    for _ in 0..100 {
        assert_eq!(rng.next_bounded(1), 0);
    }
}

#[test]
fn test_next_bounded_is_plain_modulo() {
    let mut a = Xorshift64::seed(5);
    let mut b = Xorshift64::seed(5);

    for bound in [2u64, 3, 10, 26, 91, 1000, u64::MAX] {
        assert_eq!(a.next_bounded(bound), b.next() % bound);
    }
}

#[test]
fn test_clone_forks_identical_stream() {
    let mut rng = Xorshift64::seed(77);
    rng.next();

    let mut fork = rng.clone();

    for _ in 0..16 {
        assert_eq!(rng.next(), fork.next());
    }
}

#[test]
fn test_rng_core_next_u64_matches_next() {
    let mut a = Xorshift64::seed(3);
    let mut b = Xorshift64::seed(3);

    assert_eq!(RngCore::next_u64(&mut a), b.next());
}

#[test]
fn test_rng_core_next_u32_is_upper_half() {
    let mut a = Xorshift64::seed(3);
    let mut b = Xorshift64::seed(3);

    assert_eq!(a.next_u32(), (b.next() >> 32) as u32);
}

#[test]
fn test_fill_bytes_little_endian_words() {
    let mut a = Xorshift64::seed(11);
    let mut b = Xorshift64::seed(11);

    let mut out = [0u8; 20];
    a.fill_bytes(&mut out);

    let w0 = b.next().to_le_bytes();
    let w1 = b.next().to_le_bytes();
    let w2 = b.next().to_le_bytes();

    assert_eq!(&out[0..8], &w0);
    assert_eq!(&out[8..16], &w1);
    assert_eq!(&out[16..20], &w2[..4]);

    // three draws consumed, no more
    assert_eq!(a, b);
}

#[test]
fn test_try_fill_bytes_never_fails() {
    let mut rng = Xorshift64::seed(11);
    let mut out = [0u8; 33];

    assert!(rng.try_fill_bytes(&mut out).is_ok());
    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_seedable_rng_from_seed_little_endian() {
    let seeded = Xorshift64::from_seed(42u64.to_le_bytes());

    assert_eq!(seeded, Xorshift64::seed(42));
}

#[test]
fn test_seedable_rng_zero_seed_substituted() {
    let seeded = Xorshift64::from_seed([0u8; 8]);

    assert_eq!(seeded, Xorshift64::seed(DEFAULT_SEED));
}

#[test]
fn test_seed_from_u64_is_exact() {
    assert_eq!(Xorshift64::seed_from_u64(1), Xorshift64::seed(1));
    assert_eq!(Xorshift64::seed_from_u64(0), Xorshift64::seed(0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn same_seed_same_sequence(seed in 1u64.., draws in 1usize..256) {
        let mut a = Xorshift64::seed(seed);
        let mut b = Xorshift64::seed(seed);

        for _ in 0..draws {
            prop_assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn bounded_draw_is_below_bound(seed in any::<u64>(), bound in 1u64..=u64::MAX) {
        let mut rng = Xorshift64::seed(seed);

        for _ in 0..32 {
            prop_assert!(rng.next_bounded(bound) < bound);
        }
    }

    #[test]
    fn nonzero_state_never_reaches_zero(seed in any::<u64>()) {
        let mut rng = Xorshift64::seed(seed);

        for _ in 0..256 {
            prop_assert_ne!(rng.next(), 0);
        }
    }
}

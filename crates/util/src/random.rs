use rand::Rng;

/// Uniform random integer in `[min, max]`, inclusive of both bounds.
///
/// Uses the thread-local generator. Reversed bounds are swapped rather than
/// rejected.
///
/// # Examples
///
/// ```
/// use utilkit::random::random_in_range;
///
/// let n = random_in_range(5, 10);
/// assert!((5..=10).contains(&n));
/// ```
pub fn random_in_range(min: i64, max: i64) -> i64 {
    random_in_range_with(&mut rand::thread_rng(), min, max)
}

/// Like [`random_in_range`], drawing from the given generator.
///
/// Pass a seeded generator for reproducible sequences:
///
/// ```
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256StarStar;
/// use utilkit::random::random_in_range_with;
///
/// let mut a = Xoshiro256StarStar::seed_from_u64(7);
/// let mut b = Xoshiro256StarStar::seed_from_u64(7);
/// assert_eq!(random_in_range_with(&mut a, 0, 1000), random_in_range_with(&mut b, 0, 1000));
/// ```
pub fn random_in_range_with<R>(rng: &mut R, min: i64, max: i64) -> i64
where
    R: Rng + ?Sized,
{
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(low..=high)
}

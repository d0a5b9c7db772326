//! Random (version 4) UUID generation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use uuid::{Builder, Uuid};

/// Mixed into the fallback seed so two fallbacks in the same clock tick differ.
static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Where the random bytes of a generated UUID came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidSource {
    /// The operating system's cryptographically secure generator.
    Os,
    /// A xoshiro256** PRNG seeded from the clock. Not cryptographically secure.
    Fallback,
}

/// Generate an RFC 4122 version 4 UUID as a lowercase hyphenated string.
///
/// Randomness comes from the operating system. If the OS source is
/// unavailable the bytes come from a clock-seeded PRNG instead; such ids are
/// still well formed but **must not** be relied on where unpredictability
/// matters. Use [`generate_uuid_with_source`] to tell the two apart.
///
/// # Examples
///
/// ```
/// use utilkit::uuid_v4::generate_uuid;
///
/// let id = generate_uuid();
/// assert_eq!(id.len(), 36);
/// assert_eq!(&id[14..15], "4");
/// ```
pub fn generate_uuid() -> String {
    let (id, _) = generate_uuid_with_source();
    id.hyphenated().to_string()
}

/// Generate a version 4 UUID and report which randomness source was used.
pub fn generate_uuid_with_source() -> (Uuid, UuidSource) {
    let mut bytes = [0u8; 16];
    let source = match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => UuidSource::Os,
        Err(err) => {
            tracing::warn!(error = %err, "OS randomness unavailable, using non-cryptographic fallback for uuid");
            fallback_bytes(&mut bytes);
            UuidSource::Fallback
        }
    };
    (uuid_from_random_bytes(bytes), source)
}

/// Stamp version and variant bits onto 16 random bytes.
fn uuid_from_random_bytes(bytes: [u8; 16]) -> Uuid {
    Builder::from_random_bytes(bytes).into_uuid()
}

fn fallback_bytes(bytes: &mut [u8; 16]) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    let counter = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut rng = Xoshiro256StarStar::seed_from_u64(nanos ^ counter.rotate_left(32));
    rng.fill_bytes(bytes);
}

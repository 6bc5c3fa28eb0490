//! Random identifier generation for the controller's UUID mode.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;
use uuid::{Builder, Uuid};

/// Source of identifiers written in UUID mode.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Version-4 UUIDs from [`generate_uuid_v4`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuid;

impl IdGenerator for RandomUuid {
    fn generate(&self) -> String {
        generate_uuid_v4().to_string()
    }
}

static FALLBACK_STREAM: AtomicU64 = AtomicU64::new(0);

/// A version-4 UUID from the OS random source, or from a time-seeded
/// pseudo-random generator when the OS source fails.
#[must_use]
pub fn generate_uuid_v4() -> Uuid {
    let mut bytes = [0u8; 16];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => Builder::from_random_bytes(bytes).into_uuid(),
        Err(err) => {
            warn!(error = %err, "OS randomness unavailable, using fallback generator");
            uuid_from_rng(&mut fallback_rng())
        }
    }
}

/// A version-4 UUID drawn from `rng`. Version and variant bits are set
/// regardless of the generator's quality.
pub fn uuid_from_rng(rng: &mut impl RngCore) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}

fn fallback_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let stream = FALLBACK_STREAM.fetch_add(1, Ordering::Relaxed);
    StdRng::seed_from_u64(nanos ^ stream.rotate_left(32))
}

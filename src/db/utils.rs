//! Database utility functions.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU32 = AtomicU32::new(0);
static DISCRIMINATOR: OnceLock<u64> = OnceLock::new();

/// Generate a 24-character hex ID for database entities.
///
/// Layout: 8 hex digits of unix seconds, 10 hex digits fixed per process,
/// 6 hex digits of a wrapping counter. IDs created later in the same process
/// sort after earlier ones until the counter wraps.
pub fn generate_entity_id() -> String {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    let discriminator = *DISCRIMINATOR.get_or_init(|| {
        let pid = u64::from(std::process::id());
        (pid << 20 ^ u64::from(duration.subsec_nanos())) & 0xff_ffff_ffff
    });
    let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0xff_ffff;

    format!(
        "{:08x}{:010x}{:06x}",
        duration.as_secs() as u32,
        discriminator,
        count
    )
}

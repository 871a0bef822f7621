/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as row ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: sequence (random start per process, then monotonic, so IDs
///     minted in the same millisecond stay distinct)
///
/// IDs are assigned app-side at insert time, so rows sort chronologically
/// by primary key.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    use std::sync::OnceLock;
    use std::sync::atomic::{AtomicI64, Ordering};

    static SEQ: OnceLock<AtomicI64> = OnceLock::new();
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;

    let seq = SEQ.get_or_init(|| AtomicI64::new(rand::thread_rng().gen_range(0..0x1000)));
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    (ts << 12) | (seq.fetch_add(1, Ordering::Relaxed) & 0xFFF) // 12 bits
}

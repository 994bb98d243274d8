//! Timer primitives shared by the playback and chart code.

/// Resolve after roughly `ms` milliseconds. Scheduled sleeps are never
/// aborted; stale wake-ups are filtered by generation counters at the
/// receiving end.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

//! Target-appropriate async sleep

use std::time::Duration;

/// Wait for `duration`; returns immediately for a zero duration
pub(crate) async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

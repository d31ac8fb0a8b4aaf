use tokio::time::{sleep, Duration};

/// Fixed wait between two product pages so the shop is not hammered.
pub async fn politeness_pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }

    sleep(delay).await;
}

use std::time::Duration;

use serenity::async_trait;
use tokio::time::sleep;

// One countdown step updates the displayed remaining time once per second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// The suspension point between countdown ticks. Injected into the engine
// so that the decrement-and-update logic can be tested without real
// wall-clock waiting.
#[async_trait]
pub trait Ticker: Send + Sync {
    async fn wait(&self);
}

pub struct WallClockTicker {
    interval: Duration,
}

impl WallClockTicker {
    pub fn new() -> Self {
        WallClockTicker {
            interval: TICK_INTERVAL,
        }
    }
}

#[async_trait]
impl Ticker for WallClockTicker {
    async fn wait(&self) {
        sleep(self.interval).await;
    }
}

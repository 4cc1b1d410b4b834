use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep};

/// Timing of the fake progress bar. It is cosmetic only: the value climbs on
/// a fixed timer regardless of what the request is actually doing.
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    pub tick: Duration,
    pub step: u8,
    pub ceiling: u8,
    pub display_delay: Duration,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(300),
            step: 5,
            ceiling: 95,
            display_delay: Duration::from_millis(500),
        }
    }
}

/// Drives a watch channel from 0 toward the ceiling while a submission is in
/// flight. The timer task is aborted on `complete`, `cancel` and drop, so it
/// can never outlive the request it decorates.
pub struct ProgressSimulator {
    tx: watch::Sender<u8>,
    task: JoinHandle<()>,
    display_delay: Duration,
}

impl ProgressSimulator {
    pub fn start(config: ProgressConfig) -> Self {
        let (tx, _rx) = watch::channel(0);
        Self::with_sender(tx, config)
    }

    /// Reuses an existing channel so observers keep their receiver across
    /// submissions.
    pub fn with_sender(tx: watch::Sender<u8>, config: ProgressConfig) -> Self {
        tx.send_replace(0);
        let display_delay = config.display_delay;
        let ticker_tx = tx.clone();
        let task = tokio::spawn(async move {
            let mut ticker = interval(config.tick);
            ticker.tick().await; // first tick fires immediately
            loop {
                ticker.tick().await;
                let current = *ticker_tx.borrow();
                let next = current.saturating_add(config.step).min(config.ceiling);
                ticker_tx.send_replace(next);
                if next >= config.ceiling {
                    break;
                }
            }
        });
        Self {
            tx,
            task,
            display_delay,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.tx.subscribe()
    }

    /// Jumps to 100 and holds for the short display delay before the result
    /// replaces the progress bar.
    pub async fn complete(mut self) {
        self.stop_ticker().await;
        self.tx.send_replace(100);
        sleep(self.display_delay).await;
    }

    /// Failure path: stop the timer and reset the bar.
    pub async fn cancel(mut self) {
        self.stop_ticker().await;
        self.tx.send_replace(0);
    }

    /// `abort` alone does not synchronously stop the task; awaiting the
    /// handle guarantees no tick lands after the final value is published.
    async fn stop_ticker(&mut self) {
        self.task.abort();
        let _ = (&mut self.task).await;
    }
}

impl Drop for ProgressSimulator {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> ProgressConfig {
        ProgressConfig {
            tick: Duration::from_millis(10),
            step: 5,
            ceiling: 95,
            display_delay: Duration::from_millis(10),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn progress_climbs_to_ceiling_and_stops() {
        let sim = ProgressSimulator::start(fast_config());
        let mut rx = sim.subscribe();

        while *rx.borrow() < 95 {
            rx.changed().await.unwrap();
        }
        assert_eq!(*rx.borrow(), 95);

        sim.complete().await;
    }

    #[tokio::test(start_paused = true)]
    async fn complete_jumps_to_one_hundred() {
        let sim = ProgressSimulator::start(fast_config());
        let rx = sim.subscribe();
        sim.complete().await;
        assert_eq!(*rx.borrow(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_resets_to_zero() {
        let sim = ProgressSimulator::start(fast_config());
        let mut rx = sim.subscribe();
        rx.changed().await.unwrap();
        assert!(*rx.borrow() > 0);

        sim.cancel().await;
        assert_eq!(*rx.borrow(), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn no_tick_lands_after_completion() {
        // A hot ticker on another worker must not overwrite the final 100.
        for _ in 0..20 {
            let sim = ProgressSimulator::start(ProgressConfig {
                tick: Duration::from_micros(50),
                step: 1,
                ceiling: 95,
                display_delay: Duration::ZERO,
            });
            let rx = sim.subscribe();
            sim.complete().await;
            sleep(Duration::from_millis(2)).await;
            assert_eq!(*rx.borrow(), 100);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn step_increments_are_fixed() {
        let sim = ProgressSimulator::start(fast_config());
        let mut rx = sim.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 5);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 10);
        sim.cancel().await;
    }
}

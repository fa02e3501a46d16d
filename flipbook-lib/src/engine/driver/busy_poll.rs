use std::thread;
use std::time::Duration;

use crate::engine::run::Ticker;

/// How long the poll loop yields between elapsed-time checks.
const POLL_YIELD: Duration = Duration::from_micros(500);

/// Busy-poll driver.
///
/// Cooperative loop on the driver thread: ticks as soon as a full frame
/// interval has elapsed since the previous tick, yielding sub-millisecond
/// slices in between. Busier than the timer driver, but reacts to
/// cancellation and interval boundaries within one yield slice.
pub(in crate::engine) fn run(ticker: Ticker) {
    let interval = ticker.config.frame_interval();
    let mut last_tick: Option<Duration> = None;

    loop {
        if ticker.is_cancelled() || ticker.is_stale() {
            break;
        }

        let now = ticker.clock.now();
        let due = match last_tick {
            None => true,
            Some(previous) => now.saturating_sub(previous) >= interval,
        };

        if due {
            if !ticker.tick() {
                break;
            }
            last_tick = Some(now);
        } else {
            thread::sleep(POLL_YIELD);
        }
    }

    #[cfg(feature = "debug")]
    log::info!("busy-poll driver for run {} exited", ticker.run_id);

    ticker.finish_run();
}

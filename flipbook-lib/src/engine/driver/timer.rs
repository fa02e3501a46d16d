use std::thread;

use crate::engine::run::Ticker;

/// Recurring-timer driver.
///
/// Firings follow the absolute schedule `start + interval/2 + k*interval`:
/// the half-interval offset lands each sample mid-frame, which keeps the
/// `floor` in the frame math away from boundary jitter, and sleeping toward
/// absolute targets stops late wakeups from accumulating.
pub(in crate::engine) fn run(ticker: Ticker) {
    let interval = ticker.config.frame_interval();
    let origin = ticker.clock.now();

    let mut firing: u32 = 0;
    loop {
        let target = origin + interval / 2 + interval * firing;
        let now = ticker.clock.now();
        if target > now {
            thread::sleep(target - now);
        }

        if !ticker.tick() {
            break;
        }
        firing = firing.saturating_add(1);
    }

    #[cfg(feature = "debug")]
    log::info!("timer driver for run {} deregistered", ticker.run_id);

    ticker.finish_run();
}

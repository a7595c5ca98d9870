//! Stage timing for pipeline logs

use std::time::Instant;

/// Logs how long a pipeline stage took when it goes out of scope
///
/// Hold the guard for the length of the stage:
///
/// ```ignore
/// let _t = Timed::info("Poisson sampling");
/// ```
pub(crate) struct Timed {
    stage: &'static str,
    start: Instant,
    level: log::Level,
}

impl Timed {
    /// Report at INFO, announcing the stage at DEBUG
    pub(crate) fn info(stage: &'static str) -> Self {
        Self::start(stage, log::Level::Info)
    }

    /// Report at DEBUG, announcing the stage at TRACE
    pub(crate) fn debug(stage: &'static str) -> Self {
        Self::start(stage, log::Level::Debug)
    }

    fn start(stage: &'static str, level: log::Level) -> Self {
        let announce = match level {
            log::Level::Info => log::Level::Debug,
            _ => log::Level::Trace,
        };
        log::log!(announce, "[{}] started", stage);
        Self {
            stage,
            start: Instant::now(),
            level,
        }
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        log::log!(self.level, "[{}] took {:.3?}", self.stage, self.start.elapsed());
    }
}

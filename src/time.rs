//! Frame clock with a fixed animation tick.
//!
//! The animation core advances in whole ticks with a fixed delay between them,
//! while the window redraws as fast as the display allows. [`Time`] bridges
//! the two: every redraw calls [`Time::update`], which returns how many ticks
//! are due since the previous redraw.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use orbitals::time::Time;
//!
//! let mut time = Time::new(Duration::from_millis(20));
//! let due = time.advance(Duration::from_millis(50));
//! assert_eq!(due, 2);
//! ```

use std::time::{Duration, Instant};

/// Largest number of ticks a single redraw may run.
///
/// After a long stall (window dragged, machine suspended) the animation skips
/// ahead instead of replaying every missed tick.
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// Fixed-tick frame clock.
#[derive(Debug)]
pub struct Time {
    /// When the last frame occurred.
    last_frame: Instant,
    /// Delay between ticks.
    tick_interval: Duration,
    /// Time not yet consumed by a tick.
    accumulator: Duration,
    /// Total ticks since start.
    tick_count: u64,
}

impl Time {
    /// Create a clock that ticks every `tick_interval`.
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            tick_interval: tick_interval.max(Duration::from_micros(1)),
            accumulator: Duration::ZERO,
            tick_count: 0,
        }
    }

    /// Measure the time since the previous frame and return the ticks due.
    pub fn update(&mut self) -> u32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(delta)
    }

    /// Feed `delta` of elapsed time and return the ticks due.
    ///
    /// Never returns more than [`MAX_TICKS_PER_FRAME`]; surplus time is
    /// dropped.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.accumulator += delta;
        let mut due = 0;
        while self.accumulator >= self.tick_interval && due < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.tick_interval;
            due += 1;
        }
        if due == MAX_TICKS_PER_FRAME {
            log::trace!("dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = self.accumulator.min(self.tick_interval);
        }

        self.tick_count += due as u64;
        due
    }

    /// Total ticks handed out since start.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.tick_count
    }
}

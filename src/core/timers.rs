//! Clock-driven timers used by the player behaviours.
//!
//! All times are seconds on the game clock (`RaylibHandle::get_time`).

/// Repeating cadence: ready once `interval` seconds passed since the last restart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntervalTimer {
    last: f64,
}

impl IntervalTimer {
    pub fn new(now: f64) -> Self {
        Self { last: now }
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.last
    }

    pub fn is_ready(&self, now: f64, interval: f64) -> bool {
        self.elapsed(now) >= interval
    }

    pub fn restart(&mut self, now: f64) {
        self.last = now;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowState {
    Idle,
    Active { started_at: f64 },
}

/// What a call to [`ActionWindow::poll`] observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowPhase {
    Idle,
    Active,
    /// The window closed during this poll.
    Expired,
}

/// Fixed-duration window (attack, jump). Starting it again while active is a no-op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionWindow {
    duration: f64,
    state: WindowState,
}

impl ActionWindow {
    pub fn new(duration: f64) -> Self {
        Self { duration, state: WindowState::Idle }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, WindowState::Active { .. })
    }

    /// Returns `false` when the window was already open.
    pub fn start(&mut self, now: f64) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = WindowState::Active { started_at: now };
        true
    }

    pub fn poll(&mut self, now: f64) -> WindowPhase {
        match self.state {
            WindowState::Idle => WindowPhase::Idle,
            WindowState::Active { started_at } if now - started_at >= self.duration => {
                self.state = WindowState::Idle;
                WindowPhase::Expired
            }
            WindowState::Active { .. } => WindowPhase::Active,
        }
    }
}

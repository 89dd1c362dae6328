use crate::model::config::PomodoroConfig;

/// Which session the timer is counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn title(self) -> &'static str {
        match self {
            Phase::Work => "Work Time",
            Phase::Break => "Break Time",
        }
    }
}

/// Pomodoro countdown: {Work, Break} × {Running, Paused}.
///
/// Driven by a one-second tick from the event loop. Reaching zero flips the
/// phase and reloads the new phase's duration; the timer keeps running
/// across the flip. Nothing here touches the collections.
#[derive(Debug, Clone)]
pub struct Pomodoro {
    pub phase: Phase,
    pub running: bool,
    /// Seconds remaining in the current phase
    pub time_left: u32,
    pub work_minutes: u16,
    pub break_minutes: u16,
}

impl Pomodoro {
    pub fn new(config: &PomodoroConfig) -> Self {
        Pomodoro {
            phase: Phase::Work,
            running: false,
            time_left: u32::from(config.work_minutes) * 60,
            work_minutes: config.work_minutes,
            break_minutes: config.break_minutes,
        }
    }

    /// Total seconds of the current phase
    pub fn phase_total(&self) -> u32 {
        let minutes = match self.phase {
            Phase::Work => self.work_minutes,
            Phase::Break => self.break_minutes,
        };
        u32::from(minutes) * 60
    }

    /// Fraction of the current phase still remaining, in 0.0..=1.0
    pub fn progress(&self) -> f64 {
        let total = self.phase_total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.time_left) / f64::from(total)
    }

    /// Advance one second. Expiry flips Work↔Break and reloads the new
    /// phase's duration without pausing.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.time_left > 0 {
            self.time_left -= 1;
        }
        if self.time_left == 0 {
            self.flip_phase();
        }
    }

    fn flip_phase(&mut self) {
        self.phase = match self.phase {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        };
        self.time_left = self.phase_total();
    }

    /// Toggle running/paused
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Reset to a fresh, running work session
    pub fn reset(&mut self) {
        self.phase = Phase::Work;
        self.time_left = u32::from(self.work_minutes) * 60;
        self.running = true;
    }

    /// Adjust the work duration by `delta` minutes (clamped to 1..=180).
    /// When paused in the work phase, the remaining time reloads.
    pub fn adjust_work(&mut self, delta: i16) {
        self.work_minutes = clamp_minutes(self.work_minutes, delta);
        if !self.running && self.phase == Phase::Work {
            self.time_left = self.phase_total();
        }
    }

    /// Adjust the break duration by `delta` minutes (clamped to 1..=180).
    /// When paused in the break phase, the remaining time reloads.
    pub fn adjust_break(&mut self, delta: i16) {
        self.break_minutes = clamp_minutes(self.break_minutes, delta);
        if !self.running && self.phase == Phase::Break {
            self.time_left = self.phase_total();
        }
    }

    /// Remaining time as MM:SS
    pub fn format_time(&self) -> String {
        let minutes = self.time_left / 60;
        let secs = self.time_left % 60;
        format!("{:02}:{:02}", minutes, secs)
    }
}

fn clamp_minutes(minutes: u16, delta: i16) -> u16 {
    (i32::from(minutes) + i32::from(delta)).clamp(1, 180) as u16
}

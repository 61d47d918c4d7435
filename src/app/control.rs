use std::time::{Duration, Instant};

use log::warn;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    GameOver,
}

/// Fixed-rate game ticks, decoupled from how often the
/// graphics backend calls `update`
pub struct Control {
    game_frame_duration: Duration,
    last_update: Instant,

    // amount of time which game frames have not yet
    // been accounted for (will be included next time
    // this in done), in frames
    remainder: f64,

    // number of game frames that still need to be
    // performed to catch up with the current time
    missed_updates: Option<usize>,

    game_state: State,
}

impl Control {
    /// Catching up on more frames than this at once is skipped,
    /// e.g. after the window was dragged for a while
    const MAX_CATCH_UP: usize = 10;

    /// Out of range rates saturate instead of panicking,
    /// a frame always lasts at least one nanosecond
    pub fn new(fps: f64) -> Self {
        Self {
            game_frame_duration: Duration::from_nanos((1e9 / fps) as u64)
                .max(Duration::from_nanos(1)),
            last_update: Instant::now(),
            remainder: 0.,

            missed_updates: None,

            game_state: State::Playing,
        }
    }

    /// Length of one game frame in seconds, the `dt` passed to every tick
    pub fn frame_dt(&self) -> f32 {
        self.game_frame_duration.as_secs_f32()
    }

    // repeatedly called in update() as while loop condition
    pub fn can_update(&mut self) -> bool {
        self.can_update_at(Instant::now())
    }

    fn can_update_at(&mut self, now: Instant) -> bool {
        if self.game_state != State::Playing {
            return false;
        }

        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                // calculate how many game frames should have occurred
                // since the last call to can_update
                let elapsed = now.saturating_duration_since(self.last_update);
                let game_frames = elapsed.as_secs_f64()
                    / self.game_frame_duration.as_secs_f64()
                    + self.remainder;
                let mut missed_updates = game_frames as usize;

                if missed_updates == 0 {
                    return false;
                }

                self.remainder = game_frames % 1.;
                self.last_update = now;

                if missed_updates > Self::MAX_CATCH_UP {
                    warn!(
                        "{} game frames behind, dropping {}",
                        missed_updates,
                        missed_updates - Self::MAX_CATCH_UP
                    );
                    missed_updates = Self::MAX_CATCH_UP;
                }
                self.missed_updates = Some(missed_updates - 1);
                true
            }
        }
    }

    pub fn game_over(&mut self) {
        self.game_state = State::GameOver;
        self.missed_updates = None;
    }
}

#[cfg(test)]
fn count_updates(control: &mut Control, now: Instant) -> usize {
    let mut n = 0;
    while control.can_update_at(now) {
        n += 1;
    }
    n
}

#[test]
fn test_fixed_rate() {
    let mut control = Control::new(10.);
    let start = control.last_update;
    assert_eq!(control.frame_dt(), 0.1);

    assert_eq!(count_updates(&mut control, start + Duration::from_millis(50)), 0);
    assert_eq!(count_updates(&mut control, start + Duration::from_millis(100)), 1);
    // 2.5 frames since the last update, the half frame is carried over
    assert_eq!(count_updates(&mut control, start + Duration::from_millis(350)), 2);
    assert_eq!(count_updates(&mut control, start + Duration::from_millis(400)), 1);
}

#[test]
fn test_catch_up_is_bounded() {
    let mut control = Control::new(10.);
    let start = control.last_update;
    assert_eq!(
        count_updates(&mut control, start + Duration::from_secs(60)),
        Control::MAX_CATCH_UP
    );
}

#[test]
fn test_game_over_stops_updates() {
    let mut control = Control::new(10.);
    let start = control.last_update;
    control.game_over();
    assert_eq!(control.game_state, State::GameOver);
    assert_eq!(count_updates(&mut control, start + Duration::from_secs(1)), 0);
}

#[test]
fn test_extreme_rates_keep_ticking() {
    for fps in [f64::INFINITY, 1e-20] {
        let control = Control::new(fps);
        assert!(control.frame_dt() > 0., "fps {}", fps);
    }

    let mut control = Control::new(f64::INFINITY);
    let start = control.last_update;
    for i in 1..=3 {
        let now = start + Duration::from_secs(i);
        assert_eq!(count_updates(&mut control, now), Control::MAX_CATCH_UP);
        assert!(control.remainder.is_finite());
    }
}

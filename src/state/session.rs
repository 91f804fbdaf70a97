//! One game of whack-a-mole: score, countdown and the pop-up loop.
//!
//! The session owns its timers through a [`Scheduler`]. Timer callbacks come
//! back in through [`GameSession::handle`], which runs to completion before
//! the next event is dispatched.

use log::{debug, info};

use super::random::{RandomSource, TargetPicker};
use super::scheduler::{Scheduler, Task};
use crate::model::{compute_delay, Difficulty, GameConfig, TARGET_COUNT, TICK_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No game started yet.
    Idle,
    Running,
    /// Countdown cleared; a last pop-up may still be on screen.
    Stopped,
}

pub struct GameSession<S: Scheduler, R: RandomSource> {
    scheduler: S,
    rng: R,
    config: GameConfig,
    remaining_secs: u32,
    score: u32,
    picker: TargetPicker,
    active_target: Option<usize>,
    countdown: Option<S::Handle>,
    popup: Option<S::Handle>,
    phase: Phase,
    /// Set by the first `start`, never cleared: clicks after time-up still count.
    hits_enabled: bool,
    stop_requests: u32,
}

impl<S: Scheduler, R: RandomSource> GameSession<S, R> {
    pub fn new(config: GameConfig, scheduler: S, rng: R) -> Self {
        Self {
            scheduler,
            rng,
            config,
            remaining_secs: 0,
            score: 0,
            picker: TargetPicker::default(),
            active_target: None,
            countdown: None,
            popup: None,
            phase: Phase::Idle,
            hits_enabled: false,
            stop_requests: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn active_target(&self) -> Option<usize> {
        self.active_target
    }

    #[cfg(test)]
    pub fn last_target(&self) -> Option<usize> {
        self.picker.last()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Is the repeating countdown still armed?
    #[cfg(test)]
    pub fn countdown_active(&self) -> bool {
        self.countdown.is_some()
    }

    #[cfg(test)]
    pub fn popup_pending(&self) -> bool {
        self.popup.is_some()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// How many times the stop path ran, including no-op repeats.
    #[cfg(test)]
    pub fn stop_requests(&self) -> u32 {
        self.stop_requests
    }

    /// Difficulty applies from the next pop-up, duration from the next `start`.
    pub fn apply_config(&mut self, config: GameConfig) {
        self.config = config;
    }

    /// Starts a fresh round. Any previous round's timers are cancelled first.
    pub fn start(&mut self) {
        if self.countdown.is_some() || self.popup.is_some() {
            info!("restarting: cancelling previous round timers");
        }
        self.teardown();
        self.reset_score();
        self.remaining_secs = self.config.duration_secs;
        self.phase = Phase::Running;
        self.countdown = Some(self.scheduler.every(TICK_MS, Task::CountdownTick));
        self.show_next();
        self.hits_enabled = true;
        info!(
            "game started: {}s on {}",
            self.remaining_secs, self.config.difficulty
        );
    }

    /// Clears the countdown. Safe to call any number of times.
    ///
    /// An in-flight pop-up is left alone; it hides itself and ends the loop
    /// once it sees no time left.
    pub fn stop(&mut self) {
        self.stop_requests += 1;
        if let Some(handle) = self.countdown.take() {
            drop(handle);
            self.phase = Phase::Stopped;
            info!("game stopped with score {}", self.score);
        } else {
            debug!("stop request #{} ignored, already stopped", self.stop_requests);
        }
    }

    /// Cancels every timer, e.g. when the board unmounts.
    pub fn shutdown(&mut self) {
        self.teardown();
        if self.phase == Phase::Running {
            self.phase = Phase::Stopped;
        }
    }

    pub fn handle(&mut self, task: Task) {
        match task {
            Task::CountdownTick => self.tick(),
            Task::PopupElapsed => self.on_popup_elapsed(),
        }
    }

    /// One countdown step. Reaching zero, or ticking at zero, runs `stop`.
    pub fn tick(&mut self) {
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            debug!("tick: {}s left", self.remaining_secs);
            if self.remaining_secs == 0 {
                self.stop();
            }
        } else {
            self.stop();
        }
    }

    /// Counts a click on `slot`, shown or not. Returns whether it scored.
    pub fn register_hit(&mut self, slot: usize) -> bool {
        if !self.hits_enabled || slot >= TARGET_COUNT {
            return false;
        }
        self.score = self.score.saturating_add(1);
        debug!("hit on slot {slot}, score {}", self.score);
        true
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    fn show_next(&mut self) {
        let delay = compute_delay(self.config.difficulty, &mut self.rng);
        let slot = self.picker.choose(&mut self.rng);
        self.active_target = Some(slot);
        self.popup = Some(self.scheduler.after(delay, Task::PopupElapsed));
        debug!("mole up in slot {slot} for {delay}ms");
    }

    fn on_popup_elapsed(&mut self) {
        self.active_target = None;
        if self.remaining_secs > 0 {
            self.show_next();
        } else {
            self.popup = None;
            self.stop();
        }
    }

    fn teardown(&mut self) {
        self.countdown = None;
        self.popup = None;
        self.active_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::random::tests::{seeded, Scripted};
    use crate::state::scheduler::manual::ManualScheduler;

    type TestSession<R> = GameSession<ManualScheduler, R>;

    fn session_with<R: RandomSource>(config: GameConfig, rng: R) -> (TestSession<R>, ManualScheduler) {
        let sched = ManualScheduler::default();
        (GameSession::new(config, sched.clone(), rng), sched)
    }

    /// Fires every task due within the next `ms` milliseconds.
    fn run_for<R: RandomSource>(session: &mut TestSession<R>, sched: &ManualScheduler, ms: u64) {
        let until = sched.now() + ms;
        while let Some(task) = sched.pop_due(until) {
            session.handle(task);
        }
        sched.set_now(until);
    }

    #[test]
    fn start_resets_and_arms_both_loops() {
        let (mut s, sched) = session_with(GameConfig::default(), seeded(1));
        assert_eq!(s.phase(), Phase::Idle);
        s.start();
        assert!(s.is_running());
        assert_eq!(s.remaining_secs(), 10);
        assert_eq!(s.score(), 0);
        assert!(s.active_target().is_some());
        assert!(sched.is_pending(Task::CountdownTick));
        assert!(sched.is_pending(Task::PopupElapsed));
    }

    #[test]
    fn clicks_before_start_are_ignored() {
        let (mut s, _sched) = session_with(GameConfig::default(), seeded(2));
        assert!(!s.register_hit(0));
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn hits_count_for_any_slot() {
        let (mut s, _sched) = session_with(GameConfig::default(), seeded(3));
        s.start();
        let active = s.active_target().unwrap();
        let hidden = (active + 1) % TARGET_COUNT;
        for n in 0..25 {
            let slot = if n % 2 == 0 { active } else { hidden };
            assert!(s.register_hit(slot));
        }
        assert_eq!(s.score(), 25);
        assert!(!s.register_hit(TARGET_COUNT));
        assert_eq!(s.score(), 25);
    }

    #[test]
    fn two_clicks_on_active_target_add_two() {
        let (mut s, _sched) = session_with(GameConfig::default(), seeded(4));
        s.start();
        let active = s.active_target().unwrap();
        s.register_hit(active);
        s.register_hit(active);
        assert_eq!(s.score(), 2);
    }

    #[test]
    fn reset_score_is_the_only_way_down() {
        let (mut s, sched) = session_with(GameConfig::default(), seeded(5));
        s.start();
        let mut last = s.score();
        for step in 0..40 {
            s.register_hit(step % TARGET_COUNT);
            run_for(&mut s, &sched, 250);
            assert!(s.score() >= last);
            last = s.score();
        }
        s.reset_score();
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn ticking_down_to_zero_stops_once_and_stays_safe() {
        let config = GameConfig { difficulty: Difficulty::Easy, duration_secs: 7 };
        let (mut s, _sched) = session_with(config, seeded(6));
        s.start();
        for _ in 0..7 {
            s.tick();
        }
        assert_eq!(s.remaining_secs(), 0);
        assert!(s.stop_requests() >= 1);
        assert!(!s.countdown_active());
        assert_eq!(s.phase(), Phase::Stopped);

        s.tick();
        s.stop();
        s.stop();
        assert_eq!(s.remaining_secs(), 0);
        assert_eq!(s.phase(), Phase::Stopped);
    }

    #[test]
    fn full_round_clears_countdown_and_keeps_click_count() {
        let (mut s, sched) = session_with(GameConfig::default(), seeded(11));
        s.start();
        let mut clicks = 0;
        for _ in 0..20 {
            if let Some(slot) = s.active_target() {
                s.register_hit(slot);
                clicks += 1;
            }
            run_for(&mut s, &sched, 500);
        }
        assert_eq!(sched.now(), 10_000);
        assert_eq!(s.remaining_secs(), 0);
        assert!(!s.countdown_active());
        assert!(!sched.is_pending(Task::CountdownTick));
        assert_eq!(s.score(), clicks);

        // the pop-up in flight finishes its cycle, then the loop ends
        run_for(&mut s, &sched, 2_000);
        assert_eq!(s.active_target(), None);
        assert!(!s.popup_pending());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn popup_loop_never_repeats_a_slot() {
        let config = GameConfig { difficulty: Difficulty::Normal, duration_secs: 30 };
        let (mut s, sched) = session_with(config, seeded(21));
        s.start();
        let mut prev = s.active_target().unwrap();
        for _ in 0..25 {
            run_for(&mut s, &sched, 1_000);
            let next = s.active_target().unwrap();
            assert_ne!(next, prev);
            assert_eq!(s.last_target(), Some(next));
            prev = next;
        }
    }

    #[test]
    fn popup_uses_difficulty_delay() {
        let config = GameConfig { difficulty: Difficulty::Easy, duration_secs: 10 };
        let (mut s, sched) = session_with(config, Scripted::new(&[0.0, 0.5]));
        s.start();
        assert_eq!(s.active_target(), Some(0));
        run_for(&mut s, &sched, 1_499);
        assert_eq!(s.active_target(), Some(0));
        run_for(&mut s, &sched, 1);
        assert_eq!(s.active_target(), Some(4));
    }

    #[test]
    fn popup_runs_past_zero_then_halts() {
        // 5s round, easy pop-ups last 1.5s
        let config = GameConfig { difficulty: Difficulty::Easy, duration_secs: 5 };
        let (mut s, sched) = session_with(config, seeded(8));
        s.start();
        run_for(&mut s, &sched, 5_000);
        assert_eq!(s.phase(), Phase::Stopped);
        // 5000ms is not a multiple of 1500ms, so a mole is still up
        assert!(s.active_target().is_some());
        let stops = s.stop_requests();
        run_for(&mut s, &sched, 1_500);
        assert_eq!(s.active_target(), None);
        assert_eq!(s.stop_requests(), stops + 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn clicks_after_time_up_still_count() {
        let config = GameConfig { difficulty: Difficulty::Normal, duration_secs: 5 };
        let (mut s, sched) = session_with(config, seeded(12));
        s.start();
        run_for(&mut s, &sched, 7_000);
        assert_eq!(s.phase(), Phase::Stopped);
        assert!(s.register_hit(3));
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn restart_cancels_previous_round() {
        let (mut s, sched) = session_with(GameConfig::default(), seeded(13));
        s.start();
        run_for(&mut s, &sched, 3_000);
        s.register_hit(1);
        s.start();
        assert_eq!(s.score(), 0);
        assert_eq!(s.remaining_secs(), 10);
        // one countdown and one pop-up, not two of each
        assert_eq!(sched.pending(), 2);
        run_for(&mut s, &sched, 1_000);
        assert_eq!(s.remaining_secs(), 9);
    }

    #[test]
    fn shutdown_cancels_everything() {
        let (mut s, sched) = session_with(GameConfig::default(), seeded(14));
        s.start();
        s.shutdown();
        assert_eq!(sched.pending(), 0);
        assert_eq!(s.phase(), Phase::Stopped);
        assert_eq!(s.active_target(), None);
    }

    #[test]
    fn difficulty_change_applies_to_next_popup() {
        let config = GameConfig { difficulty: Difficulty::Easy, duration_secs: 10 };
        let (mut s, sched) = session_with(config, seeded(15));
        s.start();
        s.apply_config(GameConfig { difficulty: Difficulty::Normal, ..config });
        run_for(&mut s, &sched, 1_500);
        let shown = s.active_target();
        assert!(shown.is_some());
        run_for(&mut s, &sched, 999);
        assert_eq!(s.active_target(), shown);
        run_for(&mut s, &sched, 1);
        assert_ne!(s.active_target(), shown);
    }

    #[test]
    fn tick_at_zero_with_countdown_armed_stops() {
        let config = GameConfig { difficulty: Difficulty::Normal, duration_secs: 0 };
        let (mut s, sched) = session_with(config, seeded(16));
        s.start();
        assert_eq!(s.remaining_secs(), 0);
        assert!(s.countdown_active());
        run_for(&mut s, &sched, 1_000);
        assert_eq!(s.remaining_secs(), 0);
        assert_eq!(s.phase(), Phase::Stopped);
        assert!(!s.countdown_active());
        assert!(!sched.is_pending(Task::CountdownTick));
        assert!(s.stop_requests() >= 1);
    }
}

//! Playback state machine for the word-cloud timeline.
//!
//! The player never owns a timer. `play` and `tick` hand back a
//! `TickHandle` describing the sleep the caller should schedule; when the
//! sleep resolves the caller feeds the handle's epoch back into `tick`.
//! Pausing bumps the epoch, so an in-flight tick lands stale and dies
//! instead of mutating a paused player. The same generation idea guards the
//! asynchronous word placement: every index change issues a new layout
//! sequence number and only the most recent one may be drawn.

/// Tick intervals offered by the UI, slow to fast.
pub const SPEED_STEPS_MS: [u64; 3] = [2000, 1000, 500];
pub const DEFAULT_SPEED_MS: u64 = 1000;

/// A scheduled advance: sleep `delay_ms`, then call `tick(epoch)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    pub epoch: u64,
    pub delay_ms: u64,
}

/// A request to lay out the snapshot at `index`. `layout_seq` identifies the
/// request for the staleness check once the placement finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    pub index: usize,
    pub layout_seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The playhead moved; schedule `next` and lay out `frame`.
    Advanced {
        frame: FrameRequest,
        next: TickHandle,
    },
    /// The tick belonged to a cancelled timer generation (or the player is
    /// paused); ignore it.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePlayer {
    year_count: usize,
    index: usize,
    playing: bool,
    speed_ms: u64,
    timer_epoch: u64,
    layout_seq: u64,
}

impl TimelinePlayer {
    pub fn new(year_count: usize) -> Self {
        Self {
            year_count,
            index: 0,
            playing: false,
            speed_ms: DEFAULT_SPEED_MS,
            timer_epoch: 0,
            layout_seq: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn year_count(&self) -> usize {
        self.year_count
    }

    fn request_frame(&mut self) -> FrameRequest {
        self.layout_seq += 1;
        FrameRequest {
            index: self.index,
            layout_seq: self.layout_seq,
        }
    }

    /// Layout request for the frame already under the playhead (first
    /// render).
    pub fn initial_frame(&mut self) -> FrameRequest {
        self.request_frame()
    }

    /// Paused -> Playing. Returns the first tick to schedule, or None when
    /// already playing or there is nothing to play over.
    pub fn play(&mut self) -> Option<TickHandle> {
        if self.playing || self.year_count == 0 {
            return None;
        }
        self.playing = true;
        self.timer_epoch += 1;
        Some(TickHandle {
            epoch: self.timer_epoch,
            delay_ms: self.speed_ms,
        })
    }

    /// Playing -> Paused. The epoch bump cancels whatever tick is still in
    /// flight; the index is retained.
    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.timer_epoch += 1;
        }
    }

    /// Periodic advance. Wraps from the last year back to the first so
    /// playback loops indefinitely.
    pub fn tick(&mut self, epoch: u64) -> TickOutcome {
        if !self.playing || epoch != self.timer_epoch || self.year_count == 0 {
            return TickOutcome::Stale;
        }
        self.index = (self.index + 1) % self.year_count;
        TickOutcome::Advanced {
            frame: self.request_frame(),
            next: TickHandle {
                epoch: self.timer_epoch,
                delay_ms: self.speed_ms,
            },
        }
    }

    /// User-driven scrub, allowed while playing or paused. Out-of-range
    /// indices clamp. Returns a layout request only when the playhead
    /// actually moved.
    pub fn seek(&mut self, index: usize) -> Option<FrameRequest> {
        if self.year_count == 0 {
            return None;
        }
        let clamped = index.min(self.year_count - 1);
        if clamped == self.index {
            return None;
        }
        self.index = clamped;
        Some(self.request_frame())
    }

    /// Jump back to the first year regardless of play state.
    pub fn reset(&mut self) -> Option<FrameRequest> {
        self.seek(0)
    }

    /// Change the interval used by future ticks. The tick currently in
    /// flight keeps its original delay; unknown speeds are ignored.
    pub fn set_speed(&mut self, ms: u64) {
        if SPEED_STEPS_MS.contains(&ms) {
            self.speed_ms = ms;
        }
    }

    /// The staleness rule: only the most recently requested layout may be
    /// drawn.
    pub fn is_current_layout(&self, layout_seq: u64) -> bool {
        layout_seq == self.layout_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(player: &mut TimelinePlayer, handle: TickHandle) -> TickHandle {
        match player.tick(handle.epoch) {
            TickOutcome::Advanced { next, .. } => next,
            TickOutcome::Stale => panic!("tick unexpectedly stale"),
        }
    }

    #[test]
    fn ticking_year_count_times_wraps_to_the_start() {
        let mut player = TimelinePlayer::new(5);
        player.seek(3);
        let mut handle = player.play().expect("should start");
        for _ in 0..5 {
            handle = advance(&mut player, handle);
        }
        assert_eq!(player.index(), 3);
    }

    #[test]
    fn seek_is_clamped_and_idempotent() {
        let mut player = TimelinePlayer::new(3);
        assert!(player.seek(2).is_some());
        assert!(player.seek(2).is_none());
        assert_eq!(player.index(), 2);

        player.seek(99);
        assert_eq!(player.index(), 2);
    }

    #[test]
    fn seek_then_tick_wraps() {
        // Years 2000-2002: seek(2) then tick lands back on index 0.
        let mut player = TimelinePlayer::new(3);
        player.seek(2);
        let handle = player.play().expect("should start");
        match player.tick(handle.epoch) {
            TickOutcome::Advanced { frame, .. } => assert_eq!(frame.index, 0),
            TickOutcome::Stale => panic!("tick unexpectedly stale"),
        }
    }

    #[test]
    fn pause_cancels_the_in_flight_tick() {
        let mut player = TimelinePlayer::new(4);
        let handle = player.play().expect("should start");
        player.pause();
        assert_eq!(player.tick(handle.epoch), TickOutcome::Stale);
        assert_eq!(player.index(), 0);
        assert!(!player.is_playing());
    }

    #[test]
    fn replay_ignores_ticks_from_the_previous_run() {
        let mut player = TimelinePlayer::new(4);
        let stale = player.play().expect("should start");
        player.pause();
        let fresh = player.play().expect("should restart");
        assert_eq!(player.tick(stale.epoch), TickOutcome::Stale);
        assert!(matches!(
            player.tick(fresh.epoch),
            TickOutcome::Advanced { .. }
        ));
    }

    #[test]
    fn play_while_playing_is_a_no_op() {
        let mut player = TimelinePlayer::new(4);
        let first = player.play().expect("should start");
        assert!(player.play().is_none());
        assert!(matches!(
            player.tick(first.epoch),
            TickOutcome::Advanced { .. }
        ));
    }

    #[test]
    fn set_speed_applies_to_the_tick_after_the_in_flight_one() {
        let mut player = TimelinePlayer::new(4);
        let handle = player.play().expect("should start");
        assert_eq!(handle.delay_ms, DEFAULT_SPEED_MS);

        player.set_speed(500);
        // The scheduled tick still fires with its old delay and stays valid.
        let next = advance(&mut player, handle);
        assert_eq!(next.delay_ms, 500);
    }

    #[test]
    fn unknown_speeds_are_ignored() {
        let mut player = TimelinePlayer::new(4);
        player.set_speed(123);
        assert_eq!(player.speed_ms(), DEFAULT_SPEED_MS);
        player.set_speed(2000);
        assert_eq!(player.speed_ms(), 2000);
    }

    #[test]
    fn reset_returns_to_the_first_year_in_any_state() {
        let mut player = TimelinePlayer::new(4);
        player.seek(3);
        player.play();
        assert!(player.reset().is_some());
        assert_eq!(player.index(), 0);
        assert!(player.is_playing());
        assert!(player.reset().is_none());
    }

    #[test]
    fn only_the_latest_layout_request_is_current() {
        let mut player = TimelinePlayer::new(4);
        let first = player.seek(1).expect("moved");
        let second = player.seek(2).expect("moved");
        assert!(!player.is_current_layout(first.layout_seq));
        assert!(player.is_current_layout(second.layout_seq));
    }

    #[test]
    fn empty_timeline_never_plays() {
        let mut player = TimelinePlayer::new(0);
        assert!(player.play().is_none());
        assert!(player.seek(0).is_none());
        assert_eq!(player.tick(0), TickOutcome::Stale);
    }
}

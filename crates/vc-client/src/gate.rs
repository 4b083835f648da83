//! Foreground transition gate
//!
//! One mutex guards the paused flag and the catch-up counter as a pair, so
//! the polling task never observes one without the other. Transitions come
//! from the host's foreground callbacks and from the log interceptor; the
//! polling task consumes the state once per tick through [`Gate::begin_tick`],
//! which folds the read and the catch-up decrement into one critical section.

use parking_lot::Mutex;

/// Refresh-only ticks run after a shell menu closes, before scripted
/// evaluation resumes. Memory may have shifted relative to the paused
/// snapshot; refreshing first avoids spurious change detection.
pub const SETTLE_FRAMES: u32 = 15;

/// What the polling task should do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Paused or fatal; make no external calls.
    Skip,
    /// Catch-up frame; refresh memory only, no scripted evaluation.
    UpdateOnly,
    /// Normal tick.
    Run,
}

#[derive(Debug, Default)]
struct GateState {
    paused: bool,
    catch_up_frames: u32,
}

/// Shared pause/catch-up state between the host callbacks, the log
/// interceptor and the polling task.
#[derive(Debug, Default)]
pub struct Gate {
    state: Mutex<GateState>,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host regained the foreground (HOME menu closed). Does not touch the
    /// catch-up counter; catch-up begins only on a shell-menu close.
    pub fn on_foreground_acquired(&self) {
        self.state.lock().paused = false;
    }

    /// Host released the foreground (HOME menu opened).
    pub fn on_foreground_released(&self) {
        self.state.lock().paused = true;
    }

    /// The emulator core opened its shell menu.
    pub fn on_shell_menu_opened(&self) {
        self.state.lock().paused = true;
    }

    /// The emulator core closed its shell menu; resume through a fixed run
    /// of refresh-only ticks regardless of any countdown in progress.
    pub fn on_shell_menu_closed(&self) {
        let mut state = self.state.lock();
        state.paused = false;
        state.catch_up_frames = SETTLE_FRAMES;
    }

    /// Clear all gate state for a fresh launch.
    pub fn reset(&self) {
        *self.state.lock() = GateState::default();
    }

    pub fn is_paused(&self) -> bool {
        self.state.lock().paused
    }

    pub fn catch_up_frames(&self) -> u32 {
        self.state.lock().catch_up_frames
    }

    /// Decide the action for one tick. The catch-up counter decrements by
    /// exactly one per non-paused tick in which it is nonzero and never
    /// changes on a skipped tick.
    pub fn begin_tick(&self, fatal: bool) -> TickAction {
        let mut state = self.state.lock();
        if state.paused || fatal {
            return TickAction::Skip;
        }
        if state.catch_up_frames > 0 {
            state.catch_up_frames -= 1;
            return TickAction::UpdateOnly;
        }
        TickAction::Run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_idempotent() {
        let gate = Gate::new();
        gate.on_foreground_acquired();
        gate.on_foreground_acquired();
        assert!(!gate.is_paused());
    }

    #[test]
    fn test_release_then_acquire() {
        let gate = Gate::new();
        gate.on_foreground_released();
        assert!(gate.is_paused());
        assert_eq!(gate.begin_tick(false), TickAction::Skip);
        gate.on_foreground_acquired();
        assert_eq!(gate.begin_tick(false), TickAction::Run);
    }

    #[test]
    fn test_close_resets_counter_from_any_state() {
        let gate = Gate::new();
        gate.on_shell_menu_closed();
        assert_eq!(gate.catch_up_frames(), SETTLE_FRAMES);

        // Mid-countdown close snaps back to the full constant.
        for _ in 0..5 {
            gate.begin_tick(false);
        }
        assert_eq!(gate.catch_up_frames(), SETTLE_FRAMES - 5);
        gate.on_shell_menu_closed();
        assert_eq!(gate.catch_up_frames(), SETTLE_FRAMES);
    }

    #[test]
    fn test_catch_up_countdown() {
        let gate = Gate::new();
        gate.on_shell_menu_closed();
        for _ in 0..SETTLE_FRAMES {
            assert_eq!(gate.begin_tick(false), TickAction::UpdateOnly);
        }
        assert_eq!(gate.begin_tick(false), TickAction::Run);
    }

    #[test]
    fn test_paused_tick_preserves_counter() {
        let gate = Gate::new();
        gate.on_shell_menu_closed();
        gate.on_foreground_released();
        for _ in 0..3 {
            assert_eq!(gate.begin_tick(false), TickAction::Skip);
        }
        assert_eq!(gate.catch_up_frames(), SETTLE_FRAMES);
    }

    #[test]
    fn test_fatal_skips_like_paused() {
        let gate = Gate::new();
        assert_eq!(gate.begin_tick(true), TickAction::Skip);
        gate.on_shell_menu_closed();
        assert_eq!(gate.begin_tick(true), TickAction::Skip);
        assert_eq!(gate.catch_up_frames(), SETTLE_FRAMES);
    }
}

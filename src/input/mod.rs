use std::time::Duration;

use macroquad::prelude::*;
use crate::application::Event;

/// Pattern shortcuts, index `i` places preset `i`
const PATTERN_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

/// One-shot timer that produces [`Event::Tick`].
/// It must be re-armed after every tick, so at most one step is ever pending.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickTimer {
    deadline: Option<f64>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }
    
    /// Schedule a single tick `interval` after `now` (seconds)
    pub fn arm(&mut self, now: f64, interval: Duration) {
        self.deadline = Some(now + interval.as_secs_f64());
    }
    
    /// Cancel the pending tick, if any
    pub fn disarm(&mut self) {
        self.deadline = None;
    }
    
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
    
    /// Returns true once when the deadline has passed, then disarms itself
    pub fn fire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect this frame's events in the order the state machine expects:
/// quit first, then the press, then keyboard shortcuts, then a due tick.
pub fn poll_events(timer: &mut TickTimer) -> Vec<Event> {
    let mut events = Vec::new();
    
    if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
        events.push(Event::Quit);
        return events;
    }
    
    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        events.push(Event::PointerDown { x: x.floor() as i32, y: y.floor() as i32 });
    }
    
    if is_key_pressed(KeyCode::C) {
        events.push(Event::Clear);
    }
    if is_key_pressed(KeyCode::R) {
        events.push(Event::Randomize);
    }
    events.extend(
        PATTERN_KEYS
            .iter()
            .enumerate()
            .filter(|(_, key)| is_key_pressed(**key))
            .map(|(idx, _)| Event::PlacePattern(idx)),
    );
    
    if timer.fire(get_time()) {
        events.push(Event::Tick);
    }
    
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    
    const INTERVAL: Duration = Duration::from_millis(20);
    
    #[test]
    fn test_timer_starts_disarmed() {
        let mut timer = TickTimer::new();
        assert!(!timer.is_armed());
        assert!(!timer.fire(100.0));
    }
    
    #[test]
    fn test_timer_fires_once() {
        let mut timer = TickTimer::new();
        timer.arm(1.0, INTERVAL);
        assert!(!timer.fire(1.01));
        assert!(timer.fire(1.021));
        assert!(!timer.fire(1.5));
        assert!(!timer.is_armed());
    }
    
    #[test]
    fn test_disarm_cancels_pending_tick() {
        let mut timer = TickTimer::new();
        timer.arm(0.0, INTERVAL);
        timer.disarm();
        assert!(!timer.fire(10.0));
    }
    
    #[test]
    fn test_rearm_moves_deadline() {
        let mut timer = TickTimer::new();
        timer.arm(0.0, INTERVAL);
        timer.arm(1.0, INTERVAL);
        assert!(!timer.fire(0.5));
        assert!(timer.fire(1.03));
    }
}

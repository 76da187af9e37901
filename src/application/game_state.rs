use std::time::Duration;

use log::{debug, info, trace};
use rand::{SeedableRng, rngs::StdRng};

use super::layout::{Layout, Target};
use crate::config::Config;
use crate::domain::{Grid, Pattern, presets};

/// Whether the board is editable or advancing on its own
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Clicks toggle cells, the control square resumes
    #[default]
    Paused,
    /// Ticks advance the board, any click pauses
    Running,
}

/// Input delivered by the presentation layer, one at a time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    PointerDown { x: i32, y: i32 },
    Tick,
    Quit,
    /// Kill every cell (paused only)
    Clear,
    /// Random fill (paused only)
    Randomize,
    /// Stamp a preset in the middle of the board (paused only)
    PlacePattern(usize),
}

/// What the presentation layer must do after an event was handled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Redraw the board from the current grid
    Render,
    /// Redraw the control square for the given mode
    RenderControlGlyph(Mode),
    /// Schedule exactly one `Tick` after the interval
    ArmTick(Duration),
    /// Drop any pending `Tick`
    DisarmTick,
    /// Release the window and stop the loop
    Shutdown,
}

/// GameState is the interaction state machine.
/// It owns the single live grid and decides what each event does to it.
/// Nothing here touches the window, so every transition is testable.
pub struct GameState {
    pub grid: Grid,
    pub mode: Mode,
    pub generation: u64,
    pub layout: Layout,
    pub tick_interval: Duration,
    patterns: Vec<Pattern>,
    rng: StdRng,
    finished: bool,
}

impl GameState {
    /// Create a paused game with an all-dead board
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
    
    /// Same as [`GameState::new`] with a reproducible random fill
    pub fn with_seed(config: &Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
    
    fn with_rng(config: &Config, rng: StdRng) -> Self {
        Self {
            grid: Grid::new(config.width, config.height),
            mode: Mode::Paused,
            generation: 0,
            layout: Layout::from_config(config),
            tick_interval: config.tick_interval,
            patterns: presets::all_patterns(),
            rng,
            finished: false,
        }
    }
    
    /// Commands for the very first frame
    pub fn start(&self) -> Vec<Command> {
        vec![Command::RenderControlGlyph(self.mode), Command::Render]
    }
    
    /// True once a quit event has been handled
    pub fn is_finished(&self) -> bool {
        self.finished
    }
    
    /// Presets available to [`Event::PlacePattern`]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
    
    /// Handle one event and report what has to be redrawn or scheduled
    pub fn handle(&mut self, event: Event) -> Vec<Command> {
        if self.finished {
            return Vec::new();
        }
        
        match (self.mode, event) {
            (_, Event::Quit) => self.quit(),
            (Mode::Paused, Event::PointerDown { x, y }) => self.edit(x, y),
            (Mode::Paused, Event::Clear) => self.clear(),
            (Mode::Paused, Event::Randomize) => self.randomize(),
            (Mode::Paused, Event::PlacePattern(index)) => self.place_pattern(index),
            (Mode::Running, Event::PointerDown { .. }) => self.pause(),
            (Mode::Running, Event::Tick) => self.advance(),
            // Stale ticks while paused and editing keys while running
            _ => Vec::new(),
        }
    }
    
    fn edit(&mut self, x: i32, y: i32) -> Vec<Command> {
        match self.layout.map_pointer(x, y) {
            Target::Control => self.resume(),
            Target::DeadZone => Vec::new(),
            Target::Cell { row, col } => {
                match self.grid.toggle(row, col) {
                    Some(cell) => {
                        debug!("Toggled cell ({row}, {col}) to {cell:?}");
                        vec![Command::Render]
                    }
                    None => Vec::new(),
                }
            }
        }
    }
    
    fn resume(&mut self) -> Vec<Command> {
        self.mode = Mode::Running;
        info!("Running from generation {}", self.generation);
        vec![
            Command::RenderControlGlyph(Mode::Running),
            Command::ArmTick(self.tick_interval),
        ]
    }
    
    fn pause(&mut self) -> Vec<Command> {
        self.mode = Mode::Paused;
        info!("Paused at generation {}", self.generation);
        vec![Command::DisarmTick, Command::RenderControlGlyph(Mode::Paused)]
    }
    
    fn advance(&mut self) -> Vec<Command> {
        let (width, height) = self.grid.dimensions();
        let next = if width * height > Config::PARALLEL_THRESHOLD {
            self.grid.step_parallel()
        } else {
            self.grid.step()
        };
        self.grid = next;
        self.generation += 1;
        trace!("Generation {} population {}", self.generation, self.grid.population());
        vec![Command::Render, Command::ArmTick(self.tick_interval)]
    }
    
    fn clear(&mut self) -> Vec<Command> {
        self.grid.clear();
        self.generation = 0;
        info!("Cleared board");
        vec![Command::Render]
    }
    
    fn randomize(&mut self) -> Vec<Command> {
        self.grid.randomize(&mut self.rng, Config::RANDOM_DENSITY);
        self.generation = 0;
        info!("Randomized board, population {}", self.grid.population());
        vec![Command::Render]
    }
    
    fn place_pattern(&mut self, index: usize) -> Vec<Command> {
        let Some(pattern) = self.patterns.get(index) else {
            return Vec::new();
        };
        pattern.place_centered(&mut self.grid);
        info!("Placed {}", pattern.name);
        vec![Command::Render]
    }
    
    fn quit(&mut self) -> Vec<Command> {
        self.finished = true;
        info!("Quit at generation {}", self.generation);
        match self.mode {
            Mode::Running => vec![Command::DisarmTick, Command::Shutdown],
            Mode::Paused => vec![Command::Shutdown],
        }
    }
}

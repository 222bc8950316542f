//! Session owner
//!
//! `GameLoop` holds the one live `GameState`, feeds it ticks from the injected
//! tick source and pointer samples from the host, and stops the tick source
//! as soon as the shuttle hits the floor.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::{InputAdapter, TickSource};
use crate::renderer::{Frame, Presenter};
use crate::sim::{self, GameEvent, GameState};

pub struct GameLoop<T: TickSource> {
    state: GameState,
    ticker: T,
    /// Draws the seed of each new session
    seeds: Pcg32,
    sessions: u32,
}

impl<T: TickSource> GameLoop<T> {
    /// Start the first session and the tick source
    pub fn new(ticker: T, seed: u64) -> Self {
        let mut seeds = Pcg32::seed_from_u64(seed);
        let state = sim::initialize(seeds.next_u64());

        let mut game = Self {
            state,
            ticker,
            seeds,
            sessions: 1,
        };
        game.ticker.start();
        log::info!(
            "Session 1 started (seed {}, tick {} ms)",
            game.state.seed,
            game.ticker.period_ms()
        );
        game
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.state
    }

    pub fn frame(&self) -> Frame {
        Frame::from(&self.state)
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Sessions started so far, including the current one
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    /// Run whatever ticks the source says are due after `elapsed_ms`
    pub fn pump(&mut self, elapsed_ms: f64) -> Vec<GameEvent> {
        let due = self.ticker.due_ticks(elapsed_ms);
        let mut events = Vec::new();

        for _ in 0..due {
            if let Some(event) = self.step() {
                events.push(event);
            }
            if !self.ticker.is_running() {
                break;
            }
        }
        events
    }

    /// Apply exactly one tick
    pub fn step(&mut self) -> Option<GameEvent> {
        if self.state.is_over {
            return None;
        }

        let step = sim::advance(self.state);
        self.state = step.state;

        match step.event {
            Some(GameEvent::Hit { score, speed }) => {
                log::debug!("Hit #{} (speed now {:.1})", score, speed);
            }
            Some(GameEvent::Bounce) => log::debug!("Shuttle turned at the top"),
            Some(GameEvent::GameOver { score }) => {
                self.ticker.stop();
                log::info!(
                    "Game over after {} ticks, final score {}",
                    self.state.ticks,
                    score
                );
            }
            None => {}
        }
        step.event
    }

    /// Move the racket to a normalized x
    pub fn pointer_moved(&mut self, normalized_x: f32) {
        if normalized_x.is_nan() {
            log::trace!("Dropped NaN pointer sample");
        }
        self.state = sim::handle_pointer_input(self.state, normalized_x);
    }

    /// Move the racket from a raw client x via an input adapter
    pub fn pointer_moved_raw<A: InputAdapter>(&mut self, adapter: &A, client_x: f32) {
        match adapter.normalize(client_x) {
            Some(x) => self.pointer_moved(x),
            None => log::trace!("Dropped pointer sample at client x {}", client_x),
        }
    }

    /// Start a new session and restart the tick source
    pub fn reset(&mut self) {
        self.state = sim::reset(self.state, self.seeds.next_u64());
        self.sessions += 1;
        self.ticker.start();
        log::info!(
            "Session {} started (seed {})",
            self.sessions,
            self.state.seed
        );
    }

    /// Hand the current frame to a presenter and honor its restart request
    pub fn present<P: Presenter>(&mut self, presenter: &mut P) {
        presenter.present(&self.frame());
        if presenter.take_restart_request() {
            self.reset();
        }
    }
}

use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::{debug, info};
use rand::Rng;

use crate::session::config::SessionConfig;
use crate::session::console::Console;
use crate::session::constants::{ANOTHER_GAME_PROMPT, SOLUTION_PROMPT};
use crate::session::errors::SessionError;
use crate::solver::{Solution, Solver, SolverConfig};
use crate::tiles::Draw;

/// What a round drew and what the search found for it
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub draw: Draw,
    pub solution: Solution,
}

impl GameOutcome {
    pub fn is_exact(&self) -> bool {
        self.solution.is_exact()
    }
}

/// Runs rounds of the game against a console
pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Play one round: show the draw, search while the countdown runs, then
    /// reveal the solution.
    ///
    /// The countdown never bounds the search. Once it ends the round waits,
    /// without timeout, for the search thread to hand its solution over.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw configuration is invalid, the console
    /// fails, or the search thread dies without sending a solution.
    pub fn play_round<C, R>(
        &self,
        console: &mut C,
        rng: &mut R,
    ) -> Result<GameOutcome, SessionError>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        let draw = Draw::random(&self.config.draw, rng)?;
        info!(
            "New round: plates {:?}, target {}",
            draw.plates(),
            draw.target()
        );
        console.show_draw(&draw)?;

        let pending = spawn_search(self.config.solver.clone(), &draw);
        console.countdown(self.config.think_seconds, self.config.countdown_width)?;

        debug!("Countdown over, waiting for the search");
        let solution = wait_for_solution(&pending)?;

        console.prompt(SOLUTION_PROMPT)?;
        console.show_solution(&solution)?;

        Ok(GameOutcome { draw, solution })
    }

    /// Play rounds until the player closes the input. Returns the number of
    /// rounds played.
    ///
    /// # Errors
    ///
    /// Stops at the first round that fails and returns its error.
    pub fn run<C, R>(&self, console: &mut C, rng: &mut R) -> Result<usize, SessionError>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        let mut rounds = 0;
        loop {
            console.clear()?;
            console.show_title()?;
            let outcome = self.play_round(console, rng)?;
            rounds += 1;
            debug!(
                "Round {} finished ({})",
                rounds,
                if outcome.is_exact() {
                    "exact"
                } else {
                    "approximate"
                }
            );

            if !console.prompt(ANOTHER_GAME_PROMPT)? {
                info!("Input closed after {} rounds", rounds);
                return Ok(rounds);
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// Start the search on its own thread. The returned receiver yields the
/// solution once, after `solve` has fully returned.
fn spawn_search(config: SolverConfig, draw: &Draw) -> Receiver<Solution> {
    let plates = draw.plates().to_vec();
    let target = draw.target();
    spawn_worker(move || Solver::new(config).solve(&plates, target))
}

fn spawn_worker<F>(work: F) -> Receiver<Solution>
where
    F: FnOnce() -> Solution + Send + 'static,
{
    let (sender, receiver) = mpsc::sync_channel(0);

    thread::spawn(move || {
        let solution = work();
        if sender.send(solution).is_err() {
            debug!("Round ended before the solution was collected");
        }
    });

    receiver
}

/// Block until the worker hands its solution over, with no timeout.
fn wait_for_solution(pending: &Receiver<Solution>) -> Result<Solution, SessionError> {
    Ok(pending.recv()?)
}

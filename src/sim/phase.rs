//! Top-level game phases and their transitions
//!
//! Each phase has its own input handler. Handlers only decide *where* to go;
//! `apply` performs the reset that comes with entering a fresh run.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};
use super::tick::TickInput;

/// Current phase of the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    MainMenu,
    /// Active gameplay
    Playing,
    /// Simulation frozen, last frame drawn under an overlay
    Paused,
    /// A zombie reached the base
    GameOver,
}

/// Outcome of a phase handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No phase change
    Stay,
    /// Resume or pause without touching the world
    Switch(GamePhase),
    /// Reset the world and begin a new run from wave 1
    NewRun,
    /// Reset the world and return to the title screen
    ToMenu,
    /// Leave the session
    Quit,
}

impl GamePhase {
    /// Dispatch input to this phase's handler
    pub fn handle(self, input: &TickInput) -> Transition {
        match self {
            GamePhase::MainMenu => main_menu(input),
            GamePhase::Playing => playing(input),
            GamePhase::Paused => paused(input),
            GamePhase::GameOver => game_over(input),
        }
    }

    /// Whether the simulation step runs in this phase
    pub fn simulates(self) -> bool {
        self == GamePhase::Playing
    }
}

fn main_menu(input: &TickInput) -> Transition {
    if input.confirm {
        Transition::NewRun
    } else {
        Transition::Stay
    }
}

fn playing(input: &TickInput) -> Transition {
    if input.pause {
        Transition::Switch(GamePhase::Paused)
    } else {
        Transition::Stay
    }
}

fn paused(input: &TickInput) -> Transition {
    if input.pause {
        Transition::Switch(GamePhase::Playing)
    } else if input.restart {
        Transition::NewRun
    } else if input.menu {
        Transition::ToMenu
    } else if input.quit {
        Transition::Quit
    } else {
        Transition::Stay
    }
}

fn game_over(input: &TickInput) -> Transition {
    if input.restart {
        Transition::NewRun
    } else if input.menu {
        Transition::ToMenu
    } else if input.quit {
        Transition::Quit
    } else {
        Transition::Stay
    }
}

/// Apply a transition to the state
pub fn apply(state: &mut GameState, transition: Transition) {
    let from = state.phase;
    match transition {
        Transition::Stay => return,
        Transition::Switch(to) => state.phase = to,
        Transition::NewRun => {
            state.restart_run();
            state.phase = GamePhase::Playing;
        }
        Transition::ToMenu => {
            state.reset_world();
            state.reset_cooldowns();
            state.phase = GamePhase::MainMenu;
        }
        Transition::Quit => {
            log::info!("Quit requested from {:?}", from);
            state.quit_requested = true;
            return;
        }
    }
    set_phase_event(state, from);
}

/// Move to GameOver from inside the simulation step
pub fn enter_game_over(state: &mut GameState) {
    let from = state.phase;
    if from == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    set_phase_event(state, from);
}

fn set_phase_event(state: &mut GameState, from: GamePhase) {
    let to = state.phase;
    log::info!("Phase {:?} -> {:?}", from, to);
    state.events.push(GameEvent::PhaseChanged { from, to });
}

//! Render payload
//!
//! The simulation doesn't draw anything itself. Each tick produces a `Frame`:
//! a flat, back-to-front list of shapes in world coordinates plus HUD values,
//! which a presentation layer turns into pixels.

mod camera;

pub use camera::{camera_center, clamp_view};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BASE_SIZE, VIEW_H, VIEW_W, WORLD_H, WORLD_W};
use crate::sim::{GamePhase, GameState, PlayerSlot};

/// Colors for game elements
pub mod colors {
    pub const PLAYER_ONE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const PLAYER_TWO: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const BASE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const ZOMBIE: [f32; 4] = [1.0, 1.0, 1.0, 1.0]; // Sprite tint
    pub const EXPLOSION: [f32; 4] = [1.0, 165.0 / 255.0, 0.0, 1.0];
    /// World floor
    pub const GROUND: [f32; 4] = [40.0 / 255.0, 40.0 / 255.0, 40.0 / 255.0, 1.0];
    /// Pause overlay
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 180.0 / 255.0];

    /// Clear colors per screen
    pub const CLEAR_MENU: [f32; 4] = [10.0 / 255.0, 10.0 / 255.0, 30.0 / 255.0, 1.0];
    pub const CLEAR_PLAYING: [f32; 4] = [20.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0, 1.0];
    pub const CLEAR_GAME_OVER: [f32; 4] = [30.0 / 255.0, 0.0, 0.0, 1.0];
}

/// Which screen the presentation layer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    MainMenu,
    Playing,
    /// World and HUD under a dark overlay with the pause menu
    Paused,
    GameOver,
}

impl From<GamePhase> for Screen {
    fn from(phase: GamePhase) -> Self {
        match phase {
            GamePhase::MainMenu => Screen::MainMenu,
            GamePhase::Playing => Screen::Playing,
            GamePhase::Paused => Screen::Paused,
            GamePhase::GameOver => Screen::GameOver,
        }
    }
}

/// What a draw command depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawKind {
    Ground,
    Base,
    Player,
    Zombie,
    Bullet,
    Barricade,
    Explosion,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned, centered on the command's position
    Rect { size: Vec2 },
}

/// One shape to draw, in world coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub kind: DrawKind,
    pub pos: Vec2,
    pub shape: Shape,
    pub color: [f32; 4],
    /// Sprite scale (1.0 for plain shapes)
    pub scale: f32,
    /// Text drawn above the shape
    pub label: Option<String>,
}

impl DrawCommand {
    fn circle(kind: DrawKind, pos: Vec2, radius: f32, color: [f32; 4]) -> Self {
        Self {
            kind,
            pos,
            shape: Shape::Circle { radius },
            color,
            scale: 1.0,
            label: None,
        }
    }

    fn rect(kind: DrawKind, pos: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            kind,
            pos,
            shape: Shape::Rect { size },
            color,
            scale: 1.0,
            label: None,
        }
    }
}

/// Cooldown readout for one ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityHud {
    pub ready: bool,
    /// Whole seconds left (0 when ready)
    pub remaining_secs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub wave: u32,
    pub zombies_remaining: i32,
    /// Indexed by `PlayerSlot::index`
    pub abilities: [AbilityHud; 2],
}

impl Hud {
    pub fn capture(state: &GameState) -> Self {
        let ability = |slot: PlayerSlot| {
            let a = state.ability(slot);
            AbilityHud {
                ready: a.ready(),
                remaining_secs: a.remaining_secs(),
            }
        };
        Self {
            wave: state.wave.wave,
            zombies_remaining: state.wave.remaining,
            abilities: [ability(PlayerSlot::One), ability(PlayerSlot::Two)],
        }
    }
}

/// Everything needed to present one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub screen: Screen,
    pub clear_color: [f32; 4],
    /// View center in world coordinates
    pub camera: Vec2,
    /// Back to front
    pub draws: Vec<DrawCommand>,
    /// Present while Playing or Paused
    pub hud: Option<Hud>,
    /// The driver should shut down
    pub quit: bool,
}

impl Frame {
    /// Build the frame for the current state
    pub fn capture(state: &GameState) -> Self {
        let screen = Screen::from(state.phase);
        let (clear_color, draws, hud) = match screen {
            Screen::MainMenu => (colors::CLEAR_MENU, Vec::new(), None),
            Screen::GameOver => (colors::CLEAR_GAME_OVER, Vec::new(), None),
            Screen::Playing => (
                colors::CLEAR_PLAYING,
                world_draws(state),
                Some(Hud::capture(state)),
            ),
            Screen::Paused => {
                let mut draws = world_draws(state);
                draws.push(DrawCommand::rect(
                    DrawKind::Overlay,
                    state.camera,
                    Vec2::new(VIEW_W, VIEW_H),
                    colors::OVERLAY,
                ));
                (colors::CLEAR_PLAYING, draws, Some(Hud::capture(state)))
            }
        };

        Self {
            screen,
            clear_color,
            camera: state.camera,
            draws,
            hud,
            quit: state.quit_requested,
        }
    }
}

/// World layer in draw order: ground, base, players, zombies, bullets,
/// barricades, explosion
fn world_draws(state: &GameState) -> Vec<DrawCommand> {
    let mut draws = Vec::with_capacity(
        3 + state.zombies.len() + state.bullets.len() + state.barricades.len() + 1,
    );

    let world = Vec2::new(WORLD_W, WORLD_H);
    draws.push(DrawCommand::rect(
        DrawKind::Ground,
        world / 2.0,
        world,
        colors::GROUND,
    ));
    draws.push(DrawCommand::rect(
        DrawKind::Base,
        state.base_pos,
        Vec2::splat(BASE_SIZE),
        colors::BASE,
    ));

    for player in state.players.iter().filter(|p| p.alive) {
        draws.push(DrawCommand::circle(
            DrawKind::Player,
            player.pos,
            player.radius,
            player.color,
        ));
    }

    for zombie in &state.zombies {
        draws.push(DrawCommand {
            scale: zombie.scale,
            ..DrawCommand::circle(DrawKind::Zombie, zombie.pos, zombie.radius, colors::ZOMBIE)
        });
    }

    for bullet in &state.bullets {
        draws.push(DrawCommand::circle(
            DrawKind::Bullet,
            bullet.pos,
            bullet.radius,
            bullet.color,
        ));
    }

    for barricade in &state.barricades {
        draws.push(DrawCommand {
            label: Some(barricade.label()),
            ..DrawCommand::rect(
                DrawKind::Barricade,
                barricade.pos,
                barricade.size,
                barricade.color(),
            )
        });
    }

    let explosion = &state.explosion;
    if explosion.active {
        let mut color = colors::EXPLOSION;
        color[3] = explosion.alpha / 255.0;
        draws.push(DrawCommand::circle(
            DrawKind::Explosion,
            explosion.pos,
            explosion.radius,
            color,
        ));
    }

    draws
}

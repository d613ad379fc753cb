//! End-to-end scenarios driven through `tick`

use glam::Vec2;

use zomboid_arena::consts::*;
use zomboid_arena::render::{DrawKind, Screen};
use zomboid_arena::sim::ai::{self, Target};
use zomboid_arena::sim::{
    Barricade, FrameClock, GameEvent, GamePhase, GameState, KillCause, Player, PlayerSlot,
    TickInput, Zombie, tick,
};

fn confirm() -> TickInput {
    TickInput {
        confirm: true,
        ..Default::default()
    }
}

fn pause() -> TickInput {
    TickInput {
        pause: true,
        ..Default::default()
    }
}

/// Playing, with the spawner switched off so only hand-placed zombies exist
fn quiet_run(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    tick(&mut state, &confirm(), 0.0);
    state.wave.spawned = state.wave.quota;
    state
}

#[test]
fn start_from_main_menu() {
    let mut state = GameState::new(2024);
    assert_eq!(state.phase, GamePhase::MainMenu);

    let frame = tick(&mut state, &confirm(), 1.0 / 60.0);
    assert_eq!(frame.screen, Screen::Playing);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.wave.wave, 1);
    assert_eq!(state.wave.quota, INITIAL_ZOMBIES);
    for slot in PlayerSlot::ALL {
        let player = state.player(slot);
        assert!(player.alive);
        assert_eq!(player.pos, Player::spawn_point(slot));
    }

    let hud = frame.hud.expect("hud while playing");
    assert_eq!(hud.wave, 1);
    assert_eq!(hud.zombies_remaining, INITIAL_ZOMBIES as i32);
}

#[test]
fn zombie_walks_straight_at_base() {
    let mut state = quiet_run(5);
    let start = Vec2::new(WORLD_W / 2.0, -SPAWN_MARGIN);
    state.spawn_zombie(start);
    let initial = start.distance(state.base_pos);

    // 5 seconds in uneven frames
    let dts = [0.016f32, 0.020, 0.014, 0.050];
    let mut elapsed = 0.0f32;
    while elapsed < 5.0 - 1e-4 {
        for &dt in &dts {
            let dt = dt.min(5.0 - elapsed);
            tick(&mut state, &TickInput::default(), dt);
            elapsed += dt;
        }
    }

    let zombie = &state.zombies[0];
    let expected = (initial - ZOMBIE_SPEED * elapsed).max(0.0);
    assert!((zombie.pos.distance(state.base_pos) - expected).abs() < 0.05);
    // Stayed on the line through the base
    assert!((zombie.pos.x - WORLD_W / 2.0).abs() < 1e-3);
}

#[test]
fn zombie_never_passes_base() {
    let mut zombies = vec![Zombie::new(1, Vec2::new(800.0, 500.0))];
    let base = Vec2::new(800.0, 600.0);
    for _ in 0..200 {
        ai::run(&mut zombies, base, &[], ZOMBIE_SPEED, 0.05);
    }
    assert_eq!(zombies[0].pos, base);
}

#[test]
fn barricade_survives_exactly_its_health_in_contacts() {
    let mut state = quiet_run(9);
    state.abilities[1].elapsed = PLAYER2_ABILITY_COOLDOWN;

    let mut input = TickInput::default();
    input.players[1].ability = true;
    tick(&mut state, &input, 0.0);
    assert_eq!(state.barricades.len(), 1);
    let barricade = state.barricades[0].clone();
    assert_eq!(barricade.health, BARRICADE_HEALTH);

    // Sitting on the barricade; dt = 0 keeps it there without pushback
    state.spawn_zombie(barricade.pos);

    for n in 1..BARRICADE_HEALTH {
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.barricades.len(), 1, "gone early at contact {n}");
        assert_eq!(state.barricades[0].health, BARRICADE_HEALTH - n);
    }

    tick(&mut state, &TickInput::default(), 0.0);
    assert!(state.barricades.is_empty());
    assert!(
        state
            .drain_events()
            .contains(&GameEvent::BarricadeDestroyed { id: barricade.id })
    );
}

#[test]
fn explosion_respects_cooldown_boundary() {
    let mut state = quiet_run(11);
    let origin = state.players[0].pos;
    state.spawn_zombie(origin + Vec2::new(60.0, 0.0));

    let mut input = TickInput::default();
    input.players[0].ability = true;

    state.abilities[0].elapsed = 9.99;
    tick(&mut state, &input, 0.0);
    assert!(!state.explosion.active);
    assert_eq!(state.zombies.len(), 1);
    assert!((state.abilities[0].elapsed - 9.99).abs() < 1e-6);

    state.abilities[0].elapsed = 10.0;
    let frame = tick(&mut state, &input, 0.0);
    assert!(state.explosion.active);
    assert!(state.zombies.is_empty());
    assert_eq!(state.abilities[0].elapsed, 0.0);
    assert!(frame.draws.iter().any(|d| d.kind == DrawKind::Explosion));
}

#[test]
fn explosion_spares_zombies_arriving_after_the_blast() {
    let mut state = quiet_run(12);
    state.abilities[0].elapsed = PLAYER1_ABILITY_COOLDOWN;
    let origin = state.players[0].pos;

    let mut input = TickInput::default();
    input.players[0].ability = true;
    tick(&mut state, &input, 0.0);
    assert!(state.explosion.active);
    assert!(state.explosion.radius < EXPLOSION_RADIUS);
    let remaining = state.wave.remaining;

    // Well inside the blast while the ring is still growing
    let late = state.spawn_zombie(origin + Vec2::new(50.0, -20.0));
    for _ in 0..15 {
        tick(&mut state, &TickInput::default(), 0.01);
        assert!(state.explosion.active);
    }

    let zombie = state.zombies.iter().find(|z| z.id == late).expect("late zombie survives");
    // The ring has swept past it without doing damage
    assert!(state.explosion.radius > zombie.pos.distance(origin));
    assert_eq!(state.wave.remaining, remaining);
    assert!(!state.drain_events().iter().any(|e| matches!(
        e,
        GameEvent::ZombieRemoved { cause: KillCause::Explosion, .. }
    )));
}

#[test]
fn blocking_barricade_becomes_target() {
    let base = Vec2::new(800.0, 600.0);
    let zombie = Zombie::new(1, Vec2::new(200.0, 600.0));
    // cos ≈ 0.98 and nearest of the qualifying ones
    let near_pos = Vec2::new(400.0, 640.0);
    let near = Barricade::new(10, near_pos);
    let far = Barricade::new(11, Vec2::new(600.0, 600.0));
    // Closer still but well off the line (cos = 0)
    let aside = Barricade::new(12, Vec2::new(200.0, 450.0));

    let target = ai::select_target(&zombie, base, &[far, aside, near]);
    assert_eq!(target, Target::Blocking(near_pos));
}

#[test]
fn pause_adds_no_simulated_time() {
    let mut state = quiet_run(13);
    let mut clock = FrameClock::new();
    let start = Vec2::new(WORLD_W / 2.0, -SPAWN_MARGIN);
    state.spawn_zombie(start);

    let mut now = 0.0f64;
    let mut step = |state: &mut GameState, input: &TickInput, now: f64| {
        let dt = clock.delta(now, state.phase.simulates());
        tick(state, input, dt);
    };

    step(&mut state, &TickInput::default(), now);
    now += 1.0 / 60.0;
    step(&mut state, &pause(), now);
    let frozen = state.zombies[0].pos;
    let ticks = state.time_ticks;

    // Ten wall-clock seconds on the pause screen
    for _ in 0..600 {
        now += 1.0 / 60.0;
        step(&mut state, &TickInput::default(), now);
    }
    assert_eq!(state.zombies[0].pos, frozen);
    assert_eq!(state.time_ticks, ticks);

    now += 1.0 / 60.0;
    step(&mut state, &pause(), now);
    assert_eq!(state.phase, GamePhase::Playing);
    // The unpausing frame only sees one frame of time
    let moved = state.zombies[0].pos.distance(frozen);
    assert!(moved <= ZOMBIE_SPEED / 60.0 + 1e-3);
}

#[test]
fn overrun_then_back_to_menu() {
    let mut state = quiet_run(17);
    let base = state.base_pos;
    state.spawn_zombie(base + Vec2::new(0.0, -20.0));
    let frame = tick(&mut state, &TickInput::default(), 0.1);
    assert_eq!(frame.screen, Screen::GameOver);
    assert!(state.zombies.is_empty());

    let menu = TickInput {
        menu: true,
        ..Default::default()
    };
    let frame = tick(&mut state, &menu, 0.0);
    assert_eq!(frame.screen, Screen::MainMenu);
    assert_eq!(state.wave.wave, 0);

    let quit = TickInput {
        quit: true,
        ..Default::default()
    };
    // Quit isn't a main menu key
    assert!(!tick(&mut state, &quit, 0.0).quit);
}

#[test]
fn quit_from_pause() {
    let mut state = quiet_run(19);
    tick(&mut state, &pause(), 0.0);
    let quit = TickInput {
        quit: true,
        ..Default::default()
    };
    let frame = tick(&mut state, &quit, 0.0);
    assert!(frame.quit);
    assert_eq!(state.phase, GamePhase::Paused);
}

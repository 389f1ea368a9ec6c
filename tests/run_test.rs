//! Integration test: whole runs driven through a scripted console
//!
//! Covers stage clear -> hub -> next stage, death in battle, and
//! reproducibility of seeded runs.

use portalcrawl::game::{GameState, RunSummary};
use portalcrawl::ui::ScriptedConsole;
use portalcrawl::world::Coord;
use portalcrawl::{Game, GameConfig, GameError};
use rand::rngs::mock::StepRng;

/// Every probability roll fails: empty dungeons, no wandering monsters
fn quiet_rng() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// Every probability roll succeeds and every pick is the first option
fn eager_rng() -> StepRng {
    StepRng::new(0, 0)
}

#[test]
fn test_clear_stage_and_continue() {
    let mut game = Game::with_rng(GameConfig::default(), quiet_rng()).unwrap();
    let mut console = ScriptedConsole::new([
        "move north",
        "move north",
        "move north",
        "move north",
        "move east",
        "move east",
        "move east",
        "move east",
        "continue",
    ]);

    let result = game.run(&mut console);
    assert!(matches!(result, Err(GameError::InputClosed)));
    assert_eq!(game.stage(), 2);
    assert_eq!(game.current_coords(), Coord::new(0, 0));
    assert_eq!(game.state(), &GameState::Exploration);

    let transcript = console.transcript();
    assert!(transcript.contains("glowing portal"));
    assert!(transcript.contains("You found the exit to the next stage!"));
    assert!(transcript.contains("WELCOME TO THE HUB"));
    assert!(transcript.contains("--- Entering Stage 2! ---"));
}

#[test]
fn test_death_by_wandering_slime() {
    let mut game = Game::with_rng(GameConfig::default(), eager_rng()).unwrap();
    game.player_mut().defense = 0;
    game.player_mut().health.current = 10;

    // A slime appears immediately and hits for 5 each round
    let mut console = ScriptedConsole::new(["attack", "attack", "attack"]);
    let summary = game.run(&mut console).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            player_name: "Hero".to_string(),
            stage_reached: 1,
            level: 1,
            gold: 0,
            cause: "slain by a Slime".to_string(),
        }
    );
    assert_eq!(console.remaining(), 1);
    assert_eq!(game.player().health.current, 0);

    let transcript = console.transcript();
    assert!(transcript.contains("A wild Slime appears!"));
    assert!(transcript.contains("You have been defeated!"));
    assert!(transcript.contains("( G | A | M | E )"));
}

#[test]
fn test_status_help_inventory_narration() {
    let mut config = GameConfig::default();
    config.player_name = "Ayla".to_string();
    let mut game = Game::with_rng(config, quiet_rng()).unwrap();
    let mut console = ScriptedConsole::new(["  STATUS  ", "help", "inventory"]);

    assert!(game.run(&mut console).is_err());
    let transcript = console.transcript();
    assert!(transcript.contains("--- Ayla Status ---"));
    assert!(transcript.contains("move portal"));
    assert!(transcript.contains("Inventory: Empty"));
    assert!(transcript.contains("There is a door to the North. There is a door to the East."));
}

#[test]
fn test_seeded_runs_replay_identically() {
    let script = ["move north", "move east", "attack", "flee", "status", "move east"];
    let play = || {
        let mut config = GameConfig::default();
        config.seed = Some(1234);
        let mut game = Game::new(config).unwrap();
        let mut console = ScriptedConsole::new(script);
        let _ = game.run(&mut console);
        (console.transcript(), game.dungeon().clone(), game.player().clone())
    };

    assert_eq!(play(), play());
}

//! Game state machine
//!
//! Owns everything a run mutates: the player, the current dungeon and the
//! player's place in it, the stage counter, and the active state.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::commands::{parse_command, Command};
use crate::data::{ConfigError, GameConfig};
use crate::entities::{Monster, Player};
use crate::error::GameError;
use crate::ui::text;
use crate::ui::Console;
use crate::world::{generate_dungeon, spawn_wandering, Coord, Direction, Dungeon, Room};

/// The engine for one run
pub struct Game<R: Rng = StdRng> {
    pub(super) state: GameState,
    pub(super) player: Player,
    pub(super) dungeon: Dungeon,
    /// Always a room of `dungeon`
    pub(super) current: Coord,
    pub(super) stage: u32,
    pub(super) config: GameConfig,
    pub(super) rng: R,
}

/// All possible game states
#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    /// Walking the dungeon, one command per turn
    Exploration,
    /// Fighting the carried monster, one action per turn
    Battle(Encounter),
    /// Between stages, spending gold and XP
    Hub,
    /// Terminal
    GameOver { stage_reached: u32, cause: String },
}

impl GameState {
    pub fn name(&self) -> &'static str {
        match self {
            GameState::Exploration => "Exploration",
            GameState::Battle(_) => "Battle",
            GameState::Hub => "Hub",
            GameState::GameOver { .. } => "GameOver",
        }
    }
}

/// The monster being fought and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    pub monster: Monster,
    pub origin: EncounterOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOrigin {
    /// Taken from this room's queue; goes back there unless slain
    Resident(Coord),
    /// Rolled on the spot; belongs to no room
    Wandering,
}

/// Final tally handed back when a run ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub player_name: String,
    pub stage_reached: u32,
    pub level: u32,
    pub gold: u32,
    pub cause: String,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} reached stage {} at level {} with {} gold ({}).",
            self.player_name, self.stage_reached, self.level, self.gold, self.cause
        )
    }
}

impl Game<StdRng> {
    /// Start a run, seeded from the config when it carries a seed
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Game<R> {
    /// Start a run on stage 1 with an injected random source.
    /// Fails if the config doesn't pass validation.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let stage = 1;
        let dungeon = generate_dungeon(&mut rng, config.dungeon_size, stage, false);
        let current = dungeon.start_coords();
        let player = Player::new(config.player_name.clone());
        log::info!("Starting run for {} (seed: {:?})", player.name, config.seed);

        Ok(Self {
            state: GameState::Exploration,
            player,
            dungeon,
            current,
            stage,
            config,
            rng,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn dungeon_mut(&mut self) -> &mut Dungeon {
        &mut self.dungeon
    }

    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_coords(&self) -> Coord {
        self.current
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.dungeon.room(self.current)
    }

    /// The monster being fought, only while in Battle
    pub fn current_enemy(&self) -> Option<&Monster> {
        match &self.state {
            GameState::Battle(encounter) => Some(&encounter.monster),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::GameOver { .. })
    }

    /// Put the player in another room of the current dungeon.
    /// Returns false if `coord` is outside it.
    pub fn place_player(&mut self, coord: Coord) -> bool {
        if self.dungeon.room(coord).is_some() {
            self.current = coord;
            true
        } else {
            false
        }
    }

    pub fn set_state(&mut self, state: GameState) {
        log::debug!("State transition: {} -> {}", self.state.name(), state.name());
        self.state = state;
    }

    /// Play the whole run until GameOver
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<RunSummary, GameError> {
        console.print(text::WELCOME);
        while !self.is_over() {
            self.tick(console)?;
        }

        console.print(&format!("\n{}", text::RULE));
        console.print(text::GAME_OVER_BANNER);
        console.print(text::RULE);
        Ok(self.summary())
    }

    /// One pass of the outer loop: dispatch on state, then check for death
    pub fn tick<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
        match self.state {
            GameState::Exploration => self.exploration_turn(console)?,
            GameState::Battle(_) => self.battle_turn(console)?,
            GameState::Hub => self.hub_visit(console)?,
            GameState::GameOver { .. } => return Ok(()),
        }

        if self.player.is_dead() && !self.is_over() {
            self.game_over("succumbed to wounds");
        }
        Ok(())
    }

    pub fn summary(&self) -> RunSummary {
        let (stage_reached, cause) = match &self.state {
            GameState::GameOver { stage_reached, cause } => (*stage_reached, cause.clone()),
            _ => (self.stage, "still adventuring".to_string()),
        };
        RunSummary {
            player_name: self.player.name.clone(),
            stage_reached,
            level: self.player.level,
            gold: self.player.gold,
            cause,
        }
    }

    pub(super) fn game_over(&mut self, cause: impl Into<String>) {
        let cause = cause.into();
        log::info!("Game over on stage {}: {}", self.stage, cause);
        self.set_state(GameState::GameOver {
            stage_reached: self.stage,
            cause,
        });
    }

    fn exploration_turn<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
        console.print(&text::header(&format!("EXPLORATION (Stage {})", self.stage)));
        if let Some(room) = self.dungeon.room_mut(self.current) {
            room.visited = true;
            console.print(&room.describe());
        }

        if self.dungeon.portal_open_at(self.current) {
            console.print("\nYou found the exit to the next stage!");
            self.complete_stage(console);
            return Ok(());
        }

        if self.roll_encounter() {
            let monster = spawn_wandering(&mut self.rng, self.stage);
            console.print(&format!("A wild {} appears!", monster.name()));
            self.set_state(GameState::Battle(Encounter {
                monster,
                origin: EncounterOrigin::Wandering,
            }));
            return Ok(());
        }

        let input = prompt(console, text::EXPLORE_PROMPT)?;
        match parse_command(&input) {
            Ok(command) => self.execute(command, console),
            Err(e) => console.print(&e.to_string()),
        }
        Ok(())
    }

    /// Wandering monsters only turn up in rooms with no residents
    fn roll_encounter(&mut self) -> bool {
        let room_empty = self.current_room().map_or(true, |room| !room.has_enemies());
        let hit = room_empty && self.rng.gen_bool(self.config.encounter_chance);
        if hit {
            log::debug!("Wandering encounter at {}", self.current);
        }
        hit
    }

    pub(super) fn execute<C: Console + ?Sized>(&mut self, command: Command, console: &mut C) {
        match command {
            Command::Move(dir) => self.move_player(dir, console),
            Command::Portal => {
                if self.dungeon.portal_open_at(self.current) {
                    console.print("You step into the shimmering portal...");
                    self.complete_stage(console);
                } else {
                    console.print(
                        "There is no active portal here, or the current stage is not yet cleared.",
                    );
                }
            }
            Command::Status => console.print(&self.player.status()),
            Command::Inventory => {
                console.print(&format!("Inventory: {}", self.player.inventory_line()))
            }
            Command::Take(name) => {
                let taken = self
                    .dungeon
                    .room_mut(self.current)
                    .and_then(|room| room.take_item(&name));
                match taken {
                    Some(item) => {
                        console.print(&format!("You took the {}.", item));
                        self.player.add_item(item);
                    }
                    None => console.print(&format!("Could not find '{}' in this room.", name)),
                }
            }
            Command::Attack => {
                let target = self
                    .dungeon
                    .room_mut(self.current)
                    .and_then(|room| room.remove_enemy(0));
                match target {
                    Some(monster) => {
                        console.print(&format!("You prepare to fight the {}!", monster.name()));
                        let origin = EncounterOrigin::Resident(self.current);
                        self.set_state(GameState::Battle(Encounter { monster, origin }));
                    }
                    None => console.print("There are no enemies to attack in this room."),
                }
            }
            Command::Help => console.print(text::HELP),
        }
    }

    fn move_player<C: Console + ?Sized>(&mut self, dir: Direction, console: &mut C) {
        match self.current_room().and_then(|room| room.exit(dir)) {
            Some(next) => {
                self.current = next;
                console.print(&format!("You moved {}.", dir.name()));
            }
            None => console.print("You can't go that way."),
        }
    }

    fn complete_stage<C: Console + ?Sized>(&mut self, console: &mut C) {
        console.print("\nYou have cleared the current stage!");
        log::info!("Stage {} cleared", self.stage);
        self.set_state(GameState::Hub);
    }
}

/// Read one line, normalised to trimmed lower case
pub(super) fn prompt<C: Console + ?Sized>(console: &mut C, text: &str) -> Result<String, GameError> {
    Ok(console.read_line(text)?.trim().to_lowercase())
}

//! Procedural dungeon generation
//!
//! Layout is always the full grid; only room contents are rolled.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Coord, Direction, Dungeon, Room};
use crate::entities::{Monster, MonsterKind};
use crate::progression::{monster_spawn_chance, StageScaling};

/// Chance for a non-start room to hold an item on a normal stage
pub const ITEM_CHANCE: f64 = 0.2;

/// Items that can be found lying in rooms
pub const ITEM_CATALOG: [&str; 3] = ["Health Potion", "Rusty Sword", "Small Shield"];

const PORTAL_TEXT: &str = " A glowing portal shimmers in the corner, leading to the next stage.";

/// Build a fully wired and populated dungeon for a stage
pub fn generate_dungeon<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    stage_level: u32,
    is_boss_stage: bool,
) -> Dungeon {
    let mut dungeon = Dungeon::new(size, stage_level, is_boss_stage);

    carve_rooms(&mut dungeon);
    connect_rooms(&mut dungeon);

    if is_boss_stage {
        place_boss(&mut dungeon);
    } else {
        populate_rooms(rng, &mut dungeon);
    }

    let exit = dungeon.exit_coords();
    if !is_boss_stage && exit != dungeon.start_coords() {
        if let Some(room) = dungeon.room_mut(exit) {
            room.description.push_str(PORTAL_TEXT);
        }
    }

    log::info!(
        "Generated stage {} dungeon ({}x{}, boss: {}, {} monsters)",
        stage_level,
        size,
        size,
        is_boss_stage,
        dungeon.remaining_enemies()
    );
    dungeon
}

/// Roll a wandering monster for `stage`. It belongs to no room.
pub fn spawn_wandering<R: Rng + ?Sized>(rng: &mut R, stage: u32) -> Monster {
    spawn_common(rng, &StageScaling::normal(stage))
}

fn spawn_common<R: Rng + ?Sized>(rng: &mut R, scaling: &StageScaling) -> Monster {
    let kind = *MonsterKind::COMMON
        .choose(rng)
        .unwrap_or(&MonsterKind::Slime);
    Monster::spawn_scaled(kind, scaling)
}

fn carve_rooms(dungeon: &mut Dungeon) {
    for x in 0..dungeon.size {
        for y in 0..dungeon.size {
            let description = format!("You are in a dimly lit room at ({},{}).", x, y);
            dungeon.rooms.insert(Coord::new(x, y), Room::new(description));
        }
    }
}

/// Link every room to its grid neighbours, both ways
fn connect_rooms(dungeon: &mut Dungeon) {
    let size = dungeon.size;
    for x in 0..size {
        for y in 0..size {
            let here = Coord::new(x, y);
            for dir in [Direction::North, Direction::East] {
                let Some(there) = here.step(dir, size) else {
                    continue;
                };
                if let Some(room) = dungeon.room_mut(here) {
                    room.add_exit(dir, there);
                }
                if let Some(room) = dungeon.room_mut(there) {
                    room.add_exit(dir.opposite(), here);
                }
            }
        }
    }
}

/// Boss stage: a single scaled Dragon in the exit room, nothing else
fn place_boss(dungeon: &mut Dungeon) {
    let scaling = StageScaling::boss(dungeon.stage_level);
    let boss = Monster::spawn_scaled(MonsterKind::Dragon, &scaling);
    let exit = dungeon.exit_coords();

    if let Some(room) = dungeon.room_mut(exit) {
        room.description.push_str(&format!(
            " A fearsome {} guards the portal to the next stage!",
            boss.name()
        ));
        log::debug!("Placed {} boss at {} (hp {})", boss.name(), exit, boss.health.max);
        room.add_enemy(boss);
    }
}

/// Normal stage: independent monster and item rolls for every room but the start
fn populate_rooms<R: Rng + ?Sized>(rng: &mut R, dungeon: &mut Dungeon) {
    let scaling = StageScaling::normal(dungeon.stage_level);
    let monster_chance = monster_spawn_chance(dungeon.stage_level);
    let start = dungeon.start_coords();

    for (coord, room) in dungeon.rooms.iter_mut() {
        if *coord == start {
            continue;
        }
        if rng.gen_bool(monster_chance) {
            room.add_enemy(spawn_common(rng, &scaling));
        }
        if rng.gen_bool(ITEM_CHANCE) {
            if let Some(item) = ITEM_CATALOG.choose(rng) {
                room.add_item(*item);
            }
        }
    }
}

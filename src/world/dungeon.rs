//! The dungeon: an N x N arena of rooms keyed by coordinate

use std::collections::BTreeMap;

use super::{Coord, Room};

/// One stage's dungeon. Owns every room; topology is fixed after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dungeon {
    pub size: usize,
    pub stage_level: u32,
    pub is_boss_stage: bool,
    pub(crate) rooms: BTreeMap<Coord, Room>,
}

impl Dungeon {
    /// An unpopulated dungeon with no rooms yet
    pub fn new(size: usize, stage_level: u32, is_boss_stage: bool) -> Self {
        Self {
            size,
            stage_level,
            is_boss_stage,
            rooms: BTreeMap::new(),
        }
    }

    pub fn start_coords(&self) -> Coord {
        Coord::new(0, 0)
    }

    pub fn exit_coords(&self) -> Coord {
        let last = self.size.saturating_sub(1);
        Coord::new(last, last)
    }

    pub fn room(&self, coord: Coord) -> Option<&Room> {
        self.rooms.get(&coord)
    }

    pub fn room_mut(&mut self, coord: Coord) -> Option<&mut Room> {
        self.rooms.get_mut(&coord)
    }

    pub fn start_room(&self) -> Option<&Room> {
        self.room(self.start_coords())
    }

    pub fn exit_room(&self) -> Option<&Room> {
        self.room(self.exit_coords())
    }

    /// Rooms in coordinate order
    pub fn rooms(&self) -> impl Iterator<Item = (&Coord, &Room)> {
        self.rooms.iter()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Monsters still resident anywhere in the dungeon
    pub fn remaining_enemies(&self) -> usize {
        self.rooms.values().map(|room| room.enemies.len()).sum()
    }

    /// Stage-clear predicate: no room holds a monster
    pub fn is_cleared(&self) -> bool {
        self.rooms.values().all(|room| !room.has_enemies())
    }

    /// Whether the portal out of this stage is open at `coord`
    pub fn portal_open_at(&self, coord: Coord) -> bool {
        coord == self.exit_coords() && self.is_cleared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Monster, MonsterKind};

    fn two_by_two() -> Dungeon {
        let mut dungeon = Dungeon::new(2, 1, false);
        for x in 0..2 {
            for y in 0..2 {
                dungeon.rooms.insert(Coord::new(x, y), Room::new("room"));
            }
        }
        dungeon
    }

    #[test]
    fn test_fixed_coords() {
        let dungeon = Dungeon::new(5, 1, false);
        assert_eq!(dungeon.start_coords(), Coord::new(0, 0));
        assert_eq!(dungeon.exit_coords(), Coord::new(4, 4));
    }

    #[test]
    fn test_portal_predicate() {
        let mut dungeon = two_by_two();
        let exit = dungeon.exit_coords();
        assert!(dungeon.portal_open_at(exit));
        assert!(!dungeon.portal_open_at(Coord::new(0, 1)));

        dungeon
            .room_mut(Coord::new(1, 0))
            .unwrap()
            .add_enemy(Monster::new(MonsterKind::Slime));
        assert_eq!(dungeon.remaining_enemies(), 1);
        assert!(!dungeon.is_cleared());
        assert!(!dungeon.portal_open_at(exit));
    }
}

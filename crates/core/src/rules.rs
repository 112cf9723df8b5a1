//! Fixed dungeon rules. Variants are not configurable.

/// Starting and maximum hit points.
pub const MAX_HP: u8 = 20;
/// Positional slots in a room.
pub const ROOM_SLOTS: usize = 4;
/// A room is refilled only once it holds this many cards or fewer.
pub const REFILL_THRESHOLD: usize = 1;
/// 9 hearts + 9 diamonds + 13 clubs + 13 spades.
pub const DECK_SIZE: usize = 44;
pub const MIN_VALUE: u8 = 2;
pub const MAX_VALUE: u8 = 14;

//! Room variants
//!
//! A room carries no state beyond which variant it is. New rooms are
//! produced either by the factory or by cloning an existing prototype.

use std::fmt;

use crate::factory::RoomKind;

/// Capability shared by every room: describe itself and produce an
/// independent copy of itself.
pub trait Prototype {
    /// Text fragment used when the castle lists its rooms
    fn describe(&self) -> &'static str;

    /// Produce a new, independently owned room of the same variant
    fn clone_self(&self) -> Self
    where
        Self: Sized;
}

/// A single chamber of the castle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Room {
    /// Throne room (camera tronului)
    ThroneRoom,
    /// Dungeon (temnita)
    Dungeon,
}

impl Room {
    /// Label fragment for a throne room
    pub const THRONE_ROOM_LABEL: &'static str = "camera tronului, ";
    /// Label fragment for a dungeon
    pub const DUNGEON_LABEL: &'static str = "temnita, ";

    /// The kind this room would be built from
    pub fn kind(&self) -> RoomKind {
        match self {
            Room::ThroneRoom => RoomKind::ThroneRoom,
            Room::Dungeon => RoomKind::Dungeon,
        }
    }
}

impl Prototype for Room {
    fn describe(&self) -> &'static str {
        match self {
            Room::ThroneRoom => Self::THRONE_ROOM_LABEL,
            Room::Dungeon => Self::DUNGEON_LABEL,
        }
    }

    fn clone_self(&self) -> Self {
        match self {
            Room::ThroneRoom => Room::ThroneRoom,
            Room::Dungeon => Room::Dungeon,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

//! Room kinds and the room factory

use strum::{Display, EnumIter, FromRepr};

use crate::room::Room;

/// Which room the factory should build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum RoomKind {
    /// Throne room
    ThroneRoom = 0,
    /// Dungeon
    Dungeon = 1,
}

/// Builds fresh rooms from a kind
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomFactory;

impl RoomFactory {
    pub fn new() -> Self {
        Self
    }

    /// Build a new room of the given kind
    pub fn create(&self, kind: RoomKind) -> Room {
        tracing::debug!(%kind, "building room");
        match kind {
            RoomKind::ThroneRoom => Room::ThroneRoom,
            RoomKind::Dungeon => Room::Dungeon,
        }
    }

    /// Build a room from a raw discriminant.
    ///
    /// Returns `None` when `raw` names no known kind.
    pub fn create_raw(&self, raw: u8) -> Option<Room> {
        match RoomKind::from_repr(raw) {
            Some(kind) => Some(self.create(kind)),
            None => {
                tracing::debug!(raw, "no such room kind");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Prototype;
    use strum::IntoEnumIterator;

    #[test]
    fn test_room_kind_values() {
        assert_eq!(RoomKind::ThroneRoom as u8, 0);
        assert_eq!(RoomKind::Dungeon as u8, 1);
    }

    #[test]
    fn test_create_every_kind() {
        let factory = RoomFactory::new();
        for kind in RoomKind::iter() {
            let room = factory.create(kind);
            assert_eq!(room.kind(), kind);
        }
    }

    #[test]
    fn test_create_labels() {
        let factory = RoomFactory::new();
        assert_eq!(
            factory.create(RoomKind::ThroneRoom).describe(),
            "camera tronului, "
        );
        assert_eq!(factory.create(RoomKind::Dungeon).describe(), "temnita, ");
    }

    #[test]
    fn test_create_raw() {
        let factory = RoomFactory::new();
        assert_eq!(factory.create_raw(0), Some(Room::ThroneRoom));
        assert_eq!(factory.create_raw(1), Some(Room::Dungeon));
        assert_eq!(factory.create_raw(2), None);
        assert_eq!(factory.create_raw(u8::MAX), None);
    }

    #[test]
    fn test_created_rooms_are_independent() {
        let factory = RoomFactory::new();
        let a = factory.create(RoomKind::Dungeon);
        let b = factory.create(RoomKind::Dungeon);
        drop(a);
        assert_eq!(b.describe(), "temnita, ");
    }
}

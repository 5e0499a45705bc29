//! The kingdom: process-wide owner of the castle
//!
//! There is one kingdom per process, created the first time it is asked
//! for and kept until exit. Code that wants its own castle (tests, or a
//! caller that prefers passing state explicitly) can build a detached
//! kingdom instead.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::castle::Castle;
use crate::room::Room;

/// Owner of the one castle
///
/// Only [`Kingdom::instance`] and [`Kingdom::detached`] build one:
///
/// ```compile_fail
/// let kingdom = castle_core::Kingdom::default();
/// ```
#[derive(Debug)]
pub struct Kingdom {
    castle: Castle,
}

static KINGDOM: OnceLock<Mutex<Kingdom>> = OnceLock::new();

impl Kingdom {
    fn new() -> Self {
        Self {
            castle: Castle::new(),
        }
    }

    /// The process-wide kingdom, built on first use.
    pub fn instance() -> &'static Mutex<Kingdom> {
        KINGDOM.get_or_init(|| {
            tracing::debug!("kingdom created");
            Mutex::new(Kingdom::new())
        })
    }

    /// Lock the process-wide kingdom.
    ///
    /// A poisoned lock is taken over as is: the castle only ever grows,
    /// so a panic mid-call cannot leave it half-updated.
    pub fn lock() -> MutexGuard<'static, Kingdom> {
        Self::instance()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// A kingdom not tied to the global instance
    pub fn detached() -> Self {
        Self::new()
    }

    pub fn add_room(&mut self, room: Room) {
        self.castle.add_room(room);
    }

    pub fn describe_castle<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.castle.describe(out)
    }

    pub fn castle(&self) -> &Castle {
        &self.castle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_instance_is_unique() {
        let a = Kingdom::instance();
        let b = Kingdom::instance();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    #[serial]
    fn test_state_shared_between_handles() {
        let before = Kingdom::lock().castle().len();

        Kingdom::lock().add_room(Room::Dungeon);

        let kingdom = Kingdom::lock();
        assert_eq!(kingdom.castle().len(), before + 1);
        assert_eq!(kingdom.castle().rooms().last(), Some(&Room::Dungeon));
    }

    #[test]
    fn test_detached_starts_empty() {
        let mut kingdom = Kingdom::detached();
        assert!(kingdom.castle().is_empty());

        kingdom.add_room(Room::ThroneRoom);
        let mut out = Vec::new();
        kingdom.describe_castle(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Castelul are: camera tronului, \n"
        );
    }
}

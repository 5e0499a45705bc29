//! The castle: an ordered list of rooms

use std::io::{self, Write};

use crate::room::{Prototype, Room};

/// Rooms in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Castle {
    rooms: Vec<Room>,
}

impl Castle {
    /// Heading printed before the room list
    pub const HEADING: &'static str = "Castelul are: ";

    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a room and append it
    pub fn add_room(&mut self, room: Room) {
        tracing::debug!(room = ?room, count = self.rooms.len() + 1, "room added to castle");
        self.rooms.push(room);
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Heading followed by every room fragment, without a newline
    pub fn description(&self) -> String {
        self.rooms
            .iter()
            .fold(String::from(Self::HEADING), |mut text, room| {
                text.push_str(room.describe());
                text
            })
    }

    /// Write the description as one line
    pub fn describe<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.description())
    }
}

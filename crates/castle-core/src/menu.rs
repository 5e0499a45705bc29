//! Interactive menu state machine
//!
//! Each turn prints the option list, takes the next whitespace-separated
//! token of input and applies it to the kingdom. Several tokens on one
//! line are consumed one per turn and blank lines are skipped. The loop
//! ends on the exit option or at end of input.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use strum::FromRepr;

use crate::error::{ChoiceError, MenuError};
use crate::factory::{RoomFactory, RoomKind};
use crate::kingdom::Kingdom;

/// Option list shown before every choice
pub const PROMPT: &str = "1. Adauga o camera a tronului\n\
                          2. Adauga o temnita\n\
                          3. Descrie castel\n\
                          4. Incheiere operatiune\n\
                          Alege o optiune: ";

pub const THRONE_ROOM_ADDED: &str = "Camera tronului adaugata.";
pub const DUNGEON_ADDED: &str = "Temnita adaugata.";
pub const EXIT_MESSAGE: &str = "Iesire program.";
pub const INVALID_OPTION: &str = "Optiunea nu se afla in meniu.";

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum MenuOption {
    AddThroneRoom = 1,
    AddDungeon = 2,
    DescribeCastle = 3,
    Exit = 4,
}

impl MenuOption {
    /// Parse one token of user input
    pub fn parse(token: &str) -> Result<Self, ChoiceError> {
        let trimmed = token.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| ChoiceError::NotANumber(trimmed.to_string()))?;
        Self::try_from(number)
    }
}

impl TryFrom<i64> for MenuOption {
    type Error = ChoiceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(MenuOption::from_repr)
            .ok_or(ChoiceError::OutOfRange(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    Terminated,
}

/// Menu loop bound to one kingdom
pub struct Menu<'k> {
    kingdom: &'k mut Kingdom,
    factory: RoomFactory,
    state: MenuState,
}

impl<'k> Menu<'k> {
    pub fn new(kingdom: &'k mut Kingdom) -> Self {
        Self {
            kingdom,
            factory: RoomFactory::new(),
            state: MenuState::AwaitingChoice,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn kingdom(&self) -> &Kingdom {
        self.kingdom
    }

    /// Print the option list and flush, since the last line has no newline
    pub fn write_prompt<W: Write>(&self, out: &mut W) -> Result<(), MenuError> {
        out.write_all(PROMPT.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Apply one token of input
    pub fn step<W: Write>(&mut self, token: &str, out: &mut W) -> Result<MenuState, MenuError> {
        if self.state == MenuState::Terminated {
            return Ok(self.state);
        }

        let option = match MenuOption::parse(token) {
            Ok(option) => option,
            Err(err) => {
                tracing::debug!(%err, "choice rejected");
                writeln!(out, "{INVALID_OPTION}")?;
                return Ok(self.state);
            }
        };
        tracing::trace!(?option, "menu choice");

        match option {
            MenuOption::AddThroneRoom => {
                self.kingdom.add_room(self.factory.create(RoomKind::ThroneRoom));
                writeln!(out, "{THRONE_ROOM_ADDED}")?;
            }
            MenuOption::AddDungeon => {
                self.kingdom.add_room(self.factory.create(RoomKind::Dungeon));
                writeln!(out, "{DUNGEON_ADDED}")?;
            }
            MenuOption::DescribeCastle => self.kingdom.describe_castle(out)?,
            MenuOption::Exit => {
                writeln!(out, "{EXIT_MESSAGE}")?;
                self.state = MenuState::Terminated;
            }
        }

        Ok(self.state)
    }

    /// Run until the exit option is chosen or input runs out
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<(), MenuError> {
        let mut pending = VecDeque::new();

        while self.state == MenuState::AwaitingChoice {
            self.write_prompt(out)?;

            let Some(token) = next_token(&mut input, &mut pending)? else {
                tracing::debug!("input closed");
                self.state = MenuState::Terminated;
                break;
            };

            self.step(&token, out)?;
        }

        out.flush()?;
        Ok(())
    }
}

/// Next whitespace-separated token, reading more lines as needed.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so they
/// surface as an unparsable choice. Returns `None` at end of input.
fn next_token<R: BufRead>(
    input: &mut R,
    pending: &mut VecDeque<String>,
) -> Result<Option<String>, MenuError> {
    let mut buf = Vec::new();

    while pending.is_empty() {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        pending.extend(
            String::from_utf8_lossy(&buf)
                .split_whitespace()
                .map(str::to_string),
        );
    }

    Ok(pending.pop_front())
}

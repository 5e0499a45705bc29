//! castle-core: Room prototypes and the kingdom's castle
//!
//! This crate contains the castle model and the menu state machine.
//! It never touches the process's standard streams directly; callers
//! hand in the reader and writer to use.

pub mod castle;
pub mod error;
pub mod factory;
pub mod kingdom;
pub mod menu;
pub mod room;

pub use castle::Castle;
pub use error::{ChoiceError, MenuError};
pub use factory::{RoomFactory, RoomKind};
pub use kingdom::Kingdom;
pub use menu::{Menu, MenuOption, MenuState};
pub use room::{Prototype, Room};

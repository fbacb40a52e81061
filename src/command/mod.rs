//! Text command protocol.
//!
//! Commands are whitespace-separated tokens read from a stream; a command may
//! span several lines and a line may hold several commands.
//!
//! | Command                                | Effect                               |
//! |----------------------------------------|--------------------------------------|
//! | `edit <path>`                          | load a bitmap, replacing the current |
//! | `save <path>`                          | write the current image              |
//! | `set d <r> <g> <b>`                    | brush color                          |
//! | `set l <size>`                         | brush size (odd, 1..=255)            |
//! | `draw l <y1> <x1> <y2> <x2>`           | line                                 |
//! | `draw r <y1> <x1> <width> <height>`    | rectangle outline                    |
//! | `draw t <y1> <x1> <y2> <x2> <y3> <x3>` | triangle outline                     |
//! | `fill <y> <x>`                         | flood fill with the brush color      |
//! | `insert <path> <y> <x>`                | paste another bitmap                 |
//! | `quit`                                 | stop reading commands                |

mod dispatch;
mod parse;

pub use dispatch::{execute, run};
pub use parse::{Tokens, parse_next, parse_verb};

use std::path::PathBuf;

/// One parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Save(PathBuf),
    Edit(PathBuf),
    SetColor {
        r: u8,
        g: u8,
        b: u8,
    },
    SetLine(i64),
    DrawLine {
        y1: i32,
        x1: i32,
        y2: i32,
        x2: i32,
    },
    DrawRectangle {
        y1: i32,
        x1: i32,
        width: i32,
        height: i32,
    },
    DrawTriangle {
        y1: i32,
        x1: i32,
        y2: i32,
        x2: i32,
        y3: i32,
        x3: i32,
    },
    Fill {
        y: i32,
        x: i32,
    },
    Insert {
        path: PathBuf,
        y: i32,
        x: i32,
    },
    Quit,
}

impl Command {
    /// Protocol keyword that introduces this command.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Save(_) => "save",
            Command::Edit(_) => "edit",
            Command::SetColor { .. } | Command::SetLine(_) => "set",
            Command::DrawLine { .. }
            | Command::DrawRectangle { .. }
            | Command::DrawTriangle { .. } => "draw",
            Command::Fill { .. } => "fill",
            Command::Insert { .. } => "insert",
            Command::Quit => "quit",
        }
    }
}

use super::Command;
use crate::error::{ProtocolError, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::str::FromStr;

/// Whitespace-delimited tokens of a line-oriented stream.
///
/// Lines are read lazily, so a command is parsed as soon as its last token
/// has arrived.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Next token, or `None` once the stream is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
    }

    fn expect(&mut self, what: &'static str) -> Result<String> {
        Ok(self
            .next_token()?
            .ok_or(ProtocolError::UnexpectedEnd(what))?)
    }

    fn number<T: FromStr>(&mut self, what: &'static str) -> Result<T> {
        let token = self.expect(what)?;
        Ok(token.parse().map_err(|_| ProtocolError::BadArgument {
            expected: what,
            found: token,
        })?)
    }
}

/// Reads the next complete command.
///
/// Returns `Ok(None)` when the stream ends cleanly before a verb.
pub fn parse_next<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Option<Command>> {
    match tokens.next_token()? {
        Some(verb) => parse_verb(&verb, tokens).map(Some),
        None => Ok(None),
    }
}

/// Reads the arguments of `verb` from `tokens`.
///
/// `set` and `draw` pick their sub-command from the first character of the
/// following token, so `draw line` and `draw l` are the same command.
pub fn parse_verb<R: BufRead>(verb: &str, tokens: &mut Tokens<R>) -> Result<Command> {
    let command = match verb {
        "save" => Command::Save(PathBuf::from(tokens.expect("a file path")?)),
        "edit" => Command::Edit(PathBuf::from(tokens.expect("a file path")?)),
        "set" => {
            let mode = tokens.expect("a set mode")?;
            match mode.chars().next() {
                Some('d') => Command::SetColor {
                    r: tokens.number("a color component 0-255")?,
                    g: tokens.number("a color component 0-255")?,
                    b: tokens.number("a color component 0-255")?,
                },
                Some('l') => Command::SetLine(tokens.number("a brush size")?),
                _ => return Err(ProtocolError::UnknownMode { verb: "set", mode }.into()),
            }
        }
        "draw" => {
            let mode = tokens.expect("a draw mode")?;
            match mode.chars().next() {
                Some('l') => Command::DrawLine {
                    y1: tokens.number("a coordinate")?,
                    x1: tokens.number("a coordinate")?,
                    y2: tokens.number("a coordinate")?,
                    x2: tokens.number("a coordinate")?,
                },
                Some('r') => Command::DrawRectangle {
                    y1: tokens.number("a coordinate")?,
                    x1: tokens.number("a coordinate")?,
                    width: tokens.number("a width")?,
                    height: tokens.number("a height")?,
                },
                Some('t') => Command::DrawTriangle {
                    y1: tokens.number("a coordinate")?,
                    x1: tokens.number("a coordinate")?,
                    y2: tokens.number("a coordinate")?,
                    x2: tokens.number("a coordinate")?,
                    y3: tokens.number("a coordinate")?,
                    x3: tokens.number("a coordinate")?,
                },
                _ => return Err(ProtocolError::UnknownMode { verb: "draw", mode }.into()),
            }
        }
        "fill" => Command::Fill {
            y: tokens.number("a coordinate")?,
            x: tokens.number("a coordinate")?,
        },
        "insert" => Command::Insert {
            path: PathBuf::from(tokens.expect("a file path")?),
            y: tokens.number("a coordinate")?,
            x: tokens.number("a coordinate")?,
        },
        "quit" => Command::Quit,
        other => return Err(ProtocolError::UnknownVerb(other.to_string()).into()),
    };
    Ok(command)
}

use super::Command;
use super::parse::{Tokens, parse_verb};
use crate::error::{EditorError, ProtocolError, Result};
use crate::session::Session;
use log::{debug, info, warn};
use std::io::{BufRead, Write};

/// Applies one command to the session.
///
/// `Quit` has no effect here; [`run`] stops when it sees it.
pub fn execute(session: &mut Session, command: &Command) -> Result<()> {
    debug!("Executing {:?}", command);
    match command {
        Command::Save(path) => session.save(path),
        Command::Edit(path) => session.load(path),
        Command::SetColor { r, g, b } => {
            session.set_color(*r, *g, *b);
            Ok(())
        }
        Command::SetLine(size) => session.set_line_width(*size),
        Command::DrawLine { y1, x1, y2, x2 } => session.draw_line(*y1, *x1, *y2, *x2),
        Command::DrawRectangle {
            y1,
            x1,
            width,
            height,
        } => session.draw_rectangle(*y1, *x1, *width, *height),
        Command::DrawTriangle {
            y1,
            x1,
            y2,
            x2,
            y3,
            x3,
        } => session.draw_triangle(*y1, *x1, *y2, *x2, *y3, *x3),
        Command::Fill { y, x } => session.fill(*y, *x).map(|_| ()),
        Command::Insert { path, y, x } => session.insert(path, *y, *x).map(|_| ()),
        Command::Quit => Ok(()),
    }
}

/// Reads commands from `reader` and applies them until `quit`.
///
/// A command that fails is reported to `report` as `ERROR: <verb>: <cause>`
/// and the loop moves on. Running out of input before `quit` or failing to
/// read it ends the loop with an error.
pub fn run<R: BufRead, W: Write>(session: &mut Session, reader: R, report: &mut W) -> Result<()> {
    let mut tokens = Tokens::new(reader);
    let mut executed = 0usize;
    let mut failed = 0usize;

    loop {
        let Some(verb) = tokens.next_token()? else {
            warn!("Command stream ended without quit");
            return Err(ProtocolError::MissingQuit.into());
        };

        let result = match parse_verb(&verb, &mut tokens) {
            Ok(Command::Quit) => {
                info!("Quit after {executed} commands ({failed} failed)");
                return Ok(());
            }
            Ok(command) => execute(session, &command),
            // Only reading the stream itself can fail with I/O while parsing.
            Err(EditorError::Io(err)) => return Err(EditorError::Io(err)),
            Err(err) => Err(err),
        };

        executed += 1;
        if let Err(err) = result {
            failed += 1;
            warn!("{verb} failed: {err}");
            writeln!(report, "ERROR: {verb}: {err}")?;
        }
    }
}

//! Where command lines come from.
//!
//! The parser only needs something that hands out one line at a time until
//! the input runs dry. Files and pipes go through [`ReaderSource`]; an
//! interactive terminal goes through [`EditorSource`] so the user gets line
//! editing and history while typing commands.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A blocking supplier of text lines.
pub trait LineSource {
    /// Read the next line without its terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Line source over any buffered reader.
///
/// Both `\n` and `\r` end a line, so a `\r\n` pair produces an extra empty
/// line. Bytes that are not valid UTF-8 are replaced rather than rejected;
/// such a line cannot match any command anyway.
pub struct ReaderSource<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Ok(Some(line));
            }

            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            self.pending.extend(
                buf.split(|&b| b == b'\r')
                    .map(|segment| String::from_utf8_lossy(segment).into_owned()),
            );
        }
    }
}

/// Line source backed by an interactive line editor.
///
/// Ctrl+D ends the input. Ctrl+C aborts it with an `Interrupted` error.
pub struct EditorSource {
    editor: DefaultEditor,
    prompt: String,
}

impl EditorSource {
    pub fn new(prompt: impl Into<String>) -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            prompt: prompt.into(),
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .map_err(readline_to_io)?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => Err(io::Error::new(
                io::ErrorKind::Interrupted,
                "input interrupted",
            )),
            Err(err) => Err(readline_to_io(err)),
        }
    }
}

fn readline_to_io(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(err) => err,
        other => io::Error::other(other.to_string()),
    }
}

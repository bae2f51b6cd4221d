//! Turning command lines into [`Instruction`]s.
//!
//! Every line is matched against a fixed, ordered table of verb prefixes;
//! the first prefix the line starts with decides how the rest of it is read.
//! A line that matches no verb must be blank, otherwise the whole input is
//! rejected.

use crate::command::{Heading, Instruction, RobotIndex};
use crate::source::LineSource;
use regex::Regex;
use std::io;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, trace};

/// Leading whitespace, an optional sign and the decimal digits of a number.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\x0B\x0C\r]*[+-]?([0-9]+)").expect("number pattern is valid")
});

/// Why a single line could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("X component of PLACE")]
    PlaceX,
    #[error("expected X comma")]
    PlaceXComma,
    #[error("Y component of PLACE")]
    PlaceY,
    #[error("expected Y comma")]
    PlaceYComma,
    #[error("direction component of PLACE")]
    PlaceHeading,
    #[error("expected index of ROBOT")]
    RobotIndex,
    /// `ROBOT 0`, or a number past the table capacity.
    #[error("ROBOT index out of range")]
    RobotIndexOutOfRange,
    /// The line starts with no known verb and is not blank.
    #[error("unexpected characters")]
    UnexpectedCharacters,
}

/// Errors that stop parsing of the whole input.
#[derive(Debug, Error)]
pub enum ParsingError {
    /// The underlying source failed before end of input.
    #[error("failed reading line {line_number}")]
    Read {
        line_number: usize,
        #[source]
        source: io::Error,
    },
    /// A line did not follow the command grammar.
    #[error("failed parsing line {line_number}: {kind}, line: {line}")]
    Syntax {
        line_number: usize,
        line: String,
        kind: LineError,
    },
}

/// Command verbs, in the order they are tried against a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Place,
    Move,
    Left,
    Right,
    Report,
    Robot,
}

impl Verb {
    const RULES: [Verb; 6] = [
        Verb::Place,
        Verb::Move,
        Verb::Left,
        Verb::Right,
        Verb::Report,
        Verb::Robot,
    ];

    fn prefix(self) -> &'static str {
        match self {
            Verb::Place => "PLACE ",
            Verb::Move => "MOVE",
            Verb::Left => "LEFT",
            Verb::Right => "RIGHT",
            Verb::Report => "REPORT",
            Verb::Robot => "ROBOT ",
        }
    }

    /// First rule whose prefix starts `line`.
    fn recognize(line: &str) -> Option<Verb> {
        Self::RULES
            .into_iter()
            .find(|verb| line.starts_with(verb.prefix()))
    }
}

/// Reads the arguments that follow a verb.
struct LineCursor<'a> {
    rest: &'a str,
}

impl<'a> LineCursor<'a> {
    fn new(rest: &'a str) -> Self {
        Self { rest }
    }

    /// Parse a possibly signed decimal number and keep its magnitude.
    fn number<T: FromStr>(&mut self, err: LineError) -> Result<T, LineError> {
        let captures = NUMBER.captures(self.rest).ok_or(err)?;
        let (Some(whole), Some(digits)) = (captures.get(0), captures.get(1)) else {
            return Err(err);
        };
        let value = digits.as_str().parse().map_err(|_| err)?;
        self.rest = &self.rest[whole.end()..];
        Ok(value)
    }

    fn expect(&mut self, ch: char, err: LineError) -> Result<(), LineError> {
        self.rest = self.rest.strip_prefix(ch).ok_or(err)?;
        Ok(())
    }

    /// The remainder of the line must be exactly one heading literal.
    fn heading(&mut self, err: LineError) -> Result<Heading, LineError> {
        let heading = self.rest.parse().map_err(|_| err)?;
        self.rest = "";
        Ok(heading)
    }
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Parse one line, without its terminator.
///
/// Returns `Ok(None)` for lines that carry no instruction (empty or
/// whitespace only).
pub fn parse_line(line: &str) -> Result<Option<Instruction>, LineError> {
    let Some(verb) = Verb::recognize(line) else {
        return if line.trim_start_matches(is_blank).is_empty() {
            Ok(None)
        } else {
            Err(LineError::UnexpectedCharacters)
        };
    };

    let mut cursor = LineCursor::new(&line[verb.prefix().len()..]);
    let instruction = match verb {
        Verb::Place => {
            let x = cursor.number(LineError::PlaceX)?;
            cursor.expect(',', LineError::PlaceXComma)?;
            let y = cursor.number(LineError::PlaceY)?;
            cursor.expect(',', LineError::PlaceYComma)?;
            let heading = cursor.heading(LineError::PlaceHeading)?;
            Instruction::Place { x, y, heading }
        }
        Verb::Move => Instruction::Move,
        Verb::Left => Instruction::TurnLeft,
        Verb::Right => Instruction::TurnRight,
        Verb::Report => Instruction::Report,
        Verb::Robot => {
            // anything after the number is ignored
            let ordinal: usize = cursor.number(LineError::RobotIndex)?;
            let index = RobotIndex::new(ordinal).ok_or(LineError::RobotIndexOutOfRange)?;
            Instruction::Select { index }
        }
    };

    Ok(Some(instruction))
}

/// Read `source` to the end and parse every line.
///
/// Stops at the first malformed line; nothing parsed so far is returned in
/// that case.
pub fn parse_stream(source: &mut dyn LineSource) -> Result<Vec<Instruction>, ParsingError> {
    let mut instructions = Vec::new();
    let mut line_number = 0;

    while let Some(line) = source.read_line().map_err(|err| ParsingError::Read {
        line_number: line_number + 1,
        source: err,
    })? {
        line_number += 1;
        match parse_line(&line) {
            Ok(Some(instruction)) => instructions.push(instruction),
            Ok(None) => trace!(line_number, "skipping blank line"),
            Err(kind) => {
                return Err(ParsingError::Syntax {
                    line_number,
                    line,
                    kind,
                });
            }
        }
    }

    debug!(
        lines = line_number,
        instructions = instructions.len(),
        "finished parsing input"
    );
    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ReaderSource;
    use std::io::Cursor;

    fn parse(line: &str) -> Result<Option<Instruction>, LineError> {
        parse_line(line)
    }

    fn place(x: u32, y: u32, heading: Heading) -> Option<Instruction> {
        Some(Instruction::Place { x, y, heading })
    }

    fn select(ordinal: usize) -> Option<Instruction> {
        Some(Instruction::Select {
            index: RobotIndex::new(ordinal).unwrap(),
        })
    }

    #[test]
    fn test_place_with_every_heading() {
        for heading in Heading::ALL {
            let line = format!("PLACE 3,1,{heading}");
            assert_eq!(parse(&line), Ok(place(3, 1, heading)));
        }
    }

    #[test]
    fn test_place_keeps_magnitude_of_signed_numbers() {
        assert_eq!(parse("PLACE -2,+3,SOUTH"), Ok(place(2, 3, Heading::South)));
        assert_eq!(parse("PLACE -0,0,EAST"), Ok(place(0, 0, Heading::East)));
    }

    #[test]
    fn test_place_allows_whitespace_before_numbers() {
        assert_eq!(parse("PLACE  1,\t2,WEST"), Ok(place(1, 2, Heading::West)));
    }

    #[test]
    fn test_place_accepts_coordinates_off_the_table() {
        assert_eq!(parse("PLACE 40,7,NORTH"), Ok(place(40, 7, Heading::North)));
    }

    #[test]
    fn test_place_errors() {
        assert_eq!(parse("PLACE abc,1,NORTH"), Err(LineError::PlaceX));
        assert_eq!(parse("PLACE -,1,NORTH"), Err(LineError::PlaceX));
        assert_eq!(parse("PLACE 1 ,1,NORTH"), Err(LineError::PlaceXComma));
        assert_eq!(parse("PLACE 1"), Err(LineError::PlaceXComma));
        assert_eq!(parse("PLACE 1,y,NORTH"), Err(LineError::PlaceY));
        assert_eq!(parse("PLACE 1,1;NORTH"), Err(LineError::PlaceYComma));
        assert_eq!(parse("PLACE 1,1,"), Err(LineError::PlaceHeading));
        assert_eq!(parse("PLACE 1,1,north"), Err(LineError::PlaceHeading));
        assert_eq!(parse("PLACE 1,1, NORTH"), Err(LineError::PlaceHeading));
        assert_eq!(parse("PLACE 1,1,NORTH "), Err(LineError::PlaceHeading));
        assert_eq!(parse("PLACE 1,1,NORTHWEST"), Err(LineError::PlaceHeading));
    }

    #[test]
    fn test_place_rejects_numbers_too_large_for_coordinates() {
        assert_eq!(parse("PLACE 4294967296,0,NORTH"), Err(LineError::PlaceX));
        assert_eq!(
            parse("PLACE 4294967295,0,NORTH"),
            Ok(place(u32::MAX, 0, Heading::North))
        );
    }

    #[test]
    fn test_place_without_space_is_unknown() {
        assert_eq!(parse("PLACE"), Err(LineError::UnexpectedCharacters));
        assert_eq!(parse("PLACE,1,1,NORTH"), Err(LineError::UnexpectedCharacters));
    }

    #[test]
    fn test_bare_verbs() {
        assert_eq!(parse("MOVE"), Ok(Some(Instruction::Move)));
        assert_eq!(parse("LEFT"), Ok(Some(Instruction::TurnLeft)));
        assert_eq!(parse("RIGHT"), Ok(Some(Instruction::TurnRight)));
        assert_eq!(parse("REPORT"), Ok(Some(Instruction::Report)));
    }

    #[test]
    fn test_bare_verbs_match_by_prefix() {
        assert_eq!(parse("MOVE 3"), Ok(Some(Instruction::Move)));
        assert_eq!(parse("REPORTING"), Ok(Some(Instruction::Report)));
    }

    #[test]
    fn test_verbs_are_case_sensitive() {
        assert_eq!(parse("move"), Err(LineError::UnexpectedCharacters));
        assert_eq!(parse(" MOVE"), Err(LineError::UnexpectedCharacters));
    }

    #[test]
    fn test_robot_select() {
        assert_eq!(parse("ROBOT 2"), Ok(select(2)));
        assert_eq!(parse("ROBOT -3"), Ok(select(3)));
        assert_eq!(parse("ROBOT 16 and more"), Ok(select(16)));
    }

    #[test]
    fn test_robot_errors() {
        assert_eq!(parse("ROBOT x"), Err(LineError::RobotIndex));
        assert_eq!(parse("ROBOT 0"), Err(LineError::RobotIndexOutOfRange));
        assert_eq!(parse("ROBOT 17"), Err(LineError::RobotIndexOutOfRange));
        assert_eq!(parse("ROBOT"), Err(LineError::UnexpectedCharacters));
    }

    #[test]
    fn test_blank_lines_carry_no_instruction() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   \t "), Ok(None));
    }

    #[test]
    fn test_unknown_verb() {
        assert_eq!(parse("JUMP"), Err(LineError::UnexpectedCharacters));
        assert_eq!(parse("  x"), Err(LineError::UnexpectedCharacters));
    }

    #[test]
    fn test_parse_stream_collects_in_order() {
        let input = "PLACE 0,0,NORTH\n\nMOVE\n  \nROBOT 1\nREPORT\n";
        let mut source = ReaderSource::new(Cursor::new(input));
        let instructions = parse_stream(&mut source).unwrap();

        assert_eq!(
            instructions,
            vec![
                Instruction::Place {
                    x: 0,
                    y: 0,
                    heading: Heading::North
                },
                Instruction::Move,
                Instruction::Select {
                    index: RobotIndex::new(1).unwrap()
                },
                Instruction::Report,
            ]
        );
    }

    #[test]
    fn test_parse_stream_empty_input() {
        let mut source = ReaderSource::new(Cursor::new(""));
        assert!(parse_stream(&mut source).unwrap().is_empty());
    }

    #[test]
    fn test_parse_stream_reports_failing_line() {
        let input = "MOVE\n\nPLACE abc,1,NORTH\nREPORT\n";
        let mut source = ReaderSource::new(Cursor::new(input));

        match parse_stream(&mut source) {
            Err(ParsingError::Syntax {
                line_number,
                line,
                kind,
            }) => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "PLACE abc,1,NORTH");
                assert_eq!(kind, LineError::PlaceX);
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_syntax_error_message() {
        let err = ParsingError::Syntax {
            line_number: 4,
            line: "FLY".to_string(),
            kind: LineError::UnexpectedCharacters,
        };
        assert_eq!(
            err.to_string(),
            "failed parsing line 4: unexpected characters, line: FLY"
        );
    }

    struct FailingSource {
        lines: Vec<String>,
    }

    impl LineSource for FailingSource {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            match self.lines.pop() {
                Some(line) => Ok(Some(line)),
                None => Err(io::Error::other("disk on fire")),
            }
        }
    }

    #[test]
    fn test_parse_stream_surfaces_read_errors() {
        let mut source = FailingSource {
            lines: vec!["MOVE".to_string()],
        };
        match parse_stream(&mut source) {
            Err(ParsingError::Read { line_number, .. }) => assert_eq!(line_number, 2),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}

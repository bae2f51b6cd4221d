//! A toy robot simulator driven by a line-oriented command language.
//!
//! Robots live on a small square table. Commands are read one per line,
//! parsed in full by [`parse_stream`], and then applied in order by an
//! [`Interpreter`], which prints a line for every `REPORT`.
//!
//! ```
//! use std::io::Cursor;
//! use toy_robot::{Interpreter, ReaderSource, parse_stream};
//!
//! let mut source = ReaderSource::new(Cursor::new("PLACE 1,2,EAST\nLEFT\nREPORT\n"));
//! let instructions = parse_stream(&mut source).unwrap();
//!
//! let mut out = Vec::new();
//! Interpreter::default().execute(&instructions, &mut out).unwrap();
//! assert_eq!(out, b"Robot 1 of 1: 1,2,NORTH\n");
//! ```

pub mod command;
mod interpreter;
pub mod logging;
pub mod parser;
pub mod source;
pub mod world;

pub use command::{Heading, Instruction, RobotIndex};
pub use interpreter::{ExecutionError, Interpreter};
pub use parser::{LineError, ParsingError, parse_line, parse_stream};
pub use source::{EditorSource, LineSource, ReaderSource};
pub use world::{MAX_ROBOT_COUNT, Robot, TABLE_HEIGHT, TABLE_WIDTH, World};

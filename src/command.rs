//! The instruction vocabulary shared by the parser and the interpreter.

use crate::world::MAX_ROBOT_COUNT;
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal directions a robot can face.
///
/// Right turns follow `North -> East -> South -> West -> North`,
/// left turns walk the same cycle backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Towards increasing `y`.
    #[default]
    North,
    /// Towards increasing `x`.
    East,
    /// Towards decreasing `y`.
    South,
    /// Towards decreasing `x`.
    West,
}

impl Heading {
    /// All headings in clockwise order, starting from north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// The literal used for this heading in commands and reports.
    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }

    /// Rotate 90 degrees counter-clockwise.
    pub fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::East => Heading::North,
            Heading::South => Heading::East,
            Heading::West => Heading::South,
        }
    }

    /// Rotate 90 degrees clockwise.
    pub fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not exactly one of the four heading literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeading;

impl FromStr for Heading {
    type Err = UnknownHeading;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heading::ALL
            .into_iter()
            .find(|heading| heading.name() == s)
            .ok_or(UnknownHeading)
    }
}

/// A 1-based robot number, always within `1..=MAX_ROBOT_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RobotIndex(usize);

impl RobotIndex {
    /// Returns `None` for `0` or anything beyond the table capacity.
    pub fn new(ordinal: usize) -> Option<Self> {
        (1..=MAX_ROBOT_COUNT).contains(&ordinal).then_some(Self(ordinal))
    }

    /// The 1-based ordinal as written in `ROBOT N`.
    pub fn ordinal(self) -> usize {
        self.0
    }

    /// The 0-based slot in the world.
    pub fn slot(self) -> usize {
        self.0 - 1
    }
}

/// A single parsed line of the command language.
///
/// Blank and whitespace-only lines never become an `Instruction`; the parser
/// reports them as `None` and they are dropped before execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `PLACE X,Y,HEADING`: put a new robot on the table and select it.
    /// Coordinates are taken verbatim, without checking them against the grid.
    Place { x: u32, y: u32, heading: Heading },
    /// `MOVE`: step one cell forward, stopping at the table edge.
    Move,
    /// `LEFT`
    TurnLeft,
    /// `RIGHT`
    TurnRight,
    /// `REPORT`: print the selected robot's position.
    Report,
    /// `ROBOT N`: make robot `N` the target of subsequent instructions.
    Select { index: RobotIndex },
}

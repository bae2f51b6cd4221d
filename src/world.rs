use crate::command::{Heading, RobotIndex};
use std::fmt;

/// Largest `x` a robot can reach by moving. The table has `TABLE_WIDTH + 1` columns.
pub const TABLE_WIDTH: u32 = 4;
/// Largest `y` a robot can reach by moving. The table has `TABLE_HEIGHT + 1` rows.
pub const TABLE_HEIGHT: u32 = 4;
/// How many robots fit on the table over a whole run.
pub const MAX_ROBOT_COUNT: usize = 16;

/// A single robot slot.
///
/// Slots start out unplaced; a `PLACE` instruction fills the next free one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Robot {
    pub x: u32,
    pub y: u32,
    pub heading: Heading,
    pub is_placed: bool,
}

impl Robot {
    /// Step one cell towards `heading`, staying put at the table edge.
    pub fn advance(&mut self) {
        match self.heading {
            Heading::North if self.y < TABLE_HEIGHT => self.y += 1,
            Heading::East if self.x < TABLE_WIDTH => self.x += 1,
            Heading::South if self.y > 0 => self.y -= 1,
            Heading::West if self.x > 0 => self.x -= 1,
            _ => {}
        }
    }
}

/// Returned by [`World::place`] when every slot is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFull;

/// All robots of a run plus the selection cursor.
///
/// Robots are append-only: `place` always fills the next free slot, and
/// `select` only ever points at a slot that has been placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    robots: [Robot; MAX_ROBOT_COUNT],
    active: usize,
    selected: usize,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of robots placed so far.
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// 0-based slot of the robot that motion and report instructions act on.
    pub fn selected_slot(&self) -> usize {
        self.selected
    }

    /// The placed robots, in placement order.
    pub fn robots(&self) -> &[Robot] {
        &self.robots[..self.active]
    }

    /// The selected robot, or `None` while it has not been placed.
    pub fn selected(&self) -> Option<&Robot> {
        let robot = &self.robots[self.selected];
        robot.is_placed.then_some(robot)
    }

    pub fn selected_mut(&mut self) -> Option<&mut Robot> {
        let robot = &mut self.robots[self.selected];
        robot.is_placed.then_some(robot)
    }

    /// Put a new robot in the next free slot and select it.
    ///
    /// Coordinates are stored as given, even outside the table.
    /// Returns the 0-based slot of the new robot.
    pub fn place(&mut self, x: u32, y: u32, heading: Heading) -> Result<usize, TableFull> {
        let slot = self.active;
        let robot = self.robots.get_mut(slot).ok_or(TableFull)?;
        *robot = Robot {
            x,
            y,
            heading,
            is_placed: true,
        };
        self.selected = slot;
        self.active += 1;
        Ok(slot)
    }

    /// Move the selection to an already placed robot.
    ///
    /// Returns `false` and leaves the selection alone when `index` names a
    /// robot that does not exist yet.
    pub fn select(&mut self, index: RobotIndex) -> bool {
        if index.ordinal() > self.active || !self.robots[index.slot()].is_placed {
            return false;
        }
        self.selected = index.slot();
        true
    }

    /// A printable view of the selected robot, if it has been placed.
    pub fn report(&self) -> Option<Report> {
        self.selected().map(|robot| Report {
            ordinal: self.selected + 1,
            active: self.active,
            robot: *robot,
        })
    }
}

/// One `REPORT` line: `Robot <selected> of <active>: <x>,<y>,<HEADING>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub ordinal: usize,
    pub active: usize,
    pub robot: Robot,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Robot {} of {}: {},{},{}",
            self.ordinal, self.active, self.robot.x, self.robot.y, self.robot.heading
        )
    }
}

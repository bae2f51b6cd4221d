use crate::command::Instruction;
use crate::world::{MAX_ROBOT_COUNT, TableFull, World};
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that abort execution of an instruction sequence.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// A `PLACE` arrived after every robot slot had been used.
    #[error(
        "instruction {position}: cannot place robot, all {max} robots are already on the table",
        max = MAX_ROBOT_COUNT
    )]
    TableFull { position: usize },
    /// The report sink refused a line.
    #[error("failed writing report")]
    Write(#[from] io::Error),
}

/// Applies instructions, in order, to a single [`World`].
///
/// Motion, turn and report instructions only act on the selected robot once
/// it has been placed; before the first `PLACE` they are skipped silently.
///
/// Example
/// ```
/// use toy_robot::{Heading, Instruction, Interpreter};
/// let mut interp = Interpreter::default();
/// let mut out = Vec::new();
/// interp
///     .execute(
///         &[
///             Instruction::Place { x: 0, y: 0, heading: Heading::North },
///             Instruction::Move,
///             Instruction::Report,
///         ],
///         &mut out,
///     )
///     .unwrap();
/// assert_eq!(out, b"Robot 1 of 1: 0,1,NORTH\n");
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    world: World,
}

impl Interpreter {
    /// Create an interpreter around an existing world.
    pub fn new(world: World) -> Self {
        Self { world }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn into_world(self) -> World {
        self.world
    }

    /// Run every instruction, writing one line to `out` per effective `REPORT`.
    pub fn execute(
        &mut self,
        instructions: &[Instruction],
        out: &mut dyn Write,
    ) -> Result<(), ExecutionError> {
        for (position, instruction) in instructions.iter().enumerate() {
            self.step(position, *instruction, out)?;
        }
        Ok(())
    }

    fn step(
        &mut self,
        position: usize,
        instruction: Instruction,
        out: &mut dyn Write,
    ) -> Result<(), ExecutionError> {
        match instruction {
            Instruction::Place { x, y, heading } => {
                let slot = self
                    .world
                    .place(x, y, heading)
                    .map_err(|TableFull| ExecutionError::TableFull { position })?;
                debug!(slot, x, y, %heading, "placed robot");
            }
            Instruction::Select { index } => {
                if self.world.select(index) {
                    debug!(slot = index.slot(), "selected robot");
                } else {
                    trace!(ordinal = index.ordinal(), "ignoring select of unplaced robot");
                }
            }
            Instruction::Report => match self.world.report() {
                Some(report) => writeln!(out, "{report}")?,
                None => trace!(position, "skipping report, no robot placed"),
            },
            Instruction::Move | Instruction::TurnLeft | Instruction::TurnRight => {
                let Some(robot) = self.world.selected_mut() else {
                    trace!(position, ?instruction, "skipping, no robot placed");
                    return Ok(());
                };
                match instruction {
                    Instruction::Move => robot.advance(),
                    Instruction::TurnLeft => robot.heading = robot.heading.turn_left(),
                    _ => robot.heading = robot.heading.turn_right(),
                }
            }
        }
        Ok(())
    }
}

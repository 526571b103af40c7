use std::io::Write;

use crossterm::{terminal, ExecutableCommand, Result};
use shared_resources::call::Direction;

use crate::column::Column;

/// Prints the hall calls and the cars of `column` as two tables.
pub fn print_column<W: Write>(out: &mut W, column: &Column) -> Result<()> {
    out.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

    let lit_up = column.hall_buttons.lit(Direction::Up);
    let lit_down = column.hall_buttons.lit(Direction::Down);

    writeln!(out, "+--------------------------------------+")?;
    writeln!(out, "| {0:<36} |", format!("COLUMN {} HALL CALLS", column.name))?;
    writeln!(out, "+------------+------------+------------+")?;
    writeln!(out, "| {0:<10} | {1:<10} | {2:<10} |", "FLOOR", "HALL UP", "HALL DOWN")?;
    for floor in column.hall_buttons.up.floors().collect::<Vec<_>>().into_iter().rev() {
        let up = lit_up.contains(&floor);
        let down = lit_down.contains(&floor);
        if !up && !down {
            continue;
        }
        writeln!(out, "+------------+------------+------------+")?;
        writeln!(out, "| {0:<10} | {1:<10} | {2:<10} |", floor, up, down)?;
    }
    writeln!(out, "+------------+------------+------------+\n")?;

    writeln!(out, "+--------------------------------------------------------------------------+")?;
    writeln!(out, "| {0:<72} |", format!("COLUMN {} ELEVATORS", column.name))?;
    writeln!(out, "+------------+------------+------------+------------+----------------------+")?;
    writeln!(out, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} | {4:<20} |", "ID", "FLOOR", "STATUS", "DOOR", "QUEUE")?;
    writeln!(out, "+------------+------------+------------+------------+----------------------+")?;
    for elevator in &column.elevators {
        writeln!(out, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} | {4:<20} |",
            elevator.name(),
            elevator.floor,
            elevator.status.as_string(),
            elevator.door.status.to_string(),
            elevator.requests.to_string())?;
        writeln!(out, "+------------+------------+------------+------------+----------------------+")?;
    }
    out.flush()?;
    Ok(())
}

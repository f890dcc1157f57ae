use std::{
    io::{BufRead, Write},
    num::IntErrorKind,
};

use log::warn;

use crate::{error::PromptError, graphs::Vertex};

/// Asks for the start vertex until a valid one in `0..number_of_vertices`
/// is entered.
pub fn read_start_vertex(
    mut input: impl BufRead,
    mut output: impl Write,
    number_of_vertices: u32,
) -> Result<Vertex, PromptError> {
    let max = number_of_vertices.saturating_sub(1);

    write!(
        output,
        "what node would you like the algorithm to start from?\n> "
    )?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }

        let entry = line.trim();
        let out_of_range = match entry.parse::<i64>() {
            Ok(vertex) if (0..number_of_vertices as i64).contains(&vertex) => {
                return Ok(vertex as Vertex);
            }
            Ok(_) => true,
            // too many digits for any vertex id
            Err(error) => matches!(
                error.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ),
        };

        if out_of_range {
            warn!("start vertex {} is out of range", entry);
            write!(
                output,
                "\nplease enter a valid input (from 0 to {})\n> ",
                max
            )?;
        } else {
            warn!("start vertex {:?} is not a number", entry);
            write!(output, "\nplease enter a number (from 0 to {})\n> ", max)?;
        }
        output.flush()?;
    }
}

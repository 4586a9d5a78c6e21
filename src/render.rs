use crate::universe::Universe;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

const CELL: &str = "  ";

/// Draws a generation to a terminal.
///
/// The screen is cleared, a status line is printed and then every row of the universe follows,
/// with live cells in inverse video. Each cell is two characters wide so the grid looks square.
pub fn draw<W: Write>(out: &mut W, universe: &Universe, generation: usize) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(format!(
            "Generation: {}, Alive: {}\n",
            generation,
            universe.alive_count()
        ))
    )?;

    for i in 0..universe.rows() {
        for j in 0..universe.cols() {
            if universe.get(i, j).is_alive() {
                queue!(
                    out,
                    SetAttribute(Attribute::Reverse),
                    Print(CELL),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(out, Print(CELL))?;
            }
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()
}

//! Plain-text board rendering for the terminal

use std::io::Write;

use crate::game::session::{GameStatus, Session};
use crate::io::error::Result;

/// Draw the score header, the boxed grid and any end-of-game banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn render_session(session: &Session, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Score: {}  Best: {}", session.score(), session.best())?;
    render_grid_box(session, out)?;

    match session.status() {
        GameStatus::Won => writeln!(out, "You win! You reached the target tile.")?,
        GameStatus::Lost => writeln!(out, "Game Over. No more moves available.")?,
        GameStatus::Playing => {}
    }

    Ok(())
}

fn render_grid_box(session: &Session, out: &mut impl Write) -> Result<()> {
    let grid = session.grid();
    // Cells are wide enough for the target so the box never reflows mid-game
    let width = session
        .config()
        .target
        .max(grid.max_tile())
        .to_string()
        .len();
    let border = format!("+{}+", vec!["-".repeat(width + 2); grid.size()].join("+"));

    writeln!(out, "{border}")?;
    for row in grid.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&value| {
                if value == 0 {
                    format!(" {:>width$} ", "")
                } else {
                    format!(" {value:>width$} ")
                }
            })
            .collect();
        writeln!(out, "|{}|", cells.join("|"))?;
        writeln!(out, "{border}")?;
    }

    Ok(())
}

//! ASCII rendering of the pairwise win-probability table.

use dice_game_core::{probability_matrix, Die};

/// Render the full probability table: dice as row and column headers,
/// cells fixed to two decimal places. The diagonal is self-play.
pub fn probability_table(dice: &[Die]) -> String {
    let mut header = vec!["User dice v".to_string()];
    header.extend(dice.iter().map(|die| die.to_string()));

    let matrix = probability_matrix(dice);
    let rows: Vec<Vec<String>> = dice
        .iter()
        .zip(&matrix)
        .map(|(die, row)| {
            let mut cells = vec![die.to_string()];
            cells.extend(row.iter().map(|p| format!("{:.2}", p)));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let separator = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let render_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(&widths) {
            line.push_str(&format!(" {:<w$} |", cell, w = *width));
        }
        line
    };

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&render_row(&header));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&separator);
    out
}

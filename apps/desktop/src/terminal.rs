use std::io::Write;

use client_core::{BoardView, DisplaySurface, Marker, ScoreView, SessionPhase};
use colored::Colorize;
use tracing::error;

/// Text rendering in the classic `Cols: 1 | 2 | ...` layout.
pub fn format_board(board: &BoardView, color: bool) -> String {
    let widths: Vec<usize> = board.headers.iter().map(|h| h.label.len()).collect();
    let rule = "----".repeat(board.width() + 1);

    let labels = board
        .headers
        .iter()
        .map(|h| h.label.as_str())
        .collect::<Vec<_>>()
        .join(" | ");
    let mut out = format!("Cols: {labels} |\n{rule}\n");

    for row in &board.rows {
        let cells = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| paint(&cell.marker, color, *width))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&format!("    | {cells} |\n"));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn format_scores(scores: &ScoreView, color: bool) -> String {
    let mut out = format!("{}\n", scores.title);
    for row in &scores.rows {
        let pointer = if row.current { ">" } else { " " };
        let score = row
            .score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            " {pointer} {} Player {}: {score}\n",
            paint(&row.marker, color, 1),
            row.player
        ));
    }
    out
}

pub fn prompt_for(phase: SessionPhase) -> String {
    match phase {
        SessionPhase::NoGame => "\nStart a game with `new <players>` (2 - 6): ".to_string(),
        SessionPhase::AwaitingMove { current_player } => {
            format!("\nPlayer #{current_player} - please enter the column number to play in: ")
        }
        SessionPhase::Finished => {
            "\nGame over. `new <players>` starts another, `quit` leaves: ".to_string()
        }
    }
}

fn paint(marker: &Marker, color: bool, width: usize) -> String {
    let glyph = format!("{:^width$}", marker.glyph);
    if !color || marker.asset.is_none() {
        return glyph;
    }
    let [r, g, b] = marker.rgb;
    glyph.truecolor(r, g, b).bold().to_string()
}

pub struct TerminalSurface<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn write_text(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(err) = result {
            error!(error = %err, "failed to write to terminal");
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn show_board(&mut self, board: &BoardView) {
        let text = format!("\n{}", format_board(board, self.color));
        self.write_text(&text);
    }

    fn show_scores(&mut self, scores: &ScoreView) {
        let text = format_scores(scores, self.color);
        self.write_text(&text);
    }

    fn alert(&mut self, message: &str) {
        let text = if self.color {
            format!("\n{}\n", format!("*** {message} ***").yellow().bold())
        } else {
            format!("\n*** {message} ***\n")
        };
        self.write_text(&text);
    }
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;

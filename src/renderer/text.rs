//! Character-grid presenter for terminals and headless runs

use super::{Frame, Presenter};

/// Racket drawn on the row at 90% of the court height
const RACKET_ROW_PCT: f32 = 90.0;
const RACKET_GLYPH: &str = "===";
const SHUTTLE_GLYPH: char = 'v';

/// Renders frames into a plain-text court
#[derive(Debug, Clone)]
pub struct TextPresenter {
    cols: usize,
    rows: usize,
    last: String,
    restart_requested: bool,
}

impl TextPresenter {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(RACKET_GLYPH.len() + 2),
            rows: rows.max(5),
            last: String::new(),
            restart_requested: false,
        }
    }

    /// Most recently rendered frame
    pub fn output(&self) -> &str {
        &self.last
    }

    /// Player pressed restart on the end screen
    pub fn request_restart(&mut self) {
        self.restart_requested = true;
    }

    fn col_of(&self, x_pct: f32) -> usize {
        let col = (x_pct / 100.0 * (self.cols - 1) as f32).round();
        col.clamp(0.0, (self.cols - 1) as f32) as usize
    }

    fn row_of(&self, y_pct: f32) -> Option<usize> {
        if !(0.0..=100.0).contains(&y_pct) {
            return None;
        }
        Some((y_pct / 100.0 * (self.rows - 1) as f32).round() as usize)
    }

    fn court(&self, frame: &Frame) -> Vec<Vec<char>> {
        let mut grid = vec![vec![' '; self.cols]; self.rows];

        if !frame.shows_court() {
            let lines = [
                "GAME OVER".to_string(),
                format!("Final score: {}", frame.score),
                "[R] Restart".to_string(),
            ];
            let top = self.rows.saturating_sub(lines.len()) / 2;
            for (i, line) in lines.iter().enumerate() {
                let start = self.cols.saturating_sub(line.len()) / 2;
                for (j, ch) in line.chars().take(self.cols).enumerate() {
                    grid[top + i][start + j] = ch;
                }
            }
            return grid;
        }

        if let Some(row) = self.row_of(RACKET_ROW_PCT) {
            let half = RACKET_GLYPH.len() / 2;
            let center = self.col_of(frame.racket_x).clamp(half, self.cols - 1 - half);
            for (j, ch) in RACKET_GLYPH.chars().enumerate() {
                grid[row][center - half + j] = ch;
            }
        }

        if let Some(row) = self.row_of(frame.shuttle.y) {
            grid[row][self.col_of(frame.shuttle.x)] = SHUTTLE_GLYPH;
        }

        grid
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new(40, 20)
    }
}

impl Presenter for TextPresenter {
    fn present(&mut self, frame: &Frame) {
        let border = format!("+{}+", "-".repeat(self.cols));

        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 4));
        out.push_str(&format!("Score: {}\n", frame.score));
        out.push_str(&border);
        out.push('\n');
        for row in self.court(frame) {
            out.push('|');
            out.extend(row);
            out.push_str("|\n");
        }
        out.push_str(&border);
        out.push('\n');
        out.push_str("Move the pointer to steer the racket!\n");

        self.last = out;
    }

    fn take_restart_request(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }
}

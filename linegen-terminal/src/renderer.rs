/// ASCII line rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use linegen_core::{LineSegment, LineSink};
use nalgebra::Point2;
use std::io::Write;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// Lines reaching further than this many screen widths off-screen are dropped
const MAX_OVERSHOOT: f32 = 4.0;

/// ASCII renderer that draws projected line lists into a character grid
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    /// Character rows per world unit
    cells_per_unit: f32,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells_per_unit: height as f32 / 4.0,
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn with_scale(mut self, cells_per_unit: f32) -> Self {
        self.cells_per_unit = cells_per_unit;
        self
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        // Keep the shape the same fraction of the screen height
        let scale = self.cells_per_unit * height as f32 / self.height.max(1) as f32;
        *self = Self::new(width, height).with_scale(scale);
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
    }

    pub fn cell(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    /// Map a projected point to fractional cell coordinates, origin at the
    /// screen center and Y growing downwards
    pub fn to_cell(&self, point: &Point2<f32>) -> (f32, f32) {
        let x = self.width as f32 / 2.0 + point.x * self.cells_per_unit * CELL_ASPECT;
        let y = self.height as f32 / 2.0 - point.y * self.cells_per_unit;
        (x, y)
    }

    pub fn rasterize_line(&mut self, line: &LineSegment) {
        let (x0, y0) = self.to_cell(&line.start);
        let (x1, y1) = self.to_cell(&line.end);

        let limit = MAX_OVERSHOOT * self.width.max(self.height) as f32;
        if [x0, y0, x1, y1]
            .iter()
            .any(|v| !v.is_finite() || v.abs() > limit)
        {
            return;
        }

        let (x0, y0) = (x0.floor() as i32, y0.floor() as i32);
        let (x1, y1) = (x1.floor() as i32, y1.floor() as i32);
        let character = glyph(x1 - x0, y1 - y0);

        // Bresenham
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y, character);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn plot(&mut self, x: i32, y: i32, character: char) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        // Crossing lines show as a junction
        self.char_buffer[idx] = match self.char_buffer[idx] {
            ' ' => character,
            existing if existing == character => character,
            _ => '+',
        };
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::Cyan))?;
        for (y, row) in self.char_buffer.chunks(self.width.max(1)).enumerate() {
            // No trailing newline, so the last row does not scroll the screen
            if y > 0 {
                writer.queue(Print("\r\n"))?;
            }
            let line: String = row.iter().collect();
            writer.queue(Print(line))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl LineSink for AsciiRenderer {
    fn draw_lines(&mut self, lines: &[LineSegment]) {
        for line in lines {
            self.rasterize_line(line);
        }
    }
}

/// Pick a character from the screen-space direction of a line
fn glyph(dx: i32, dy: i32) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax == 0 && ay == 0 {
        '.'
    } else if ax > 2 * ay {
        '-'
    } else if ay > 2 * ax {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

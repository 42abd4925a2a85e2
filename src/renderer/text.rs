//! Plain-text projection of a frame
//!
//! Checkerboard background, `@` for the head, `o` for the body, `*` for food,
//! followed by the status line.

use std::io::Write;

use super::{Frame, Renderer};
use crate::cell_to_square;

const HEAD_CHAR: char = '@';
const BODY_CHAR: char = 'o';
const FOOD_CHAR: char = '*';
const DARK_CHAR: char = ' ';
const LIGHT_CHAR: char = '.';

/// Writes every frame as text to `out`
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &Frame) {
        if let Err(e) = self.out.write_all(draw(frame).as_bytes()).and_then(|_| self.out.flush()) {
            log::warn!("Failed to draw frame: {e}");
        }
    }
}

/// Project a frame to text, one line per grid row plus a status line
pub fn draw(frame: &Frame) -> String {
    let (cols, rows) = cell_to_square(glam::IVec2::new(frame.board_width, frame.board_height));
    let (cols, rows) = (cols.max(0) as usize, rows.max(0) as usize);

    // Alternating squares, shifted by one on odd rows
    let mut grid: Vec<Vec<char>> = (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| if (row + col) % 2 == 0 { DARK_CHAR } else { LIGHT_CHAR })
                .collect()
        })
        .collect();

    let mut put = |cell, ch| {
        let (col, row) = cell_to_square(cell);
        if let Some(square) = usize::try_from(row)
            .ok()
            .and_then(|r| grid.get_mut(r))
            .and_then(|line| usize::try_from(col).ok().and_then(|c| line.get_mut(c)))
        {
            *square = ch;
        }
    };

    if let Some(food) = frame.food {
        put(food, FOOD_CHAR);
    }
    for segment in frame.segments {
        put(
            segment.position,
            if segment.is_head { HEAD_CHAR } else { BODY_CHAR },
        );
    }

    let mut text = String::with_capacity((cols + 1) * (rows + 1));
    for line in grid {
        text.extend(line);
        text.push('\n');
    }
    text.push_str(&format!(
        "Score: {}  Speed: {}ms\n",
        frame.score, frame.speed_interval_ms
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SnakeSegment;
    use glam::IVec2;

    #[test]
    fn test_draw_small_board() {
        let segments = [
            SnakeSegment {
                position: IVec2::new(0, 0),
                is_head: false,
            },
            SnakeSegment::head(IVec2::new(20, 0)),
        ];
        let frame = Frame {
            segments: &segments,
            food: Some(IVec2::new(40, 20)),
            score: 2,
            speed_interval_ms: 394,
            board_width: 60,
            board_height: 40,
        };

        assert_eq!(draw(&frame), "o@ \n. *\nScore: 2  Speed: 394ms\n");
    }

    #[test]
    fn test_renderer_writes_frames() {
        let frame = Frame {
            segments: &[],
            food: None,
            score: 0,
            speed_interval_ms: 400,
            board_width: 20,
            board_height: 20,
        };
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&frame);
        renderer.render(&frame);
        assert_eq!(
            String::from_utf8(renderer.out).unwrap(),
            " \nScore: 0  Speed: 400ms\n \nScore: 0  Speed: 400ms\n"
        );
    }
}

//! Shared UI building blocks: the bordered game layout, status bar, info
//! panel frame, overlays and the cell buffer the play field is drawn into.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use runner::runner::Rgb;

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field, top left inside the outer border.
    pub content: Rect,
    /// Two lines under the play field.
    pub status_bar: Rect,
    /// Right side, with its own border.
    pub info_panel: Rect,
}

/// Split `area` into a bordered play field with a status bar below it and
/// an info panel on the right.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [content area]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render a 2-line status bar: message on top, `(key, action)` pairs below.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render the info panel border and return the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Render a centered modal box with a bold title and the given body lines.
///
/// The area behind the box is left as is, so the play field stays visible.
pub fn render_modal(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    title_color: Color,
    body: Vec<Line<'static>>,
    width: u16,
) {
    let height = (body.len() as u16 + 4).min(area.height);
    let width = width.min(area.width);
    let modal = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(body);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Terminal color for a core `Rgb`.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Fixed-size character grid drawn into before being stamped on screen.
pub struct CellBuffer {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as usize,
            height: height as usize,
            cells: vec![vec![Cell::default(); width as usize]; height as usize],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set one cell; out-of-range coordinates are ignored.
    pub fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 {
            return;
        }
        if let Some(slot) = self
            .cells
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            *slot = cell;
        }
    }

    /// Fill the half-open cell rectangle `[col0, col1) x [row0, row1)`.
    pub fn fill(&mut self, col0: i32, row0: i32, col1: i32, row1: i32, cell: Cell) {
        for row in row0.max(0)..row1.min(self.height as i32) {
            for col in col0.max(0)..col1.min(self.width as i32) {
                self.put(col, row, cell);
            }
        }
    }

    /// Write `text` starting at `(col, row)`.
    pub fn text(&mut self, col: i32, row: i32, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(
                col + i as i32,
                row,
                Cell {
                    ch,
                    fg,
                    bg: Color::Reset,
                },
            );
        }
    }

    /// Write `text` centered horizontally on `row`.
    pub fn text_centered(&mut self, row: i32, text: &str, fg: Color) {
        let len = text.chars().count() as i32;
        let col = (self.width as i32 - len) / 2;
        self.text(col, row, text, fg);
    }

    /// Stamp the buffer row by row into `area`, merging runs of equal style
    /// into one span.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        for (row_idx, row_data) in self.cells.iter().enumerate() {
            let y = area.y + row_idx as u16;
            if y >= area.y + area.height {
                break;
            }

            let mut spans: Vec<Span> = Vec::new();
            let mut current_fg = Color::Reset;
            let mut current_bg = Color::Reset;
            let mut current_text = String::new();

            for &cell in row_data {
                if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                current_fg = cell.fg;
                current_bg = cell.bg;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(
                    current_text,
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }

            let row_area = Rect::new(area.x, y, (self.width as u16).min(area.width), 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(ch: char) -> Cell {
        Cell {
            ch,
            fg: Color::White,
            bg: Color::Reset,
        }
    }

    #[test]
    fn test_put_ignores_out_of_range() {
        let mut buffer = CellBuffer::new(4, 2);
        buffer.put(-1, 0, solid('x'));
        buffer.put(4, 0, solid('x'));
        buffer.put(0, 2, solid('x'));
        for row in 0..2 {
            for col in 0..4 {
                assert_eq!(buffer.get(col, row).unwrap().ch, ' ');
            }
        }
    }

    #[test]
    fn test_fill_clips_to_buffer() {
        let mut buffer = CellBuffer::new(5, 3);
        buffer.fill(3, -2, 10, 2, solid('#'));
        assert_eq!(buffer.get(3, 0).unwrap().ch, '#');
        assert_eq!(buffer.get(4, 1).unwrap().ch, '#');
        assert_eq!(buffer.get(2, 0).unwrap().ch, ' ');
        assert_eq!(buffer.get(3, 2).unwrap().ch, ' ');
    }

    #[test]
    fn test_text_centered() {
        let mut buffer = CellBuffer::new(10, 1);
        buffer.text_centered(0, "abcd", Color::White);
        assert_eq!(buffer.get(3, 0).unwrap().ch, 'a');
        assert_eq!(buffer.get(6, 0).unwrap().ch, 'd');
    }

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(Rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}

//! Play field, HUD and game-over rendering.
//!
//! The world is 1300x888 units by default. It is scaled down into a cell
//! buffer the size of the play field, so entities keep their proportions
//! whatever the terminal size.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_modal, render_status_bar, to_color, Cell,
    CellBuffer,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use runner::core::{Bounds, ScreenConfig};
use runner::runner::powerups::Banners;
use runner::runner::types::SHIELD_BLUE;
use runner::runner::{Effect, ObstacleKind, Pose, RunnerGame, Screen, Session};

const GROUND_CHAR: char = '▓';
const PLAYER_COLOR: Color = Color::Rgb(95, 95, 220);
const GROUND_COLOR: Color = Color::Rgb(90, 70, 50);
const CEILING_COLOR: Color = Color::Rgb(130, 130, 150);
const BLOCK_COLOR: Color = Color::Rgb(140, 110, 80);
const INFO_PANEL_WIDTH: u16 = 26;

/// Maps world coordinates onto a `cols` x `rows` cell grid.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    world_w: i32,
    world_h: i32,
    cols: i32,
    rows: i32,
}

impl Projection {
    pub fn new(screen: &ScreenConfig, cols: u16, rows: u16) -> Self {
        Self {
            world_w: screen.width.max(1),
            world_h: screen.height.max(1),
            cols: cols as i32,
            rows: rows as i32,
        }
    }

    pub fn col(&self, x: i32) -> i32 {
        (x as i64 * self.cols as i64).div_euclid(self.world_w as i64) as i32
    }

    pub fn row(&self, y: i32) -> i32 {
        (y as i64 * self.rows as i64).div_euclid(self.world_h as i64) as i32
    }

    /// Cell rectangle `(col0, row0, col1, row1)` covering `bounds`, never
    /// smaller than one cell.
    pub fn cells(&self, bounds: &Bounds) -> (i32, i32, i32, i32) {
        let col0 = self.col(bounds.left());
        let row0 = self.row(bounds.top());
        let col1 = self.col(bounds.right()).max(col0 + 1);
        let row1 = self.row(bounds.bottom()).max(row0 + 1);
        (col0, row0, col1, row1)
    }
}

/// Render the Playing or GameOver screen.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, session: &Session) {
    let layout = create_game_layout(
        frame,
        area,
        " Skater Survival ",
        Color::LightYellow,
        10,
        INFO_PANEL_WIDTH,
    );

    render_play_field(frame, layout.content, &session.game);
    render_info_panel(frame, layout.info_panel, session);

    if session.screen == Screen::GameOver {
        render_status_bar(
            frame,
            layout.status_bar,
            "Game over",
            Color::LightRed,
            &[("[R]", "Retry"), ("[T]", "Tutorial"), ("[Esc]", "Quit")],
        );
        render_game_over(frame, layout.content, session);
    } else {
        let crouch_hint = if session.game.player.crouched {
            "Stand"
        } else {
            "Crouch"
        };
        render_status_bar(
            frame,
            layout.status_bar,
            "Run!",
            Color::LightYellow,
            &[
                ("[Space/Up]", "Jump"),
                ("[Down]", crouch_hint),
                ("[Esc]", "Quit"),
            ],
        );
    }
}

fn solid(ch: char, fg: Color) -> Cell {
    Cell {
        ch,
        fg,
        bg: Color::Reset,
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let mut buffer = CellBuffer::new(area.width, area.height);
    let projection = Projection::new(&game.screen, area.width, area.height);
    let now = game.clock.now_ms();

    // Floor strip
    let floor_row = projection.row(game.screen.floor_y());
    buffer.fill(
        0,
        floor_row,
        buffer.width() as i32,
        area.height as i32,
        Cell {
            ch: GROUND_CHAR,
            fg: GROUND_COLOR,
            bg: Color::Rgb(50, 40, 30),
        },
    );

    for obstacle in &game.obstacles {
        let (c0, r0, c1, r1) = projection.cells(&obstacle.bounds);
        let cell = match obstacle.kind {
            ObstacleKind::Ground => solid('#', BLOCK_COLOR),
            ObstacleKind::Ceiling => solid('█', CEILING_COLOR),
        };
        buffer.fill(c0, r0, c1, r1.min(floor_row), cell);
    }

    for item in &game.items {
        let (c0, r0, c1, r1) = projection.cells(&item.bounds);
        let color = to_color(item.kind.color());
        buffer.fill(
            c0,
            r0,
            c1,
            r1,
            Cell {
                ch: ' ',
                fg: Color::Black,
                bg: color,
            },
        );
        for (i, ch) in item.kind.tag().chars().enumerate() {
            let col = c0 + i as i32;
            if col < c1 {
                buffer.put(
                    col,
                    r0,
                    Cell {
                        ch,
                        fg: Color::Black,
                        bg: color,
                    },
                );
            }
        }
    }

    render_player(&mut buffer, &projection, game, now);
    render_notices(&mut buffer, game, now);

    buffer.render(frame, area);
}

fn render_player(buffer: &mut CellBuffer, projection: &Projection, game: &RunnerGame, now: u64) {
    let player = &game.player;
    let state = &game.state;
    let (c0, r0, c1, r1) = projection.cells(&player.bounds);

    // Blink while invulnerability is about to run out
    let fading = state
        .invulnerability
        .is_some_and(|inv| inv.remaining_ms(now) < 500)
        && (now / 100) % 2 == 0;
    let ch = match player.pose() {
        _ if fading => '░',
        Pose::Running => '█',
        Pose::Crouching => '▄',
        Pose::Jumping => '▀',
        Pose::Falling => '▓',
    };
    let color = if state.is_invulnerable() {
        to_color(state.invulnerability_color())
    } else if state.shield {
        to_color(SHIELD_BLUE)
    } else {
        PLAYER_COLOR
    };
    buffer.fill(c0, r0, c1, r1, solid(ch, color));

    // Active buff tag inside the runner, next queued pickup beside it
    let tag = if state.is_invulnerable() {
        Some("INV")
    } else if state.shield {
        Some("SH")
    } else {
        None
    };
    if let Some(tag) = tag {
        for (i, ch) in tag.chars().enumerate() {
            buffer.put(
                c0 + i as i32,
                r0,
                Cell {
                    ch,
                    fg: Color::Black,
                    bg: color,
                },
            );
        }
    }
    if let Some(next) = state.pending.front() {
        buffer.text(c1 + 1, r0, next.tag(), to_color(next.color()));
    }
}

/// Centered notices: reveal slot, drain countdown and banners.
fn render_notices(buffer: &mut CellBuffer, game: &RunnerGame, now: u64) {
    let state = &game.state;
    let center = buffer.height() as i32 / 2;

    if let Some(reveal) = state.reveal() {
        let label = format!("[ {:^14} ]", reveal.label());
        let color = Effect::ALL
            .get(reveal.animation_frame as usize)
            .map_or(Color::White, |effect| to_color(effect.color()));
        buffer.text_centered(center - 2, &label, color);
    }

    if let Some(remaining) = state.countdown() {
        buffer.text_centered(center + 2, &format!("Activating in {remaining}..."), Color::White);
    }

    let banners = &state.banners;
    let mut row = center;
    for (slot, text, color) in [
        (banners.level_up, "Level up!", Color::Rgb(255, 80, 80)),
        (banners.level_down, "Level down", Color::Rgb(0, 255, 0)),
        (banners.queue_cleared, "Cleared!", Color::Rgb(255, 120, 120)),
    ] {
        if Banners::remaining_ms(slot, now).is_some() {
            buffer.text_centered(row, text, color);
            row += 1;
        }
    }
}

fn label(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_info_panel_frame(frame, area);
    let game = &session.game;
    let state = &game.state;
    let now = game.clock.now_ms();

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            label("Time: "),
            Span::styled(
                format!("{}s", session.seconds_survived()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Level: "),
            Span::styled(state.level.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            label("Speed: "),
            Span::styled(
                format!("{:.1}", state.speed),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Best time: "),
            Span::styled(
                format!("{}s", session.records.best_seconds),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            label("Best level: "),
            Span::styled(
                session.records.best_level.to_string(),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(""),
    ];

    if state.shield {
        lines.push(Line::from(Span::styled(
            "SHIELD",
            Style::default().fg(to_color(SHIELD_BLUE)),
        )));
    }
    if let Some(inv) = state.invulnerability {
        lines.push(Line::from(Span::styled(
            format!("INVULNERABLE ({}s)", inv.remaining_ms(now) / 1000),
            Style::default().fg(to_color(inv.color())),
        )));
    }
    if let Some(next) = state.pending.front() {
        lines.push(Line::from(Span::styled(
            format!("Next: {}", next.name()),
            Style::default().fg(to_color(next.color())),
        )));
    }
    if !state.pending.is_empty() {
        let mut spans = vec![label("Queue: ")];
        for kind in &state.pending {
            spans.push(Span::styled(
                format!("{} ", kind.tag()),
                Style::default().fg(to_color(kind.color())),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_game_over(frame: &mut Frame, area: Rect, session: &Session) {
    let records = session.records;
    let stat = Style::default().fg(Color::Rgb(230, 230, 230));
    let record = Style::default().fg(Color::Rgb(170, 255, 170));
    let body = vec![
        Line::from(Span::styled(
            format!("Time survived: {}s", session.seconds_survived()),
            stat,
        )),
        Line::from(Span::styled(
            format!("Level reached: {}", session.game.state.level),
            stat,
        )),
        Line::from(Span::styled(
            format!("Best time: {}s", records.best_seconds),
            record,
        )),
        Line::from(Span::styled(
            format!("Best level: {}", records.best_level),
            record,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Retry   [T] Tutorial   [Esc] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_modal(frame, area, "GAME OVER", Color::Rgb(255, 80, 80), body, 44);
}

//! Tutorial screen: controls, items, mystery outcomes and records.

use super::game_common::{render_status_bar, to_color};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use runner::runner::{Effect, ItemKind, Records};

/// What each mystery outcome does.
fn describe(effect: Effect) -> &'static str {
    match effect {
        Effect::Shield => "blocks one hit, then 2s of invulnerability (blue)",
        Effect::LevelDown => "drops one level and slows the scroll",
        Effect::Invulnerable => "invincible for 10 seconds (gold)",
        Effect::LevelUp => "raises one level, more speed",
        Effect::QueueClear => "throws away every queued pickup",
    }
}

const ITEMS: [ItemKind; 4] = [
    ItemKind::Shield,
    ItemKind::LevelDown,
    ItemKind::Invulnerable,
    ItemKind::Mystery,
];

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn plain(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}

pub fn render_tutorial_scene(frame: &mut Frame, area: Rect, records: &Records) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Tutorial - Skater Survival ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightYellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(inner);
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(v_chunks[0]);

    let mut left = vec![
        heading("Controls"),
        plain("  Space / Up   Jump".to_string()),
        plain("  Down         Crouch".to_string()),
        plain("  R            Retry after losing".to_string()),
        plain("  Esc          Quit".to_string()),
        Line::from(""),
        plain("Jump over floor blocks, crouch under ceiling runs.".to_string()),
        plain("Pickups taken while protected wait in a queue.".to_string()),
        Line::from(""),
        heading("A mystery box can give"),
    ];
    for effect in Effect::ALL {
        left.push(Line::from(vec![
            Span::styled(
                format!("  {:<13}", effect.name()),
                Style::default().fg(to_color(effect.color())),
            ),
            Span::styled(describe(effect), Style::default().fg(Color::Gray)),
        ]));
    }
    frame.render_widget(
        Paragraph::new(left).wrap(Wrap { trim: false }),
        h_chunks[0],
    );

    let mut right = vec![heading("Items")];
    for kind in ITEMS {
        right.push(Line::from(vec![
            Span::styled(
                format!(" {:^3} ", kind.tag()),
                Style::default().fg(Color::Black).bg(to_color(kind.color())),
            ),
            Span::styled(format!(" {}", kind.name()), Style::default().fg(Color::Gray)),
        ]));
    }
    right.push(Line::from(""));
    right.push(heading("Records"));
    right.push(plain(format!("Best time: {}s", records.best_seconds)));
    right.push(plain(format!("Best level: {}", records.best_level)));
    frame.render_widget(Paragraph::new(right), h_chunks[1]);

    render_status_bar(
        frame,
        v_chunks[1],
        "Press Space to start",
        Color::Rgb(255, 200, 0),
        &[("[Space/Enter]", "Start"), ("[Esc]", "Quit")],
    );
}

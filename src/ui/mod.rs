pub mod game_common;
pub mod runner_scene;
pub mod tutorial_scene;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use runner::runner::{Screen, Session};

/// Smallest terminal the scenes lay out in.
const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 20;

/// Main UI drawing function: picks the scene for the session's screen.
pub fn draw_ui(frame: &mut Frame, session: &Session) {
    let size = frame.size();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let message = format!("Terminal too small ({MIN_WIDTH}x{MIN_HEIGHT} needed)");
        let text = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(text, Rect { height: 1, ..size });
        return;
    }

    match session.screen {
        Screen::Tutorial => tutorial_scene::render_tutorial_scene(frame, size, &session.records),
        Screen::Playing | Screen::GameOver => {
            runner_scene::render_runner_scene(frame, size, session)
        }
    }
}

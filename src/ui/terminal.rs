use crate::app::{App, AppMode, RenderState};
use crate::ui::keymap::key_to_event;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::{
    cursor_offset, render_formula_line, render_help, render_reselect, render_result,
    render_suggestions,
};
use crossterm::event::{self, Event};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Clear,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::info;

/// How long to wait for input before ticking the app again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    max_visible_suggestions: u16,
    // dropped after the terminal so the screen is restored last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(max_visible_suggestions: usize) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            max_visible_suggestions: max_visible_suggestions.clamp(1, 32) as u16,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        info!("editor started");
        loop {
            if app.mode() == AppMode::Quit {
                info!("editor quit");
                return Ok(());
            }

            app.tick(Instant::now());
            self.render_frame(app)?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(app_event) = key_to_event(key, app.mode()) {
                        app.handle_event(app_event);
                    }
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let max_rows = self.max_visible_suggestions;

        self.terminal.draw(|frame| draw(frame, &render_state, max_rows))?;

        Ok(())
    }
}

fn draw(frame: &mut Frame, state: &RenderState, max_rows: u16) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let formula_area = chunks[0];
    frame.render_widget(render_formula_line(state), formula_area);
    frame.render_widget(render_result(&state.result), chunks[2]);
    frame.render_widget(render_help(state.mode), chunks[3]);

    if state.mode == AppMode::Editing {
        let x = formula_area.x + 1 + cursor_offset(state);
        let x = x.min(formula_area.right().saturating_sub(2));
        frame.set_cursor_position((x, formula_area.y + 1));
    }

    if let Some(view) = &state.reselect {
        let rows = (view.candidates.len().max(1) as u16).min(max_rows);
        let popup = dropdown_area(chunks[1], rows);
        let (list, mut list_state) = render_reselect(view);
        frame.render_widget(Clear, popup);
        frame.render_stateful_widget(list, popup, &mut list_state);
    } else if state.show_suggestions {
        let rows = (state.suggestions.len().max(1) as u16).min(max_rows);
        let popup = dropdown_area(chunks[1], rows);
        let (list, mut list_state) = render_suggestions(state);
        frame.render_widget(Clear, popup);
        frame.render_stateful_widget(list, popup, &mut list_state);
    }
}

/// Area directly under the input, tall enough for `rows` entries plus borders.
fn dropdown_area(below: Rect, rows: u16) -> Rect {
    Rect {
        x: below.x,
        y: below.y,
        width: below.width,
        height: (rows + 2).min(below.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_area_fits_rows() {
        let below = Rect::new(0, 3, 80, 20);
        assert_eq!(dropdown_area(below, 5), Rect::new(0, 3, 80, 7));
    }

    #[test]
    fn test_dropdown_area_clamped_to_space() {
        let below = Rect::new(0, 3, 80, 4);
        assert_eq!(dropdown_area(below, 8).height, 4);
    }
}

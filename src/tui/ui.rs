//! UI rendering

use super::app::{App, Focus, Notice};
use super::help::{get_help_text, status_hint};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

pub(crate) const OPERATION_BAR_HEIGHT: u16 = 3;
pub(crate) const MATRIX_MIN_HEIGHT: u16 = 6;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const ROW_HEADER_WIDTH: u16 = 4;
pub(crate) const COLUMN_SPACING: u16 = 1;
pub(crate) const INPUT_PANEL_WIDTH: u16 = 24;
pub(crate) const LOG_PANEL_WIDTH: u16 = 28;

/// Main body, operation bar, status bar.
pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(MATRIX_MIN_HEIGHT),
            Constraint::Length(OPERATION_BAR_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Matrix input, matrix table, operation log.
pub(crate) fn split_body(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(INPUT_PANEL_WIDTH),
            Constraint::Min(ROW_HEADER_WIDTH + 2),
            Constraint::Length(LOG_PANEL_WIDTH),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

pub fn draw(f: &mut Frame, app: &App) {
    let [body, operation, status] = split_main_chunks(f.area());
    let [input, matrix, log] = split_body(body);

    draw_matrix_input(f, app, input);
    draw_matrix(f, app, matrix);
    draw_log(f, app, log);
    draw_operation_bar(f, app, operation);
    draw_status_bar(f, app, status);

    if app.help_modal {
        draw_help_modal(f, app);
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Insert the cursor marker when the input has focus.
fn with_cursor(buffer: &str, cursor: usize, focused: bool) -> String {
    if !focused {
        return buffer.to_string();
    }
    let (before, after) = buffer.split_at(cursor.min(buffer.len()));
    format!("{}│{}", before, after)
}

fn draw_matrix_input(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::MatrixInput;
    let content = with_cursor(&app.matrix_input, app.matrix_cursor, focused);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Matrix ")
        .border_style(border_style(focused));
    let paragraph = Paragraph::new(content).block(block);
    f.render_widget(paragraph, area);
}

fn draw_matrix(f: &mut Frame, app: &App, area: Rect) {
    let view = app.view();
    let block = Block::default().borders(Borders::ALL).title(" Row Reduce ");

    if view.matrix.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Enter a matrix and press Enter",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(hint, area);
        return;
    }

    let header_style = Style::default().fg(Color::DarkGray);
    let mut header_cells = vec![Cell::from(" ")];
    for col in 0..view.matrix.col_count() {
        header_cells.push(Cell::from(format!("C{}", col + 1)).style(header_style));
    }
    let header = Row::new(header_cells).height(1);

    let mut rows = Vec::new();
    for (r, values) in view.matrix.rows().iter().enumerate() {
        let mut cells = vec![Cell::from(format!("R{}", r + 1)).style(header_style)];
        for value in values {
            let display = value.to_string();
            let style = if display.starts_with('#') {
                Style::default().fg(Color::Red)
            } else if value.is_fraction() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            cells.push(Cell::from(display).style(style));
        }
        rows.push(Row::new(cells));
    }

    let mut widths = vec![Constraint::Length(ROW_HEADER_WIDTH)];
    widths.extend((0..view.matrix.col_count()).map(|_| Constraint::Length(app.col_width)));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(COLUMN_SPACING);
    f.render_widget(table, area);
}

fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .view()
        .log
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(entry.clone()),
            ])
        })
        .collect();

    // Keep the newest entries visible.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Log "))
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

fn draw_operation_bar(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Operation;
    let content = with_cursor(&app.operation_input, app.operation_cursor, focused);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Operation ")
        .border_style(border_style(focused));
    f.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let view = app.view();
    let (message, style) = match &view.notice {
        Some(Notice::Error(_, msg)) => (format!("Error: {}", msg), Style::default().fg(Color::Red)),
        Some(Notice::Info(msg)) => (msg.clone(), Style::default().fg(Color::Yellow)),
        None => (status_hint().to_string(), Style::default().fg(Color::DarkGray)),
    };

    let mut spans = vec![Span::styled(message, style)];
    if app.show_timer {
        spans.push(Span::styled("  |  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(view.timer.label(), Style::default().fg(Color::Green)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn draw_help_modal(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 80, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help (Esc to close) ")
        .border_style(Style::default().fg(Color::Green))
        .style(Style::default().fg(Color::White).bg(Color::Black));

    let lines: Vec<Line> = get_help_text()
        .into_iter()
        .map(|text| {
            let style = if text.starts_with("  ") || text.is_empty() {
                Style::default().fg(Color::White)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn draws_matrix_fractions_and_log() {
        let mut app = App::new(&Config::default());
        app.matrix_input = "7 9\n1 2".to_string();
        app.set_matrix();
        app.operation_input = "R1 = R1 / 3".to_string();
        app.submit_operation();

        let screen = render(&app);
        assert!(screen.contains("7/3"));
        assert!(screen.contains("C2"));
        assert!(screen.contains("R2"));
        assert!(screen.contains("1. R1 = R1 / 3"));
    }

    #[test]
    fn draws_errors_in_status_bar() {
        let mut app = App::new(&Config::default());
        app.matrix_input = "1 2\n3 4".to_string();
        app.set_matrix();
        app.operation_input = "R1 = R2 * 3".to_string();
        app.submit_operation();

        let screen = render(&app);
        assert!(screen.contains("Error:"));
    }

    #[test]
    fn empty_matrix_shows_hint_and_help_overlays() {
        let mut app = App::new(&Config::default());
        assert!(render(&app).contains("Enter a matrix"));
        app.open_help();
        assert!(render(&app).contains("Swap rows"));
    }

    #[test]
    fn timer_reads_zero_after_reset() {
        let mut app = App::new(&Config::default());
        app.matrix_input = "1 2".to_string();
        app.set_matrix();
        assert!(render(&app).contains("Time: 0 seconds"));

        app.reset();
        let screen = render(&app);
        assert!(screen.contains("Reset"));
        assert!(screen.contains("Time: 0 seconds"));

        app.show_timer = false;
        assert!(!render(&app).contains("Time:"));
    }

    #[test]
    fn cursor_marker_only_in_focused_input() {
        assert_eq!(with_cursor("R1", 1, true), "R│1");
        assert_eq!(with_cursor("R1", 1, false), "R1");
    }
}

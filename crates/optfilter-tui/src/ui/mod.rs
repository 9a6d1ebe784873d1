use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use optfilter_core::{SelectControl, PLACEHOLDER_INDEX};

use crate::app::App;

const ACCENT: Color = Color::Blue;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(size);

    render_bar(frame, chunks[0], app);
    render_options(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help(frame, size);
    }
}

fn render_bar(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Filters");
    let Some(bar) = &app.bar else {
        let paragraph = Paragraph::new(Span::styled(
            "no filters installed",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let mut spans = Vec::with_capacity(bar.len() * 2);
    for (index, button) in bar.buttons().iter().enumerate() {
        let mut style = if index == bar.active() {
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT)
        };
        if index == app.focus {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", button.caption), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_options(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let total = app.control().map(|control| control.len()).unwrap_or(0);
    let rows = app.visible_options();
    let title = format!("Options ({}/{})", rows.len(), total);

    if rows.is_empty() {
        let paragraph = Paragraph::new("No options.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let selected = app.selected_index();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|(index, label)| {
            let marker = if Some(*index) == selected { "● " } else { "  " };
            let style = if *index == PLACEHOLDER_INDEX {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::styled(label.to_string(), style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.cursor.min(rows.len() - 1)));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let hint = "h/l focus filter  enter apply  j/k move  space select  ? help  q quit";
    let mut lines = vec![Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    ))];

    if let Some(warning) = &app.warning {
        lines.push(Line::from(Span::styled(
            warning.clone(),
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        )));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let modal = centered_rect(60, 50, area);
    frame.render_widget(Clear, modal);

    let text = vec![
        Line::from("Global: q/esc quit, Ctrl+C quit, ? help"),
        Line::from("Filters: h/l or left/right move focus, enter apply"),
        Line::from("Options: j/k or up/down move, g/G first/last, space select"),
        Line::from(""),
        Line::from("Options are grouped by the text inside their first (...) pair."),
        Line::from("Applying a filter resets the selection to the first entry."),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

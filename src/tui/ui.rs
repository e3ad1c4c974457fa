use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use super::app::{App, InputMode};
use super::theme::Theme;
use crate::insights;
use crate::model::Task;
use crate::query::StatusFilter;

pub fn render(frame: &mut Frame, app: &mut App, theme: &Theme) {
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    render_header(frame, chunks[0], theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(chunks[1]);

    render_task_area(frame, body[0], app, theme);
    render_insights(frame, body[1], app, theme);
    render_help(frame, chunks[2], app, theme);

    if app.input_mode == InputMode::Adding {
        render_add_form(frame, app, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    // Badge and connect label are placeholders with no backing action
    let header = Line::from(vec![
        Span::styled("⚡ CyberTasks", Style::default().fg(theme.neon_blue).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled("[ AI Ready ]", Style::default().fg(theme.neon_blue)),
        Span::raw("  "),
        Span::styled("Connect Supabase", Style::default().fg(theme.muted)),
    ]);
    let widget = Paragraph::new(header).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.neon_pink)),
    );
    frame.render_widget(widget, area);
}

fn render_task_area(frame: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let searching = app.input_mode == InputMode::Searching;
    let search_text = if searching {
        format!("{}_", app.board.search)
    } else if app.board.search.is_empty() {
        "Search tasks...".to_string()
    } else {
        app.board.search.clone()
    };
    let search_style = if app.board.search.is_empty() && !searching {
        Style::default().fg(theme.muted)
    } else {
        Style::default().fg(theme.text)
    };
    let search = Paragraph::new(format!("🔍 {search_text}")).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(searching)),
    );
    frame.render_widget(search, chunks[0]);

    let tabs = Tabs::new(StatusFilter::ALL.map(StatusFilter::label))
        .select(app.board.filter.index())
        .style(Style::default().fg(theme.muted))
        .highlight_style(Style::default().fg(theme.background).bg(theme.neon_blue).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).border_style(theme.border_style(false)));
    frame.render_widget(tabs, chunks[1]);

    render_task_list(frame, chunks[2], app, theme);
}

fn render_task_list(frame: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let visible = app.board.visible_tasks();
    let title = insights::list_heading(app.board.filter, visible.len());
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(theme.text).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));

    if visible.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("No tasks found", Style::default().fg(theme.muted)),
            Line::styled(insights::empty_hint(&app.board.search), Style::default().fg(theme.muted)),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let editing = match &app.input_mode {
        InputMode::Editing(id) => Some(id),
        _ => None,
    };
    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| {
            if editing == Some(&task.id) {
                let line = Line::from(vec![
                    Span::styled("✎ ", Style::default().fg(theme.neon_blue)),
                    Span::styled(format!("{}_", app.edit_text), Style::default().fg(theme.text)),
                ]);
                ListItem::new(line)
            } else {
                task_item(task, theme)
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selection())
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn task_item<'a>(task: &'a Task, theme: &Theme) -> ListItem<'a> {
    let (status, status_style) = if task.completed {
        ("✓", Style::default().fg(theme.neon_blue))
    } else {
        ("○", Style::default().fg(theme.border))
    };
    let text_style = if task.completed {
        theme.completed_task()
    } else {
        Style::default().fg(theme.text)
    };

    let mut spans = vec![
        Span::styled(format!("{status} "), status_style),
        Span::styled(task.text.as_str(), text_style),
    ];
    if let Some(label) = task.category.label() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{label}]"),
            Style::default().fg(theme.category_color(task.category)),
        ));
    }
    let created = task.created_at.with_timezone(&Local).format("%Y-%m-%d");
    spans.push(Span::styled(format!("  {created}"), Style::default().fg(theme.muted)));

    ListItem::new(Line::from(spans))
}

fn render_insights(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let stats = app.board.stats();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Min(4),
        ])
        .split(area);

    let stat_colors = [theme.neon_blue, theme.neon_pink, theme.neon_purple];
    let stat_lines: Vec<Line> = insights::quick_stats(&stats)
        .into_iter()
        .zip(stat_colors)
        .map(|(stat, color)| {
            Line::from(vec![
                Span::styled(format!("{:<20}", stat.title), Style::default().fg(theme.muted)),
                Span::styled(stat.value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(stat_lines).block(panel_block("Quick Stats", theme)),
        chunks[0],
    );

    let suggestion_lines: Vec<Line> = insights::shown_suggestions()
        .iter()
        .map(|s| Line::styled(format!("• {s}"), Style::default().fg(theme.muted)))
        .collect();
    frame.render_widget(
        Paragraph::new(suggestion_lines)
            .wrap(Wrap { trim: true })
            .block(panel_block("AI Suggestions", theme)),
        chunks[1],
    );

    let summary_lines: Vec<Line> = insights::daily_summary(&stats)
        .into_iter()
        .map(|s| Line::styled(s, Style::default().fg(theme.muted)))
        .collect();
    frame.render_widget(
        Paragraph::new(summary_lines)
            .wrap(Wrap { trim: true })
            .block(panel_block("Daily Summary", theme)),
        chunks[2],
    );

    let notice = Paragraph::new(vec![
        Line::styled("● Backend Ready", Style::default().fg(theme.amber)),
        Line::styled(
            "Connect to Supabase for authentication, real-time sync, and AI features.",
            Style::default().fg(theme.muted),
        ),
    ])
    .wrap(Wrap { trim: true })
    .block(panel_block("Status", theme));
    frame.render_widget(notice, chunks[3]);
}

fn panel_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(theme.text)))
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
}

fn render_help(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let help_text = match app.input_mode {
        InputMode::Normal => {
            "j/k: Move, a: Add, Space: Complete, e: Edit, d: Delete, /: Search, Tab/1-3: Filter, Esc: Clear search, q: Quit"
        }
        InputMode::Adding => "Enter: Add task, Esc: Cancel",
        InputMode::Editing(_) => "Enter: Save, Esc: Cancel",
        InputMode::Searching => "Type to search, Enter: Done, Esc: Clear",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(theme.neon_purple))
        .block(Block::default().borders(Borders::ALL).border_style(theme.border_style(false)));
    frame.render_widget(help, area);
}

fn render_add_form(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::styled(
            if app.input_text.is_empty() {
                "What needs to be done?".to_string()
            } else {
                format!("{}_", app.input_text)
            },
            if app.input_text.is_empty() {
                Style::default().fg(theme.muted)
            } else {
                Style::default().fg(theme.text)
            },
        ),
        Line::raw(""),
    ];
    match app.category_hint() {
        Some(category) => lines.push(Line::from(vec![
            Span::styled("✨ AI suggests: ", Style::default().fg(theme.muted)),
            Span::styled(
                category.to_string(),
                Style::default().fg(theme.category_color(category)).add_modifier(Modifier::BOLD),
            ),
        ])),
        None => lines.push(Line::raw("")),
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "💡 Tip: Connect to Supabase for AI-powered task categorization and real-time sync across devices.",
        Style::default().fg(theme.muted),
    ));

    let form = Paragraph::new(lines).wrap(Wrap { trim: true }).style(Style::default().bg(theme.surface)).block(
        Block::default()
            .title(Span::styled(" + Add New Task ", Style::default().fg(theme.neon_blue)))
            .borders(Borders::ALL)
            .border_style(theme.border_style(true)),
    );
    frame.render_widget(form, area);
}

/// A rectangle `percent_x` wide and `height` rows tall, centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::{Backend, TestBackend},
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use unicode_width::UnicodeWidthStr;

use crate::actions::QuickAction;
use crate::app::{Action, App};
use crate::display::{
    priority_color, priority_glyph, status_badge, status_indicator, Urgency, PRIORITY_LOW,
};
use crate::task::Task;
use crate::view::{SortKey, StatusFilter, TaskListing};

const BROWN: Color = Color::Rgb(0x8B, 0x45, 0x13);
const SIENNA: Color = Color::Rgb(0xA0, 0x52, 0x2D);
const TAN: Color = Color::Rgb(0xDE, 0xB8, 0x87);
const TRACK: Color = Color::Rgb(0xE6, 0xDC, 0xC6);

pub const NO_MATCHES: &str =
    "🎉 No tasks found with the selected filter. Great job if you've completed everything!";

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == Action::Quit {
                return Ok(());
            }
        }
    }
}

/// Render one frame off-screen and return it as plain text.
pub fn render_snapshot(app: &App, width: u16, height: u16) -> io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| draw(f, app))?;
    Ok(buffer_to_text(terminal.backend().buffer()))
}

pub fn buffer_to_text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width.max(1));
    buffer
        .content
        .chunks(width)
        .map(|row| {
            let mut line = String::new();
            let mut skip = 0;
            for cell in row {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = cell.symbol();
                line.push_str(symbol);
                skip = symbol.width().saturating_sub(1);
            }
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(5), // welcome
            Constraint::Length(4), // metric tiles
            Constraint::Length(6), // progress + breakdown
            Constraint::Length(3), // controls
            Constraint::Min(6),    // tasks
            Constraint::Length(3), // quick actions
            Constraint::Length(1), // action message
            Constraint::Length(2), // footer
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    draw_welcome(f, chunks[1], app);
    draw_metrics(f, chunks[2], app);
    draw_progress(f, chunks[3], app);
    draw_controls(f, chunks[4], app);
    draw_tasks(f, chunks[5], app);
    draw_actions(f, chunks[6], app);
    draw_message(f, chunks[7], app);
    draw_footer(f, chunks[8], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let club = &app.config.club;
    let text = Text::from(vec![
        Line::from(Span::styled(
            format!("⚡ {}", club.name),
            Style::default().fg(BROWN).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(club.tagline.as_str(), Style::default().fg(SIENNA))),
    ]);
    let header = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(TAN)),
    );
    f.render_widget(header, area);
}

fn draw_welcome(f: &mut Frame, area: Rect, app: &App) {
    let member = &app.config.member;
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let text = Text::from(vec![
        Line::from(Span::styled(format!("👋 Welcome back, {}!", member.name), bold)),
        Line::from("Ready to tackle your development tasks? Let's make today productive! 🚀"),
        Line::from(vec![
            Span::styled("Member ID: ", bold),
            Span::raw(format!("{} | ", member.member_id)),
            Span::styled("Level: ", bold),
            Span::raw(format!("{} | ", member.level)),
            Span::styled("Points: ", bold),
            Span::raw(member.points.to_string()),
        ]),
    ]);
    let welcome = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(bordered(""));
    f.render_widget(welcome, area);
}

fn draw_metrics(f: &mut Frame, area: Rect, app: &App) {
    let stats = app.stats();
    let tiles = [
        (stats.total.to_string(), "Total Tasks"),
        (stats.completed.to_string(), "Completed"),
        (stats.pending.to_string(), "Pending"),
        (stats.total_points.to_string(), "Total Points"),
    ];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (i, (number, label)) in tiles.into_iter().enumerate() {
        let title = if i == 0 { "📊 Your Progress Overview" } else { "" };
        let tile = Paragraph::new(Text::from(vec![
            Line::from(Span::styled(
                number,
                Style::default().fg(BROWN).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(SIENNA))),
        ]))
        .alignment(Alignment::Center)
        .block(bordered(title));
        f.render_widget(tile, columns[i]);
    }
}

fn draw_progress(f: &mut Frame, area: Rect, app: &App) {
    let stats = app.stats();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(area);

    let completion = stats.completion_percentage();
    let gauge = Gauge::default()
        .block(bordered("📈 Your Achievement Progress"))
        .gauge_style(Style::default().fg(PRIORITY_LOW).bg(TRACK))
        .ratio((completion / 100.0).clamp(0.0, 1.0))
        .label(Span::styled(
            format!("{:.1}% Complete", completion),
            Style::default().fg(BROWN).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, columns[0]);

    let lines: Vec<Line> = stats
        .breakdown()
        .into_iter()
        .map(|share| {
            let (emoji, color) = status_indicator(share.status);
            Line::from(vec![
                Span::styled("▌", Style::default().fg(color)),
                Span::raw(format!("{} ", emoji)),
                Span::styled(
                    format!("{}:", share.status),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {} ({:.0}%)", share.count, share.percentage)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(bordered("📊 Task Status")),
        columns[1],
    );
}

fn draw_controls(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(3, 5), Constraint::Ratio(2, 5)])
        .split(area);

    let filters: Vec<Span> = StatusFilter::OPTIONS
        .into_iter()
        .flat_map(|option| [option_span(option.label(), option == app.filter), Span::raw(" ")])
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(filters)).block(bordered("🔍 Filter by Status (f)")),
        columns[0],
    );

    let sorts: Vec<Span> = SortKey::OPTIONS
        .into_iter()
        .flat_map(|option| [option_span(option.label(), option == app.sort), Span::raw(" ")])
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(sorts)).block(bordered("📊 Sort by (s)")),
        columns[1],
    );
}

fn option_span(label: &str, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            format!("[{}]", label),
            Style::default().fg(BROWN).add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
    } else {
        Span::raw(format!(" {} ", label))
    }
}

fn draw_tasks(f: &mut Frame, area: Rect, app: &App) {
    let listing = app.listing();
    let title = format!(
        "📋 Your Assigned Tasks · Showing {} of {}",
        listing.len(),
        app.store.len()
    );

    match listing {
        TaskListing::NoMatches => {
            let empty = Paragraph::new(NO_MATCHES)
                .style(Style::default().fg(Color::Cyan))
                .wrap(Wrap { trim: true })
                .block(bordered(&title));
            f.render_widget(empty, area);
        }
        TaskListing::Tasks(tasks) => {
            let today = app.clock.today();
            let items: Vec<ListItem> = tasks
                .iter()
                .map(|t| ListItem::new(task_card(t, Urgency::classify(t.due_date, today))))
                .collect();
            let list = List::new(items)
                .block(bordered(&title))
                .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                .highlight_symbol("» ");
            let mut state = ListState::default().with_selected(Some(app.selected_task));
            f.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn task_card(task: &Task, urgency: Urgency) -> Text<'static> {
    let marker = || Span::styled("▌ ", Style::default().fg(priority_color(&task.priority)));
    let label = Style::default().fg(BROWN).add_modifier(Modifier::BOLD);

    Text::from(vec![
        Line::from(vec![
            marker(),
            Span::styled(
                format!("{} {}", priority_glyph(&task.priority), task.title),
                label,
            ),
            Span::raw("  "),
            Span::styled(format!(" {} ", task.status), status_badge(task.status)),
        ]),
        Line::from(vec![
            marker(),
            Span::styled(
                urgency.text(),
                Style::default().fg(urgency.color()).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            marker(),
            Span::styled(task.description.clone(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            marker(),
            Span::styled("Task ID: ", label),
            Span::raw(format!("{} | ", task.id)),
            Span::styled("Priority: ", label),
            Span::raw(format!("{} | ", task.priority)),
            Span::styled("Points: ", label),
            Span::raw(task.points.to_string()),
            Span::raw("    "),
            Span::styled("Assigned: ", Style::default().fg(SIENNA).add_modifier(Modifier::BOLD)),
            Span::styled(task.assigned_date.to_string(), Style::default().fg(SIENNA)),
        ]),
        Line::default(),
    ])
}

fn draw_actions(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (i, action) in QuickAction::ALL.into_iter().enumerate() {
        let border_style = if action == app.focused() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(TAN)
        };
        let button = Paragraph::new(format!("{} ({})", action.label(), i + 1))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(button, columns[i]);
    }
}

fn draw_message(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.message {
        Some(action) => Line::from(Span::styled(
            format!("ℹ️ {}", action.message()),
            Style::default().fg(Color::Cyan),
        )),
        None => Line::from(Span::styled(
            "f/F filter · s/S sort · ↑/↓ tasks · ←/→ Enter or 1-3 actions · Esc dismiss · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let club = &app.config.club;
    let text = Text::from(vec![
        Line::from(vec![
            Span::styled(
                format!("💡 {} Tip: ", club.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(club.tip.as_str()),
        ]),
        Line::from("Need help? Contact your mentor or check our community resources 📚"),
    ]);
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(SIENNA)),
        area,
    );
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TAN))
}

use std::sync::OnceLock;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Popup};
use crate::money::format_currency;
use crate::notification::{Notification, Severity};
use crate::theme::Theme;

// Theme is resolved once at startup from config overrides
static THEME: OnceLock<Theme> = OnceLock::new();

pub fn init_theme(theme: Theme) {
    let _ = THEME.set(theme);
}

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

// Helper functions to get theme colors
fn warning() -> Color { theme().warning }
fn danger() -> Color { theme().danger }
fn success() -> Color { theme().success }
fn text() -> Color { theme().text }
fn text_dim() -> Color { theme().text_dim }
fn border() -> Color { theme().border }
fn border_active() -> Color { theme().border_active }
fn header() -> Color { theme().header }

// Notification toast geometry (top-right corner, stacked downward)
const TOAST_MARGIN: u16 = 2;
const TOAST_MIN_WIDTH: u16 = 30;
const TOAST_HEIGHT: u16 = 3;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(1), // Header line
            Constraint::Min(5),    // Sale entry box
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_header(f, chunks[0]);
    draw_sale_box(f, app, chunks[1]);
    draw_footer(f, app, chunks[2]);

    // Notifications stack above everything except popups
    draw_notifications(f, app);

    // Draw popups on top
    match app.popup {
        Popup::None => {}
        Popup::Help => draw_help_popup(f),
        Popup::ConfirmQuit => draw_confirm_popup(f),
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![Span::styled(
        "Shop Management System",
        Style::default().fg(header()).add_modifier(Modifier::BOLD),
    )]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_sale_box(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Sale Amount ",
            Style::default().fg(border_active()).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_active()));

    let entry = if app.amount_input.is_empty() {
        Line::from(Span::styled(
            "Type an amount and press Enter",
            Style::default().fg(text_dim()),
        ))
    } else {
        Line::from(vec![
            Span::styled(&app.amount_input, Style::default().fg(text())),
            Span::styled("█", Style::default().fg(border_active())),
        ])
    };

    // Live preview of the formatted total
    let preview = if app.amount_input.is_empty() {
        Line::from("")
    } else {
        let formatted = format_currency(app.amount_input.as_str());
        let color = if formatted.contains("NaN") { warning() } else { success() };
        Line::from(vec![
            Span::styled("= ", Style::default().fg(text_dim())),
            Span::styled(formatted, Style::default().fg(color)),
        ])
    };

    let content = Paragraph::new(vec![Line::from(""), entry, preview]).block(block);
    f.render_widget(content, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints: Vec<(&str, &str)> = match app.popup {
        Popup::ConfirmQuit => vec![("y", "Yes"), ("n", "No")],
        _ => vec![("Enter", "Total"), ("Esc", "Quit"), ("?", "Help")],
    };

    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(border_active())),
                Span::styled(format!(" {} │ ", action), Style::default().fg(text_dim())),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

/// Draw live notifications anchored to the top-right corner, newest last,
/// clipped at the bottom screen edge.
fn draw_notifications(f: &mut Frame, app: &App) {
    if app.notifications.is_empty() {
        return;
    }

    let area = f.area();
    let mut top = TOAST_MARGIN;
    let mut shown = 0;

    for notification in app.notifications.iter() {
        if top + TOAST_HEIGHT > area.height {
            break;
        }
        let rect = toast_rect(notification, area, top);
        f.render_widget(Clear, rect);
        f.render_widget(toast_widget(notification), rect);
        top += TOAST_HEIGHT;
        shown += 1;
    }

    // Stacking is unbounded; the screen is not
    let hidden = app.notifications.len().saturating_sub(shown);
    if hidden > 0 && top < area.height {
        let label = format!("(+{} more)", hidden);
        let width = (label.chars().count() as u16).min(area.width);
        let rect = Rect {
            x: area.width.saturating_sub(width + TOAST_MARGIN),
            y: top,
            width,
            height: 1,
        };
        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(text_dim()))),
            rect,
        );
    }
}

fn toast_rect(notification: &Notification, area: Rect, top: u16) -> Rect {
    let label_width = notification.message.chars().count().min(u16::MAX as usize) as u16;
    let width = (label_width + 4)
        .max(TOAST_MIN_WIDTH)
        .min(area.width.saturating_sub(TOAST_MARGIN * 2));
    let x = area.width.saturating_sub(width + TOAST_MARGIN);

    Rect {
        x,
        y: top,
        width,
        height: TOAST_HEIGHT,
    }
}

fn toast_widget(notification: &Notification) -> Paragraph<'_> {
    let color = theme().severity(notification.severity);
    let title = match notification.severity {
        Severity::Info => " Info ",
        Severity::Success => " Success ",
        Severity::Warning => " Warning ",
        Severity::Danger => " Danger ",
    };

    Paragraph::new(Line::from(Span::styled(
        notification.message.as_str(),
        Style::default().fg(text()),
    )))
    .block(
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    )
}

fn draw_confirm_popup(f: &mut Frame) {
    let popup_area = centered_rect(40, 20, f.area());

    f.render_widget(Clear, popup_area);

    let confirm = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quit the Shop Management System?",
            Style::default().fg(warning()),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  y", Style::default().fg(success()).add_modifier(Modifier::BOLD)),
            Span::raw(" Yes   "),
            Span::styled("n", Style::default().fg(danger()).add_modifier(Modifier::BOLD)),
            Span::raw(" No"),
        ]),
    ])
    .block(
        Block::default()
            .title(Span::styled(" Confirm ", Style::default().fg(warning())))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(warning())),
    )
    .alignment(Alignment::Center);

    f.render_widget(confirm, popup_area);
}

fn draw_help_popup(f: &mut Frame) {
    let popup_area = centered_rect(50, 50, f.area());

    f.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            "═══ Keys ═══",
            Style::default().fg(header()).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  Enter     ", Style::default().fg(border_active())),
            Span::raw("Format the entered amount as a sale total"),
        ]),
        Line::from(vec![
            Span::styled("  Backspace ", Style::default().fg(border_active())),
            Span::raw("Delete the last character"),
        ]),
        Line::from(vec![
            Span::styled("  Esc       ", Style::default().fg(border_active())),
            Span::raw("Quit (asks for confirmation)"),
        ]),
        Line::from(vec![
            Span::styled("  ?         ", Style::default().fg(border_active())),
            Span::raw("Toggle this help"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Notifications disappear after 3 seconds.",
            Style::default().fg(text_dim()),
        )),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(Span::styled(" Help ", Style::default().fg(border_active())))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border())),
    );

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

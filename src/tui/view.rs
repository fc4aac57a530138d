//! Pure rendering: map App state to ratatui widget trees.
//!
//! The layout is fixed: header, a two-column grid, footer. The grid's left
//! column holds the control and sync panels; the right column stacks the
//! status table over the alerts. Every style comes from the [`Painter`],
//! so switching themes repaints everything without touching this module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Padding, Paragraph, Row, Sparkline, Table, TableState};

use crate::sample::{
    format_ratio, ALERTS, BUTTONS, COMMAND_PLACEHOLDER, LOG_LINES, PILOTS, SUB_TITLE,
    TABLE_COLUMNS, TABLE_ROWS, TITLE,
};
use crate::stylesheet::{Hatch, Size};

use super::state::App;
use super::theme::{self, Painter};

/// Footer keybinding hints.
const KEY_HINTS: [(&str, &str); 2] = [("q", "Quit"), ("t", "Toggle Theme")];

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the dashboard to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let painter = Painter::new(&app.sheet, app.registry.active());
    let area = frame.area();

    frame.render_widget(Block::new().style(painter.style(theme::SCREEN)), area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(0),    // grid
        Constraint::Length(1), // footer
    ])
    .split(area);

    frame.render_widget(render_header(&painter), chunks[0]);
    render_grid(app, &painter, frame, chunks[1]);
    render_footer(app.theme_name(), &painter, frame, chunks[2]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_header(painter: &Painter) -> Paragraph<'static> {
    Paragraph::new(Line::from(format!("{} - {}", TITLE, SUB_TITLE)))
        .alignment(Alignment::Center)
        .style(painter.style(theme::HEADER))
}

fn render_footer(theme_name: &str, painter: &Painter, frame: &mut Frame, area: Rect) {
    let base = painter.style(theme::FOOTER);
    let key = base.patch(painter.style(theme::FOOTER_KEY));

    let mut spans = Vec::new();
    for (k, label) in KEY_HINTS {
        spans.push(Span::styled(format!(" {} ", k), key));
        spans.push(Span::styled(format!("{} ", label), base));
    }

    let name = format!("theme: {} ", theme_name);
    let [hints, current] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(name.chars().count() as u16),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), hints);
    frame.render_widget(
        Paragraph::new(name).alignment(Alignment::Right).style(base),
        current,
    );
}

/// Two columns with a one-cell gutter, inside one cell of screen padding.
fn render_grid(app: &App, painter: &Painter, frame: &mut Frame, area: Rect) {
    let inner = area.inner(Margin::new(1, 1));

    let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
        .spacing(1)
        .areas(inner);
    let [control, sync] = Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)])
        .spacing(1)
        .areas(left);

    render_control_panel(painter, frame, control);
    render_sync_panel(app, painter, frame, sync);
    render_status_column(painter, frame, right);
}

fn panel_block(painter: &Painter) -> Block<'static> {
    Block::bordered()
        .border_style(painter.border(theme::PANEL))
        .padding(Padding::horizontal(1))
}

fn panel_title(text: &'static str, painter: &Painter) -> Paragraph<'static> {
    Paragraph::new(text).style(painter.style(theme::PANEL_TITLE))
}

/// Height constraint from the style sheet, `content` when unsized.
fn height(painter: &Painter, selector: &str, content: u16) -> Constraint {
    painter
        .sheet()
        .height(selector)
        .unwrap_or(Size::Auto)
        .constraint(content)
}

fn width(painter: &Painter, selector: &str, content: u16) -> Constraint {
    painter
        .sheet()
        .width(selector)
        .unwrap_or(Size::Auto)
        .constraint(content)
}

// ============================================================================
// PANEL: CONTROL
// ============================================================================

fn render_control_panel(painter: &Painter, frame: &mut Frame, area: Rect) {
    let block = panel_block(painter);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title, _, input, buttons, rule, log_title, _, log] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        height(painter, theme::INPUT, 3),
        height(painter, theme::BUTTON, 3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(inner);

    frame.render_widget(panel_title("CONTROL INTERFACE", painter), title);

    // The input holds focus, as the first focusable widget
    let input_border = painter
        .border(theme::INPUT)
        .patch(painter.border(theme::INPUT_FOCUS));
    frame.render_widget(
        Paragraph::new(COMMAND_PLACEHOLDER)
            .style(painter.style(theme::INPUT))
            .block(Block::bordered().border_style(input_border)),
        input,
    );

    render_buttons(painter, frame, buttons);

    frame.render_widget(
        Paragraph::new("─".repeat(rule.width as usize)).style(painter.style(theme::RULE)),
        rule,
    );

    frame.render_widget(panel_title("OPERATION LOG", painter), log_title);
    render_log(painter, frame, log);
}

fn render_buttons(painter: &Painter, frame: &mut Frame, area: Rect) {
    let mut widths: Vec<Constraint> = BUTTONS
        .iter()
        .map(|(label, _)| Constraint::Length(label.chars().count() as u16 + 4))
        .collect();
    widths.push(Constraint::Fill(1));

    let cells = Layout::horizontal(widths).spacing(1).split(area);

    for ((label, variant), cell) in BUTTONS.iter().zip(cells.iter()) {
        let (body, border) = painter.button(*variant);
        frame.render_widget(
            Paragraph::new(*label)
                .alignment(Alignment::Center)
                .style(body)
                .block(Block::bordered().border_style(border)),
            *cell,
        );
    }
}

/// Log pinned to its newest lines, like a tailing log view.
fn render_log(painter: &Painter, frame: &mut Frame, area: Rect) {
    let block = Block::bordered().border_style(painter.border(theme::LOG));
    let visible = block.inner(area).height as usize;
    let scroll = LOG_LINES.len().saturating_sub(visible) as u16;

    let lines: Vec<Line> = LOG_LINES.iter().map(|l| Line::from(*l)).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .style(painter.style(theme::LOG))
            .block(block)
            .scroll((scroll, 0)),
        area,
    );
}

// ============================================================================
// PANEL: SYNC METRICS
// ============================================================================

fn render_sync_panel(app: &App, painter: &Painter, frame: &mut Frame, area: Rect) {
    let block = panel_block(painter);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(hatch) = painter.hatch(theme::SYNC_PANEL) {
        render_hatch(hatch, frame, area.inner(Margin::new(1, 1)));
    }

    // title, gap, then each pilot row followed by a gap
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    for _ in PILOTS {
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1)); // harmonics title
    constraints.push(Constraint::Length(1)); // sparkline margin
    constraints.push(height(painter, theme::SPARKLINE, 3));
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(inner);

    frame.render_widget(panel_title("SYNC METRICS", painter), rows[0]);

    for (i, (label, percent)) in PILOTS.iter().enumerate() {
        render_metric_row(label, *percent, painter, frame, rows[2 + i * 2]);
    }

    let after = 2 + PILOTS.len() * 2;
    frame.render_widget(panel_title("HARMONICS", painter), rows[after]);
    frame.render_widget(
        Sparkline::default()
            .data(app.harmonics.iter().copied())
            .style(painter.style(theme::SPARKLINE)),
        rows[after + 2],
    );
}

fn render_metric_row(label: &str, percent: f64, painter: &Painter, frame: &mut Frame, area: Rect) {
    let [label_area, value_area, bar_area] = Layout::horizontal([
        width(painter, theme::METRIC_LABEL, label.chars().count() as u16),
        width(painter, theme::METRIC_VALUE, 6),
        width(painter, theme::PROGRESS_BAR, 0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(label.to_string()).style(painter.style(theme::METRIC_LABEL)),
        label_area,
    );
    frame.render_widget(
        Paragraph::new(format_ratio(percent))
            .alignment(Alignment::Right)
            .style(painter.style(theme::METRIC_VALUE)),
        value_area,
    );

    // one cell of left padding between the value and the bar
    let bar_area = Rect {
        x: bar_area.x.saturating_add(1),
        width: bar_area.width.saturating_sub(1),
        ..bar_area
    };
    frame.render_widget(
        Gauge::default()
            .gauge_style(painter.style(theme::PROGRESS_BAR))
            .ratio((percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{:.0}%", percent)),
        bar_area,
    );
}

fn render_hatch(hatch: Hatch, frame: &mut Frame, area: Rect) {
    let row: String = std::iter::repeat_n(hatch.glyph, area.width as usize).collect();
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from(row.clone())).collect();
    frame.render_widget(Paragraph::new(lines).style(hatch.style), area);
}

// ============================================================================
// PANEL: STATUS COLUMN
// ============================================================================

fn render_status_column(painter: &Painter, frame: &mut Frame, area: Rect) {
    // title, gap, one line per alert, two borders
    let alerts_content = ALERTS.len() as u16 + 4;

    let [status, alerts] = Layout::vertical([
        height(painter, theme::STATUS_PANEL, 0),
        height(painter, theme::ALERTS_PANEL, alerts_content),
    ])
    .spacing(1)
    .areas(area);

    render_status_panel(painter, frame, status);
    render_alerts_panel(painter, frame, alerts);
}

fn render_status_panel(painter: &Painter, frame: &mut Frame, area: Rect) {
    let block = panel_block(painter);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title, _, table_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(panel_title("SYSTEM STATUS", painter), title);

    let header = Row::new(TABLE_COLUMNS).style(painter.style(theme::DATATABLE_HEADER));
    let rows = TABLE_ROWS.iter().map(|row| Row::new(*row));
    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Length(4),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .style(painter.style(theme::DATATABLE))
    .row_highlight_style(painter.style(theme::DATATABLE_CURSOR));

    // Cursor rests on the first row
    let mut state = TableState::default().with_selected(Some(0));
    frame.render_stateful_widget(table, table_area, &mut state);
}

fn render_alerts_panel(painter: &Painter, frame: &mut Frame, area: Rect) {
    let block = panel_block(painter);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled("SYSTEM ALERTS", painter.style(theme::PANEL_TITLE))),
        Line::from(""),
    ];
    for (text, role) in ALERTS {
        lines.push(Line::from(Span::styled(text, painter.role(role))));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// TESTS
// ============================================================================

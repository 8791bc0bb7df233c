use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;

const HEADERS: [&str; 4] = ["Currency", "We Buy", "Exchange Rate", "We Sell"];

pub fn draw(f: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(f.area());

    draw_rates(f, root[0], app);
    draw_footer(f, root[1], app);

    if app.editor.is_open() {
        let area = center_rect(root[0], 50, 9);
        f.render_widget(Clear, area);
        draw_add_modal(f, area, app);
    }
}

fn draw_rates(f: &mut Frame, area: Rect, app: &mut App) {
    let header = Row::new(HEADERS.to_vec())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .height(1);

    let body: Vec<Row> = app
        .table
        .iter()
        .map(|r| Row::new(r.cells().into_iter().map(Cell::from).collect::<Vec<_>>()))
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(16),
        Constraint::Length(14),
    ];

    let title = if app.loading {
        "Currency Exchange Rates (loading…)"
    } else {
        "Currency Exchange Rates"
    };

    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(table, area, &mut app.tsel);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let basis = match &app.base {
        Some(base) => format!("Rates are based on 1 {}.", base),
        None => "Rates not loaded yet.".to_string(),
    };
    let p = Paragraph::new(Line::from(format!(
        "{}   a=add  r=refresh  ↑/↓=select  q=quit",
        basis
    )))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(p, area);
}

fn draw_add_modal(f: &mut Frame, area: Rect, app: &App) {
    let draft = app.editor.draft();

    let rate = if app.editor.is_lookup_pending() {
        "looking up…".to_string()
    } else if draft.has_rate() {
        draft.mid_rate.clone()
    } else if draft.currency_code.is_empty() {
        String::new()
    } else {
        "-".to_string()
    };

    let lines = [
        format!("Currency : {}_", draft.currency_code),
        format!("Rate     : {}", rate),
        String::new(),
        "Enter: Add | Esc: Cancel".to_string(),
        app.modal_error.clone().unwrap_or_default(),
    ]
    .join("\n");

    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Add New Currency"));
    f.render_widget(p, area);
}

/// A `w`×`h` rectangle centred in `r`, clipped to fit.
pub fn center_rect(r: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(r.width);
    let h = h.min(r.height);
    Rect {
        x: r.x + (r.width - w) / 2,
        y: r.y + (r.height - h) / 2,
        width: w,
        height: h,
    }
}

//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Table, Wrap};

use super::runtime::{App, FormField, Outcome};
use super::style;
use crate::content::{ABOUT_INTRO, ABOUT_SECTIONS, APPLIANCE_COMPARISON, GENERAL_TIPS, TIPS_TABLE};
use crate::estimator::{Appliance, EnergyReport, HouseholdProfile};
use crate::page::Page;
use crate::render::format_currency;

/// Bar values are integers; energy is scaled by this before plotting.
const BAR_SCALE: f64 = 100.0;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // page body
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.page {
        Page::Calculator => render_calculator(frame, app, chunks[1]),
        Page::EnergyTips => render_tips(frame, chunks[1]),
        Page::About => render_about(frame, chunks[1]),
    }
    render_footer(frame, app, chunks[2]);
}

/// Header bar: app title and page tabs.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " ⚡ ENERGY USAGE CALCULATOR ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];
    for (i, page) in Page::ALL.iter().enumerate() {
        let tab_style = if *page == app.page {
            Style::default()
                .fg(style::TAB_ACTIVE)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("F{} {}", i + 1, page.title()), tab_style));
        spans.push(Span::raw(" │ "));
    }
    spans.pop();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Calculator page: form on the left, summary and chart on the right.
fn render_calculator(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_form(frame, app, columns[0]);

    match &app.outcome {
        Some(Outcome::Report { profile, report }) => {
            render_result(frame, profile, report, columns[1]);
        }
        Some(Outcome::Incomplete(e)) => {
            let warning = Paragraph::new(Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(style::WARNING_FG),
            )))
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Summary ").borders(Borders::ALL));
            frame.render_widget(warning, columns[1]);
        }
        None => {
            let hint = Paragraph::new("Fill in the form and press Enter to calculate.")
                .wrap(Wrap { trim: true })
                .block(Block::default().title(" Summary ").borders(Borders::ALL));
            frame.render_widget(hint, columns[1]);
        }
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn form_line(app: &App, field: FormField) -> Line<'static> {
    let f = &app.form;
    let text = match field {
        FormField::Name => format!("Name:      {}", f.name),
        FormField::Age => format!("Age:       {}", f.age),
        FormField::City => format!("City:      {}", f.city),
        FormField::Area => format!("Area:      {}", f.area),
        FormField::Unit => format!("Living in: ‹ {} ›", f.unit),
        FormField::Facility => format!("Facility:  ‹ {} ›", f.facility),
        FormField::AirConditioner => format!(
            "{} {}",
            checkbox(f.air_conditioner),
            Appliance::AirConditioner.form_label()
        ),
        FormField::Refrigerator => format!(
            "{} {}",
            checkbox(f.refrigerator),
            Appliance::Refrigerator.form_label()
        ),
        FormField::WashingMachine => format!(
            "{} {}",
            checkbox(f.washing_machine),
            Appliance::WashingMachine.form_label()
        ),
        FormField::Submit => "[ Calculate Energy Usage ]".to_string(),
    };
    if field == app.focus {
        let cursor = if field.is_text() { "▏" } else { "" };
        Line::from(Span::styled(
            format!("▶ {text}{cursor}"),
            Style::default()
                .fg(style::FOCUS_FG)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(format!("  {text}"))
    }
}

/// Personal, housing and appliance inputs.
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Personal Information",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for field in FormField::ALL {
        match field {
            FormField::Unit => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Housing Information",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
            }
            FormField::AirConditioner => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Appliances",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
            }
            FormField::Submit => lines.push(Line::from("")),
            _ => {}
        }
        lines.push(form_line(app, field));
    }

    let form =
        Paragraph::new(lines).block(Block::default().title(" Profile ").borders(Borders::ALL));
    frame.render_widget(form, area);
}

/// Summary text, breakdown chart, appliances and costs.
fn render_result(
    frame: &mut Frame,
    profile: &HouseholdProfile,
    report: &EnergyReport,
    area: Rect,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(8),
            Constraint::Length(5),
        ])
        .split(area);

    let id = &profile.identity;
    let appliances: Vec<&str> = report.active_appliances().iter().map(|a| a.name()).collect();
    let summary = vec![
        Line::from(format!("Name:     {} ({} years)", id.name.trim(), id.age)),
        Line::from(format!("Location: {}", id.location())),
        Line::from(format!(
            "Housing:  {} {}",
            profile.facility_type, profile.housing_unit
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{:.1} kWh/day", report.total_energy_kwh_per_day()),
            Style::default()
                .fg(style::METRIC_FG)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Estimated Monthly: {:.1} kWh",
            report.monthly_energy_kwh()
        )),
        Line::from(if appliances.is_empty() {
            "Active appliances: none".to_string()
        } else {
            format!("Active appliances: {}", appliances.join(", "))
        }),
    ];
    frame.render_widget(
        Paragraph::new(summary)
            .block(Block::default().title(" Energy Usage Summary ").borders(Borders::ALL)),
        rows[0],
    );

    let colors = [style::BASE_COLOR, style::APPLIANCE_COLOR];
    let bars: Vec<Bar> = report
        .categories()
        .iter()
        .zip(colors)
        .map(|(share, color)| {
            Bar::default()
                .value((share.energy_kwh_per_day * BAR_SCALE).round() as u64)
                .text_value(format!(
                    "{:.1} ({:.0}%)",
                    share.energy_kwh_per_day, share.percentage
                ))
                .label(Line::from(share.category))
                .style(Style::default().fg(color))
        })
        .collect();
    let chart = BarChart::default()
        .block(Block::default().title(" Energy Breakdown (kWh/day) ").borders(Borders::ALL))
        .bar_width(16)
        .bar_gap(4)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, rows[1]);

    let costs = vec![
        Line::from(format!("Daily Cost:   {}", format_currency(report.daily_cost()))),
        Line::from(format!(
            "Monthly Cost: {}",
            format_currency(report.monthly_cost())
        )),
        Line::from(format!("Tip: {}", GENERAL_TIPS[0])),
    ];
    frame.render_widget(
        Paragraph::new(costs).block(
            Block::default()
                .title(" Cost Estimation ")
                .borders(Borders::ALL),
        ),
        rows[2],
    );
}

/// Tips table above the appliance comparison bar chart.
fn render_tips(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TIPS_TABLE.len() as u16 + 3),
            Constraint::Min(8),
        ])
        .split(area);

    let table_rows: Vec<Row> = TIPS_TABLE
        .iter()
        .map(|t| Row::new(vec![t.appliance, t.tip, t.potential_savings]))
        .collect();
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(16),
            Constraint::Min(30),
            Constraint::Length(18),
        ],
    )
    .header(
        Row::new(vec!["Appliance", "Energy Saving Tip", "Potential Savings"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title(" Energy Saving Tips ").borders(Borders::ALL));
    frame.render_widget(table, rows[0]);

    let bars: Vec<Bar> = APPLIANCE_COMPARISON
        .iter()
        .map(|u| {
            let kwh = u.energy_kwh_per_day();
            Bar::default()
                .value((kwh * BAR_SCALE).round() as u64)
                .text_value(format!("{kwh:.2}"))
                .label(Line::from(u.appliance))
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Daily Energy Consumption by Appliance (kWh/day) ")
                .borders(Borders::ALL),
        )
        .bar_width(14)
        .bar_gap(2)
        .bar_style(Style::default().fg(style::COMPARISON_COLOR))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, rows[1]);
}

/// About text with section headings.
fn render_about(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(ABOUT_INTRO), Line::from("")];
    for section in &ABOUT_SECTIONS {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for item in section.items {
            lines.push(Line::from(format!("  • {item}")));
        }
        lines.push(Line::from(""));
    }
    let about = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" About This App ").borders(Borders::ALL));
    frame.render_widget(about, area);
}

/// Footer with keybinding hints for the current page.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hint = if app.page == Page::Calculator {
        " Tab/↑↓:Move  ←→:Option  Space:Toggle  Enter:Calculate  F1-F3/PgUp/PgDn:Page  Esc:Quit"
    } else {
        " F1-F3/PgUp/PgDn:Page  q/Esc:Quit"
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}

//! Country browser UI rendering.

use super::formatters::{fit_width, format_area, format_number};
use super::ThemeColors;
use crate::app::App;
use crate::data::Country;
use crate::query::{RankingMode, ALL};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the country browser.
pub(super) fn draw_countries(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Controls, content, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.layout.controls_height),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_controls(f, app, chunks[0], &colors);

    if app.show_card {
        let card_percent = app.layout.card.width_percent;
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - card_percent),
                Constraint::Percentage(card_percent),
            ])
            .split(chunks[1]);

        draw_list(f, app, content[0], &colors);
        draw_card(f, app, content[1], &colors);
    } else {
        draw_list(f, app, chunks[1], &colors);
    }

    draw_status(f, app, chunks[2], &colors);
    draw_keymap(f, chunks[3], &colors);
}

fn draw_controls(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let selection = app.selection();

    let mut rank_spans = vec![Span::styled("Rank by: ", Style::default().fg(colors.label))];
    for mode in RankingMode::ALL.into_iter().skip(1) {
        let (mark, style) = if selection.ranking() == mode {
            (
                "[x] ",
                Style::default()
                    .fg(colors.active)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("[ ] ", Style::default().fg(colors.muted))
        };
        rank_spans.push(Span::styled(format!("{}{}  ", mark, mode.name()), style));
    }

    let filter_style = |value: &str| {
        if value == ALL {
            Style::default().fg(colors.muted)
        } else {
            Style::default()
                .fg(colors.active)
                .add_modifier(Modifier::BOLD)
        }
    };

    let filter_line = Line::from(vec![
        Span::styled("Filters: ", Style::default().fg(colors.label)),
        Span::styled("Continent ‹", Style::default().fg(colors.text)),
        Span::styled(selection.continent().to_string(), filter_style(selection.continent())),
        Span::styled("›  Subregion ‹", Style::default().fg(colors.text)),
        Span::styled(selection.subregion().to_string(), filter_style(selection.subregion())),
        Span::styled("›", Style::default().fg(colors.text)),
    ]);

    let count_line = Line::from(Span::styled(
        format!("{}/{} countries", app.view().len(), app.dataset().len()),
        Style::default().fg(colors.value),
    ));

    let paragraph = Paragraph::new(vec![Line::from(rank_spans), filter_line, count_line]).block(
        Block::default()
            .title(" Orbis ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);
}

fn draw_list(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let viewport_height = area.height.saturating_sub(2) as usize;
    app.adjust_scroll(viewport_height);

    let block = Block::default()
        .title(" Countries ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let view = app.view();
    if view.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No countries match the current filters (press x to clear)",
            Style::default().fg(colors.muted),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let ranking = app.selection().ranking();
    let inner_width = (area.width as usize).saturating_sub(app.layout.list.border_padding);
    let name_width = app.layout.list.name_width.min(inner_width.saturating_sub(5));
    let cursor = app.cursor();

    let items: Vec<ListItem<'_>> = view
        .iter()
        .enumerate()
        .skip(app.scroll_offset())
        .take(viewport_height)
        .map(|(idx, country)| {
            let metric = match ranking {
                RankingMode::TopArea => format!("{} km²", format_area(country.area)),
                _ => format_number(country.population),
            };
            let text = format!(
                "{:>3}. {} {}",
                idx + 1,
                fit_width(country.common_name(), name_width),
                metric
            );

            let style = if idx == cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            ListItem::new(Line::from(text)).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn draw_card(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let lines = match app.current_country() {
        Some(country) => format_country_card(country, colors),
        None => vec![Line::from(Span::styled(
            "Select a country to view details",
            Style::default().fg(colors.text),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Country ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(app.status.clone())
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let keymap_text =
        "q:quit | jk:nav | c/C:continent | s/S:subregion | a:alpha p:pop r:area n:none | x:clear | y:copy | t:card | T:theme";

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}

fn field(label: &str, value: String, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(colors.label)),
        Span::styled(value, Style::default().fg(colors.value)),
    ])
}

fn format_country_card(country: &Country, colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            country.common_name().to_string(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            country.name.official.clone(),
            Style::default().fg(colors.text),
        )),
        Line::from(""),
        field("Capital", country.capital_display().to_string(), colors),
        field("Population", format_number(country.population), colors),
        field("Continents", country.continents.join(", "), colors),
        field("Subregion", country.subregion_display().to_string(), colors),
        field("Area", format!("{} km²", format_area(country.area)), colors),
        Line::from(""),
        field("Flag", country.flag_image_url().to_string(), colors),
    ]
}

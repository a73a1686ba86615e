//! Element tree renderer.
//!
//! Walks the document tree once per frame and draws each node with the
//! matching ratatui widget. Containers stack children vertically (bordered
//! when carrying the `card` class); rows split horizontally. Subtrees with
//! the `hidden` class are skipped entirely. Elements carrying the `modal`
//! class are excluded from normal flow and drawn last as centered overlays.
//!
//! Sizing is estimated per kind; when content overflows the area ratatui
//! clips from the bottom, which is acceptable for a dashboard layout.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{BarChart, Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::component::HIDDEN_CLASS;
use crate::element::{Element, ElementKind};
use crate::theme;

/// Draw the whole document, overlays last.
pub fn render_document(frame: &mut Frame, root: &Element) {
    let area = frame.area();
    render_element(frame, area, root);
    render_overlays(frame, area, root);
}

fn visible_children(el: &Element) -> Vec<Element> {
    el.children()
        .into_iter()
        .filter(|c| !c.has_class(HIDDEN_CLASS) && !c.has_class("modal"))
        .collect()
}

fn bordered(el: &Element) -> bool {
    el.has_class("card") || el.attr("title").is_some()
}

/// Estimated height in terminal rows.
fn measure(el: &Element) -> u16 {
    if el.has_class(HIDDEN_CLASS) || el.has_class("modal") {
        return 0;
    }
    match el.kind() {
        ElementKind::Heading
        | ElementKind::Button
        | ElementKind::Input
        | ElementKind::Select
        | ElementKind::Gauge
        | ElementKind::Divider => 1,
        ElementKind::Text => el
            .text()
            .map(|t| t.lines().count().max(1) as u16)
            .unwrap_or(1),
        ElementKind::Chart => 10,
        ElementKind::Row => visible_children(el)
            .iter()
            .map(measure)
            .max()
            .unwrap_or(0),
        ElementKind::Container => {
            let children = visible_children(el);
            let inner: u16 = if children.is_empty() {
                el.text()
                    .map(|t| t.lines().count() as u16)
                    .unwrap_or(0)
            } else {
                children.iter().map(measure).sum()
            };
            inner + if bordered(el) { 2 } else { 0 }
        }
    }
}

fn render_element(frame: &mut Frame, area: Rect, el: &Element) {
    if area.width == 0 || area.height == 0 || el.has_class(HIDDEN_CLASS) {
        return;
    }
    match el.kind() {
        ElementKind::Container => render_container(frame, area, el),
        ElementKind::Row => render_row(frame, area, el),
        ElementKind::Heading => {
            let text = el.text().unwrap_or_default();
            let style = style_for(el).add_modifier(Modifier::BOLD);
            frame.render_widget(Paragraph::new(text).style(style), area);
        }
        ElementKind::Text => {
            let text = el.text().unwrap_or_default();
            frame.render_widget(
                Paragraph::new(text)
                    .style(style_for(el))
                    .wrap(Wrap { trim: false }),
                area,
            );
        }
        ElementKind::Button => render_button(frame, area, el),
        ElementKind::Input => render_input(frame, area, el),
        ElementKind::Select => {
            let text = format!("{} ▾", el.text().unwrap_or_default());
            frame.render_widget(Paragraph::new(text).style(style_for(el)), area);
        }
        ElementKind::Gauge => render_gauge(frame, area, el),
        ElementKind::Chart => render_chart(frame, area, el),
        ElementKind::Divider => {
            let line = "─".repeat(area.width as usize);
            frame.render_widget(
                Paragraph::new(line).style(Style::default().fg(theme::BORDER)),
                area,
            );
        }
    }
}

fn render_container(frame: &mut Frame, area: Rect, el: &Element) {
    let mut inner = area;
    if bordered(el) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BORDER));
        if let Some(title) = el.attr("title") {
            block = block.title(Line::styled(
                format!(" {title} "),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ));
        }
        inner = block.inner(area);
        frame.render_widget(block, area);
    }

    let children = visible_children(el);
    if children.is_empty() {
        if let Some(text) = el.text() {
            frame.render_widget(
                Paragraph::new(text)
                    .style(style_for(el))
                    .wrap(Wrap { trim: false }),
                inner,
            );
        }
        return;
    }

    let mut constraints: Vec<Constraint> =
        children.iter().map(|c| Constraint::Length(measure(c))).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);
    for (child, chunk) in children.iter().zip(chunks.iter()) {
        render_element(frame, *chunk, child);
    }
}

fn render_row(frame: &mut Frame, area: Rect, el: &Element) {
    let children = visible_children(el);
    if children.is_empty() {
        return;
    }
    let count = children.len() as u32;
    let constraints: Vec<Constraint> =
        children.iter().map(|_| Constraint::Ratio(1, count)).collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    for (child, chunk) in children.iter().zip(chunks.iter()) {
        render_element(frame, *chunk, child);
    }
}

fn render_button(frame: &mut Frame, area: Rect, el: &Element) {
    let mut style = style_for(el);
    if style.fg.is_none() {
        style = style.fg(theme::PRIMARY);
    }
    if el.has_class("btn-outline") {
        style = style.fg(theme::TEXT);
    }
    if el.has_class("btn-disabled") {
        style = style.add_modifier(Modifier::DIM);
    }
    let text = format!("[ {} ]", el.text().unwrap_or_default());
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_input(frame: &mut Frame, area: Rect, el: &Element) {
    let (text, mut style) = match el.text().filter(|t| !t.is_empty()) {
        Some(value) => (value, Style::default().fg(theme::TEXT)),
        None => (
            el.attr("placeholder").unwrap_or_default(),
            Style::default().fg(theme::TEXT_MUTED),
        ),
    };
    style = style.add_modifier(Modifier::UNDERLINED);
    if el.has_class("input-error") {
        style = style.fg(theme::DANGER);
    }
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_gauge(frame: &mut Frame, area: Rect, el: &Element) {
    let percent = el
        .attr("value")
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(0)
        .min(100);
    let color = el
        .classes()
        .iter()
        .find_map(|c| theme::class_color(c))
        .unwrap_or(theme::PRIMARY);
    let label = el
        .attr("label")
        .map(|l| format!("{l} {percent}%"))
        .unwrap_or_else(|| format!("{percent}%"));
    frame.render_widget(
        Gauge::default()
            .percent(percent)
            .label(label)
            .gauge_style(Style::default().fg(color)),
        area,
    );
}

fn render_chart(frame: &mut Frame, area: Rect, el: &Element) {
    let values: Vec<u64> = el
        .attr("data")
        .map(|d| d.split(',').filter_map(|v| v.trim().parse().ok()).collect())
        .unwrap_or_default();
    let labels: Vec<String> = el
        .attr("labels")
        .map(|l| l.split('|').map(str::to_string).collect())
        .unwrap_or_default();
    let bars: Vec<(&str, u64)> = labels
        .iter()
        .map(String::as_str)
        .zip(values.iter().copied())
        .collect();
    if bars.is_empty() {
        return;
    }
    frame.render_widget(
        BarChart::default()
            .data(&bars)
            .bar_width(6)
            .bar_gap(1)
            .bar_style(Style::default().fg(theme::PRIMARY))
            .value_style(Style::default().fg(theme::TEXT))
            .label_style(Style::default().fg(theme::TEXT_MUTED)),
        area,
    );
}

fn render_overlays(frame: &mut Frame, area: Rect, root: &Element) {
    for modal in root.find_all_by_class("modal") {
        if modal.has_class(HIDDEN_CLASS) {
            continue;
        }
        let content: u16 = modal.children().iter().map(measure).sum();
        let width = area.width.saturating_sub(4).min(64).max(20);
        let height = (content + 2).min(area.height.saturating_sub(2)).max(3);
        let rect = centered(area, width, height);

        frame.render_widget(Clear, rect);
        let border = if modal.has_class("modal-show") {
            theme::PRIMARY
        } else {
            theme::BORDER
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(border));
        if let Some(title) = modal.attr("title") {
            block = block.title(Line::styled(
                format!(" {title} "),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ));
        }
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let children = modal.children();
        let mut constraints: Vec<Constraint> =
            children.iter().map(|c| Constraint::Length(measure(c))).collect();
        constraints.push(Constraint::Min(0));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);
        for (child, chunk) in children.iter().zip(chunks.iter()) {
            render_element(frame, *chunk, child);
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn style_for(el: &Element) -> Style {
    let mut style = Style::default();
    for class in el.classes() {
        if let Some(color) = theme::class_color(&class) {
            style = style.fg(color);
        }
        match class.as_str() {
            "active" => {
                style = style
                    .fg(theme::PRIMARY)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            }
            "selected" => style = style.add_modifier(Modifier::REVERSED),
            "bold" | "page-title" | "card-title" | "section-heading" => {
                style = style.add_modifier(Modifier::BOLD)
            }
            "italic" => style = style.add_modifier(Modifier::ITALIC),
            _ => {}
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn draws_headings_and_skips_hidden_subtrees() {
        let root = Element::new(ElementKind::Container, Some("app"));
        root.append_child(
            &Element::new(ElementKind::Heading, Some("page-title")).with_text("Dashboard"),
        );
        let hidden = Element::new(ElementKind::Text, Some("hidden")).with_text("invisible");
        root.append_child(&hidden);
        root.append_child(&Element::new(ElementKind::Text, None).with_text("2 cats tracked"));

        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal.draw(|frame| render_document(frame, &root)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Dashboard"));
        assert!(text.contains("2 cats tracked"));
        assert!(!text.contains("invisible"));
    }

    #[test]
    fn open_modal_renders_as_overlay() {
        let root = Element::new(ElementKind::Container, Some("app"));
        root.append_child(&Element::new(ElementKind::Text, None).with_text("underneath"));
        let modal = Element::new(ElementKind::Container, Some("modal modal-show"))
            .with_attr("title", "Device Selection");
        modal.append_child(&Element::new(ElementKind::Text, None).with_text("pick one"));
        root.append_child(&modal);

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| render_document(frame, &root)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Device Selection"));
        assert!(text.contains("pick one"));
    }

    #[test]
    fn hidden_modal_is_not_drawn() {
        let root = Element::new(ElementKind::Container, Some("app"));
        let modal = Element::new(ElementKind::Container, Some("modal hidden"))
            .with_attr("title", "Closed");
        root.append_child(&modal);

        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal.draw(|frame| render_document(frame, &root)).unwrap();

        assert!(!buffer_text(&terminal).contains("Closed"));
    }
}

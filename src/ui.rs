//! Shared rendering helpers: theme palette, JSON highlighting, color maps

use ratatui::{prelude::*, widgets::*};

use crate::storage::Theme;

/// Colors used by the terminal renderer for one theme
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub focus: Color,
    pub popup_bg: Color,
    pub key: Color,
    pub string: Color,
    pub number: Color,
    pub literal: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette {
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                focus: Color::Yellow,
                popup_bg: Color::Black,
                key: Color::Cyan,
                string: Color::Green,
                number: Color::Yellow,
                literal: Color::Magenta,
            },
            Theme::Light => Palette {
                text: Color::Reset,
                muted: Color::Gray,
                accent: Color::Blue,
                focus: Color::Magenta,
                popup_bg: Color::Reset,
                key: Color::Blue,
                string: Color::Green,
                number: Color::Red,
                literal: Color::Magenta,
            },
        }
    }
}

/// Renders tabs
pub fn render_tabs<'a>(titles: Vec<String>, selected: usize, palette: &Palette) -> Tabs<'a> {
    let titles: Vec<Line> = titles.into_iter().map(Line::from).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(palette.muted))
        .highlight_style(Style::default().fg(palette.focus).bold())
        .divider("|")
}

/// Border style for a panel given its focus and edit state
pub fn border_style(focused: bool, editing: bool, palette: &Palette) -> Style {
    if focused && editing {
        Style::default().fg(palette.focus)
    } else if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default()
    }
}

fn flush(spans: &mut Vec<Span<'static>>, current: &mut String, palette: &Palette) {
    if current.is_empty() {
        return;
    }
    let token = std::mem::take(current);
    let style = match token.trim() {
        "true" | "false" | "null" => Style::default().fg(palette.literal),
        t if !t.is_empty() && t.parse::<f64>().is_ok() => Style::default().fg(palette.number),
        _ => Style::default(),
    };
    spans.push(Span::styled(token, style));
}

/// JSON syntax highlighting for pretty-printed text.
///
/// Strings followed by `:` are object keys. Escaped quotes stay inside the
/// string they belong to.
pub fn highlight_json(text: &str, palette: &Palette, line_numbers: bool) -> Vec<Line<'static>> {
    let width = text.lines().count().to_string().len();
    let mut lines = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let mut spans = Vec::new();
        if line_numbers {
            spans.push(Span::styled(
                format!("{:>width$} ", index + 1, width = width),
                Style::default().fg(palette.muted),
            ));
        }

        let mut current = String::new();
        let mut chars = line.char_indices();
        while let Some((start, c)) = chars.next() {
            match c {
                '"' => {
                    flush(&mut spans, &mut current, palette);
                    let mut end = line.len();
                    let mut escaped = false;
                    for (i, ch) in chars.by_ref() {
                        if escaped {
                            escaped = false;
                        } else if ch == '\\' {
                            escaped = true;
                        } else if ch == '"' {
                            end = i + 1;
                            break;
                        }
                    }
                    let is_key = line[end..].trim_start().starts_with(':');
                    let color = if is_key { palette.key } else { palette.string };
                    spans.push(Span::styled(line[start..end].to_string(), Style::default().fg(color)));
                }
                '{' | '}' | '[' | ']' | ':' | ',' => {
                    flush(&mut spans, &mut current, palette);
                    spans.push(Span::styled(c.to_string(), Style::default().fg(palette.muted)));
                }
                _ => current.push(c),
            }
        }
        flush(&mut spans, &mut current, palette);

        lines.push(Line::from(spans));
    }

    lines
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Method color
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" => Color::Blue,
        "PATCH" => Color::Cyan,
        "DELETE" => Color::Red,
        _ => Color::Gray,
    }
}

/// Colored method badges separated by spaces
pub fn method_badges(methods: &[String]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, method) in methods.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            method.clone(),
            Style::default().fg(method_color(method)).bold(),
        ));
    }
    spans
}

/// A rectangle centered in `r`, sized by percentage
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_keys_and_values_colored_apart() {
        let palette = Palette::for_theme(Theme::Dark);
        let lines = highlight_json(r#"  "title": "say \"hi\"","#, &palette, false);
        let spans = &lines[0].spans;
        let key = spans.iter().find(|s| s.content == "\"title\"").unwrap();
        assert_eq!(key.style.fg, Some(palette.key));
        let value = spans.iter().find(|s| s.content == r#""say \"hi\"""#).unwrap();
        assert_eq!(value.style.fg, Some(palette.string));
    }

    #[test]
    fn test_literals_and_line_numbers() {
        let palette = Palette::for_theme(Theme::Light);
        let text = (1..=10).map(|_| "true").collect::<Vec<_>>().join("\n");
        let lines = highlight_json(&text, &palette, true);
        assert_eq!(texts(&lines[0]), vec![" 1 ", "true"]);
        assert_eq!(texts(&lines[9]), vec!["10 ", "true"]);
        assert_eq!(lines[0].spans[1].style.fg, Some(palette.literal));
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(204), Color::Green);
        assert_eq!(status_color(404), Color::Red);
        assert_eq!(status_color(503), Color::Magenta);
    }
}

use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Warning,
    Error,
}

/// Bordered panel. Long rows wrap at `max_width` (outer width, borders included).
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    max_width: Option<u16>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        if line.is_empty() {
            self.add_empty();
            return;
        }
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        // Room left for text once "│ " and "│" are drawn.
        let text_limit = self
            .max_width
            .map(|w| (w as usize).saturating_sub(4).max(10));

        let mut rows: Vec<String> = Vec::new();
        for line in self.title.iter().chain(self.content.iter()) {
            match text_limit {
                Some(limit) if visible_width(line) > limit => rows.extend(wrap(line, limit)),
                _ => rows.push(line.clone()),
            }
        }

        let inner_width = rows
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let h = BorderChar::Horizontal.render(supports_unicode);
        let v = color_border(
            BorderChar::Vertical.render(supports_unicode),
            supports_color,
            self.style,
        );

        let mut out = String::new();
        let top = format!(
            "{}{}{}",
            BorderChar::TopLeft.render(supports_unicode),
            h.repeat(inner_width),
            BorderChar::TopRight.render(supports_unicode)
        );
        out.push_str(&color_border(&top, supports_color, self.style));
        out.push('\n');

        for row in &rows {
            let pad = inner_width.saturating_sub(1 + visible_width(row));
            out.push_str(&format!("{v} {row}{}{v}\n", " ".repeat(pad)));
        }

        let bottom = format!(
            "{}{}{}",
            BorderChar::BottomLeft.render(supports_unicode),
            h.repeat(inner_width),
            BorderChar::BottomRight.render(supports_unicode)
        );
        out.push_str(&color_border(&bottom, supports_color, self.style));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: BoxStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        BoxStyle::Info => theme::colors::INFO,
        BoxStyle::Warning => theme::colors::WARNING,
        BoxStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

/// Hard-wrap plain text by display width.
fn wrap(line: &str, limit: usize) -> Vec<String> {
    let plain = strip_ansi(line);
    let mut out = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    for c in plain.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > limit && !current.is_empty() {
            out.push(std::mem::take(&mut current));
            width = 0;
        }
        current.push(c);
        width += w;
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final letter>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}

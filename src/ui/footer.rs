use crate::ui::input::BINDINGS;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

/// Key hints on the left, version on the right.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(&self) -> Vec<Span<'static>> {
        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(ACCENT);

        let mut spans = vec![Span::styled(" ", text_style)];
        for (i, binding) in BINDINGS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, text_style));
            }
            spans.push(Span::styled(binding.keys, key_style));
            spans.push(Span::styled(format!(": {}", binding.label), text_style));
        }
        spans
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let version = format!("v{} ", VERSION);

        let mut spans = self.hints();
        let used: usize = spans.iter().map(Span::width).sum::<usize>() + version.chars().count();
        let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn hints_list_every_binding() {
        let hints = text(&Footer::new().hints());
        for binding in BINDINGS {
            assert!(
                hints.contains(&format!("{}: {}", binding.keys, binding.label)),
                "missing hint for {}",
                binding.keys
            );
        }
    }
}

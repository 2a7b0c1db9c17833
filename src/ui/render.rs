//! Terminal rendering of view trees.
//!
//! The tree is flattened into styled lines every frame; ratatui compares the
//! new frame buffer with the previous one and writes only the cells that
//! changed.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use parking_lot::Mutex;
use ratatui::backend::Backend;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};

use crate::ui::footer::Footer;
use crate::ui::input::{handle_key, InputAction};
use crate::ui::layout::{layout_regions, scroll_offset};
use crate::ui::markup::{Element, Node, Tag, Tone};
use crate::ui::runtime::{RenderError, Renderer};
use crate::ui::screen::Screen;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, MUTED_TEXT, STATUS_ERROR, TEXT};

const INPUT_WIDTH: usize = 32;
const CURSOR: &str = "█";

/// Flattened tree, plus the line holding the focused element.
pub struct Rendered {
    pub lines: Vec<Line<'static>>,
    pub focus_line: Option<usize>,
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Normal => Style::default().fg(TEXT),
        Tone::Primary => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        Tone::Danger => Style::default().fg(STATUS_ERROR),
    }
}

struct Walker<'a, Msg> {
    screen: &'a Screen<Msg>,
    next_focusable: usize,
    focus_pending: bool,
    bullet: bool,
    lines: Vec<Line<'static>>,
    focus_line: Option<usize>,
}

impl<'a, Msg: Clone> Walker<'a, Msg> {
    fn new(screen: &'a Screen<Msg>) -> Self {
        Self {
            screen,
            next_focusable: 0,
            focus_pending: false,
            bullet: false,
            lines: Vec::new(),
            focus_line: None,
        }
    }

    /// Claims the next focusable slot; true when it is the focused one.
    fn take_focus(&mut self) -> bool {
        let focused = self.next_focusable == self.screen.focus();
        self.next_focusable += 1;
        if focused {
            self.focus_pending = true;
        }
        focused
    }

    fn push(&mut self, indent: usize, spans: Vec<Span<'static>>) {
        let lead = if std::mem::take(&mut self.bullet) && indent >= 2 {
            format!("{}• ", " ".repeat(indent - 2))
        } else {
            " ".repeat(indent)
        };
        if std::mem::take(&mut self.focus_pending) {
            self.focus_line = Some(self.lines.len());
        }
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(Span::raw(lead));
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn block(&mut self, node: &Node<Msg>, indent: usize) {
        let el = match node {
            Node::Text(text) => {
                self.push(indent, vec![Span::styled(text.clone(), tone_style(Tone::Normal))]);
                return;
            }
            Node::Element(el) => el,
        };

        match el.tag {
            Tag::H1 => {
                let style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
                self.lines
                    .push(Line::from(Span::styled(el.text(), style)).alignment(Alignment::Center));
                self.blank();
            }
            Tag::Table => self.table(el, indent),
            Tag::Ul => {
                for item in &el.children {
                    self.list_item(item, indent);
                }
            }
            Tag::Li => self.list_item(node, indent),
            Tag::P | Tag::Input | Tag::Button => {
                let spans = self.inline(node, el.attrs.tone);
                self.push(indent, spans);
            }
            Tag::Div | Tag::Tr | Tag::Th | Tag::Td => {
                for child in &el.children {
                    self.block(child, indent);
                }
                if el.tag == Tag::Div && !el.children.is_empty() {
                    self.blank();
                }
            }
        }
    }

    fn list_item(&mut self, node: &Node<Msg>, indent: usize) {
        let Node::Element(el) = node else {
            self.block(node, indent);
            return;
        };
        self.bullet = true;
        for child in &el.children {
            self.block(child, indent + 2);
        }
        self.bullet = false;
        self.blank();
    }

    fn inline(&mut self, node: &Node<Msg>, tone: Tone) -> Vec<Span<'static>> {
        match node {
            Node::Text(text) => vec![Span::styled(text.clone(), tone_style(tone))],
            Node::Element(el) => match el.tag {
                Tag::Button => self.button(el),
                Tag::Input => self.input(el),
                _ => el
                    .children
                    .iter()
                    .flat_map(|child| self.inline(child, el.attrs.tone))
                    .collect(),
            },
        }
    }

    fn button(&mut self, el: &Element<Msg>) -> Vec<Span<'static>> {
        let focused = self.take_focus();
        let mut style = tone_style(el.attrs.tone);
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        vec![Span::styled(format!("[ {} ]", el.text()), style)]
    }

    fn input(&mut self, el: &Element<Msg>) -> Vec<Span<'static>> {
        let focused = self.take_focus();
        let key = el.attrs.key.as_deref().unwrap_or_default();
        let text = self
            .screen
            .buffer(key)
            .map(str::to_string)
            .or_else(|| el.attrs.value.clone())
            .unwrap_or_default();

        let field_style = if focused {
            Style::default().fg(TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(TEXT)
        };
        let marker = if focused { "› " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled("[", Style::default().fg(GLOBAL_BORDER)),
        ];

        let empty = text.is_empty();
        let mut used = 0;
        if !empty {
            used += text.chars().count();
            spans.push(Span::styled(text, field_style));
        }
        if focused {
            used += 1;
            spans.push(Span::styled(CURSOR, field_style));
        }
        if empty {
            if let Some(placeholder) = &el.attrs.placeholder {
                used += placeholder.chars().count();
                spans.push(Span::styled(
                    placeholder.clone(),
                    field_style.fg(MUTED_TEXT),
                ));
            }
        }
        spans.push(Span::styled(
            " ".repeat(INPUT_WIDTH.saturating_sub(used)),
            field_style,
        ));
        spans.push(Span::styled("]", Style::default().fg(GLOBAL_BORDER)));
        spans
    }

    fn table(&mut self, el: &Element<Msg>, indent: usize) {
        let mut rows: Vec<(Vec<Vec<Span<'static>>>, bool)> = Vec::new();
        for row in &el.children {
            let Node::Element(row) = row else { continue };
            let cells: Vec<Vec<Span<'static>>> = row
                .children
                .iter()
                .map(|cell| {
                    let tone = cell.as_element().map(|c| c.attrs.tone).unwrap_or_default();
                    let mut spans = self.inline(cell, tone);
                    if matches!(cell.as_element(), Some(c) if c.tag == Tag::Th) {
                        spans = spans
                            .into_iter()
                            .map(|span| {
                                let style = span.style.fg(MUTED_TEXT).add_modifier(Modifier::BOLD);
                                Span::styled(span.content, style)
                            })
                            .collect();
                    }
                    spans
                })
                .collect();
            rows.push((cells, std::mem::take(&mut self.focus_pending)));
        }

        let columns = rows.iter().map(|(cells, _)| cells.len()).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for (cells, _) in &rows {
            for (i, cell) in cells.iter().enumerate() {
                let width: usize = cell.iter().map(Span::width).sum();
                widths[i] = widths[i].max(width);
            }
        }

        for (cells, focused) in rows {
            let mut spans = Vec::new();
            for (i, cell) in cells.into_iter().enumerate() {
                let width: usize = cell.iter().map(Span::width).sum();
                spans.extend(cell);
                spans.push(Span::raw(" ".repeat(widths[i] - width + 2)));
            }
            self.focus_pending = focused;
            self.push(indent, spans);
        }
    }
}

/// Flattens the screen's tree into display lines.
pub fn layout_lines<Msg: Clone>(screen: &Screen<Msg>) -> Rendered {
    let mut walker = Walker::new(screen);
    walker.block(screen.tree(), 1);
    Rendered {
        lines: walker.lines,
        focus_line: walker.focus_line,
    }
}

pub fn draw<Msg: Clone>(frame: &mut Frame<'_>, screen: &Screen<Msg>) {
    let (body, footer) = layout_regions(frame.area());
    let rendered = layout_lines(screen);
    let scroll = scroll_offset(rendered.focus_line, body.height.saturating_sub(2));

    frame.render_widget(Clear, body);
    frame.render_widget(
        Paragraph::new(rendered.lines)
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        body,
    );
    frame.render_widget(Footer::new().widget(footer), footer);
}

struct Surface<B: Backend, Msg> {
    terminal: Terminal<B>,
    screen: Option<Screen<Msg>>,
}

impl<B, Msg> Surface<B, Msg>
where
    B: Backend,
    B::Error: std::fmt::Display,
    Msg: Clone,
{
    fn draw(&mut self) -> Result<(), RenderError> {
        let Some(screen) = &self.screen else {
            return Ok(());
        };
        self.terminal
            .draw(|frame| draw(frame, screen))
            .map(|_| ())
            .map_err(|e| RenderError::Draw(e.to_string()))
    }
}

/// Draws into a ratatui terminal. Clones share the same terminal, so the
/// host can move focus and redraw while the runtime loop patches.
pub struct TerminalRenderer<B: Backend, Msg> {
    surface: Arc<Mutex<Surface<B, Msg>>>,
}

impl<B: Backend, Msg> Clone for TerminalRenderer<B, Msg> {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
        }
    }
}

impl<B, Msg> TerminalRenderer<B, Msg>
where
    B: Backend,
    B::Error: std::fmt::Display,
    Msg: Clone,
{
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            surface: Arc::new(Mutex::new(Surface {
                terminal,
                screen: None,
            })),
        }
    }

    /// Routes a key to the mounted screen. Keys before mount are ignored.
    pub fn handle_key(&self, key: KeyEvent) -> InputAction<Msg> {
        match self.surface.lock().screen.as_mut() {
            Some(screen) => handle_key(screen, key),
            None => InputAction::None,
        }
    }

    pub fn redraw(&self) -> Result<(), RenderError> {
        self.surface.lock().draw()
    }

    pub fn with_terminal<T>(&self, f: impl FnOnce(&Terminal<B>) -> T) -> T {
        f(&self.surface.lock().terminal)
    }
}

impl<B, Msg> Renderer<Msg> for TerminalRenderer<B, Msg>
where
    B: Backend + Send + 'static,
    B::Error: std::fmt::Display,
    Msg: Clone + Send + 'static,
{
    fn mount(&mut self, tree: &Node<Msg>) -> Result<(), RenderError> {
        let mut surface = self.surface.lock();
        surface.screen = Some(Screen::new(tree.clone()));
        surface.draw()
    }

    fn patch(&mut self, _prev: &Node<Msg>, next: &Node<Msg>) -> Result<(), RenderError> {
        let mut surface = self.surface.lock();
        match surface.screen.as_mut() {
            Some(screen) => screen.replace(next.clone()),
            None => surface.screen = Some(Screen::new(next.clone())),
        }
        surface.draw()
    }
}

//! What the host remembers between renders: the tree on display, which
//! element has focus, and the live text of each input.
//!
//! Input text lives here rather than in the model, the way a browser input
//! owns its value. Each edit is reported through the input's handler; the
//! model then echoes it back through the next tree. A new tree overwrites
//! the live text only when the model changed the value for some other
//! reason (a save clearing the drafts, for example).

use std::collections::{HashMap, VecDeque};

use crate::ui::markup::{Element, Handler, Node, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
}

#[derive(Debug)]
pub struct Screen<Msg> {
    tree: Node<Msg>,
    focus: usize,
    buffers: HashMap<String, String>,
    /// Values sent through `on_input` and not yet seen in a tree.
    echoes: HashMap<String, VecDeque<String>>,
}

fn input_key<Msg>(el: &Element<Msg>) -> String {
    el.attrs.key.clone().unwrap_or_default()
}

fn input_values<Msg>(tree: &Node<Msg>) -> HashMap<String, String> {
    tree.focusables()
        .into_iter()
        .filter(|el| el.tag == Tag::Input)
        .map(|el| (input_key(el), el.attrs.value.clone().unwrap_or_default()))
        .collect()
}

impl<Msg: Clone> Screen<Msg> {
    pub fn new(tree: Node<Msg>) -> Self {
        let buffers = input_values(&tree);
        Self {
            tree,
            focus: 0,
            buffers,
            echoes: HashMap::new(),
        }
    }

    pub fn tree(&self) -> &Node<Msg> {
        &self.tree
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&Element<Msg>> {
        self.tree.focusables().get(self.focus).copied()
    }

    /// Live text of the input with `key`.
    pub fn buffer(&self, key: &str) -> Option<&str> {
        self.buffers.get(key).map(String::as_str)
    }

    pub fn replace(&mut self, next: Node<Msg>) {
        let prev_values = input_values(&self.tree);
        let next_values = input_values(&next);

        for (key, value) in &next_values {
            let Some(buffer) = self.buffers.get_mut(key) else {
                self.buffers.insert(key.clone(), value.clone());
                continue;
            };
            if prev_values.get(key) == Some(value) {
                continue;
            }
            let pending = self.echoes.entry(key.clone()).or_default();
            if pending.front() == Some(value) {
                pending.pop_front();
            } else {
                pending.clear();
                *buffer = value.clone();
            }
        }
        self.buffers.retain(|key, _| next_values.contains_key(key));
        self.echoes.retain(|key, _| next_values.contains_key(key));

        self.tree = next;
        let count = self.tree.focusables().len();
        self.focus = self.focus.min(count.saturating_sub(1));
    }

    pub fn focus_next(&mut self) {
        let count = self.tree.focusables().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.tree.focusables().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Apply an edit to the focused input. Returns the message its handler
    /// produces for the new text, if any.
    pub fn edit(&mut self, edit: Edit) -> Option<Msg> {
        let el = self.focused()?;
        if el.tag != Tag::Input {
            return None;
        }
        if let Edit::Insert(ch) = edit {
            if el.attrs.numeric && !ch.is_ascii_digit() {
                return None;
            }
        }
        let key = input_key(el);
        let numeric = el.attrs.numeric;
        let handler = match &el.handler {
            Some(Handler::Input(f)) => Some(*f),
            _ => None,
        };

        let buffer = self.buffers.entry(key.clone()).or_default();
        match edit {
            Edit::Insert(ch) => {
                buffer.push(ch);
                if numeric && buffer.parse::<u32>().is_err() {
                    buffer.pop();
                    return None;
                }
            }
            Edit::Backspace => {
                buffer.pop()?;
            }
        }
        let text = buffer.clone();

        let f = handler?;
        self.echoes.entry(key).or_default().push_back(text.clone());
        Some(f(text))
    }

    /// Enter on the focused element: a button yields its click message, an
    /// input passes focus on.
    pub fn activate(&mut self) -> Option<Msg> {
        let el = self.focused()?;
        if el.tag == Tag::Input {
            self.focus_next();
            return None;
        }
        match &el.handler {
            Some(Handler::Click(msg)) => Some(msg.clone()),
            _ => None,
        }
    }
}

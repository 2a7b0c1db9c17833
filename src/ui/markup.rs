//! Declarative element descriptions.
//!
//! Views build a [`Node`] tree with the tag helpers below. Event handlers
//! do not call anything: they carry the intent to dispatch (or a function
//! producing it from the edited text), and the host routes that intent to
//! the runtime loop.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    H1,
    P,
    Input,
    Button,
    Table,
    Tr,
    Th,
    Td,
    Ul,
    Li,
}

impl Tag {
    pub fn is_focusable(self) -> bool {
        matches!(self, Tag::Input | Tag::Button)
    }
}

/// Visual weight hint, resolved to colors by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Primary,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attrs {
    /// Identity of the element across renders. Inputs are matched by key.
    pub key: Option<String>,
    pub value: Option<String>,
    pub placeholder: Option<String>,
    /// Input accepts digits only, up to `u32::MAX`.
    pub numeric: bool,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Handler<Msg> {
    Click(Msg),
    Input(fn(String) -> Msg),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element<Msg> {
    pub tag: Tag,
    pub attrs: Attrs,
    pub handler: Option<Handler<Msg>>,
    pub children: Vec<Node<Msg>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node<Msg> {
    Element(Element<Msg>),
    Text(String),
}

impl<Msg> Element<Msg> {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Attrs::default(),
            handler: None,
            children: Vec::new(),
        }
    }

    pub fn key(mut self, key: impl ToString) -> Self {
        self.attrs.key = Some(key.to_string());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.attrs.value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.attrs.placeholder = Some(placeholder.into());
        self
    }

    pub fn numeric(mut self) -> Self {
        self.attrs.numeric = true;
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.attrs.tone = tone;
        self
    }

    pub fn on_click(mut self, msg: Msg) -> Self {
        self.handler = Some(Handler::Click(msg));
        self
    }

    pub fn on_input(mut self, f: fn(String) -> Msg) -> Self {
        self.handler = Some(Handler::Input(f));
        self
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl<Msg> Node<Msg> {
    pub fn as_element(&self) -> Option<&Element<Msg>> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Inputs and buttons in document order.
    pub fn focusables(&self) -> Vec<&Element<Msg>> {
        let mut out = Vec::new();
        self.collect_focusables(&mut out);
        out
    }

    fn collect_focusables<'a>(&'a self, out: &mut Vec<&'a Element<Msg>>) {
        if let Node::Element(el) = self {
            if el.tag.is_focusable() {
                out.push(el);
            }
            for child in &el.children {
                child.collect_focusables(out);
            }
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl<Msg> From<Element<Msg>> for Node<Msg> {
    fn from(el: Element<Msg>) -> Self {
        Node::Element(el)
    }
}

impl<Msg> From<&str> for Node<Msg> {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl<Msg> From<String> for Node<Msg> {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

fn container<Msg, I>(tag: Tag, children: I) -> Element<Msg>
where
    I: IntoIterator,
    I::Item: Into<Node<Msg>>,
{
    let mut el = Element::new(tag);
    el.children = children.into_iter().map(Into::into).collect();
    el
}

pub fn text<Msg>(content: impl Into<String>) -> Node<Msg> {
    Node::Text(content.into())
}

pub fn div<Msg, I>(children: I) -> Element<Msg>
where
    I: IntoIterator,
    I::Item: Into<Node<Msg>>,
{
    container(Tag::Div, children)
}

pub fn h1<Msg>(content: impl Into<String>) -> Element<Msg> {
    container(Tag::H1, [text(content)])
}

pub fn p<Msg>(content: impl Into<String>) -> Element<Msg> {
    container(Tag::P, [text(content)])
}

pub fn input<Msg>() -> Element<Msg> {
    Element::new(Tag::Input)
}

pub fn button<Msg>(label: impl Into<String>) -> Element<Msg> {
    container(Tag::Button, [text(label)])
}

pub fn table<Msg, I>(rows: I) -> Element<Msg>
where
    I: IntoIterator,
    I::Item: Into<Node<Msg>>,
{
    container(Tag::Table, rows)
}

pub fn tr<Msg, I>(cells: I) -> Element<Msg>
where
    I: IntoIterator,
    I::Item: Into<Node<Msg>>,
{
    container(Tag::Tr, cells)
}

pub fn th<Msg>(content: impl Into<String>) -> Element<Msg> {
    container(Tag::Th, [text(content)])
}

pub fn td<Msg, I>(children: I) -> Element<Msg>
where
    I: IntoIterator,
    I::Item: Into<Node<Msg>>,
{
    container(Tag::Td, children)
}

pub fn ul<Msg, I>(items: I) -> Element<Msg>
where
    I: IntoIterator,
    I::Item: Into<Node<Msg>>,
{
    container(Tag::Ul, items)
}

pub fn li<Msg, I>(children: I) -> Element<Msg>
where
    I: IntoIterator,
    I::Item: Into<Node<Msg>>,
{
    container(Tag::Li, children)
}

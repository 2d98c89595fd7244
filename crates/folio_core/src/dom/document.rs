//! In-memory DOM used by tests and native tools.
//!
//! # Responsibility
//! - Model the widget's elements by id, in document order.
//! - Track rendered cards and filter buttons from the markup written into
//!   each element, so visibility and active state can be inspected.
//! - Serialize the result back to HTML for static output.
//!
//! # Invariants
//! - Only markup produced by this crate is recognized as cards or buttons.
//! - Hidden cards stay in the element; only their visibility flag changes.

use crate::dom::{Dom, ACTIVE_CLASS, FILTER_BUTTON_CLASS};
use crate::render::escape::{escape_html, unescape_html};
use once_cell::sync::Lazy;
use regex::Regex;

static CARD_OPEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<div class="project-card"([^>]*)>"#).expect("valid card regex")
});
static BUTTON_OPEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<button class="filter-btn( active)?"([^>]*)>"#).expect("valid button regex")
});
static CATEGORY_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"data-category="([^"]*)""#).expect("valid category regex"));
static ID_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"data-id="([^"]*)""#).expect("valid id regex"));

const CARD_OPEN_PREFIX: &str = r#"<div class="project-card""#;
const HIDDEN_STYLE: &str = r#" style="display: none;""#;

/// Rendered card as seen by the in-memory DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    /// Value of `data-id`, when present.
    pub id: Option<String>,
    /// Value of `data-category`, when present.
    pub category: Option<String>,
    pub visible: bool,
    /// Byte offset right after `<div class="project-card"` in the owner html.
    attr_offset: usize,
}

/// Rendered filter button as seen by the in-memory DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButtonNode {
    pub category: String,
    pub active: bool,
}

/// Handle to one filter button, used as the triggering element of a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonRef {
    pub container_id: String,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Container,
    Input,
}

#[derive(Debug, Clone)]
struct Node {
    id: String,
    kind: NodeKind,
    html: String,
    cards: Vec<RenderedCard>,
    buttons: Vec<FilterButtonNode>,
    value: String,
}

impl Node {
    fn new(id: &str, kind: NodeKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            html: String::new(),
            cards: Vec::new(),
            buttons: Vec::new(),
            value: String::new(),
        }
    }
}

/// Element-id keyed in-memory document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Creates an empty document with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a container element (a `<div>` that receives markup).
    ///
    /// Adding an id twice keeps the first element.
    pub fn with_container(mut self, id: &str) -> Self {
        self.push_node(id, NodeKind::Container);
        self
    }

    /// Adds a text input element.
    pub fn with_input(mut self, id: &str) -> Self {
        self.push_node(id, NodeKind::Input);
        self
    }

    fn push_node(&mut self, id: &str, kind: NodeKind) {
        if self.node(id).is_none() {
            self.nodes.push(Node::new(id, kind));
        }
    }

    fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    /// Current inner markup of `id`.
    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.node(id).map(|node| node.html.as_str())
    }

    /// Cards currently rendered inside `id`.
    pub fn cards(&self, id: &str) -> Option<&[RenderedCard]> {
        self.node(id).map(|node| node.cards.as_slice())
    }

    /// Ids of cards inside `id` that are currently displayed.
    pub fn visible_card_ids(&self, id: &str) -> Vec<String> {
        self.cards(id)
            .unwrap_or_default()
            .iter()
            .filter(|card| card.visible)
            .filter_map(|card| card.id.clone())
            .collect()
    }

    /// Filter buttons currently rendered inside `id`.
    pub fn filter_buttons(&self, id: &str) -> Option<&[FilterButtonNode]> {
        self.node(id).map(|node| node.buttons.as_slice())
    }

    /// Handle to the first filter button in `container_id` for `category`.
    pub fn find_filter_button(&self, container_id: &str, category: &str) -> Option<ButtonRef> {
        let index = self
            .filter_buttons(container_id)?
            .iter()
            .position(|button| button.category == category)?;
        Some(ButtonRef {
            container_id: container_id.to_string(),
            index,
        })
    }

    /// Current value of input `id`.
    pub fn input_value(&self, id: &str) -> Option<&str> {
        self.node(id)
            .filter(|node| node.kind == NodeKind::Input)
            .map(|node| node.value.as_str())
    }

    /// Sets the value of input `id`; returns `false` when it is absent.
    pub fn set_input_value(&mut self, id: &str, value: &str) -> bool {
        match self.node_mut(id) {
            Some(node) if node.kind == NodeKind::Input => {
                node.value = value.to_string();
                true
            }
            _ => false,
        }
    }

    /// Serializes every element in document order.
    ///
    /// Hidden cards carry `style="display: none;"`, mirroring what a browser
    /// would show after filtering.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            let id = escape_html(&node.id);
            match node.kind {
                NodeKind::Container => {
                    out.push_str(&format!("<div id=\"{id}\">"));
                    out.push_str(&with_hidden_cards(node));
                    out.push_str("</div>\n");
                }
                NodeKind::Input => {
                    out.push_str(&format!(
                        "<input id=\"{id}\" type=\"search\" value=\"{}\">\n",
                        escape_html(&node.value)
                    ));
                }
            }
        }
        out
    }
}

impl Dom for Document {
    type Element = ButtonRef;

    fn has_element(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        if node.kind == NodeKind::Input {
            return false;
        }
        node.html = html.to_string();
        node.cards = scan_cards(html);
        node.buttons = scan_buttons(html);
        true
    }

    fn apply_card_visibility(&mut self, is_visible: &mut dyn FnMut(Option<&str>) -> bool) {
        for node in &mut self.nodes {
            for card in &mut node.cards {
                card.visible = is_visible(card.category.as_deref());
            }
        }
    }

    fn activate_filter_button(&mut self, button: &ButtonRef) {
        let Some(node) = self.node_mut(&button.container_id) else {
            return;
        };
        if button.index >= node.buttons.len() {
            return;
        }
        for (index, candidate) in node.buttons.iter_mut().enumerate() {
            candidate.active = index == button.index;
        }
    }
}

fn scan_cards(html: &str) -> Vec<RenderedCard> {
    CARD_OPEN_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            Some(RenderedCard {
                id: attr_value(&ID_ATTR_RE, attrs),
                category: attr_value(&CATEGORY_ATTR_RE, attrs),
                visible: true,
                attr_offset: whole.start() + CARD_OPEN_PREFIX.len(),
            })
        })
        .collect()
}

fn scan_buttons(html: &str) -> Vec<FilterButtonNode> {
    BUTTON_OPEN_RE
        .captures_iter(html)
        .map(|caps| {
            let attrs = caps.get(2).map_or("", |m| m.as_str());
            FilterButtonNode {
                category: attr_value(&CATEGORY_ATTR_RE, attrs).unwrap_or_default(),
                active: caps.get(1).is_some(),
            }
        })
        .collect()
}

fn attr_value(re: &Regex, attrs: &str) -> Option<String> {
    re.captures(attrs)
        .and_then(|caps| caps.get(1))
        .map(|m| unescape_html(m.as_str()))
}

fn with_hidden_cards(node: &Node) -> String {
    let mut out = String::with_capacity(node.html.len());
    let mut cursor = 0;
    for card in node.cards.iter().filter(|card| !card.visible) {
        out.push_str(&node.html[cursor..card.attr_offset]);
        out.push_str(HIDDEN_STYLE);
        cursor = card.attr_offset;
    }
    out.push_str(&node.html[cursor..]);
    restore_button_state(&out, &node.buttons)
}

// Button active state lives on the node; re-emit it into the class list.
fn restore_button_state(html: &str, buttons: &[FilterButtonNode]) -> String {
    if buttons.is_empty() {
        return html.to_string();
    }
    let mut index = 0;
    BUTTON_OPEN_RE
        .replace_all(html, |caps: &regex::Captures<'_>| {
            let attrs = caps.get(2).map_or("", |m| m.as_str());
            let active = buttons.get(index).is_some_and(|button| button.active);
            index += 1;
            if active {
                format!("<button class=\"{FILTER_BUTTON_CLASS} {ACTIVE_CLASS}\"{attrs}>")
            } else {
                format!("<button class=\"{FILTER_BUTTON_CLASS}\"{attrs}>")
            }
        })
        .into_owned()
}

//! Core DOM contract over `web_sys`.

use folio_core::dom::{ACTIVE_CLASS, CARD_CLASS, CATEGORY_ATTR, FILTER_BUTTON_CLASS};
use folio_core::Dom;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Live browser document.
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Binds to the page's global document, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Filter buttons currently rendered inside `container_id`.
    pub fn filter_buttons(&self, container_id: &str) -> Vec<Element> {
        let Some(container) = self.document.get_element_by_id(container_id) else {
            return Vec::new();
        };
        select_all(&container, &format!(".{FILTER_BUTTON_CLASS}"))
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn apply_card_visibility(&mut self, is_visible: &mut dyn FnMut(Option<&str>) -> bool) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        for card in select_all(&root, &format!(".{CARD_CLASS}")) {
            let Ok(card) = card.dyn_into::<HtmlElement>() else {
                continue;
            };
            let category = card.get_attribute(CATEGORY_ATTR);
            let display = if is_visible(category.as_deref()) {
                "block"
            } else {
                "none"
            };
            if let Err(err) = card.style().set_property("display", display) {
                debug!("event=card_visibility module=web status=error detail={err:?}");
            }
        }
    }

    fn activate_filter_button(&mut self, button: &Element) {
        if let Some(parent) = button.parent_element() {
            for sibling in select_all(&parent, &format!(".{FILTER_BUTTON_CLASS}")) {
                if let Err(err) = sibling.class_list().remove_1(ACTIVE_CLASS) {
                    debug!("event=filter_deactivate module=web status=error detail={err:?}");
                }
            }
        }
        if let Err(err) = button.class_list().add_1(ACTIVE_CLASS) {
            debug!("event=filter_activate module=web status=error detail={err:?}");
        }
    }
}

fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

//! JavaScript-facing entry points.
//!
//! # Responsibility
//! - Boot the widget on a page and attach its DOM listeners.
//! - Expose catalog queries and appends to page scripts.
//!
//! # Invariants
//! - Listeners are attached only after the load has settled.
//! - Handlers receive the triggering element from the event, never from
//!   ambient state.
//!
//! ```javascript
//! import init, { startPortfolio } from './folio_web.js';
//!
//! await init();
//! const portfolio = await startPortfolio(null);
//! console.log(portfolio.projectCount());
//! ```

use crate::console::init_console_logging;
use crate::fetch::FetchSource;
use crate::web_dom::WebDom;
use folio_core::{Portfolio, PortfolioConfig, Project};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

type SharedPortfolio = Rc<RefCell<Portfolio<WebDom>>>;

/// Sets the panic hook when the module is instantiated.
#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
}

/// Installs console logging at `level`.
///
/// Returns an empty string on success and an error message otherwise.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: String) -> String {
    match init_console_logging(&level) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Handle returned to page scripts after the widget has started.
#[wasm_bindgen]
pub struct PortfolioHandle {
    inner: SharedPortfolio,
}

#[wasm_bindgen]
impl PortfolioHandle {
    /// Number of records in the catalog.
    #[wasm_bindgen(js_name = projectCount)]
    pub fn project_count(&self) -> usize {
        self.inner.borrow().catalog().len()
    }

    /// Ids of records matching `query`, in catalog order.
    #[wasm_bindgen(js_name = searchIds)]
    pub fn search_ids(&self, query: &str) -> js_sys::Array {
        self.inner
            .borrow()
            .catalog()
            .search(query)
            .into_iter()
            .map(|project| JsValue::from_str(&project.id))
            .collect()
    }

    /// Appends one record given as JSON and re-renders affected lists.
    #[wasm_bindgen(js_name = addProject)]
    pub fn add_project(&self, project_json: &str) -> Result<(), JsValue> {
        let project: Project = serde_json::from_str(project_json)
            .map_err(|err| JsValue::from_str(&format!("invalid project: {err}")))?;
        self.inner.borrow_mut().add_project(project);
        Ok(())
    }

    /// Renders the full list into the configured container.
    #[wasm_bindgen(js_name = renderAll)]
    pub fn render_all(&self) -> bool {
        self.inner.borrow_mut().render_all()
    }
}

/// Loads the catalog, renders it and wires filters and search.
///
/// `config_json` overrides element ids and the data location; `null` keeps
/// the defaults.
#[wasm_bindgen(js_name = startPortfolio)]
pub async fn start_portfolio(config_json: Option<String>) -> Result<PortfolioHandle, JsValue> {
    let config = match config_json.as_deref() {
        Some(text) => {
            PortfolioConfig::from_json(text).map_err(|err| JsValue::from_str(&err.to_string()))?
        }
        None => PortfolioConfig::default(),
    };
    let dom = WebDom::from_window().ok_or_else(|| JsValue::from_str("no document available"))?;
    let source = FetchSource::new(config.data_url.clone());

    let portfolio = Portfolio::start(config, dom, &source).await;
    let shared = Rc::new(RefCell::new(portfolio));

    bind_filter_buttons(&shared)?;
    bind_search_input(&shared)?;

    Ok(PortfolioHandle { inner: shared })
}

fn bind_filter_buttons(shared: &SharedPortfolio) -> Result<(), JsValue> {
    let buttons = {
        let portfolio = shared.borrow();
        if !portfolio.filters_built() {
            return Ok(());
        }
        portfolio.dom().filter_buttons(&portfolio.config().filters_id)
    };

    for button in &buttons {
        let portfolio = Rc::clone(shared);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let category = target
                .get_attribute(folio_core::dom::CATEGORY_ATTR)
                .unwrap_or_default();
            portfolio.borrow_mut().select_category(&category, &target);
        }) as Box<dyn FnMut(Event)>);

        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    debug!(
        "event=filters_bound module=web status=ok buttons={}",
        buttons.len()
    );
    Ok(())
}

fn bind_search_input(shared: &SharedPortfolio) -> Result<(), JsValue> {
    let input = {
        let portfolio = shared.borrow();
        if !portfolio.search_wired() {
            return Ok(());
        }
        let search_id = &portfolio.config().search_id;
        portfolio.dom().document().get_element_by_id(search_id)
    };
    let Some(input) = input else {
        return Ok(());
    };

    let portfolio = Rc::clone(shared);
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Some(field) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        portfolio.borrow_mut().on_search_input(&field.value());
    }) as Box<dyn FnMut(Event)>);

    input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();

    debug!("event=search_bound module=web status=ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init_logging;

    #[test]
    fn init_logging_reports_errors_as_text() {
        assert!(!init_logging("loud".to_string()).is_empty());

        // `off` installs the logger without ever reaching the console.
        assert_eq!(init_logging("off".to_string()), "");
        assert_eq!(init_logging(" off ".to_string()), "");

        let error = init_logging("debug".to_string());
        assert!(error.contains("refusing"), "{error}");
    }
}

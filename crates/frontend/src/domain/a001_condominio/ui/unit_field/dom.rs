use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use super::synchronizer::{UnitFieldView, UnitLabelSynchronizer};
use crate::domain::a001_condominio::api::HttpUnitTypeSource;
use crate::domain::a001_condominio::config::UnitLabelConfig;

/// The unit field as three elements of an already rendered page
#[derive(Debug, Clone)]
pub struct DomUnitFieldView {
    select: HtmlSelectElement,
    label: Element,
    field: HtmlInputElement,
}

impl DomUnitFieldView {
    pub fn new(select: HtmlSelectElement, label: Element, field: HtmlInputElement) -> Self {
        Self {
            select,
            label,
            field,
        }
    }
}

impl UnitFieldView for DomUnitFieldView {
    fn selected_value(&self) -> String {
        self.select.value()
    }

    fn set_label(&self, text: &str) {
        self.label.set_text_content(Some(text));
    }

    fn set_placeholder(&self, text: &str) {
        self.field.set_placeholder(text);
    }
}

pub type DomUnitLabelSync = UnitLabelSynchronizer<HttpUnitTypeSource, DomUnitFieldView>;

/// Wire the synchronizer to the given elements.
///
/// Listens for `change` on `select` and reconciles once right away so a
/// pre-selected condominium is reflected. The listener lives as long as the page.
pub fn init_unit_label_sync(
    select: HtmlSelectElement,
    label: Element,
    field: HtmlInputElement,
    config: UnitLabelConfig,
) -> Result<DomUnitLabelSync, JsValue> {
    let sync = UnitLabelSynchronizer::new(
        HttpUnitTypeSource::new(&config),
        DomUnitFieldView::new(select.clone(), label, field),
        config.stale_responses,
    );

    let on_change_sync = sync.clone();
    let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let sync = on_change_sync.clone();
        wasm_bindgen_futures::spawn_local(async move {
            sync.reconcile().await;
        });
    });
    select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    let initial = sync.clone();
    wasm_bindgen_futures::spawn_local(async move {
        initial.reconcile().await;
    });

    Ok(sync)
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has an unexpected type", id)))
}

/// Entry point for server-rendered forms.
///
/// ```js
/// mount_unit_label_sync("condominio-select", "unidade-label", "unidade-field", {});
/// ```
#[wasm_bindgen]
pub fn mount_unit_label_sync(
    select_id: &str,
    label_id: &str,
    field_id: &str,
    options: JsValue,
) -> Result<(), JsValue> {
    let config = UnitLabelConfig::from_js(options).map_err(|e| JsValue::from_str(&e))?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document object"))?;

    let select = element_by_id::<HtmlSelectElement>(&document, select_id)?;
    let label = element_by_id::<Element>(&document, label_id)?;
    let field = element_by_id::<HtmlInputElement>(&document, field_id)?;

    log::debug!("Unit label sync mounted on #{}", select_id);
    init_unit_label_sync(select, label, field, config)?;
    Ok(())
}

pub mod domain;
pub mod shared;

use domain::a001_condominio::ui::unit_field::CondominioUnitField;
use domain::a001_condominio::UnitLabelConfig;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Render the condominium selector and unit field at the end of `<body>`.
///
/// `condominios` is an array of `[id, name]` pairs.
#[wasm_bindgen]
pub fn mount_condominio_unit_field(
    condominios: JsValue,
    initial: Option<String>,
    options: JsValue,
) -> Result<(), JsValue> {
    let condominios: Vec<(String, String)> = serde_wasm_bindgen::from_value(condominios)
        .map_err(|e| JsValue::from_str(&format!("Invalid condominium list: {}", e)))?;
    let config = UnitLabelConfig::from_js(options).map_err(|e| JsValue::from_str(&e))?;

    leptos::mount::mount_to_body(move || {
        leptos::view! {
            <CondominioUnitField
                condominios=condominios.clone()
                initial=initial.clone().unwrap_or_default()
                config=config.clone()
            />
        }
    });
    Ok(())
}

use leptos::prelude::*;

/// Select component with label support
///
/// `value` is written back on change, so the parent only has to own the signal.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: Option<String>,
    /// Current value
    value: RwSignal<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Form field name, submitted with the form
    #[prop(optional, into)]
    name: Option<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    let select_id = id.unwrap_or_default();
    let label_for = select_id.clone();

    view! {
        <div class="form__group">
            {label.map(|l| view! {
                <label class="form__label" for=label_for>
                    {l}
                </label>
            })}
            <select
                id=select_id
                name=name.unwrap_or_default()
                class="form__select"
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

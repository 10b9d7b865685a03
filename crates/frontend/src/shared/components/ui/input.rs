use leptos::prelude::*;

/// Text input whose label and placeholder are driven by signals
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Input value, updated on every keystroke
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(into)]
    placeholder: Signal<String>,
    /// Form field name, submitted with the form
    #[prop(optional, into)]
    name: Option<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    let input_id = id.unwrap_or_default();
    let label_for = input_id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {move || label.get()}
            </label>
            <input
                id=input_id
                name=name.unwrap_or_default()
                class="form__input"
                type="text"
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                required=required
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

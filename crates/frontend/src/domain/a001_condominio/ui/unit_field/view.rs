use leptos::prelude::*;
use leptos::task::spawn_local;

use super::synchronizer::{UnitFieldView, UnitLabelSynchronizer};
use crate::domain::a001_condominio::api::HttpUnitTypeSource;
use crate::domain::a001_condominio::config::UnitLabelConfig;
use crate::shared::components::ui::{Input, Select};

/// Unit field state held in signals
#[derive(Debug, Clone, Copy)]
pub struct SignalUnitFieldView {
    pub selected: RwSignal<String>,
    pub label: RwSignal<String>,
    pub placeholder: RwSignal<String>,
}

impl SignalUnitFieldView {
    pub fn new(selected: impl Into<String>) -> Self {
        Self {
            selected: RwSignal::new(selected.into()),
            label: RwSignal::new(super::display::DEFAULT_LABEL.to_string()),
            placeholder: RwSignal::new(String::new()),
        }
    }
}

impl UnitFieldView for SignalUnitFieldView {
    fn selected_value(&self) -> String {
        self.selected.get_untracked()
    }

    fn set_label(&self, text: &str) {
        self.label.set(text.to_string());
    }

    fn set_placeholder(&self, text: &str) {
        self.placeholder.set(text.to_string());
    }
}

/// Condominium selector plus unit input, labelled by housing type
#[component]
pub fn CondominioUnitField(
    /// Options: Vec of (id, name); include ("-1", ...) for "none"
    #[prop(into)]
    condominios: Signal<Vec<(String, String)>>,
    /// Pre-selected condominium id
    #[prop(optional, into)]
    initial: Option<String>,
    /// Unit text typed by the user
    #[prop(optional)]
    unit: Option<RwSignal<String>>,
    #[prop(optional)]
    config: Option<UnitLabelConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = SignalUnitFieldView::new(initial.unwrap_or_default());
    let unit = unit.unwrap_or_else(|| RwSignal::new(String::new()));
    let sync = UnitLabelSynchronizer::new(
        HttpUnitTypeSource::new(&config),
        state,
        config.stale_responses,
    );

    // First run reconciles the pre-selected value, later runs follow the selector
    Effect::new(move |_| {
        state.selected.track();
        let sync = sync.clone();
        spawn_local(async move {
            sync.reconcile().await;
        });
    });

    view! {
        <Select
            label="Condomínio"
            id="condominio-select"
            name="condominio_id"
            value=state.selected
            options=condominios
        />
        <Input
            label=state.label
            id="unidade-field"
            name="unidade"
            value=unit
            placeholder=state.placeholder
            required=true
        />
    }
}

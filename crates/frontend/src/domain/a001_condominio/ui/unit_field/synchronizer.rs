use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use contracts::domain::a001_condominio::{CondominioId, CondominioTipo};

use super::display::UnitFieldDisplay;
use crate::domain::a001_condominio::config::StaleResponsePolicy;
use crate::domain::a001_condominio::error::UnitTypeError;

/// Resolves a condominium to its housing type
#[async_trait(?Send)]
pub trait UnitTypeSource {
    async fn fetch_tipo(&self, id: &CondominioId) -> Result<CondominioTipo, UnitTypeError>;
}

/// The three UI bindings the synchronizer reads and writes
pub trait UnitFieldView {
    /// Current value of the condominium selector
    fn selected_value(&self) -> String;
    fn set_label(&self, text: &str);
    fn set_placeholder(&self, text: &str);
}

/// What one `reconcile()` call ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No condominium selected, defaults applied without a request
    Cleared,
    /// Lookup succeeded and the display follows `tipo`
    Updated(CondominioTipo),
    /// Lookup failed, the label was reset
    Failed(UnitTypeError),
    /// A newer reconcile started while this one was waiting; nothing applied
    Discarded,
}

/// Keeps the unit label and placeholder in line with the selected condominium
///
/// Cheap to clone; clones share the view, the source and the request sequence.
pub struct UnitLabelSynchronizer<S, V> {
    source: Rc<S>,
    view: Rc<V>,
    policy: StaleResponsePolicy,
    sequence: Rc<Cell<u64>>,
}

impl<S, V> Clone for UnitLabelSynchronizer<S, V> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            view: Rc::clone(&self.view),
            policy: self.policy,
            sequence: Rc::clone(&self.sequence),
        }
    }
}

impl<S, V> UnitLabelSynchronizer<S, V>
where
    S: UnitTypeSource,
    V: UnitFieldView,
{
    pub fn new(source: S, view: V, policy: StaleResponsePolicy) -> Self {
        Self {
            source: Rc::new(source),
            view: Rc::new(view),
            policy,
            sequence: Rc::new(Cell::new(0)),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Bring the label and placeholder in line with the current selection.
    ///
    /// Never fails: lookup errors are logged and end in the default label.
    pub async fn reconcile(&self) -> ReconcileOutcome {
        let ticket = self.next_ticket();
        let value = self.view.selected_value();

        let Some(id) = CondominioId::from_selector(&value) else {
            UnitFieldDisplay::no_selection().apply(&*self.view);
            return ReconcileOutcome::Cleared;
        };

        let result = self.source.fetch_tipo(&id).await;
        if let Err(e) = &result {
            log::error!("Failed to fetch condominium type for {}: {}", id, e);
        }

        if self.is_stale(ticket) {
            log::debug!("Discarding condominium type response for {}: selection changed", id);
            return ReconcileOutcome::Discarded;
        }

        match result {
            Ok(tipo) => {
                log::debug!("Condominium {} is {:?}", id, tipo.code());
                UnitFieldDisplay::for_tipo(&tipo).apply(&*self.view);
                ReconcileOutcome::Updated(tipo)
            }
            Err(e) => {
                UnitFieldDisplay::failed().apply(&*self.view);
                ReconcileOutcome::Failed(e)
            }
        }
    }

    fn next_ticket(&self) -> u64 {
        let ticket = self.sequence.get().wrapping_add(1);
        self.sequence.set(ticket);
        ticket
    }

    fn is_stale(&self, ticket: u64) -> bool {
        match self.policy {
            StaleResponsePolicy::Discard => self.sequence.get() != ticket,
            StaleResponsePolicy::LastArrivalWins => false,
        }
    }
}

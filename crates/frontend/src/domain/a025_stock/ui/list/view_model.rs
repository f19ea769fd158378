use super::state::{create_state, ApplyOutcome, LoadOutcome, StockListStore};
use crate::domain::a025_stock::error::DeleteError;
use crate::domain::a025_stock::gateway::SharedStockGateway;
use crate::domain::a025_stock::ui::details::Submitted;
use contracts::domain::a025_stock::StockScope;
use leptos::prelude::*;

/// ViewModel списка остатков: связывает состояние с удалённым сервисом.
///
/// Все изменения состояния синхронные; асинхронно только ожидание ответа.
#[derive(Clone)]
pub struct StockListViewModel {
    pub state: RwSignal<StockListStore>,
    gateway: SharedStockGateway,
}

impl StockListViewModel {
    pub fn new(scope: StockScope, company_id: String, gateway: SharedStockGateway) -> Self {
        Self {
            state: create_state(scope, company_id),
            gateway,
        }
    }

    /// Reload the whole list; a response overtaken by a newer load is dropped
    pub async fn load(&self) -> LoadOutcome {
        let Some((ticket, scope, company_id)) = self
            .state
            .try_update(|s| (s.begin_load(), s.scope.clone(), s.company_id.clone()))
        else {
            return LoadOutcome::Stale;
        };

        let result = self.gateway.list(&scope, &company_id).await;

        self.state
            .try_update(|s| s.finish_load(ticket, result))
            .unwrap_or(LoadOutcome::Stale)
    }

    /// Apply a saved record according to the store's sync policy
    pub async fn accept_submitted(&self, submitted: Submitted) -> ApplyOutcome {
        let outcome = self
            .state
            .try_update(|s| match submitted {
                Submitted::Created(record) => s.apply_created(record),
                Submitted::Updated(record) => s.apply_updated(record),
            })
            .unwrap_or(ApplyOutcome::NotFound);

        if outcome == ApplyOutcome::NeedsReload {
            self.load().await;
        }
        outcome
    }

    /// Delete the checked rows, then reconcile with the service.
    ///
    /// A failed reload after a confirmed delete is recorded in `last_error`
    /// but does not turn the delete into a failure.
    pub async fn bulk_delete(&self) -> Result<String, DeleteError> {
        let ids = self
            .state
            .try_update(|s| s.begin_delete())
            .unwrap_or(Err(DeleteError::NothingSelected))?;

        let result = self.gateway.bulk_delete(ids.clone()).await;

        let confirmed = self
            .state
            .try_update(|s| s.finish_delete(&ids, result))
            .unwrap_or(Err(DeleteError::NothingSelected))?;

        if confirmed.reload_needed {
            if let LoadOutcome::Failed(e) = self.load().await {
                log::warn!("bulk delete confirmed but reload failed: {}", e);
            }
        }
        Ok(confirmed.message)
    }

    pub fn toggle(&self, index: usize) {
        self.state.update(|s| {
            if let Err(e) = s.selection.toggle(index) {
                log::error!("stock list: {}", e);
            }
        });
    }

    pub fn set_checked(&self, id: &str, checked: bool) {
        self.state.update(|s| {
            s.selection.set(id, checked);
        });
    }

    pub fn set_all_checked(&self, checked: bool) {
        self.state.update(|s| s.selection.set_all(checked));
    }

    pub fn switch_scope(&self, scope: StockScope, company_id: String) {
        self.state.update(|s| s.rescope(scope, company_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_stock::testing::{record, Call, FakeStockGateway};
    use std::sync::Arc;

    fn vm_with(records: Vec<contracts::domain::a025_stock::StockRecord>) -> (StockListViewModel, Arc<FakeStockGateway>) {
        let gateway = Arc::new(FakeStockGateway::with_records(records));
        let vm = StockListViewModel::new(StockScope::new("Factory"), "c1".into(), gateway.clone());
        (vm, gateway)
    }

    #[tokio::test]
    async fn load_uses_list_key_and_company() {
        let (vm, gateway) = vm_with(vec![record("1", "FactoryStock", 10.0, 2.0)]);
        assert_eq!(vm.load().await, LoadOutcome::Applied { count: 1 });
        assert_eq!(gateway.calls(), vec![Call::List("Factory".into(), "c1".into())]);
        vm.state.with_untracked(|s| {
            assert_eq!(s.items.len(), 1);
            assert_eq!(s.selection.len(), 1);
            assert!(!s.is_loading());
        });
    }

    #[tokio::test]
    async fn bulk_delete_reconciles_with_server() {
        let (vm, gateway) = vm_with(vec![
            record("1", "FactoryStock", 1.0, 1.0),
            record("2", "FactoryStock", 1.0, 1.0),
            record("3", "FactoryStock", 1.0, 1.0),
        ]);
        vm.load().await;
        vm.toggle(0);
        vm.set_checked("3", true);

        let message = vm.bulk_delete().await.unwrap();
        assert_eq!(message, "2 stocks deleted successfully");

        let calls = gateway.calls();
        assert_eq!(calls[1], Call::BulkDelete(vec!["1".into(), "3".into()]));
        assert!(matches!(calls[2], Call::List(..)));

        vm.state.with_untracked(|s| {
            let ids: Vec<&str> = s.items.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, vec!["2"]);
            assert_eq!(s.selection.current_selection(), vec![false]);
            assert!(!s.is_loading());
        });
    }

    #[tokio::test]
    async fn failed_bulk_delete_leaves_state_intact() {
        let (vm, gateway) = vm_with(vec![record("1", "FactoryStock", 1.0, 1.0)]);
        vm.load().await;
        vm.set_all_checked(true);
        gateway.set_fail_delete(true);

        assert!(matches!(vm.bulk_delete().await, Err(DeleteError::Rejected { .. })));
        vm.state.with_untracked(|s| {
            assert_eq!(s.items.len(), 1);
            assert!(s.selection.all_selected(&s.items));
            assert!(!s.is_loading());
        });
        assert_eq!(gateway.calls().len(), 2);
    }

    #[tokio::test]
    async fn empty_selection_skips_remote_call() {
        let (vm, gateway) = vm_with(vec![record("1", "FactoryStock", 1.0, 1.0)]);
        vm.load().await;
        assert_eq!(vm.bulk_delete().await, Err(DeleteError::NothingSelected));
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn failed_reload_after_delete_still_confirms() {
        let (vm, gateway) = vm_with(vec![
            record("1", "FactoryStock", 1.0, 1.0),
            record("2", "FactoryStock", 1.0, 1.0),
        ]);
        vm.load().await;
        vm.toggle(1);
        gateway.set_fail_list(true);

        assert!(vm.bulk_delete().await.is_ok());
        vm.state.with_untracked(|s| {
            assert_eq!(s.items.len(), 2);
            assert!(s.last_error.is_some());
            assert!(!s.is_loading());
        });
    }

    #[tokio::test]
    async fn created_record_is_appended_without_refetch() {
        let (vm, gateway) = vm_with(vec![record("1", "FactoryStock", 1.0, 1.0)]);
        vm.load().await;
        let outcome = vm
            .accept_submitted(Submitted::Created(record("9", "FactoryStock", 2.0, 2.0)))
            .await;
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(gateway.calls().len(), 1);
        vm.state.with_untracked(|s| {
            assert_eq!(s.items.last().map(|r| r.id.as_str()), Some("9"));
            assert_eq!(s.selection.len(), 2);
        });
    }

    #[tokio::test]
    async fn save_from_previous_scope_is_ignored_after_switch() {
        let (vm, _gateway) = vm_with(vec![record("1", "FactoryStock", 1.0, 1.0)]);
        vm.load().await;
        vm.switch_scope(StockScope::new("Warehouse"), "c1".into());

        let outcome = vm
            .accept_submitted(Submitted::Created(record("9", "FactoryStock", 2.0, 2.0)))
            .await;
        assert_eq!(outcome, ApplyOutcome::ScopeMismatch);
        vm.state.with_untracked(|s| assert!(s.items.iter().all(|r| s.scope.accepts(r))));
    }

    #[tokio::test]
    async fn out_of_range_toggle_changes_nothing() {
        let (vm, _gateway) = vm_with(vec![record("1", "FactoryStock", 1.0, 1.0)]);
        vm.load().await;
        vm.toggle(4);
        vm.state.with_untracked(|s| assert_eq!(s.selection.current_selection(), vec![false]));
    }
}

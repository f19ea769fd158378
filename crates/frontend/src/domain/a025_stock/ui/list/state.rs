use super::selection::SelectionTracker;
use super::totals::{totals, StockTotals};
use crate::domain::a025_stock::error::{DeleteError, FetchError};
use contracts::domain::a025_stock::{StockRecord, StockScope};
use leptos::prelude::*;

/// Как список синхронизируется с сервером после операции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Применить результат локально, без перезагрузки
    Optimistic,
    /// Перезагрузить список целиком после подтверждения сервера
    Reconcile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockOperation {
    Create,
    Update,
    BulkDelete,
}

/// Политика синхронизации по операциям
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncPolicy {
    pub create: SyncMode,
    pub update: SyncMode,
    pub bulk_delete: SyncMode,
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self {
            create: SyncMode::Optimistic,
            update: SyncMode::Optimistic,
            bulk_delete: SyncMode::Reconcile,
        }
    }
}

impl SyncPolicy {
    pub fn mode(&self, op: StockOperation) -> SyncMode {
        match op {
            StockOperation::Create => self.create,
            StockOperation::Update => self.update,
            StockOperation::BulkDelete => self.bulk_delete,
        }
    }
}

/// Номер запроса списка; ответы с устаревшим номером отбрасываются
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Applied { count: usize },
    /// Ответ пришёл после более нового запроса
    Stale,
    Failed(FetchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// Запись с таким id не найдена, список не тронут
    NotFound,
    /// Политика требует перезагрузки вместо локального изменения
    NeedsReload,
    /// Запись другого разреза (например, сохранена до смены маршрута)
    ScopeMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmed {
    pub message: String,
    pub reload_needed: bool,
}

/// Список остатков одного разреза и его чекбоксы
#[derive(Clone, Debug)]
pub struct StockListStore {
    pub scope: StockScope,
    pub company_id: String,
    pub items: Vec<StockRecord>,
    pub selection: SelectionTracker,
    pub policy: SyncPolicy,
    pub is_loaded: bool,
    pub last_error: Option<String>,
    latest_token: u64,
    load_pending: bool,
    delete_pending: bool,
}

impl StockListStore {
    pub fn new(scope: StockScope, company_id: impl Into<String>) -> Self {
        Self {
            scope,
            company_id: company_id.into(),
            items: Vec::new(),
            selection: SelectionTracker::new(),
            policy: SyncPolicy::default(),
            is_loaded: false,
            last_error: None,
            latest_token: 0,
            load_pending: false,
            delete_pending: false,
        }
    }

    pub fn with_policy(mut self, policy: SyncPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Индикатор загрузки: поднят, пока ждём список или удаление
    pub fn is_loading(&self) -> bool {
        self.load_pending || self.delete_pending
    }

    pub fn totals(&self) -> StockTotals {
        totals(&self.items)
    }

    pub fn find(&self, id: &str) -> Option<&StockRecord> {
        self.items.iter().find(|r| r.id == id)
    }

    /// Переключиться на другой разрез: список очищается, ответы на
    /// запросы старого разреза станут устаревшими
    pub fn rescope(&mut self, scope: StockScope, company_id: impl Into<String>) {
        self.scope = scope;
        self.company_id = company_id.into();
        self.items.clear();
        self.selection.reset_all(&self.items);
        self.is_loaded = false;
        self.last_error = None;
        self.latest_token += 1;
        self.load_pending = false;
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_token += 1;
        self.load_pending = true;
        log::debug!("stock list [{}]: load #{} started", self.scope, self.latest_token);
        LoadTicket(self.latest_token)
    }

    /// Применить ответ на запрос списка, если он ещё актуален.
    ///
    /// Список заменяется целиком, чекбоксы сбрасываются. При ошибке
    /// прежний список остаётся.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<StockRecord>, FetchError>,
    ) -> LoadOutcome {
        if ticket.0 != self.latest_token {
            log::warn!(
                "stock list [{}]: dropping response #{} (latest #{})",
                self.scope,
                ticket.0,
                self.latest_token
            );
            return LoadOutcome::Stale;
        }
        self.load_pending = false;

        match result {
            Ok(records) => {
                let total = records.len();
                let scope = &self.scope;
                let items: Vec<StockRecord> =
                    records.into_iter().filter(|r| scope.accepts(r)).collect();
                if items.len() != total {
                    log::warn!(
                        "stock list [{}]: dropped {} records of another type",
                        self.scope,
                        total - items.len()
                    );
                }
                self.selection.reset_all(&items);
                self.items = items;
                self.is_loaded = true;
                self.last_error = None;
                log::debug!("stock list [{}]: {} records loaded", self.scope, self.items.len());
                LoadOutcome::Applied {
                    count: self.items.len(),
                }
            }
            Err(e) => {
                log::error!("stock list [{}]: load failed: {}", self.scope, e);
                self.last_error = Some(e.to_string());
                LoadOutcome::Failed(e)
            }
        }
    }

    fn accepts(&self, record: &StockRecord) -> bool {
        if self.scope.accepts(record) {
            return true;
        }
        log::warn!(
            "stock list [{}]: ignoring record {} of type {}",
            self.scope,
            record.id,
            record.kind
        );
        false
    }

    /// Новая запись в конец списка
    pub fn apply_created(&mut self, record: StockRecord) -> ApplyOutcome {
        if !self.accepts(&record) {
            return ApplyOutcome::ScopeMismatch;
        }
        if self.policy.mode(StockOperation::Create) == SyncMode::Reconcile {
            return ApplyOutcome::NeedsReload;
        }
        self.items.push(record);
        self.selection.sync(&self.items);
        ApplyOutcome::Applied
    }

    /// Заменить запись с тем же id на месте
    pub fn apply_updated(&mut self, record: StockRecord) -> ApplyOutcome {
        if !self.accepts(&record) {
            return ApplyOutcome::ScopeMismatch;
        }
        if self.policy.mode(StockOperation::Update) == SyncMode::Reconcile {
            return ApplyOutcome::NeedsReload;
        }
        match self.items.iter().position(|r| r.id == record.id) {
            Some(index) => {
                self.items[index] = record;
                ApplyOutcome::Applied
            }
            None => {
                log::debug!("stock list [{}]: update for unknown id {}", self.scope, record.id);
                ApplyOutcome::NotFound
            }
        }
    }

    /// Отмеченные id в порядке списка; поднимает индикатор загрузки
    pub fn begin_delete(&mut self) -> Result<Vec<String>, DeleteError> {
        let selected = self.selection.selected_ids(&self.items)?;
        if selected.is_empty() {
            return Err(DeleteError::NothingSelected);
        }
        let ids: Vec<String> = self
            .items
            .iter()
            .filter(|r| selected.contains(&r.id))
            .map(|r| r.id.clone())
            .collect();
        self.delete_pending = true;
        Ok(ids)
    }

    pub fn finish_delete(
        &mut self,
        ids: &[String],
        result: Result<String, DeleteError>,
    ) -> Result<DeleteConfirmed, DeleteError> {
        self.delete_pending = false;
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                log::error!("stock list [{}]: bulk delete failed: {}", self.scope, e);
                self.last_error = Some(e.to_string());
                return Err(e);
            }
        };

        let reload_needed = match self.policy.mode(StockOperation::BulkDelete) {
            SyncMode::Reconcile => true,
            SyncMode::Optimistic => {
                self.items.retain(|r| !ids.contains(&r.id));
                self.selection.sync(&self.items);
                false
            }
        };
        Ok(DeleteConfirmed {
            message,
            reload_needed,
        })
    }
}

pub fn create_state(scope: StockScope, company_id: String) -> RwSignal<StockListStore> {
    RwSignal::new(StockListStore::new(scope, company_id))
}

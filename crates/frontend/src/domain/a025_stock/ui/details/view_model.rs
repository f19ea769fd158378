use super::catalog::{ensure_loaded, CatalogCache};
use super::model::{EditSession, Price, Quantity, StockFormController, Submitted};
use crate::domain::a025_stock::error::{SubmitError, ValidationError};
use crate::domain::a025_stock::gateway::{SharedCatalogGateway, SharedStockGateway};
use contracts::domain::a025_stock::{StockRecord, StockScope};
use leptos::prelude::*;
use std::future::Future;

/// Чем закончилось сохранение формы
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Saved(Submitted),
    Invalid(Vec<ValidationError>),
    /// Форму успели открыть для другой записи, результат не нужен
    Abandoned,
    Failed(SubmitError),
}

/// ViewModel for the stock modal
#[derive(Clone)]
pub struct StockFormViewModel {
    pub form: RwSignal<StockFormController>,
    pub errors: RwSignal<Vec<ValidationError>>,
    pub submitting: RwSignal<bool>,
    pub catalog: RwSignal<CatalogCache>,
    stock_gateway: SharedStockGateway,
    catalog_gateway: SharedCatalogGateway,
}

impl StockFormViewModel {
    pub fn new(stock_gateway: SharedStockGateway, catalog_gateway: SharedCatalogGateway) -> Self {
        Self {
            form: RwSignal::new(StockFormController::new()),
            errors: RwSignal::new(Vec::new()),
            submitting: RwSignal::new(false),
            catalog: RwSignal::new(CatalogCache::default()),
            stock_gateway,
            catalog_gateway,
        }
    }

    /// Open for `record`, or for a new stock when `None`
    pub fn open(&self, record: Option<&StockRecord>) -> u64 {
        self.errors.set(Vec::new());
        self.form
            .try_update(|f| f.begin_edit(record))
            .unwrap_or_default()
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.with(|f| f.session().is_edit())
    }

    pub fn session(&self) -> EditSession {
        self.form.with_untracked(|f| f.session().clone())
    }

    pub fn set_vendor(&self, vendor_id: String) {
        self.form.update(|f| f.session_mut().vendor_id = vendor_id);
    }

    pub fn set_product(&self, product_id: String) {
        self.form.update(|f| f.session_mut().product_id = product_id);
    }

    /// Ввод количества; нераспознанный текст оставляет прежнее значение
    pub fn set_quantity_input(&self, raw: &str) {
        if let Some(quantity) = Quantity::parse_input(raw) {
            self.form.update(|f| f.session_mut().quantity = quantity);
        }
    }

    pub fn set_price_input(&self, raw: &str) {
        if let Some(price) = Price::parse_input(raw) {
            self.form.update(|f| f.session_mut().price = price);
        }
    }

    pub async fn load_catalog(&self, company_id: &str) {
        if let Err(e) = ensure_loaded(self.catalog, self.catalog_gateway.as_ref(), company_id).await {
            log::warn!("stock form: catalog incomplete: {}", e);
        }
    }

    /// Validate and save the current session.
    ///
    /// The session is captured when this is called, not when the future is
    /// polled. The request is not cancelled when the modal closes; its
    /// result is reported as `Abandoned` only if the form was reopened
    /// meanwhile.
    pub fn submit(&self, scope: &StockScope) -> impl Future<Output = FormOutcome> + 'static {
        let (generation, session) = self
            .form
            .with_untracked(|f| (f.generation(), f.session().clone()));
        let scope = scope.clone();
        let vm = self.clone();

        async move {
            if let Err(errors) = StockFormController::validate(&scope, &session) {
                vm.errors.set(errors.clone());
                return FormOutcome::Invalid(errors);
            }
            vm.errors.set(Vec::new());
            vm.submitting.set(true);

            let result =
                StockFormController::submit(vm.stock_gateway.as_ref(), &scope, &session).await;

            vm.submitting.try_set(false);
            let current = vm
                .form
                .try_with_untracked(|f| f.is_current(generation))
                .unwrap_or(false);
            if !current {
                log::debug!("stock form: dropping result of session #{}", generation);
                return FormOutcome::Abandoned;
            }

            match result {
                Ok(submitted) => FormOutcome::Saved(submitted),
                Err(SubmitError::Validation(errors)) => {
                    vm.errors.set(errors.clone());
                    FormOutcome::Invalid(errors)
                }
                Err(e) => {
                    log::error!("stock form: save failed: {}", e);
                    FormOutcome::Failed(e)
                }
            }
        }
    }
}

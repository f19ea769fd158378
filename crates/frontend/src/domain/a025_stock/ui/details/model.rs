use crate::domain::a025_stock::error::{FormField, SubmitError, ValidationError};
use crate::domain::a025_stock::gateway::StockGateway;
use contracts::domain::a025_stock::{CreateStockPayload, StockRecord, StockScope, UpdateStockPayload};

/// Шаг поля ввода количества и цены
pub const INPUT_STEP: f64 = 0.2;
/// Значение количества и цены в новой форме
pub const DEFAULT_AMOUNT: f64 = 1.0;

macro_rules! bounded_amount {
    ($(#[$meta:meta])* $name:ident, $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl $name {
            pub const MIN: f64 = $min;
            pub const MAX: f64 = $max;

            /// Значение вне диапазона прижимается к границе
            pub fn new(value: f64) -> Self {
                if value.is_nan() {
                    return Self(Self::MIN);
                }
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            /// Разбор текста из поля ввода; мусор -> None
            pub fn parse_input(raw: &str) -> Option<Self> {
                raw.trim().replace(',', ".").parse::<f64>().ok().map(Self::new)
            }

            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(DEFAULT_AMOUNT)
            }
        }
    };
}

bounded_amount!(
    /// Количество, кг: [1, 100]
    Quantity,
    1.0,
    100.0
);
bounded_amount!(
    /// Цена за кг: [1, 5000]
    Price,
    1.0,
    5000.0
);

/// Рабочие значения формы одной записи
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditSession {
    /// `Some` при редактировании существующей записи
    pub existing_id: Option<String>,
    pub vendor_id: String,
    pub product_id: String,
    pub quantity: Quantity,
    pub price: Price,
}

impl EditSession {
    /// Форма редактирования: поставщик и продукт хранятся как id
    pub fn for_record(record: &StockRecord) -> Self {
        Self {
            existing_id: Some(record.id.clone()),
            vendor_id: record.vendor_id().unwrap_or_default().to_string(),
            product_id: record.product.id.clone(),
            quantity: Quantity::new(record.quantity),
            price: Price::new(record.price),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.existing_id.is_some()
    }

    fn vendor_for_payload(&self) -> Option<String> {
        let vendor = self.vendor_id.trim();
        (!vendor.is_empty()).then(|| vendor.to_string())
    }
}

/// Результат успешного сохранения
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    Created(StockRecord),
    Updated(StockRecord),
}

/// Сеанс редактирования в модальном окне.
///
/// Каждый `begin_edit` увеличивает номер поколения; результат сохранения,
/// пришедший для старого поколения, вызывающий отбрасывает.
#[derive(Debug, Clone, Default)]
pub struct StockFormController {
    session: EditSession,
    generation: u64,
}

impl StockFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_edit(&mut self, record: Option<&StockRecord>) -> u64 {
        self.session = match record {
            Some(r) => EditSession::for_record(r),
            None => EditSession::default(),
        };
        self.generation += 1;
        self.generation
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Продукт обязателен всегда, поставщик - только для разреза Factory
    pub fn validate(scope: &StockScope, session: &EditSession) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if scope.requires_vendor() && session.vendor_id.trim().is_empty() {
            errors.push(ValidationError::required(FormField::Vendor));
        }
        if session.product_id.trim().is_empty() {
            errors.push(ValidationError::required(FormField::Product));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn create_payload(scope: &StockScope, session: &EditSession) -> CreateStockPayload {
        CreateStockPayload {
            vendor_id: session.vendor_for_payload(),
            product_id: session.product_id.trim().to_string(),
            quantity: session.quantity.value(),
            price: session.price.value(),
            kind: scope.server_label(),
        }
    }

    pub fn update_payload(session: &EditSession) -> UpdateStockPayload {
        UpdateStockPayload {
            vendor_id: session.vendor_for_payload(),
            product_id: session.product_id.trim().to_string(),
            quantity: session.quantity.value(),
            price: session.price.value(),
        }
    }

    /// Проверить форму и отправить create или update.
    ///
    /// Невалидная форма до сервиса не доходит. Хранилище списка здесь не
    /// трогается: результат применяет вызывающий.
    pub async fn submit(
        gateway: &dyn StockGateway,
        scope: &StockScope,
        session: &EditSession,
    ) -> Result<Submitted, SubmitError> {
        Self::validate(scope, session).map_err(SubmitError::Validation)?;

        match &session.existing_id {
            Some(id) => {
                let record = gateway.update(id, Self::update_payload(session)).await?;
                Ok(Submitted::Updated(record))
            }
            None => {
                let record = gateway.create(Self::create_payload(scope, session)).await?;
                Ok(Submitted::Created(record))
            }
        }
    }
}

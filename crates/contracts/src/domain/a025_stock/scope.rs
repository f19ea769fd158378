use serde::{Deserialize, Serialize};
use std::fmt;

/// Тип склада, для которого поставщик обязателен
pub const VENDOR_TRACKED_SCOPE: &str = "Factory";

/// Разрез складских остатков (Factory / Warehouse / raw_material ...)
///
/// Хранит исходное значение из маршрута; серверная метка и заголовок
/// вычисляются из него.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockScope(String);

impl StockScope {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Поставщик обязателен только для заводских остатков
    pub fn requires_vendor(&self) -> bool {
        self.0 == VENDOR_TRACKED_SCOPE
    }

    /// Значение `type` для запроса списка: `raw_material` -> `rawmaterial`
    pub fn list_key(&self) -> String {
        self.0.split('_').collect()
    }

    /// Значение `type` при создании записи: `raw_material` -> `rawmaterialStock`
    pub fn server_label(&self) -> String {
        format!("{}Stock", self.list_key())
    }

    /// Заголовок страницы: `raw_material` -> `raw material Stock`
    pub fn display_heading(&self) -> String {
        format!("{} Stock", self.0.split('_').collect::<Vec<_>>().join(" "))
    }

    /// Запись принадлежит этому разрезу
    pub fn accepts(&self, record: &super::StockRecord) -> bool {
        record.kind == self.server_label()
    }
}

impl fmt::Display for StockScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_material_labels() {
        let scope = StockScope::new("raw_material");
        assert_eq!(scope.list_key(), "rawmaterial");
        assert_eq!(scope.server_label(), "rawmaterialStock");
        assert_eq!(scope.display_heading(), "raw material Stock");
    }

    #[test]
    fn only_factory_tracks_vendor() {
        assert!(StockScope::new("Factory").requires_vendor());
        assert!(!StockScope::new("Warehouse").requires_vendor());
        assert!(!StockScope::new("factory").requires_vendor());
    }

    #[test]
    fn single_word_scope_is_unchanged() {
        let scope = StockScope::new("Warehouse");
        assert_eq!(scope.list_key(), "Warehouse");
        assert_eq!(scope.server_label(), "WarehouseStock");
        assert_eq!(scope.display_heading(), "Warehouse Stock");
    }
}

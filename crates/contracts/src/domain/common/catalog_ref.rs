use serde::{Deserialize, Serialize};

/// Поставщик из справочника (только чтение)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VendorRef {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,
    /// Сервис может прислать только id
    #[serde(default)]
    pub name: String,
}

/// Продукт из справочника (только чтение)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl VendorRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl ProductRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

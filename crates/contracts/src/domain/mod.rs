pub mod a025_stock;
pub mod common;

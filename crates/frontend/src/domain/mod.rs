pub mod a025_stock;

pub mod table_checkbox;
pub mod totals_line;

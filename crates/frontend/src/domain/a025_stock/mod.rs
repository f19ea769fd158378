pub mod api;
pub mod error;
pub mod gateway;
pub mod ui;

#[cfg(test)]
pub mod testing;

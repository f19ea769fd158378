//! Wire types shared between the stock view and the inventory service.

pub mod domain;

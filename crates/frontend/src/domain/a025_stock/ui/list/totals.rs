//! Итоги по списку остатков: сумма (цена * количество) и общее количество.

use contracts::domain::a025_stock::StockRecord;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StockTotals {
    pub total_price: f64,
    pub total_quantity: f64,
    pub record_count: usize,
}

impl StockTotals {
    /// Пустой список: итоги не показываются
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    pub fn price_label(&self) -> String {
        format!("{:.2}", self.total_price)
    }

    pub fn quantity_label(&self) -> String {
        format!("{:.2}", self.total_quantity)
    }
}

/// Пересчитать итоги; пустой список даёт нули
pub fn totals(list: &[StockRecord]) -> StockTotals {
    if list.is_empty() {
        return StockTotals::default();
    }

    let (price, quantity) = list.iter().fold((0.0, 0.0), |(p, q), r| {
        (p + r.line_total(), q + r.quantity)
    });

    StockTotals {
        total_price: round2(price),
        total_quantity: round2(quantity),
        record_count: list.len(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_stock::testing::record;

    #[test]
    fn empty_list_has_zero_totals() {
        let t = totals(&[]);
        assert_eq!(t.total_price, 0.0);
        assert_eq!(t.total_quantity, 0.0);
        assert!(t.is_empty());
    }

    #[test]
    fn sums_price_times_quantity() {
        let list = vec![
            record("1", "FactoryStock", 10.0, 2.0),
            record("2", "FactoryStock", 5.0, 4.0),
        ];
        let t = totals(&list);
        assert_eq!(t.total_price, 40.0);
        assert_eq!(t.total_quantity, 6.0);
        assert_eq!(t.price_label(), "40.00");
        assert_eq!(t.quantity_label(), "6.00");
        assert_eq!(t.record_count, 2);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let list = vec![
            record("1", "FactoryStock", 1.1, 1.2),
            record("2", "FactoryStock", 3.333, 1.0),
        ];
        let t = totals(&list);
        assert_eq!(t.total_price, 4.65);
        assert_eq!(t.total_quantity, 2.2);
    }
}

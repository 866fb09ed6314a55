pub mod table;

pub use table::{Align, Table};

/// Render a float the way the transaction table and payment summaries show
/// amounts: two decimal places, no separators.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amounts_with_two_decimals() {
        assert_eq!(format_amount(50.0), "50.00");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(0.0), "0.00");
    }
}

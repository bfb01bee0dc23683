//! Display formatting for currency amounts.

use crate::core::cause::CostRange;

/// Format an integer Rupiah amount with dot-grouped thousands.
///
/// # Examples
///
/// ```
/// use fault_solver::utils::format::format_rupiah;
///
/// assert_eq!(format_rupiah(0), "Rp 0");
/// assert_eq!(format_rupiah(50_000), "Rp 50.000");
/// assert_eq!(format_rupiah(1_500_000), "Rp 1.500.000");
/// ```
#[must_use]
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

/// Render a cost range for display, e.g. `"Rp 0 - Rp 50.000"`
#[must_use]
pub fn format_cost_range(range: CostRange) -> String {
    format!(
        "{} - {}",
        format_rupiah(range.min),
        format_rupiah(range.max)
    )
}

//! Availability arithmetic over stock ledger snapshots
//!
//! Converts raw movement fields into a trustworthy, non-negative available
//! quantity. All functions are pure and total: bad input coerces to zero
//! rather than failing, since upstream data is spreadsheet-derived and
//! frequently sparse.

use crate::models::StockLedgerEntry;

/// Parse the leading integer of a quantity field, coercing anything else to
/// zero.
///
/// The coercion is intentional (sparse spreadsheet input must not block
/// routine usage); each substitution of a non-blank value is logged so bad
/// feeds stay visible.
pub fn lenient_parse(raw: &str) -> i64 {
    let s = raw.trim();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    match digits.parse::<i64>() {
        Ok(n) => sign * n,
        Err(_) => {
            if !s.is_empty() {
                tracing::warn!(raw = %raw, "non-numeric quantity coerced to zero");
            }
            0
        }
    }
}

/// Ending inventory: beginning + receipts - issued + returned + scrap in -
/// scrap out. May be negative when issues outran receipts in the source
/// data. The sums saturate at the i64 bounds, so even absurd feed values
/// cannot panic the calculation.
pub fn ending_inventory(entry: &StockLedgerEntry) -> i64 {
    entry
        .beginning_inventory
        .saturating_add(entry.receipts)
        .saturating_sub(entry.issued)
        .saturating_add(entry.returned)
        .saturating_add(entry.scrap_in)
        .saturating_sub(entry.scrap_out)
}

/// Quantity a user may still order: ending inventory minus reservations,
/// floored at zero.
pub fn compute_availability(entry: &StockLedgerEntry) -> i64 {
    ending_inventory(entry).saturating_sub(entry.reserved).max(0)
}

/// True when reservations exceed ending inventory.
///
/// The available quantity still floors at zero in that case; this predicate
/// lets callers surface the over-reservation instead of hiding it.
pub fn is_over_reserved(entry: &StockLedgerEntry) -> bool {
    entry.reserved > ending_inventory(entry)
}

/// Keep only the entries a user may legally select (availability > 0),
/// paired with their computed availability. Input order is preserved;
/// callers sort for presentation.
pub fn filter_available(entries: &[StockLedgerEntry]) -> Vec<(&StockLedgerEntry, i64)> {
    entries
        .iter()
        .map(|entry| (entry, compute_availability(entry)))
        .filter(|(_, available)| *available > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        beg: i64,
        receipts: i64,
        issued: i64,
        returned: i64,
        scrap_in: i64,
        scrap_out: i64,
        reserved: i64,
    ) -> StockLedgerEntry {
        StockLedgerEntry {
            id: String::new(),
            category: String::new(),
            description: String::new(),
            uom: String::new(),
            unit_cost: rust_decimal::Decimal::ZERO,
            beginning_inventory: beg,
            receipts,
            issued,
            returned,
            scrap_in,
            scrap_out,
            reserved,
        }
    }

    #[test]
    fn test_lenient_parse() {
        assert_eq!(lenient_parse("42"), 42);
        assert_eq!(lenient_parse("  42  "), 42);
        assert_eq!(lenient_parse("-7"), -7);
        assert_eq!(lenient_parse("+7"), 7);
        assert_eq!(lenient_parse("3.5"), 3);
        assert_eq!(lenient_parse("12 pcs"), 12);
        assert_eq!(lenient_parse(""), 0);
        assert_eq!(lenient_parse("n/a"), 0);
        assert_eq!(lenient_parse("--5"), 0);
    }

    #[test]
    fn test_worked_example() {
        // ending = 100 + 50 - 30 + 5 + 0 - 2 = 123; available = 123 - 10
        let e = entry(100, 50, 30, 5, 0, 2, 10);
        assert_eq!(ending_inventory(&e), 123);
        assert_eq!(compute_availability(&e), 113);
    }

    #[test]
    fn test_availability_floors_at_zero() {
        let e = entry(10, 0, 0, 0, 0, 0, 25);
        assert_eq!(compute_availability(&e), 0);
        assert!(is_over_reserved(&e));
    }

    #[test]
    fn test_negative_ending_inventory_still_floors() {
        let e = entry(0, 0, 5, 0, 0, 0, 0);
        assert_eq!(ending_inventory(&e), -5);
        assert_eq!(compute_availability(&e), 0);
    }

    #[test]
    fn test_not_over_reserved_at_exact_balance() {
        let e = entry(10, 0, 0, 0, 0, 0, 10);
        assert_eq!(compute_availability(&e), 0);
        assert!(!is_over_reserved(&e));
    }

    #[test]
    fn test_extreme_values_saturate_instead_of_overflowing() {
        let e = entry(i64::MAX, 1, 0, 0, 0, 0, 0);
        assert_eq!(ending_inventory(&e), i64::MAX);
        assert_eq!(compute_availability(&e), i64::MAX);
        assert!(!is_over_reserved(&e));

        let e = entry(i64::MIN, 0, 1, 0, 0, 0, 0);
        assert_eq!(ending_inventory(&e), i64::MIN);
        assert_eq!(compute_availability(&e), 0);
        assert!(is_over_reserved(&e));
    }

    #[test]
    fn test_filter_available_excludes_zero_and_preserves_order() {
        let entries = vec![
            entry(5, 0, 0, 0, 0, 0, 0),
            entry(0, 0, 0, 0, 0, 0, 0),
            entry(3, 2, 0, 0, 0, 0, 1),
        ];
        let filtered = filter_available(&entries);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].1, 5);
        assert_eq!(filtered[1].1, 4);
        assert!(std::ptr::eq(filtered[0].0, &entries[0]));
        assert!(std::ptr::eq(filtered[1].0, &entries[2]));
    }

    #[test]
    fn test_filter_available_is_idempotent() {
        let entries = vec![entry(5, 0, 0, 0, 0, 0, 0), entry(0, 0, 0, 0, 0, 0, 0)];
        let first: Vec<i64> = filter_available(&entries).iter().map(|(_, a)| *a).collect();
        let second: Vec<i64> = filter_available(&entries).iter().map(|(_, a)| *a).collect();
        assert_eq!(first, second);
    }
}

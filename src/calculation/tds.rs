//! Tax Deducted at Source approximation.
//!
//! This is a flat-projection approximation: the monthly gross is annualized,
//! existing deductions subtracted, and the FY 2024-25 new-regime slab table
//! applied. It performs no Form-16 style multi-source aggregation, regime
//! selection or investment-declaration handling, and must not be treated as
//! a compliant standalone TDS engine.

use rust_decimal::Decimal;

use super::rounding::round2;

/// One row of a progressive slab table with bracket-accumulated base tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ProgressiveSlab {
    /// Upper bound of the slab (inclusive), `None` for the top slab.
    up_to: Option<Decimal>,
    /// Lower bound of the slab; tax applies to income above this figure.
    lower: Decimal,
    /// Accumulated tax from all lower slabs.
    base: Decimal,
    /// Marginal rate inside this slab.
    rate: Decimal,
}

/// FY 2024-25 new-regime income tax slabs.
const TDS_SLABS: [ProgressiveSlab; 6] = [
    ProgressiveSlab {
        up_to: Some(Decimal::from_parts(300000, 0, 0, false, 0)),
        lower: Decimal::ZERO,
        base: Decimal::ZERO,
        rate: Decimal::ZERO,
    },
    ProgressiveSlab {
        up_to: Some(Decimal::from_parts(700000, 0, 0, false, 0)),
        lower: Decimal::from_parts(300000, 0, 0, false, 0),
        base: Decimal::ZERO,
        rate: Decimal::from_parts(5, 0, 0, false, 2),
    },
    ProgressiveSlab {
        up_to: Some(Decimal::from_parts(1000000, 0, 0, false, 0)),
        lower: Decimal::from_parts(700000, 0, 0, false, 0),
        base: Decimal::from_parts(20000, 0, 0, false, 0),
        rate: Decimal::from_parts(10, 0, 0, false, 2),
    },
    ProgressiveSlab {
        up_to: Some(Decimal::from_parts(1200000, 0, 0, false, 0)),
        lower: Decimal::from_parts(1000000, 0, 0, false, 0),
        base: Decimal::from_parts(50000, 0, 0, false, 0),
        rate: Decimal::from_parts(15, 0, 0, false, 2),
    },
    ProgressiveSlab {
        up_to: Some(Decimal::from_parts(1500000, 0, 0, false, 0)),
        lower: Decimal::from_parts(1200000, 0, 0, false, 0),
        base: Decimal::from_parts(80000, 0, 0, false, 0),
        rate: Decimal::from_parts(20, 0, 0, false, 2),
    },
    ProgressiveSlab {
        up_to: None,
        lower: Decimal::from_parts(1500000, 0, 0, false, 0),
        base: Decimal::from_parts(140000, 0, 0, false, 0),
        rate: Decimal::from_parts(30, 0, 0, false, 2),
    },
];

/// Calculates the annual income tax on a taxable income figure.
///
/// `taxable = annual_income - existing_deductions`; the first slab whose
/// bound covers the taxable income supplies the accumulated base plus the
/// marginal rate on the amount above the slab's lower bound. The annual
/// figure is returned unrounded; [`calculate_monthly_tds`] rounds after
/// dividing by twelve.
pub fn calculate_annual_tds(annual_income: Decimal, existing_deductions: Decimal) -> Decimal {
    let taxable = annual_income - existing_deductions;

    for slab in &TDS_SLABS {
        let covered = match slab.up_to {
            Some(bound) => taxable <= bound,
            None => true,
        };
        if covered {
            return slab.base + (taxable - slab.lower).max(Decimal::ZERO) * slab.rate;
        }
    }

    Decimal::ZERO
}

/// Calculates the approximate monthly TDS for a monthly gross salary.
///
/// The monthly gross is annualized (x12), existing deductions subtracted,
/// the annual tax derived from the slab table, divided back by twelve and
/// rounded to 2 decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_monthly_tds;
/// use rust_decimal::Decimal;
///
/// // 30850 * 12 = 370200; (370200 - 300000) * 5% = 3510; / 12 = 292.50
/// assert_eq!(
///     calculate_monthly_tds(Decimal::new(30850, 0), Decimal::ZERO),
///     Decimal::new(29250, 2),
/// );
/// ```
pub fn calculate_monthly_tds(monthly_gross_salary: Decimal, existing_deductions: Decimal) -> Decimal {
    let annual_income = monthly_gross_salary * Decimal::from(12);
    let annual_tds = calculate_annual_tds(annual_income, existing_deductions);
    round2(annual_tds / Decimal::from(12))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_annual_tds_below_exemption_is_zero() {
        assert_eq!(calculate_annual_tds(dec("300000"), dec("0")), Decimal::ZERO);
        assert_eq!(calculate_annual_tds(dec("250000"), dec("0")), Decimal::ZERO);
    }

    #[test]
    fn test_annual_tds_five_percent_band() {
        // (370200 - 300000) * 0.05 = 3510
        assert_eq!(calculate_annual_tds(dec("370200"), dec("0")), dec("3510.00"));
    }

    #[test]
    fn test_annual_tds_band_boundaries_are_continuous() {
        // 700000 taxed entirely in the 5% band: 400000 * 0.05 = 20000,
        // which equals the 10% band's accumulated base.
        assert_eq!(calculate_annual_tds(dec("700000"), dec("0")), dec("20000.00"));
        assert_eq!(
            calculate_annual_tds(dec("1000000"), dec("0")),
            dec("50000.00")
        );
        assert_eq!(
            calculate_annual_tds(dec("1200000"), dec("0")),
            dec("80000.00")
        );
        assert_eq!(
            calculate_annual_tds(dec("1500000"), dec("0")),
            dec("140000.00")
        );
    }

    #[test]
    fn test_annual_tds_ten_percent_band() {
        // 20000 + (840000 - 700000) * 0.10 = 34000
        assert_eq!(calculate_annual_tds(dec("840000"), dec("0")), dec("34000.00"));
    }

    #[test]
    fn test_annual_tds_top_band() {
        // 140000 + (1600000 - 1500000) * 0.30 = 170000
        assert_eq!(
            calculate_annual_tds(dec("1600000"), dec("0")),
            dec("170000.00")
        );
    }

    #[test]
    fn test_annual_tds_deductions_reduce_taxable_income() {
        // 500000 - 200000 = 300000, fully exempt
        assert_eq!(
            calculate_annual_tds(dec("500000"), dec("200000")),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_monthly_tds_annualizes_and_divides() {
        assert_eq!(calculate_monthly_tds(dec("30850"), dec("0")), dec("292.50"));
        // 70000 * 12 = 840000 -> 34000 / 12 = 2833.33 (rounded)
        assert_eq!(
            calculate_monthly_tds(dec("70000"), dec("0")),
            dec("2833.33")
        );
    }

    #[test]
    fn test_monthly_tds_below_exemption_is_zero() {
        assert_eq!(calculate_monthly_tds(dec("25000"), dec("0")), Decimal::ZERO);
    }
}

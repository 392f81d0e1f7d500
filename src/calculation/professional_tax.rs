//! Professional tax computation.
//!
//! Professional tax is a flat monthly amount from a slab table keyed on
//! gross salary. The engine ships the common Karnataka-style slab; other
//! state slabs can be expressed with [`FlatSlab`] and evaluated through
//! [`tax_from_slabs`] without touching the orchestrator.

use rust_decimal::Decimal;

/// One row of a flat-amount slab table.
///
/// A row applies when the gross salary is less than or equal to `up_to`;
/// `None` marks the unbounded top slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatSlab {
    /// Upper bound of the slab (inclusive), `None` for the top slab.
    pub up_to: Option<Decimal>,
    /// The flat monthly tax amount for this slab.
    pub amount: Decimal,
}

/// Karnataka-style professional tax slabs: 0 up to 15,000, 150 up to
/// 20,000, 200 above.
const KARNATAKA_SLABS: [FlatSlab; 3] = [
    FlatSlab {
        up_to: Some(Decimal::from_parts(15000, 0, 0, false, 0)),
        amount: Decimal::ZERO,
    },
    FlatSlab {
        up_to: Some(Decimal::from_parts(20000, 0, 0, false, 0)),
        amount: Decimal::from_parts(150, 0, 0, false, 0),
    },
    FlatSlab {
        up_to: None,
        amount: Decimal::from_parts(200, 0, 0, false, 0),
    },
];

/// Looks up the flat tax amount for a gross salary in a slab table.
///
/// Rows are scanned in order; the first row whose bound covers the gross
/// wins. An empty table yields zero.
pub fn tax_from_slabs(gross_salary: Decimal, slabs: &[FlatSlab]) -> Decimal {
    for slab in slabs {
        match slab.up_to {
            Some(bound) if gross_salary <= bound => return slab.amount,
            Some(_) => continue,
            None => return slab.amount,
        }
    }
    Decimal::ZERO
}

/// Calculates the monthly professional tax for a gross salary.
///
/// Uses the fixed Karnataka-style slab: gross of 15,000 or less pays
/// nothing, up to 20,000 pays 150, above that 200. Both boundaries are
/// inclusive on the lower slab. The slab is deliberately not configurable
/// per state.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_professional_tax;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_professional_tax(Decimal::new(15000, 0)), Decimal::ZERO);
/// assert_eq!(calculate_professional_tax(Decimal::new(18000, 0)), Decimal::new(150, 0));
/// assert_eq!(calculate_professional_tax(Decimal::new(25000, 0)), Decimal::new(200, 0));
/// ```
pub fn calculate_professional_tax(gross_salary: Decimal) -> Decimal {
    tax_from_slabs(gross_salary, &KARNATAKA_SLABS)
}

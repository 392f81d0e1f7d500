//! Complete payroll orchestration.
//!
//! The orchestrators are pure and deterministic: they perform no I/O,
//! raise nothing and assume pre-validated inputs; malformed numbers
//! propagate arithmetically rather than crashing. Every invocation is
//! independent, so callers may run them concurrently across employees
//! without locking.

use rust_decimal::Decimal;

use crate::config::{OvertimeProfile, WorkingDayModel};
use crate::models::{
    Deductions, EmployerContributions, OvertimeRecord, PayrollCalculationResult,
    QatarPayrollCalculationResult, QatarSalaryComponents, SalaryComponents, StatutoryDeductions,
};

use super::aggregation::{
    calculate_ctc, calculate_net_salary, calculate_total_other_deductions,
    calculate_total_statutory_deductions,
};
use super::esi::{calculate_esi_employee, calculate_esi_employer};
use super::gross::{calculate_gross_salary, calculate_qatar_gross_salary};
use super::hourly_rate::{
    calculate_hourly_rate, DEFAULT_HOURS_PER_DAY, DEFAULT_WORKING_DAYS_PER_MONTH,
};
use super::lwf::calculate_lwf;
use super::overtime::{calculate_overtime, calculate_qatar_overtime};
use super::professional_tax::calculate_professional_tax;
use super::provident_fund::{calculate_pf_employee, calculate_pf_employer};
use super::rounding::round2;
use super::tds::calculate_monthly_tds;

/// Calculates the complete India payroll for one employee for one period.
///
/// Order of derivation: gross, overtime, each statutory formula, statutory
/// and other totals, net salary, employer contributions, CTC. The monthly
/// bonus is annualized (`bonus * 12`) before feeding the CTC figure.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{
///     calculate_complete_payroll, DEFAULT_ESI_CEILING, DEFAULT_PF_WAGE_CEILING,
/// };
/// use payroll_engine::models::{Deductions, SalaryComponents};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let components = SalaryComponents {
///     basic_salary: Decimal::from_str("20000").unwrap(),
///     dearness_allowance: Decimal::ZERO,
///     house_rent_allowance: Decimal::from_str("8000").unwrap(),
///     conveyance_allowance: Decimal::from_str("1600").unwrap(),
///     medical_allowance: Decimal::from_str("1250").unwrap(),
///     special_allowance: Decimal::ZERO,
///     other_allowances: Decimal::ZERO,
/// };
///
/// let result = calculate_complete_payroll(
///     &components,
///     &[],
///     &Deductions::zero(),
///     true,
///     true,
///     Decimal::ZERO,
///     Decimal::ZERO,
///     Decimal::ZERO,
///     DEFAULT_PF_WAGE_CEILING,
///     DEFAULT_ESI_CEILING,
/// );
///
/// assert_eq!(result.gross_salary, Decimal::from_str("30850").unwrap());
/// assert_eq!(result.statutory_deductions.pf_employee, Decimal::from_str("1800.00").unwrap());
/// // gross exceeds the ESI ceiling, so neither side contributes
/// assert_eq!(result.statutory_deductions.esi_employee, Decimal::ZERO);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn calculate_complete_payroll(
    components: &SalaryComponents,
    overtime_records: &[OvertimeRecord],
    deductions: &Deductions,
    is_pf_applicable: bool,
    is_esi_applicable: bool,
    bonus: Decimal,
    incentive: Decimal,
    arrears: Decimal,
    pf_wage_ceiling: Decimal,
    esi_ceiling: Decimal,
) -> PayrollCalculationResult {
    let gross_salary = calculate_gross_salary(components);
    let overtime_amount = calculate_overtime(components.basic_salary, overtime_records);

    let statutory_deductions = StatutoryDeductions {
        pf_employee: calculate_pf_employee(
            components.basic_salary,
            components.dearness_allowance,
            is_pf_applicable,
            pf_wage_ceiling,
        ),
        esi_employee: calculate_esi_employee(gross_salary, is_esi_applicable, esi_ceiling),
        professional_tax: calculate_professional_tax(gross_salary),
        tds: calculate_monthly_tds(gross_salary, Decimal::ZERO),
        lwf: calculate_lwf(gross_salary, "default"),
    };

    let employer_contributions = EmployerContributions {
        pf_employer: calculate_pf_employer(
            components.basic_salary,
            components.dearness_allowance,
            is_pf_applicable,
            pf_wage_ceiling,
        ),
        esi_employer: calculate_esi_employer(gross_salary, is_esi_applicable, esi_ceiling),
    };

    let total_statutory_deductions = calculate_total_statutory_deductions(&statutory_deductions);
    let total_other_deductions = calculate_total_other_deductions(deductions);
    let total_deductions = total_statutory_deductions + total_other_deductions;

    let net_salary = calculate_net_salary(
        gross_salary,
        overtime_amount,
        total_statutory_deductions,
        total_other_deductions,
        bonus,
        incentive,
        arrears,
    );

    let total_earnings = gross_salary + overtime_amount + bonus + incentive + arrears;
    let hourly_rate = calculate_hourly_rate(
        components.basic_salary,
        DEFAULT_WORKING_DAYS_PER_MONTH,
        DEFAULT_HOURS_PER_DAY,
    );
    let ctc = calculate_ctc(
        gross_salary,
        employer_contributions.pf_employer,
        employer_contributions.esi_employer,
        bonus * Decimal::from(12),
    );

    PayrollCalculationResult {
        gross_salary,
        overtime_amount,
        total_earnings,
        statutory_deductions,
        other_deductions: deductions.clone(),
        total_statutory_deductions,
        total_other_deductions,
        total_deductions,
        net_salary,
        employer_contributions,
        ctc,
        hourly_rate,
    }
}

/// Calculates the complete Qatar payroll for one employee for one period.
///
/// Qatar pay is gross plus overtime plus bonus, minus the non-statutory
/// deduction total; there is no statutory deduction set. Overtime
/// multipliers and the working-day model come from the jurisdiction
/// profile.
pub fn calculate_complete_qatar_payroll(
    components: &QatarSalaryComponents,
    overtime_records: &[OvertimeRecord],
    deductions: &Deductions,
    bonus: Decimal,
    overtime_profile: &OvertimeProfile,
    working_days: &WorkingDayModel,
) -> QatarPayrollCalculationResult {
    let gross_salary = calculate_qatar_gross_salary(components);
    let overtime_amount = calculate_qatar_overtime(
        components.basic_salary,
        overtime_records,
        overtime_profile,
        working_days,
    );
    let total_deductions = calculate_total_other_deductions(deductions);
    let total_earnings = gross_salary + overtime_amount + bonus;
    let net_salary = round2(total_earnings - total_deductions);
    let hourly_rate = calculate_hourly_rate(
        components.basic_salary,
        working_days.days_per_month,
        working_days.hours_per_day,
    );

    QatarPayrollCalculationResult {
        gross_salary,
        overtime_amount,
        total_earnings,
        total_deductions,
        net_salary,
        hourly_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::esi::DEFAULT_ESI_CEILING;
    use crate::calculation::provident_fund::DEFAULT_PF_WAGE_CEILING;
    use crate::models::OvertimeCategory;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn components() -> SalaryComponents {
        SalaryComponents {
            basic_salary: dec("20000"),
            dearness_allowance: dec("0"),
            house_rent_allowance: dec("8000"),
            conveyance_allowance: dec("1600"),
            medical_allowance: dec("1250"),
            special_allowance: dec("0"),
            other_allowances: dec("0"),
        }
    }

    fn calculate_default(components: &SalaryComponents) -> PayrollCalculationResult {
        calculate_complete_payroll(
            components,
            &[],
            &Deductions::zero(),
            true,
            true,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            DEFAULT_PF_WAGE_CEILING,
            DEFAULT_ESI_CEILING,
        )
    }

    #[test]
    fn test_end_to_end_scenario() {
        let result = calculate_default(&components());

        assert_eq!(result.gross_salary, dec("30850"));
        assert_eq!(result.overtime_amount, Decimal::ZERO);
        assert_eq!(result.statutory_deductions.pf_employee, dec("1800.00"));
        assert_eq!(result.employer_contributions.pf_employer, dec("1800.00"));
        // gross above the ESI ceiling: no contribution on either side
        assert_eq!(result.statutory_deductions.esi_employee, Decimal::ZERO);
        assert_eq!(result.employer_contributions.esi_employer, Decimal::ZERO);
        assert_eq!(result.statutory_deductions.professional_tax, dec("200"));
        // 30850 * 12 = 370200 -> (370200 - 300000) * 5% / 12 = 292.50
        assert_eq!(result.statutory_deductions.tds, dec("292.50"));
        assert_eq!(result.statutory_deductions.lwf, Decimal::ZERO);
        assert_eq!(result.total_statutory_deductions, dec("2292.50"));
        assert_eq!(result.total_other_deductions, Decimal::ZERO);
        assert_eq!(result.net_salary, dec("28557.50"));
        assert_eq!(result.ctc, dec("391800.00"));
    }

    #[test]
    fn test_net_salary_identity() {
        let result = calculate_default(&components());
        let expected = round2(
            result.gross_salary + result.overtime_amount
                - (result.total_statutory_deductions + result.total_other_deductions),
        );
        assert_eq!(result.net_salary, expected);
    }

    #[test]
    fn test_idempotence() {
        let first = calculate_default(&components());
        let second = calculate_default(&components());
        assert_eq!(first, second);
    }

    #[test]
    fn test_overtime_feeds_earnings_and_net() {
        let records = vec![OvertimeRecord {
            category: OvertimeCategory::Weekday,
            hours: dec("10"),
        }];
        let result = calculate_complete_payroll(
            &SalaryComponents {
                basic_salary: dec("26000"),
                dearness_allowance: dec("0"),
                house_rent_allowance: dec("0"),
                conveyance_allowance: dec("0"),
                medical_allowance: dec("0"),
                special_allowance: dec("0"),
                other_allowances: dec("0"),
            },
            &records,
            &Deductions::zero(),
            false,
            false,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            DEFAULT_PF_WAGE_CEILING,
            DEFAULT_ESI_CEILING,
        );

        assert_eq!(result.overtime_amount, dec("2500.00"));
        assert_eq!(result.total_earnings, dec("28500.00"));
        assert_eq!(result.hourly_rate, dec("125"));
    }

    #[test]
    fn test_applicability_flags_zero_out_pf_and_esi() {
        let small = SalaryComponents {
            basic_salary: dec("12000"),
            dearness_allowance: dec("0"),
            house_rent_allowance: dec("3000"),
            conveyance_allowance: dec("0"),
            medical_allowance: dec("0"),
            special_allowance: dec("0"),
            other_allowances: dec("0"),
        };

        let with_flags = calculate_complete_payroll(
            &small,
            &[],
            &Deductions::zero(),
            true,
            true,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            DEFAULT_PF_WAGE_CEILING,
            DEFAULT_ESI_CEILING,
        );
        // gross 15000 is within the ESI ceiling
        assert_eq!(with_flags.statutory_deductions.pf_employee, dec("1440.00"));
        assert_eq!(with_flags.statutory_deductions.esi_employee, dec("112.50"));
        assert_eq!(
            with_flags.employer_contributions.esi_employer,
            dec("487.50")
        );

        let without_flags = calculate_complete_payroll(
            &small,
            &[],
            &Deductions::zero(),
            false,
            false,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            DEFAULT_PF_WAGE_CEILING,
            DEFAULT_ESI_CEILING,
        );
        assert_eq!(
            without_flags.statutory_deductions.pf_employee,
            Decimal::ZERO
        );
        assert_eq!(
            without_flags.statutory_deductions.esi_employee,
            Decimal::ZERO
        );
        assert_eq!(
            without_flags.employer_contributions.pf_employer,
            Decimal::ZERO
        );
        assert_eq!(
            without_flags.employer_contributions.esi_employer,
            Decimal::ZERO
        );
    }

    #[test]
    fn test_bonus_feeds_net_and_annualized_ctc() {
        let result = calculate_complete_payroll(
            &components(),
            &[],
            &Deductions::zero(),
            true,
            true,
            dec("1000"),
            Decimal::ZERO,
            Decimal::ZERO,
            DEFAULT_PF_WAGE_CEILING,
            DEFAULT_ESI_CEILING,
        );

        assert_eq!(result.total_earnings, dec("31850"));
        assert_eq!(result.net_salary, dec("29557.50"));
        // CTC adds bonus * 12 on top of the no-bonus figure
        assert_eq!(result.ctc, dec("403800.00"));
    }

    #[test]
    fn test_other_deductions_reduce_net() {
        let deductions = Deductions {
            absence_deduction: dec("1186.54"),
            loan_deduction: dec("2000"),
            advance_deduction: dec("500"),
            penalty_deduction: dec("0"),
            other_deductions: dec("0"),
        };
        let result = calculate_complete_payroll(
            &components(),
            &[],
            &deductions,
            true,
            true,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            DEFAULT_PF_WAGE_CEILING,
            DEFAULT_ESI_CEILING,
        );

        assert_eq!(result.total_other_deductions, dec("3686.54"));
        assert_eq!(result.net_salary, dec("24870.96"));
        assert_eq!(result.other_deductions, deductions);
    }

    #[test]
    fn test_qatar_complete_payroll() {
        let components = QatarSalaryComponents {
            basic_salary: dec("4160"),
            housing_allowance: dec("2000"),
            food_allowance: dec("500"),
            transport_allowance: dec("500"),
            mobile_allowance: dec("100"),
            utility_allowance: dec("200"),
            other_allowances: dec("0"),
        };
        let records = vec![
            OvertimeRecord {
                category: OvertimeCategory::Weekday,
                hours: dec("8"),
            },
            OvertimeRecord {
                category: OvertimeCategory::Weekend,
                hours: dec("8"),
            },
        ];
        let profile = OvertimeProfile {
            weekday_multiplier: dec("1.25"),
            weekend_multiplier: dec("1.5"),
            holiday_multiplier: dec("1.5"),
        };
        let model = WorkingDayModel {
            days_per_month: dec("26"),
            hours_per_day: dec("8"),
        };

        let result = calculate_complete_qatar_payroll(
            &components,
            &records,
            &Deductions::zero(),
            dec("300"),
            &profile,
            &model,
        );

        assert_eq!(result.gross_salary, dec("7460"));
        // hourly 20: 20*8*1.25 + 20*8*1.5 = 200 + 240 = 440
        assert_eq!(result.overtime_amount, dec("440.00"));
        assert_eq!(result.total_earnings, dec("8200.00"));
        assert_eq!(result.net_salary, dec("8200.00"));
        assert_eq!(result.hourly_rate, dec("20"));
    }
}

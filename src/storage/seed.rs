//! Built-in sales data
//!
//! Monthly e-commerce sales for 2022, 2023 and 2024. Each year peaks in
//! Q4 (holiday season). Stored totals are written out explicitly and checked
//! against the monthly rows when the store is built.

use crate::storage::types::{Dataset, Month, MonthlyRecord, YearlyRecord};

/// (sales, revenue, units) per month, January first
type MonthRow = (u64, u64, u64);

const SALES_2022: [MonthRow; 12] = [
    (3_735_000, 18_675_000, 450),
    (3_486_000, 17_430_000, 420),
    (4_316_000, 21_580_000, 520),
    (3_984_000, 19_920_000, 480),
    (4_565_000, 22_825_000, 550),
    (4_814_000, 24_070_000, 580),
    (5_146_000, 25_730_000, 620),
    (4_897_000, 24_485_000, 590),
    (4_482_000, 22_410_000, 540),
    (5_644_000, 28_220_000, 680),
    (7_055_000, 35_275_000, 850),
    (7_885_000, 39_425_000, 950),
];

const SALES_2023: [MonthRow; 12] = [
    (3_984_000, 19_920_000, 480),
    (3_818_000, 19_090_000, 460),
    (4_814_000, 24_070_000, 580),
    (4_482_000, 22_410_000, 540),
    (5_146_000, 25_730_000, 620),
    (5_395_000, 26_975_000, 650),
    (5_810_000, 29_050_000, 700),
    (5_644_000, 28_220_000, 680),
    (5_063_000, 25_315_000, 610),
    (6_474_000, 32_370_000, 780),
    (7_636_000, 38_180_000, 920),
    (8_715_000, 43_575_000, 1050),
];

const SALES_2024: [MonthRow; 12] = [
    (4_316_000, 21_580_000, 520),
    (4_150_000, 20_750_000, 500),
    (5_312_000, 26_560_000, 640),
    (4_980_000, 24_900_000, 600),
    (5_644_000, 28_220_000, 680),
    (5_976_000, 29_880_000, 720),
    (6_474_000, 32_370_000, 780),
    (6_225_000, 31_125_000, 750),
    (5_644_000, 28_220_000, 680),
    (7_055_000, 35_275_000, 850),
    (8_466_000, 42_330_000, 1020),
    (9_545_000, 47_725_000, 1150),
];

fn year_record(
    year: i32,
    rows: &[MonthRow; 12],
    total_revenue: u64,
    total_units: u64,
) -> YearlyRecord {
    let data = Month::ALL
        .iter()
        .zip(rows.iter())
        .map(|(&month, &(sales, revenue, units))| MonthlyRecord::new(month, sales, revenue, units))
        .collect();

    YearlyRecord {
        year,
        data,
        total_revenue,
        total_units,
    }
}

/// The built-in three-year dataset
pub fn builtin_dataset() -> Dataset {
    Dataset::new(vec![
        year_record(2022, &SALES_2022, 300_045_000, 7230),
        year_record(2023, &SALES_2023, 334_905_000, 8070),
        year_record(2024, &SALES_2024, 368_935_000, 8890),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_years() {
        let dataset = builtin_dataset();
        assert_eq!(dataset.years(), vec![2022, 2023, 2024]);
    }

    #[test]
    fn test_builtin_totals_are_consistent() {
        for record in builtin_dataset().iter() {
            assert_eq!(record.data.len(), 12);
            assert_eq!(Some(record.total_revenue), record.computed_revenue());
            assert_eq!(Some(record.total_units), record.computed_units());
        }
    }

    #[test]
    fn test_builtin_2024_september() {
        let dataset = builtin_dataset();
        let sep = dataset.records[2].month(Month::Sep).unwrap();
        assert_eq!(sep.sales, 5_644_000);
        assert_eq!(sep.units, 680);
    }
}

use itertools::Itertools;
use rust_decimal::Decimal;

use crate::units::Units;

/// One row of the `LutIndex` sweep table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LutPoint {
    pub index: usize,
    pub slew: Decimal,
    pub load: Decimal,
}

impl LutPoint {
    /// Formats the point as a `.DATA` row: `<index> <slew> <load>`.
    pub fn row(&self, units: &Units) -> String {
        format!(
            "{} {} {}",
            self.index,
            units.time(self.slew),
            units.capacitance(self.load)
        )
    }
}

/// Enumerates every (slew, load) pair, slew-major, numbered from zero.
pub fn lut_points(slews: &[Decimal], loads: &[Decimal]) -> Vec<LutPoint> {
    slews
        .iter()
        .cartesian_product(loads.iter())
        .enumerate()
        .map(|(index, (&slew, &load))| LutPoint { index, slew, load })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_lut_points_row_major() {
        let points = lut_points(&[dec!(50), dec!(200)], &[dec!(1), dec!(2)]);
        let units = Units::default();
        let rows = points.iter().map(|p| p.row(&units)).collect::<Vec<_>>();
        assert_eq!(
            rows,
            vec!["0 50ps 1fF", "1 50ps 2fF", "2 200ps 1fF", "3 200ps 2fF"]
        );
    }

    #[test]
    fn test_lut_points_count_and_indices() {
        let slews = [dec!(5), dec!(10), dec!(20), dec!(40)];
        let loads = [dec!(1), dec!(2.5), dec!(7)];
        let points = lut_points(&slews, &loads);
        assert_eq!(points.len(), slews.len() * loads.len());
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.index, i);
            assert_eq!(point.slew, slews[i / loads.len()]);
            assert_eq!(point.load, loads[i % loads.len()]);
        }
    }

    #[test]
    fn test_lut_points_empty() {
        assert!(lut_points(&[], &[dec!(1)]).is_empty());
        assert!(lut_points(&[dec!(1)], &[]).is_empty());
    }
}

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub truth: f64,
    pub predicted: f64,
}

/// Dollar amount with a K/M suffix, rounded to the nearest whole dollar first
/// (ties to even).
pub fn convert_value(value: f64) -> String {
    // + 0.0 folds -0.0 into 0.0
    let value = value.round_ties_even() + 0.0;
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.2}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Two-column `True Value | Predicted Value` table.
pub struct PredictionTable<'a>(pub &'a [Prediction]);

impl fmt::Display for PredictionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>6} {:>12} {:>16}", "", "True Value", "Predicted Value")?;
        for (i, p) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{:>6} {:>12} {:>16}",
                i,
                convert_value(p.truth),
                convert_value(p.predicted)
            )?;
        }
        Ok(())
    }
}

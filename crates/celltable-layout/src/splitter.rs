//! Even division of whole units.

/// Splits the integer part of an amount into `parts` pieces that differ by at
/// most one unit. Earlier pieces receive the remainder.
#[derive(Debug, Clone)]
pub struct SizeSplitter {
    part: i64,
    remainder: i64,
}

impl SizeSplitter {
    pub fn new(total: f64, parts: usize) -> Self {
        if parts == 0 {
            return Self {
                part: 0,
                remainder: 0,
            };
        }

        let units = total.trunc() as i64;
        let parts = parts as i64;
        Self {
            part: units / parts,
            remainder: (units % parts).max(0),
        }
    }

    /// The next piece.
    pub fn next_part(&mut self) -> f64 {
        if self.remainder > 0 {
            self.remainder -= 1;
            (self.part + 1) as f64
        } else {
            self.part as f64
        }
    }
}

/// Padded vertical value range shared by every series of one chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl Default for ValueDomain {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl ValueDomain {
    /// Expands the raw `[min, max]` outward by `pad_pct` of the raw range on
    /// each side. A zero range counts as 1 so the scale never collapses, and
    /// the lower bound never goes below zero.
    pub fn padded(min: f64, max: f64, pad_pct: f64) -> Self {
        let raw = max - min;
        let range = if raw == 0.0 { 1.0 } else { raw };
        Self {
            min: (min - range * pad_pct).max(0.0),
            max: max + range * pad_pct,
        }
    }

    /// Builds the padded domain from every value yielded, or the default
    /// `[0, 1]` when there are none.
    pub fn from_values(values: impl IntoIterator<Item = i64>, pad_pct: f64) -> Self {
        let mut bounds: Option<(i64, i64)> = None;
        for v in values {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }

        match bounds {
            Some((lo, hi)) => Self::padded(lo as f64, hi as f64, pad_pct),
            None => Self::default(),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Value sitting at fraction `t` of the domain (0 = min, 1 = max).
    pub fn value_at(&self, t: f64) -> f64 {
        self.min + t * self.span()
    }
}

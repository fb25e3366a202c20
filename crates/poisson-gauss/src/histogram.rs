//! Scaled ASCII bar charts over dense frequency tables.

use std::fmt;

use frequency::prelude::*;

/// Default width in markers of the tallest bar.
pub const MAX_STARS: usize = 50;

const MARKER: char = '*';

/// How a count type is shown in tables and histograms.
pub trait DisplayCount: Count {
    /// Decimal places of the printed count.
    const DECIMALS: usize;
    /// Rows with a count at or below this are left out.
    const THRESHOLD: f64;
    /// Counts above this always get at least one marker.
    const FLOOR: f64;

    fn label(self) -> String {
        format!("{:.*}", Self::DECIMALS, self.to_f64())
    }

    fn is_visible(self) -> bool {
        self.to_f64() > Self::THRESHOLD
    }
}

macro_rules! impl_display_count_for_int {
    ($($int_type:ty),*) => {
        $(
            impl DisplayCount for $int_type {
                const DECIMALS: usize = 0;
                const THRESHOLD: f64 = 0.0;
                const FLOOR: f64 = 0.0;
            }
        )*
    };
}

impl_display_count_for_int!(u32, u64, usize);

impl DisplayCount for f64 {
    const DECIMALS: usize = 1;
    const THRESHOLD: f64 = 0.1;
    const FLOOR: f64 = 0.5;
}

/// One bar of a rendered histogram.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramRow {
    pub value: usize,
    pub count: f64,
    pub stars: usize,
    pub label: String,
}

/// Renders tables so that the tallest bar is at most `max_stars` markers wide.
#[derive(Clone, Copy, Debug)]
pub struct HistogramRenderer {
    max_stars: usize,
}

impl Default for HistogramRenderer {
    fn default() -> Self {
        Self {
            max_stars: MAX_STARS,
        }
    }
}

impl HistogramRenderer {
    /// `max_stars` is clamped to at least one marker.
    pub fn new(max_stars: usize) -> Self {
        Self {
            max_stars: max_stars.max(1),
        }
    }

    /// Turn every visible entry of `table` into a row.
    ///
    /// Tables whose largest count fits in `max_stars` are drawn one marker per count, others are
    /// scaled down. A visible count that rounds to zero markers still gets one if it is above the
    /// type's floor, so sparse buckets do not vanish.
    pub fn render<C: DisplayCount>(&self, table: &FrequencyTable<C>, title: &str) -> Histogram {
        let max_stars = self.max_stars as f64;
        let max_freq = table.max_count().to_f64();
        let scale_factor = if max_freq > max_stars {
            max_stars / max_freq
        } else {
            1.0
        };

        let rows = table
            .iter()
            .filter(|&(_, count)| count.is_visible())
            .map(|(value, count)| {
                let scaled = count.to_f64() * scale_factor;
                let mut stars = scaled.round() as usize;
                if stars == 0 && count.to_f64() > C::FLOOR {
                    stars = 1;
                }
                HistogramRow {
                    value,
                    count: count.to_f64(),
                    stars,
                    label: count.label(),
                }
            })
            .collect();

        Histogram {
            title: title.to_owned(),
            max_stars: self.max_stars,
            max_freq,
            scale_factor,
            rows,
        }
    }
}

/// A rendered histogram, printed through its [`Display`](fmt::Display) implementation.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    title: String,
    max_stars: usize,
    max_freq: f64,
    scale_factor: f64,
    rows: Vec<HistogramRow>,
}

impl Histogram {
    pub fn rows(&self) -> &[HistogramRow] {
        &self.rows
    }

    pub fn row(&self, value: usize) -> Option<&HistogramRow> {
        self.rows.iter().find(|row| row.value == value)
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn max_freq(&self) -> f64 {
        self.max_freq
    }

    /// Approximate number of counts one marker stands for.
    pub fn counts_per_star(&self) -> f64 {
        self.max_freq / self.max_stars as f64
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Value | Histogram ({})", self.title)?;
        writeln!(f, "------|{}", "-".repeat(self.max_stars + 5))?;
        for row in &self.rows {
            let bar: String = std::iter::repeat_n(MARKER, row.stars).collect();
            writeln!(f, "{:>5} | {} ({})", row.value, bar, row.label)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Scaling: Each star represents approximately {:.1} counts",
            self.counts_per_star()
        )
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_histogram() {
        let table = FrequencyTable::from_counts(vec![1usize, 0, 60]);
        let histogram = HistogramRenderer::default().render(&table, "Poisson");

        assert!((histogram.scale_factor() - 50.0 / 60.0).abs() < 1e-12);
        assert_eq!(histogram.rows().len(), 2);
        assert_eq!(histogram.row(2).unwrap().stars, 50);
        assert_eq!(histogram.row(0).unwrap().stars, 1);
        assert!(histogram.row(1).is_none());
    }

    #[test]
    fn test_small_counts_are_not_scaled() {
        let table = FrequencyTable::from_counts(vec![3u32, 7, 0, 2]);
        let histogram = HistogramRenderer::default().render(&table, "Poisson");

        assert_eq!(histogram.scale_factor(), 1.0);
        let stars: Vec<usize> = histogram.rows().iter().map(|r| r.stars).collect();
        assert_eq!(stars, vec![3, 7, 2]);
    }

    #[test]
    fn test_nonzero_count_keeps_one_star() {
        let table = FrequencyTable::from_counts(vec![1usize, 400]);
        let histogram = HistogramRenderer::default().render(&table, "Poisson");

        // 1 * 50 / 400 rounds to zero
        assert_eq!(histogram.row(0).unwrap().stars, 1);
        assert_eq!(histogram.row(1).unwrap().stars, 50);
    }

    #[test]
    fn test_real_counts_threshold_and_floor() {
        let table = FrequencyTable::from_counts(vec![0.05, 0.3, 0.7, 2.2]);
        let histogram = HistogramRenderer::default().render(&table, "Gaussian");

        // 0.05 is negligible, 0.3 is shown without markers, 0.7 is rounded up to one
        assert!(histogram.row(0).is_none());
        assert_eq!(histogram.row(1).unwrap().stars, 0);
        assert_eq!(histogram.row(1).unwrap().label, "0.3");
        assert_eq!(histogram.row(2).unwrap().stars, 1);
        assert_eq!(histogram.row(3).unwrap().stars, 2);
        assert_eq!(histogram.row(3).unwrap().label, "2.2");
    }

    #[test]
    fn test_real_counts_scale_below_floor() {
        let table = FrequencyTable::from_counts(vec![0.4, 3.0, 1000.0]);
        let histogram = HistogramRenderer::default().render(&table, "Gaussian");

        // 3.0 * 0.05 rounds to zero but is above the floor
        assert_eq!(histogram.row(1).unwrap().stars, 1);
        assert_eq!(histogram.row(0).unwrap().stars, 0);
        assert_eq!(histogram.row(2).unwrap().stars, 50);
    }

    #[test]
    fn test_display() {
        let table = FrequencyTable::from_counts(vec![1usize, 0, 60]);
        let text = HistogramRenderer::default()
            .render(&table, "Poisson")
            .to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Value | Histogram (Poisson)");
        assert_eq!(lines[1], format!("------|{}", "-".repeat(55)));
        assert_eq!(lines[2], "    0 | * (1)");
        assert_eq!(lines[3], format!("    2 | {} (60)", "*".repeat(50)));
        assert_eq!(lines[4], "");
        assert_eq!(
            lines[5],
            "Scaling: Each star represents approximately 1.2 counts"
        );
    }

    #[test]
    fn test_all_zero_table() {
        let table: FrequencyTable<usize> = FrequencyTable::from_counts(vec![0, 0]);
        let histogram = HistogramRenderer::new(0).render(&table, "Empty");

        assert!(histogram.rows().is_empty());
        assert_eq!(histogram.scale_factor(), 1.0);
        assert_eq!(histogram.counts_per_star(), 0.0);
    }
}

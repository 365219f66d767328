//! Bar chart geometry and coloring.
//!
//! Heights are fractions of the tallest bar. An empty sequence yields no
//! bars and an all-zero sequence yields all bars at zero height.

use rand::Rng;

use crate::model::Contributor;

/// One bar: a label and the count it represents
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChartEntry {
    pub name: String,
    pub count: u32,
}

impl From<&Contributor> for ChartEntry {
    fn from(contributor: &Contributor) -> Self {
        Self {
            name: contributor.name.clone(),
            count: contributor.contributions,
        }
    }
}

/// Height of each bar as a fraction of the largest count, in input order
#[must_use]
pub fn bar_fractions(counts: &[u32]) -> Vec<f64> {
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; counts.len()];
    }

    counts
        .iter()
        .map(|&count| f64::from(count) / f64::from(max))
        .collect()
}

/// CSS percentage for a height fraction, rounded to two decimals
#[must_use]
pub fn height_percent(fraction: f64) -> String {
    let percent = (fraction * 10_000.0).round() / 100.0;
    format!("{percent}%")
}

/// A uniformly random `#RRGGBB` color
pub fn random_color<R: Rng>(rng: &mut R) -> String {
    format!("#{:06X}", rng.gen_range(0..=0x00FF_FFFF_u32))
}

/// One fresh random color per bar
pub fn random_palette<R: Rng>(rng: &mut R, len: usize) -> Vec<String> {
    (0..len).map(|_| random_color(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn tallest_bar_is_full_height() {
        let fractions = bar_fractions(&[3, 12, 6]);

        assert_eq!(fractions, vec![0.25, 1.0, 0.5]);
    }

    #[test]
    fn renders_ten_five_zero_as_percentages() {
        let heights: Vec<String> = bar_fractions(&[10, 5, 0])
            .into_iter()
            .map(height_percent)
            .collect();

        assert_eq!(heights, vec!["100%", "50%", "0%"]);
    }

    #[test]
    fn rounds_fractional_heights() {
        let heights: Vec<String> = bar_fractions(&[3, 1])
            .into_iter()
            .map(height_percent)
            .collect();

        assert_eq!(heights, vec!["100%", "33.33%"]);
    }

    #[test]
    fn empty_sequence_has_no_bars() {
        assert!(bar_fractions(&[]).is_empty());
    }

    #[test]
    fn all_zero_counts_stay_flat() {
        assert_eq!(bar_fractions(&[0, 0]), vec![0.0, 0.0]);
    }

    #[test]
    fn random_colors_are_hex_triplets() {
        let mut rng = StdRng::seed_from_u64(7);

        for color in random_palette(&mut rng, 32) {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn palette_matches_bar_count() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(random_palette(&mut rng, 3).len(), 3);
        assert!(random_palette(&mut rng, 0).is_empty());
    }

    #[test]
    fn entry_takes_name_and_total() {
        let contributor = Contributor {
            id: 1,
            name: "Bob".to_string(),
            github_username: "bob".to_string(),
            avatar_url: String::new(),
            role: String::new(),
            contributions: 89,
        };

        assert_eq!(
            ChartEntry::from(&contributor),
            ChartEntry {
                name: "Bob".to_string(),
                count: 89
            }
        );
    }
}

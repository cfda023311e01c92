//! Qualitative reading of a probability, plus the proportions used by the
//! fill bar and the 100-cell match grid.

/// Number of cells in the "out of 100 men" grid.
pub const GRID_CELLS: usize = 100;

/// Banner shown beneath the results, chosen by probability thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// `p < 0.01`
    UltraSelective,
    /// `0.01 <= p < 0.05`
    QuiteSelective,
    /// `0.05 <= p < 0.20`
    Reasonable,
    /// `p >= 0.20`
    PlentyOfOptions,
}

impl Verdict {
    pub fn from_probability(p: f64) -> Self {
        if p < 0.01 {
            Verdict::UltraSelective
        } else if p < 0.05 {
            Verdict::QuiteSelective
        } else if p < 0.20 {
            Verdict::Reasonable
        } else {
            Verdict::PlentyOfOptions
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Verdict::UltraSelective => "Ultra Selective!",
            Verdict::QuiteSelective => "Quite Selective",
            Verdict::Reasonable => "Reasonable Standards",
            Verdict::PlentyOfOptions => "Plenty of Options!",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::UltraSelective => {
                "Those are some very high standards. You might want to reconsider your priorities."
            }
            Verdict::QuiteSelective => {
                "Your criteria are fairly selective. Finding someone might take time and effort."
            }
            Verdict::Reasonable => "You have a decent pool of candidates to choose from.",
            Verdict::PlentyOfOptions => "Great! You have many options with these criteria.",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Verdict::UltraSelective => "🎯",
            Verdict::QuiteSelective => "🤔",
            Verdict::Reasonable => "👍",
            Verdict::PlentyOfOptions => "✨",
        }
    }
}

/// How many of the [`GRID_CELLS`] cells are drawn as matches.
pub fn matching_cells(probability: f64) -> usize {
    let cells = (probability * GRID_CELLS as f64).round();
    if cells.is_nan() || cells <= 0.0 {
        0
    } else {
        (cells as usize).min(GRID_CELLS)
    }
}

/// Width of the fill bar as a fraction of its full length.
pub fn fill_fraction(probability: f64) -> f32 {
    probability.clamp(0.0, 1.0) as f32
}

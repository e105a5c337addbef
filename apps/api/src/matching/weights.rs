#![allow(dead_code)]

/// Standard weights — balanced across all four factors, skills carrying
/// the largest share.
pub const STANDARD_WEIGHTS: MatchWeights = MatchWeights {
    education: 0.25,
    field: 0.20,
    skills: 0.30,
    interests: 0.25,
};

/// Fresh-start weights — the user declared no prior professional skills,
/// so the skills factor is zeroed and interests carry the ranking.
pub const FRESH_START_WEIGHTS: MatchWeights = MatchWeights {
    education: 0.25,
    field: 0.25,
    skills: 0.0,
    interests: 0.50,
};

#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub education: f64,
    pub field: f64,
    pub skills: f64,
    pub interests: f64,
}

impl MatchWeights {
    /// Selects the weight profile for the user's declared mode.
    pub fn for_mode(starting_fresh: bool) -> &'static MatchWeights {
        if starting_fresh {
            &FRESH_START_WEIGHTS
        } else {
            &STANDARD_WEIGHTS
        }
    }

    pub fn sum(&self) -> f64 {
        self.education + self.field + self.skills + self.interests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let standard_sum = STANDARD_WEIGHTS.sum();
        let fresh_sum = FRESH_START_WEIGHTS.sum();
        assert!((standard_sum - 1.0).abs() < 1e-9);
        assert!((fresh_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fresh_start_ignores_skills() {
        assert_eq!(MatchWeights::for_mode(true).skills, 0.0);
    }

    #[test]
    fn for_mode_selects_standard_by_default() {
        assert_eq!(MatchWeights::for_mode(false).skills, STANDARD_WEIGHTS.skills);
    }
}

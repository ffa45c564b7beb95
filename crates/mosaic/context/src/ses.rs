//! Socio-economic status estimation from family context.

use mosaic_types::FamilyContext;

/// Bonus cap for books in the home.
const MAX_BOOK_BONUS: f64 = 0.1;
/// Adjustment for receiving public assistance.
const ASSISTANCE_ADJUSTMENT: f64 = -0.1;
/// Adjustment for a single-parent household.
const SINGLE_PARENT_ADJUSTMENT: f64 = -0.05;

/// Estimate socio-economic status in [0, 1] from family context.
///
/// The base is the mean of the income-bracket and education-level
/// components (0.5 when neither is reported), adjusted for assistance,
/// single parenthood, and books in the home, then clamped.
pub fn socio_economic_status(context: &FamilyContext) -> f64 {
    let mut components = Vec::with_capacity(2);
    if let Some(bracket) = context.income_bracket {
        components.push(bracket.ses_component());
    }
    if let Some(education) = context.parent_education {
        components.push(education.ses_component());
    }

    let base = if components.is_empty() {
        0.5
    } else {
        components.iter().sum::<f64>() / components.len() as f64
    };

    let mut adjustment = 0.0;
    if context.receives_assistance == Some(true) {
        adjustment += ASSISTANCE_ADJUSTMENT;
    }
    if context.single_parent == Some(true) {
        adjustment += SINGLE_PARENT_ADJUSTMENT;
    }
    if let Some(books) = context.books_in_home {
        adjustment += (books as f64 / 500.0).min(MAX_BOOK_BONUS);
    }

    (base + adjustment).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_types::{EducationLevel, IncomeBracket};

    #[test]
    fn empty_context_is_neutral() {
        let ses = socio_economic_status(&FamilyContext::default());
        assert!((ses - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn income_and_education_average() {
        let context = FamilyContext {
            income_bracket: Some(IncomeBracket::Under25k),
            parent_education: Some(EducationLevel::Doctorate),
            ..Default::default()
        };
        // (0.1 + 0.95) / 2
        assert!((socio_economic_status(&context) - 0.525).abs() < 1e-9);
    }

    #[test]
    fn adjustments_move_the_estimate() {
        let base = FamilyContext {
            income_bracket: Some(IncomeBracket::From50kTo75k),
            ..Default::default()
        };
        let adjusted = FamilyContext {
            receives_assistance: Some(true),
            single_parent: Some(true),
            ..base.clone()
        };
        assert!(socio_economic_status(&adjusted) < socio_economic_status(&base));

        let bookish = FamilyContext {
            books_in_home: Some(200),
            ..base.clone()
        };
        assert!(socio_economic_status(&bookish) > socio_economic_status(&base));
    }

    #[test]
    fn book_bonus_is_capped() {
        let some = FamilyContext {
            books_in_home: Some(50),
            ..Default::default()
        };
        let many = FamilyContext {
            books_in_home: Some(5_000),
            ..Default::default()
        };
        assert!((socio_economic_status(&many) - socio_economic_status(&some)).abs() < f64::EPSILON);
    }

    #[test]
    fn result_stays_in_unit_interval() {
        let bleak = FamilyContext {
            income_bracket: Some(IncomeBracket::Under25k),
            parent_education: Some(EducationLevel::LessThanHighSchool),
            receives_assistance: Some(true),
            single_parent: Some(true),
            ..Default::default()
        };
        let ses = socio_economic_status(&bleak);
        assert!((0.0..=1.0).contains(&ses));
    }
}

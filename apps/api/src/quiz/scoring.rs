use crate::models::quiz::Archetype;

/// Sum a nominal profession quiz can reach (10 statements × 10 points).
const NOMINAL_MAX_TOTAL: f64 = 100.0;

/// Picks the archetype with the strictly highest tally over answered slots.
///
/// Ties go to the archetype that comes first in `Archetype::ALL`
/// (Creative, Logical, Social, Practical). With no answers at all the
/// caller-supplied `default` is returned.
pub fn compute_archetype(answers: &[Option<Archetype>], default: Archetype) -> Archetype {
    let mut counts = [0usize; Archetype::ALL.len()];
    for answer in answers.iter().flatten() {
        counts[tally_slot(*answer)] += 1;
    }

    let mut best: Option<(Archetype, usize)> = None;
    for archetype in Archetype::ALL {
        let count = counts[tally_slot(archetype)];
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((archetype, count)),
        }
    }

    best.map(|(archetype, _)| archetype).unwrap_or(default)
}

/// Converts profession answers into a 0–100 aptitude percentage.
/// Unanswered slots contribute nothing; the result is clamped at 100.
pub fn compute_aptitude(answers: &[Option<u8>]) -> u8 {
    let total: u32 = answers.iter().flatten().map(|&score| u32::from(score)).sum();
    let percentage = (f64::from(total) / NOMINAL_MAX_TOTAL * 100.0).round();
    percentage.min(100.0) as u8
}

fn tally_slot(archetype: Archetype) -> usize {
    match archetype {
        Archetype::Creative => 0,
        Archetype::Logical => 1,
        Archetype::Social => 2,
        Archetype::Practical => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Archetype::*;

    fn answered(tags: &[Archetype]) -> Vec<Option<Archetype>> {
        tags.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_mode_archetype_wins() {
        let answers = answered(&[
            Creative, Creative, Creative, Logical, Social, Practical, Creative, Logical, Social,
            Creative,
        ]);
        assert_eq!(compute_archetype(&answers, Practical), Creative);
    }

    #[test]
    fn test_single_mode_in_any_position() {
        let answers = answered(&[Logical, Social, Social, Practical, Social]);
        assert_eq!(compute_archetype(&answers, Creative), Social);
    }

    #[test]
    fn test_all_empty_returns_default() {
        let answers = vec![None; 10];
        assert_eq!(compute_archetype(&answers, Logical), Logical);
        assert_eq!(compute_archetype(&[], Practical), Practical);
    }

    #[test]
    fn test_tie_goes_to_first_in_lookup_order() {
        let answers = answered(&[Practical, Social, Practical, Social]);
        assert_eq!(compute_archetype(&answers, Creative), Social);

        let answers = answered(&[Practical, Creative]);
        assert_eq!(compute_archetype(&answers, Logical), Creative);
    }

    #[test]
    fn test_partial_answers_only_count_filled_slots() {
        let answers = vec![None, Some(Practical), None, Some(Practical), Some(Logical)];
        assert_eq!(compute_archetype(&answers, Creative), Practical);
    }

    #[test]
    fn test_all_strongly_agree_is_one_hundred() {
        assert_eq!(compute_aptitude(&[Some(10); 10]), 100);
    }

    #[test]
    fn test_all_disagree_is_twenty() {
        assert_eq!(compute_aptitude(&[Some(2); 10]), 20);
    }

    #[test]
    fn test_mixed_answers_sum_directly() {
        // 10 + 7 + 5 + 2 + 10 + 7 + 5 + 2 + 10 + 7 = 65
        let answers = [10, 7, 5, 2, 10, 7, 5, 2, 10, 7].map(Some);
        assert_eq!(compute_aptitude(&answers), 65);
    }

    #[test]
    fn test_skipped_slots_contribute_zero() {
        let answers = [Some(10), None, Some(7), None];
        assert_eq!(compute_aptitude(&answers), 17);
        assert_eq!(compute_aptitude(&[None; 10]), 0);
    }

    #[test]
    fn test_oversized_quiz_is_clamped() {
        assert_eq!(compute_aptitude(&[Some(10); 15]), 100);
    }

    #[test]
    fn test_aptitude_is_pure() {
        let answers = [Some(7); 10];
        assert_eq!(compute_aptitude(&answers), compute_aptitude(&answers));
    }
}

//! Rubric lookups and candidate totals exercised through the public scoring API.

use ospa_scorer::scoring::rubric::{CONTESTS, LEADERSHIP, PUBLICATION, SPECIAL_AWARDS};
use ospa_scorer::scoring::{
    score, score_labeled, total, Candidate, InstanceEntry, InstanceList, InterviewDimension,
    InterviewRating, Level, Rank, RubricCategory,
};

#[test]
fn every_tabulated_contest_entry_is_returned_verbatim() {
    let tables = [
        (RubricCategory::Individual, CONTESTS),
        (RubricCategory::Group, CONTESTS),
        (RubricCategory::SpecialAward, SPECIAL_AWARDS),
        (RubricCategory::Publication, PUBLICATION),
    ];

    for (category, table) in tables {
        for (level, points) in table.rows() {
            for (rank, expected) in Rank::ALL.into_iter().zip(points.iter()) {
                assert_eq!(
                    score(category, *level, Some(rank), None),
                    *expected,
                    "{category:?} {level} {rank}"
                );
            }
        }
    }
}

#[test]
fn documented_lookups_match() {
    assert_eq!(
        score(RubricCategory::Individual, Level::National, Some(Rank::First), None),
        20
    );
    assert_eq!(
        score(RubricCategory::SpecialAward, Level::Regional, Some(Rank::Second), None),
        6
    );
    assert_eq!(
        score(RubricCategory::Publication, Level::Division, Some(Rank::Third), None),
        1
    );
}

#[test]
fn absent_combinations_score_zero() {
    assert_eq!(
        score(RubricCategory::Group, Level::School, Some(Rank::First), None),
        0
    );
    assert_eq!(
        score(RubricCategory::Individual, Level::Regional, Some(Rank::Fifth), None),
        0
    );
    assert_eq!(score(RubricCategory::Articles, Level::District, None, None), 0);
    assert_eq!(
        score(RubricCategory::Leadership, Level::National, None, Some("Treasurer")),
        0
    );
    assert_eq!(score_labeled("podcasts", Level::National, None, None), 0);
}

#[test]
fn leadership_roles_and_default_role() {
    assert_eq!(
        score(RubricCategory::Leadership, Level::Regional, None, Some("President")),
        20
    );
    assert_eq!(
        score(RubricCategory::Leadership, Level::Division, None, Some("Other")),
        8
    );

    let first_role = LEADERSHIP.default_role().expect("leadership has roles");
    assert_eq!(first_role.label(), "President");
    assert_eq!(
        score(RubricCategory::Leadership, Level::Regional, None, None),
        score(RubricCategory::Leadership, Level::Regional, None, Some(first_role.label()))
    );
}

#[test]
fn rankless_contest_entries_are_credited_as_first_place() {
    assert_eq!(
        score(RubricCategory::Publication, Level::National, None, None),
        13
    );
}

#[test]
fn worked_example_totals_thirty_six() {
    let mut candidate = Candidate::new("Liza Manalo", "Quezon City HS", "Quezon City");
    candidate.add_instance(
        InstanceList::Individual,
        InstanceEntry::ranked(Level::National, Rank::First),
    );
    candidate.add_instance(
        InstanceList::Group,
        InstanceEntry::ranked(Level::Division, Rank::Second),
    );
    for dimension in InterviewDimension::ALL {
        candidate.rate_interview(dimension, InterviewRating::Commendable);
    }

    assert_eq!(candidate.total_score(), 36.0);
    assert_eq!(total(&candidate), 36.0);
}

#[test]
fn add_then_remove_round_trips_every_list() {
    let mut candidate = Candidate::new("Liza Manalo", "Quezon City HS", "Quezon City");
    candidate.rate_interview(InterviewDimension::Growth, InterviewRating::Insufficient);
    let baseline = candidate.total_score();

    for list in InstanceList::ALL {
        let entry = if list.takes_rank() {
            InstanceEntry::ranked(Level::National, Rank::Second)
        } else if list.takes_role() {
            InstanceEntry::role(Level::Regional, "Facilitator")
        } else {
            InstanceEntry::at(Level::National)
        };
        let id = candidate.add_instance(list, entry);
        candidate
            .remove_instance(list, &id)
            .expect("instance was recorded");
        assert_eq!(candidate.total_score(), baseline, "{list}");
    }
}

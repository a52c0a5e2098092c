use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::domain::InstanceList;
use super::scorer::score_instance;

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum of the instance scores recorded in one list.
pub fn list_points(candidate: &Candidate, list: InstanceList) -> u32 {
    let category = list.category();
    candidate
        .instances(list)
        .iter()
        .map(|instance| u32::from(score_instance(category, instance)))
        .sum()
}

/// Derived total: every instance in every list plus the interview, rounded to cents.
pub fn total(candidate: &Candidate) -> f64 {
    let instances: u32 = InstanceList::ALL
        .into_iter()
        .map(|list| list_points(candidate, list))
        .sum();
    round2(f64::from(instances) + candidate.interview().total())
}

/// Per-column subtotals shared by the sheet payload and the CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub individual: u32,
    pub group: u32,
    pub special: u32,
    pub pub_lead: u32,
    pub guild_lead: u32,
    pub innovation: u32,
    pub community: u32,
    pub published: u32,
    pub trainings: u32,
    pub interview_total: f64,
    pub grand_total: f64,
}

impl ScoreBreakdown {
    pub fn of(candidate: &Candidate) -> Self {
        let points = |list| list_points(candidate, list);

        Self {
            individual: points(InstanceList::Individual),
            group: points(InstanceList::Group),
            special: points(InstanceList::SpecialAwards),
            pub_lead: points(InstanceList::Publication),
            guild_lead: points(InstanceList::Leadership),
            innovation: points(InstanceList::Innovations),
            community: points(InstanceList::Extension),
            published: points(InstanceList::Books) + points(InstanceList::Articles),
            trainings: points(InstanceList::Speakership),
            interview_total: round2(candidate.interview().total()),
            grand_total: total(candidate),
        }
    }

    pub fn instance_points(&self) -> u32 {
        self.individual
            + self.group
            + self.special
            + self.pub_lead
            + self.guild_lead
            + self.innovation
            + self.community
            + self.published
            + self.trainings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::{
        InstanceEntry, InterviewDimension, InterviewRating, Level, Rank,
    };

    fn candidate() -> Candidate {
        Candidate::new("Ana Reyes", "Rizal High School", "Pasig")
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round2(2.0000000000000004), 2.0);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(7.4567), 7.46);
    }

    #[test]
    fn total_combines_instances_and_interview() {
        let mut candidate = candidate();
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

        assert_eq!(total(&candidate), 36.0);
        assert_eq!(candidate.total_score(), 36.0);
    }

    #[test]
    fn insufficient_interview_sums_without_float_noise() {
        let mut candidate = candidate();
        for dimension in InterviewDimension::ALL {
            candidate.rate_interview(dimension, InterviewRating::Insufficient);
        }
        assert_eq!(total(&candidate), 2.0);
    }

    #[test]
    fn breakdown_columns_cover_every_list() {
        let mut candidate = candidate();
        candidate.add_instance(
            InstanceList::SpecialAwards,
            InstanceEntry::ranked(Level::Regional, Rank::Second),
        );
        candidate.add_instance(
            InstanceList::Publication,
            InstanceEntry::ranked(Level::Division, Rank::Third),
        );
        candidate.add_instance(
            InstanceList::Leadership,
            InstanceEntry::role(Level::Regional, "President"),
        );
        candidate.add_instance(
            InstanceList::Extension,
            InstanceEntry::role(Level::National, "Facilitator"),
        );
        candidate.add_instance(InstanceList::Innovations, InstanceEntry::at(Level::School));
        candidate.add_instance(InstanceList::Speakership, InstanceEntry::at(Level::Regional));
        candidate.add_instance(InstanceList::Books, InstanceEntry::at(Level::Division));
        candidate.add_instance(InstanceList::Articles, InstanceEntry::at(Level::National));
        candidate.rate_interview(InterviewDimension::Growth, InterviewRating::Limited);

        let breakdown = ScoreBreakdown::of(&candidate);

        assert_eq!(breakdown.special, 6);
        assert_eq!(breakdown.pub_lead, 1);
        assert_eq!(breakdown.guild_lead, 20);
        assert_eq!(breakdown.community, 8);
        assert_eq!(breakdown.innovation, 6);
        assert_eq!(breakdown.trainings, 7);
        assert_eq!(breakdown.published, 10);
        assert_eq!(breakdown.interview_total, 1.0);
        assert_eq!(breakdown.instance_points(), 58);
        assert_eq!(breakdown.grand_total, 59.0);
    }
}

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::aggregate::{self, ScoreBreakdown};
use super::domain::{
    Instance, InstanceEntry, InstanceId, InstanceList, Interview, InterviewDimension,
    InterviewRating, SchoolTier,
};

/// Identifier wrapper for nominees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Journalism winnings over the last ten years.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievements {
    #[serde(default)]
    pub individual: Vec<Instance>,
    #[serde(default)]
    pub group: Vec<Instance>,
    #[serde(default)]
    pub special_awards: Vec<Instance>,
    #[serde(default)]
    pub publication: Vec<Instance>,
}

/// Professional services rendered by the nominee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalServices {
    #[serde(default)]
    pub leadership: Vec<Instance>,
    #[serde(default)]
    pub extension: Vec<Instance>,
    #[serde(default)]
    pub innovations: Vec<Instance>,
    #[serde(default)]
    pub speakership: Vec<Instance>,
    #[serde(default)]
    pub books: Vec<Instance>,
    #[serde(default)]
    pub articles: Vec<Instance>,
}

/// Aggregate root for a nomination.
///
/// Instance lists and interview ratings are only reachable through methods
/// that recompute `total_score`, so the stored total always matches the
/// rubric. Deserialising a candidate discards any supplied total and derives
/// it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CandidateDocument")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub school: String,
    pub division: String,
    #[serde(rename = "level")]
    pub tier: SchoolTier,
    pub performance_rating: bool,
    achievements: Achievements,
    professional: ProfessionalServices,
    interview: Interview,
    total_score: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candidate {
    pub fn new(
        name: impl Into<String>,
        school: impl Into<String>,
        division: impl Into<String>,
    ) -> Self {
        Self::with_id(CandidateId::generate(), name, school, division)
    }

    pub fn with_id(
        id: CandidateId,
        name: impl Into<String>,
        school: impl Into<String>,
        division: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            school: school.into(),
            division: division.into(),
            tier: SchoolTier::default(),
            performance_rating: true,
            achievements: Achievements::default(),
            professional: ProfessionalServices::default(),
            interview: Interview::default(),
            total_score: 0.0,
            timestamp: Utc::now(),
        }
    }

    pub fn achievements(&self) -> &Achievements {
        &self.achievements
    }

    pub fn professional(&self) -> &ProfessionalServices {
        &self.professional
    }

    pub fn interview(&self) -> &Interview {
        &self.interview
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown::of(self)
    }

    /// "Qualified (VS)" when the performance-rating requirement is met.
    pub fn academic_label(&self) -> &'static str {
        if self.performance_rating {
            "Qualified (VS)"
        } else {
            "Not Qualified"
        }
    }

    pub fn instances(&self, list: InstanceList) -> &[Instance] {
        match list {
            InstanceList::Individual => &self.achievements.individual,
            InstanceList::Group => &self.achievements.group,
            InstanceList::SpecialAwards => &self.achievements.special_awards,
            InstanceList::Publication => &self.achievements.publication,
            InstanceList::Leadership => &self.professional.leadership,
            InstanceList::Extension => &self.professional.extension,
            InstanceList::Innovations => &self.professional.innovations,
            InstanceList::Speakership => &self.professional.speakership,
            InstanceList::Books => &self.professional.books,
            InstanceList::Articles => &self.professional.articles,
        }
    }

    fn instances_mut(&mut self, list: InstanceList) -> &mut Vec<Instance> {
        match list {
            InstanceList::Individual => &mut self.achievements.individual,
            InstanceList::Group => &mut self.achievements.group,
            InstanceList::SpecialAwards => &mut self.achievements.special_awards,
            InstanceList::Publication => &mut self.achievements.publication,
            InstanceList::Leadership => &mut self.professional.leadership,
            InstanceList::Extension => &mut self.professional.extension,
            InstanceList::Innovations => &mut self.professional.innovations,
            InstanceList::Speakership => &mut self.professional.speakership,
            InstanceList::Books => &mut self.professional.books,
            InstanceList::Articles => &mut self.professional.articles,
        }
    }

    /// Records a new instance in `list` and returns its generated id.
    pub fn add_instance(&mut self, list: InstanceList, entry: InstanceEntry) -> InstanceId {
        let id = InstanceId::generate();
        self.instances_mut(list).push(Instance {
            id: id.clone(),
            level: entry.level,
            rank: entry.rank,
            role: entry.role,
        });
        self.recompute();
        id
    }

    /// Removes an instance by id, returning it when it was present.
    pub fn remove_instance(&mut self, list: InstanceList, id: &InstanceId) -> Option<Instance> {
        let instances = self.instances_mut(list);
        let position = instances.iter().position(|instance| &instance.id == id)?;
        let removed = instances.remove(position);
        self.recompute();
        Some(removed)
    }

    pub fn rate_interview(&mut self, dimension: InterviewDimension, rating: InterviewRating) {
        self.interview.set(dimension, rating);
        self.recompute();
    }

    /// Marks the record as updated now.
    pub fn touch(&mut self) {
        self.timestamp = Utc::now();
    }

    fn recompute(&mut self) {
        self.total_score = aggregate::total(self);
    }
}

/// Wire shape accepted on input; the supplied total is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidateDocument {
    #[serde(default = "CandidateId::generate")]
    id: CandidateId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    school: String,
    #[serde(default)]
    division: String,
    #[serde(rename = "level", default)]
    tier: SchoolTier,
    #[serde(default = "default_performance_rating")]
    performance_rating: bool,
    #[serde(default)]
    achievements: Achievements,
    #[serde(default)]
    professional: ProfessionalServices,
    #[serde(default)]
    interview: Interview,
    #[serde(default = "Utc::now")]
    timestamp: DateTime<Utc>,
}

fn default_performance_rating() -> bool {
    true
}

impl From<CandidateDocument> for Candidate {
    fn from(document: CandidateDocument) -> Self {
        let mut candidate = Candidate {
            id: document.id,
            name: document.name,
            school: document.school,
            division: document.division,
            tier: document.tier,
            performance_rating: document.performance_rating,
            achievements: document.achievements,
            professional: document.professional,
            interview: document.interview,
            total_score: 0.0,
            timestamp: document.timestamp,
        };
        candidate.recompute();
        candidate
    }
}

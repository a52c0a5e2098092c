use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Administrative tier at which an achievement or service took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    National,
    Regional,
    Division,
    District,
    School,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::National,
        Level::Regional,
        Level::Division,
        Level::District,
        Level::School,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Level::National => "National",
            Level::Regional => "Regional",
            Level::Division => "Division",
            Level::District => "District",
            Level::School => "School",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ParseLabelError::new("level", value))
    }
}

/// Contest placement, 1st through 7th.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
    #[serde(rename = "4th")]
    Fourth,
    #[serde(rename = "5th")]
    Fifth,
    #[serde(rename = "6th")]
    Sixth,
    #[serde(rename = "7th")]
    Seventh,
}

impl Rank {
    pub const ALL: [Rank; 7] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
    ];

    /// Zero-based placement, used to index the ranked point rows.
    pub const fn index(self) -> usize {
        match self {
            Rank::First => 0,
            Rank::Second => 1,
            Rank::Third => 2,
            Rank::Fourth => 3,
            Rank::Fifth => 4,
            Rank::Sixth => 5,
            Rank::Seventh => 6,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rank::First => "1st",
            Rank::Second => "2nd",
            Rank::Third => "3rd",
            Rank::Fourth => "4th",
            Rank::Fifth => "5th",
            Rank::Sixth => "6th",
            Rank::Seventh => "7th",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Rank::ALL
            .into_iter()
            .find(|rank| {
                rank.label().eq_ignore_ascii_case(trimmed)
                    || (rank.index() + 1).to_string() == trimmed
            })
            .ok_or_else(|| ParseLabelError::new("rank", value))
    }
}

/// Lower/upper school tier the nominee advises for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolTier {
    Elementary,
    #[default]
    Secondary,
}

impl SchoolTier {
    pub const fn label(self) -> &'static str {
        match self {
            SchoolTier::Elementary => "Elementary",
            SchoolTier::Secondary => "Secondary",
        }
    }
}

/// Identifier wrapper for a single recorded achievement or service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub String);

impl InstanceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scoreable occurrence. Immutable once recorded; removal and re-adding is the update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub id: InstanceId,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Caller-supplied fields for a new instance; the identifier is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceEntry {
    pub level: Level,
    #[serde(default)]
    pub rank: Option<Rank>,
    #[serde(rename = "type", default)]
    pub role: Option<String>,
}

impl InstanceEntry {
    pub fn at(level: Level) -> Self {
        Self {
            level,
            rank: None,
            role: None,
        }
    }

    pub fn ranked(level: Level, rank: Rank) -> Self {
        Self {
            level,
            rank: Some(rank),
            role: None,
        }
    }

    pub fn role(level: Level, role: impl Into<String>) -> Self {
        Self {
            level,
            rank: None,
            role: Some(role.into()),
        }
    }
}

/// Point families of the OSPA rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RubricCategory {
    Individual,
    Group,
    SpecialAward,
    Publication,
    Leadership,
    Extension,
    Innovation,
    TieredServices,
    Articles,
}

impl RubricCategory {
    pub const ALL: [RubricCategory; 9] = [
        RubricCategory::Individual,
        RubricCategory::Group,
        RubricCategory::SpecialAward,
        RubricCategory::Publication,
        RubricCategory::Leadership,
        RubricCategory::Extension,
        RubricCategory::Innovation,
        RubricCategory::TieredServices,
        RubricCategory::Articles,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            RubricCategory::Individual => "individual",
            RubricCategory::Group => "group",
            RubricCategory::SpecialAward => "special_award",
            RubricCategory::Publication => "publication",
            RubricCategory::Leadership => "leadership",
            RubricCategory::Extension => "extension",
            RubricCategory::Innovation => "innovation",
            RubricCategory::TieredServices => "tiered_services",
            RubricCategory::Articles => "articles",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RubricCategory::Individual => "Individual Journalism Contests",
            RubricCategory::Group => "Group Journalism Contests",
            RubricCategory::SpecialAward => "Special Awards (Group)",
            RubricCategory::Publication => "School Publication Contests",
            RubricCategory::Leadership => "Journalism Leadership",
            RubricCategory::Extension => "Extension Services",
            RubricCategory::Innovation => "Innovations & Advocacies",
            RubricCategory::TieredServices => "Speakership / Published Books & Modules",
            RubricCategory::Articles => "Articles Published",
        }
    }
}

impl FromStr for RubricCategory {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let category = match normalized.as_str() {
            "individual" => RubricCategory::Individual,
            "group" => RubricCategory::Group,
            "special" | "special_award" | "special_awards" => RubricCategory::SpecialAward,
            "publication" => RubricCategory::Publication,
            "leadership" => RubricCategory::Leadership,
            "extension" => RubricCategory::Extension,
            "innovation" | "innovations" => RubricCategory::Innovation,
            "tiered_services" | "speakership" | "books" => RubricCategory::TieredServices,
            "articles" => RubricCategory::Articles,
            _ => return Err(ParseLabelError::new("category", value)),
        };
        Ok(category)
    }
}

/// The ten instance lists carried by a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstanceList {
    Individual,
    Group,
    SpecialAwards,
    Publication,
    Leadership,
    Extension,
    Innovations,
    Speakership,
    Books,
    Articles,
}

impl InstanceList {
    pub const ALL: [InstanceList; 10] = [
        InstanceList::Individual,
        InstanceList::Group,
        InstanceList::SpecialAwards,
        InstanceList::Publication,
        InstanceList::Leadership,
        InstanceList::Extension,
        InstanceList::Innovations,
        InstanceList::Speakership,
        InstanceList::Books,
        InstanceList::Articles,
    ];

    /// Rubric family used to score every instance recorded in this list.
    pub const fn category(self) -> RubricCategory {
        match self {
            InstanceList::Individual => RubricCategory::Individual,
            InstanceList::Group => RubricCategory::Group,
            InstanceList::SpecialAwards => RubricCategory::SpecialAward,
            InstanceList::Publication => RubricCategory::Publication,
            InstanceList::Leadership => RubricCategory::Leadership,
            InstanceList::Extension => RubricCategory::Extension,
            InstanceList::Innovations => RubricCategory::Innovation,
            InstanceList::Speakership | InstanceList::Books => RubricCategory::TieredServices,
            InstanceList::Articles => RubricCategory::Articles,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            InstanceList::Individual => "individual",
            InstanceList::Group => "group",
            InstanceList::SpecialAwards => "specialAwards",
            InstanceList::Publication => "publication",
            InstanceList::Leadership => "leadership",
            InstanceList::Extension => "extension",
            InstanceList::Innovations => "innovations",
            InstanceList::Speakership => "speakership",
            InstanceList::Books => "books",
            InstanceList::Articles => "articles",
        }
    }

    pub const fn takes_rank(self) -> bool {
        matches!(
            self,
            InstanceList::Individual
                | InstanceList::Group
                | InstanceList::SpecialAwards
                | InstanceList::Publication
        )
    }

    pub const fn takes_role(self) -> bool {
        matches!(self, InstanceList::Leadership | InstanceList::Extension)
    }
}

impl fmt::Display for InstanceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InstanceList {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        InstanceList::ALL
            .into_iter()
            .find(|list| list.key().eq_ignore_ascii_case(trimmed))
            .or_else(|| match trimmed.to_ascii_lowercase().as_str() {
                "special" | "special_awards" | "special-awards" => {
                    Some(InstanceList::SpecialAwards)
                }
                "innovation" => Some(InstanceList::Innovations),
                _ => None,
            })
            .ok_or_else(|| ParseLabelError::new("instance list", value))
    }
}

/// Discrete panel interview rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum InterviewRating {
    #[default]
    Unrated,
    Insufficient,
    Limited,
    Commendable,
}

impl InterviewRating {
    pub const RATED: [InterviewRating; 3] = [
        InterviewRating::Insufficient,
        InterviewRating::Limited,
        InterviewRating::Commendable,
    ];

    pub const fn points(self) -> f64 {
        match self {
            InterviewRating::Unrated => 0.0,
            InterviewRating::Insufficient => 0.4,
            InterviewRating::Limited => 1.0,
            InterviewRating::Commendable => 2.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            InterviewRating::Unrated => "Unrated",
            InterviewRating::Insufficient => "INF",
            InterviewRating::Limited => "LIM",
            InterviewRating::Commendable => "COM",
        }
    }
}

impl From<InterviewRating> for f64 {
    fn from(value: InterviewRating) -> Self {
        value.points()
    }
}

impl TryFrom<f64> for InterviewRating {
    type Error = ParseLabelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        [InterviewRating::Unrated]
            .into_iter()
            .chain(InterviewRating::RATED)
            .find(|rating| (rating.points() - value).abs() < 1e-9)
            .ok_or_else(|| ParseLabelError::new("interview rating", &value.to_string()))
    }
}

impl FromStr for InterviewRating {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "inf" | "insufficient" => return Ok(InterviewRating::Insufficient),
            "lim" | "limited" => return Ok(InterviewRating::Limited),
            "com" | "commendable" => return Ok(InterviewRating::Commendable),
            "unrated" => return Ok(InterviewRating::Unrated),
            _ => {}
        }
        trimmed
            .parse::<f64>()
            .map_err(|_| ParseLabelError::new("interview rating", value))
            .and_then(InterviewRating::try_from)
    }
}

/// The five panel interview dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewDimension {
    Principles,
    Leadership,
    Experience,
    Growth,
    Communication,
}

impl InterviewDimension {
    pub const ALL: [InterviewDimension; 5] = [
        InterviewDimension::Principles,
        InterviewDimension::Leadership,
        InterviewDimension::Experience,
        InterviewDimension::Growth,
        InterviewDimension::Communication,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            InterviewDimension::Principles => "principles",
            InterviewDimension::Leadership => "leadership",
            InterviewDimension::Experience => "experience",
            InterviewDimension::Growth => "growth",
            InterviewDimension::Communication => "communication",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            InterviewDimension::Principles => "Journalism Principles",
            InterviewDimension::Leadership => "Mentorship Potential",
            InterviewDimension::Experience => "Work Engagement",
            InterviewDimension::Growth => "Personal Growth",
            InterviewDimension::Communication => "Communication Skills",
        }
    }
}

impl FromStr for InterviewDimension {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        InterviewDimension::ALL
            .into_iter()
            .find(|dimension| dimension.key().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ParseLabelError::new("interview dimension", value))
    }
}

/// Per-dimension panel interview scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    #[serde(default)]
    pub principles: InterviewRating,
    #[serde(default)]
    pub leadership: InterviewRating,
    #[serde(default)]
    pub experience: InterviewRating,
    #[serde(default)]
    pub growth: InterviewRating,
    #[serde(default)]
    pub communication: InterviewRating,
}

impl Interview {
    pub fn rating(&self, dimension: InterviewDimension) -> InterviewRating {
        match dimension {
            InterviewDimension::Principles => self.principles,
            InterviewDimension::Leadership => self.leadership,
            InterviewDimension::Experience => self.experience,
            InterviewDimension::Growth => self.growth,
            InterviewDimension::Communication => self.communication,
        }
    }

    pub(crate) fn set(&mut self, dimension: InterviewDimension, rating: InterviewRating) {
        let slot = match dimension {
            InterviewDimension::Principles => &mut self.principles,
            InterviewDimension::Leadership => &mut self.leadership,
            InterviewDimension::Experience => &mut self.experience,
            InterviewDimension::Growth => &mut self.growth,
            InterviewDimension::Communication => &mut self.communication,
        };
        *slot = rating;
    }

    /// Unrounded sum of the five dimension values.
    pub fn total(&self) -> f64 {
        InterviewDimension::ALL
            .into_iter()
            .map(|dimension| self.rating(dimension).points())
            .sum()
    }
}

/// Raised when a textual label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseLabelError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

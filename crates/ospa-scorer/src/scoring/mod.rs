//! Rubric tables, per-instance scoring and candidate aggregation.

pub mod aggregate;
mod candidate;
pub mod domain;
pub mod rubric;
mod scorer;

pub use aggregate::{round2, total, ScoreBreakdown};
pub use candidate::{Achievements, Candidate, CandidateId, ProfessionalServices};
pub use domain::{
    Instance, InstanceEntry, InstanceId, InstanceList, Interview, InterviewDimension,
    InterviewRating, Level, ParseLabelError, Rank, RubricCategory, SchoolTier,
};
pub use scorer::{score, score_instance, score_labeled};

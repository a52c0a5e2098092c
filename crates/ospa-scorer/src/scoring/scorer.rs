use tracing::debug;

use super::domain::{Instance, Level, Rank, RubricCategory};
use super::rubric::{
    ExtensionRole, LeadershipRole, ARTICLES, CONTESTS, EXTENSION, INNOVATIONS, LEADERSHIP,
    PUBLICATION, SPECIAL_AWARDS, TIERED_SERVICES,
};

/// Points for one instance of `category`.
///
/// Contest families read `rank` (1st place when absent), role families read
/// `role` (the family's first listed role when absent) and flat families read
/// only `level`. Any combination the rubric does not list is worth zero.
pub fn score(
    category: RubricCategory,
    level: Level,
    rank: Option<Rank>,
    role: Option<&str>,
) -> u16 {
    let points = match category {
        RubricCategory::Individual | RubricCategory::Group => {
            CONTESTS.points(level, contest_rank(category, rank))
        }
        RubricCategory::SpecialAward => SPECIAL_AWARDS.points(level, contest_rank(category, rank)),
        RubricCategory::Publication => PUBLICATION.points(level, contest_rank(category, rank)),
        RubricCategory::Leadership => {
            let role = match role {
                Some(label) => unlisted_role(category, label, LeadershipRole::from_label(label)),
                None => {
                    debug!(?category, "no role supplied, using first listed leadership role");
                    LEADERSHIP.default_role()
                }
            };
            role.and_then(|role| LEADERSHIP.points(role, level))
        }
        RubricCategory::Extension => {
            let role = match role {
                Some(label) => unlisted_role(category, label, ExtensionRole::from_label(label)),
                None => {
                    debug!(?category, "no role supplied, using first listed extension role");
                    EXTENSION.default_role()
                }
            };
            role.and_then(|role| EXTENSION.points(role, level))
        }
        RubricCategory::Innovation => INNOVATIONS.points(level),
        RubricCategory::TieredServices => TIERED_SERVICES.points(level),
        RubricCategory::Articles => ARTICLES.points(level),
    };

    points.unwrap_or(0)
}

/// Same as [`score`] but keyed by a free-form category label; unknown labels score zero.
pub fn score_labeled(
    category: &str,
    level: Level,
    rank: Option<Rank>,
    role: Option<&str>,
) -> u16 {
    match category.parse::<RubricCategory>() {
        Ok(category) => score(category, level, rank, role),
        Err(err) => {
            debug!(%err, "unscored category");
            0
        }
    }
}

/// Scores a recorded instance, forwarding only the attributes its family uses.
pub fn score_instance(category: RubricCategory, instance: &Instance) -> u16 {
    match category {
        RubricCategory::Individual
        | RubricCategory::Group
        | RubricCategory::SpecialAward
        | RubricCategory::Publication => score(category, instance.level, instance.rank, None),
        RubricCategory::Leadership | RubricCategory::Extension => {
            score(category, instance.level, None, instance.role.as_deref())
        }
        RubricCategory::Innovation | RubricCategory::TieredServices | RubricCategory::Articles => {
            score(category, instance.level, None, None)
        }
    }
}

fn unlisted_role<R>(category: RubricCategory, label: &str, role: Option<R>) -> Option<R> {
    if role.is_none() {
        debug!(?category, role = label, "role not listed in rubric, scoring zero");
    }
    role
}

// A rankless contest entry is credited as 1st place, which can over-credit it.
fn contest_rank(category: RubricCategory, rank: Option<Rank>) -> Rank {
    rank.unwrap_or_else(|| {
        debug!(?category, "no rank supplied, crediting 1st place");
        Rank::First
    })
}

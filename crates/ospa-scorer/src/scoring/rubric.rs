//! Annex J-1 point tables.
//!
//! Every table is static data keyed by the enumerated domain types. A lookup
//! returns `None` when the rubric has no entry for a combination; scoring maps
//! that to zero points.

use std::fmt;

use super::domain::{Level, Rank};

/// Flat `Level -> points` table.
#[derive(Debug, Clone, Copy)]
pub struct LevelTable {
    rows: &'static [(Level, u16)],
}

impl LevelTable {
    pub const fn new(rows: &'static [(Level, u16)]) -> Self {
        Self { rows }
    }

    pub fn points(&self, level: Level) -> Option<u16> {
        self.rows
            .iter()
            .find(|(row_level, _)| *row_level == level)
            .map(|(_, points)| *points)
    }

    pub fn rows(&self) -> &'static [(Level, u16)] {
        self.rows
    }
}

/// Contest table: `Level -> Rank -> points`, with points listed from 1st place down.
#[derive(Debug, Clone, Copy)]
pub struct RankedTable {
    rows: &'static [(Level, &'static [u16])],
}

impl RankedTable {
    pub const fn new(rows: &'static [(Level, &'static [u16])]) -> Self {
        Self { rows }
    }

    pub fn points(&self, level: Level, rank: Rank) -> Option<u16> {
        self.rows
            .iter()
            .find(|(row_level, _)| *row_level == level)
            .and_then(|(_, by_rank)| by_rank.get(rank.index()).copied())
    }

    pub fn rows(&self) -> &'static [(Level, &'static [u16])] {
        self.rows
    }
}

/// Role table: `Role -> Level -> points`. The first row is the default role.
#[derive(Debug, Clone, Copy)]
pub struct RoleTable<R: 'static> {
    rows: &'static [(R, LevelTable)],
}

impl<R> RoleTable<R>
where
    R: Copy + PartialEq + 'static,
{
    pub const fn new(rows: &'static [(R, LevelTable)]) -> Self {
        Self { rows }
    }

    pub fn points(&self, role: R, level: Level) -> Option<u16> {
        self.rows
            .iter()
            .find(|(row_role, _)| *row_role == role)
            .and_then(|(_, table)| table.points(level))
    }

    /// First listed role, applied when an instance carries no role label.
    pub fn default_role(&self) -> Option<R> {
        self.rows.first().map(|(role, _)| *role)
    }

    pub fn rows(&self) -> &'static [(R, LevelTable)] {
        self.rows
    }
}

/// Positions recognised by the journalism leadership table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadershipRole {
    President,
    VicePresident,
    Other,
}

impl LeadershipRole {
    pub const ALL: [LeadershipRole; 3] = [Self::President, Self::VicePresident, Self::Other];

    /// Exact match against the table labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.label() == label)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::President => "President",
            Self::VicePresident => "Vice President",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for LeadershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Positions recognised by the extension services table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionRole {
    Chairperson,
    Facilitator,
}

impl ExtensionRole {
    pub const ALL: [ExtensionRole; 2] = [Self::Chairperson, Self::Facilitator];

    /// Exact match against the table labels. The nomination form offers
    /// "Committee Chairperson", which is not one of them.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.label() == label)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Chairperson => "Chairperson",
            Self::Facilitator => "Facilitator",
        }
    }
}

impl fmt::Display for ExtensionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Individual and group journalism contests.
pub const CONTESTS: RankedTable = RankedTable::new(&[
    (Level::National, &[20, 19, 18, 17, 16, 15, 14]),
    (Level::Regional, &[12, 11, 10]),
    (Level::Division, &[7, 6, 5]),
]);

pub const SPECIAL_AWARDS: RankedTable = RankedTable::new(&[
    (Level::National, &[15, 14, 13, 12, 11, 10, 9]),
    (Level::Regional, &[7, 6, 5]),
    (Level::Division, &[4, 3, 2]),
]);

/// School publication contests.
pub const PUBLICATION: RankedTable = RankedTable::new(&[
    (Level::National, &[13, 12, 11, 10, 9, 8, 7]),
    (Level::Regional, &[6, 5, 4]),
    (Level::Division, &[3, 2, 1]),
]);

pub const LEADERSHIP: RoleTable<LeadershipRole> = RoleTable::new(&[
    (
        LeadershipRole::President,
        LevelTable::new(&[
            (Level::National, 25),
            (Level::Regional, 20),
            (Level::Division, 15),
        ]),
    ),
    (
        LeadershipRole::VicePresident,
        LevelTable::new(&[
            (Level::National, 20),
            (Level::Regional, 15),
            (Level::Division, 10),
        ]),
    ),
    (
        LeadershipRole::Other,
        LevelTable::new(&[
            (Level::National, 18),
            (Level::Regional, 12),
            (Level::Division, 8),
        ]),
    ),
]);

pub const EXTENSION: RoleTable<ExtensionRole> = RoleTable::new(&[
    (
        ExtensionRole::Chairperson,
        LevelTable::new(&[
            (Level::National, 10),
            (Level::Regional, 8),
            (Level::Division, 6),
        ]),
    ),
    (
        ExtensionRole::Facilitator,
        LevelTable::new(&[
            (Level::National, 8),
            (Level::Regional, 6),
            (Level::Division, 4),
        ]),
    ),
]);

/// Innovations and advocacies; the only family scored at District and School level.
pub const INNOVATIONS: LevelTable = LevelTable::new(&[
    (Level::National, 15),
    (Level::Regional, 12),
    (Level::Division, 10),
    (Level::District, 8),
    (Level::School, 6),
]);

/// Speakership and published books/modules.
pub const TIERED_SERVICES: LevelTable = LevelTable::new(&[
    (Level::National, 10),
    (Level::Regional, 7),
    (Level::Division, 5),
]);

pub const ARTICLES: LevelTable = LevelTable::new(&[
    (Level::National, 5),
    (Level::Regional, 3),
    (Level::Division, 1),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_and_division_contests_stop_at_third_place() {
        assert_eq!(CONTESTS.points(Level::Regional, Rank::Third), Some(10));
        assert_eq!(CONTESTS.points(Level::Regional, Rank::Fourth), None);
        assert_eq!(PUBLICATION.points(Level::Division, Rank::Third), Some(1));
        assert_eq!(SPECIAL_AWARDS.points(Level::National, Rank::Seventh), Some(9));
    }

    #[test]
    fn default_roles_are_first_listed() {
        assert_eq!(LEADERSHIP.default_role(), Some(LeadershipRole::President));
        assert_eq!(EXTENSION.default_role(), Some(ExtensionRole::Chairperson));
    }

    #[test]
    fn role_labels_match_table_keys_exactly() {
        assert_eq!(
            LeadershipRole::from_label("Vice President"),
            Some(LeadershipRole::VicePresident)
        );
        assert_eq!(LeadershipRole::from_label("  vice   PRESIDENT "), None);
        assert_eq!(LeadershipRole::from_label("president"), None);
        assert_eq!(ExtensionRole::from_label("Committee Chairperson"), None);
        assert_eq!(ExtensionRole::from_label("Speaker"), None);
    }

    #[test]
    fn only_innovations_cover_district_and_school() {
        assert_eq!(INNOVATIONS.points(Level::School), Some(6));
        assert_eq!(TIERED_SERVICES.points(Level::District), None);
        assert_eq!(ARTICLES.points(Level::School), None);
    }
}

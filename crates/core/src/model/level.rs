use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::ids::ParseIdError;

/// Minimum fraction of correct answers to stay at the tested level.
pub const PASS_THRESHOLD: f64 = 0.6;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("fallback chain starting at {start} does not terminate")]
    FallbackCycle { start: LevelId },

    #[error("catalog entry {index} holds {found}")]
    Misordered { index: usize, found: LevelId },
}

//
// ─── GROUPS ────────────────────────────────────────────────────────────────────
//

/// Category of levels that share one question pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyGroup {
    PrimarySchool,
    JuniorHigh,
    SeniorHigh,
    College,
    Postgraduate,
    StudyAbroad,
    Cefr,
    Cambridge,
    Business,
}

impl ProficiencyGroup {
    pub const ALL: [ProficiencyGroup; 9] = [
        ProficiencyGroup::PrimarySchool,
        ProficiencyGroup::JuniorHigh,
        ProficiencyGroup::SeniorHigh,
        ProficiencyGroup::College,
        ProficiencyGroup::Postgraduate,
        ProficiencyGroup::StudyAbroad,
        ProficiencyGroup::Cefr,
        ProficiencyGroup::Cambridge,
        ProficiencyGroup::Business,
    ];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            ProficiencyGroup::PrimarySchool => "Primary school",
            ProficiencyGroup::JuniorHigh => "Junior high school",
            ProficiencyGroup::SeniorHigh => "Senior high school",
            ProficiencyGroup::College => "College English",
            ProficiencyGroup::Postgraduate => "Postgraduate entrance",
            ProficiencyGroup::StudyAbroad => "Study abroad",
            ProficiencyGroup::Cefr => "CEFR",
            ProficiencyGroup::Cambridge => "Cambridge English",
            ProficiencyGroup::Business => "Business English",
        }
    }

    /// Levels belonging to this group, in catalog order.
    pub fn levels(self) -> impl Iterator<Item = &'static ProficiencyLevel> {
        LEVELS.iter().filter(move |level| level.group == self)
    }
}

impl fmt::Display for ProficiencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

//
// ─── LEVEL IDS ─────────────────────────────────────────────────────────────────
//

/// Key of a level in the fixed catalog. The discriminant is the index into [`LEVELS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelId {
    Primary1,
    Primary2,
    Primary3,
    Primary4,
    Primary5,
    Primary6,
    Junior1,
    Junior2,
    Junior3,
    Senior1,
    Senior2,
    Senior3,
    Cet4,
    Cet6,
    Postgraduate,
    Ielts,
    Toefl,
    Gre,
    CefrA1,
    CefrA2,
    CefrB1,
    CefrB2,
    CefrC1,
    CefrC2,
    Ket,
    Pet,
    Fce,
    Cae,
    Cpe,
    BecPreliminary,
    BecVantage,
    BecHigher,
}

impl LevelId {
    /// Catalog record for this level.
    #[must_use]
    pub fn level(self) -> &'static ProficiencyLevel {
        &LEVELS[self as usize]
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        self.level().key
    }

    /// Levels reachable by following fallbacks, starting with `self`.
    #[must_use]
    pub fn fallback_chain(self) -> FallbackChain {
        FallbackChain { next: Some(self) }
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LevelId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LEVELS
            .iter()
            .find(|level| level.key.eq_ignore_ascii_case(wanted))
            .map(|level| level.id)
            .ok_or_else(|| ParseIdError {
                kind: "LevelId".to_string(),
            })
    }
}

/// Iterator over a level and its successively easier fallbacks.
#[derive(Debug, Clone)]
pub struct FallbackChain {
    next: Option<LevelId>,
}

impl Iterator for FallbackChain {
    type Item = LevelId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.level().fallback;
        Some(current)
    }
}

//
// ─── LEVELS ────────────────────────────────────────────────────────────────────
//

/// One tier of the placement catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProficiencyLevel {
    id: LevelId,
    key: &'static str,
    display_name: &'static str,
    group: ProficiencyGroup,
    fallback: Option<LevelId>,
    grade: Option<u8>,
    vocabulary_estimate: u32,
}

impl ProficiencyLevel {
    const fn new(
        id: LevelId,
        key: &'static str,
        display_name: &'static str,
        group: ProficiencyGroup,
        fallback: Option<LevelId>,
        grade: Option<u8>,
        vocabulary_estimate: u32,
    ) -> Self {
        Self {
            id,
            key,
            display_name,
            group,
            fallback,
            grade,
            vocabulary_estimate,
        }
    }

    #[must_use]
    pub fn id(&self) -> LevelId {
        self.id
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    #[must_use]
    pub fn group(&self) -> ProficiencyGroup {
        self.group
    }

    /// Same for every level; kept per level so callers never hard-code it.
    #[must_use]
    pub fn pass_threshold(&self) -> f64 {
        PASS_THRESHOLD
    }

    #[must_use]
    pub fn fallback(&self) -> Option<LevelId> {
        self.fallback
    }

    /// School grade for grade-linked tracks (primary through senior high).
    #[must_use]
    pub fn grade(&self) -> Option<u8> {
        self.grade
    }

    /// Rough number of known words expected at this tier.
    #[must_use]
    pub fn vocabulary_estimate(&self) -> u32 {
        self.vocabulary_estimate
    }

    /// A level without a fallback cannot be downgraded further.
    #[must_use]
    pub fn is_floor(&self) -> bool {
        self.fallback.is_none()
    }
}

use LevelId as L;
use ProficiencyGroup as G;

/// The fixed level catalog, indexed by `LevelId as usize`.
#[rustfmt::skip]
pub static LEVELS: [ProficiencyLevel; 32] = [
    ProficiencyLevel::new(L::Primary1, "primary1", "Primary grade 1", G::PrimarySchool, None, Some(1), 100),
    ProficiencyLevel::new(L::Primary2, "primary2", "Primary grade 2", G::PrimarySchool, Some(L::Primary1), Some(2), 250),
    ProficiencyLevel::new(L::Primary3, "primary3", "Primary grade 3", G::PrimarySchool, Some(L::Primary2), Some(3), 400),
    ProficiencyLevel::new(L::Primary4, "primary4", "Primary grade 4", G::PrimarySchool, Some(L::Primary3), Some(4), 550),
    ProficiencyLevel::new(L::Primary5, "primary5", "Primary grade 5", G::PrimarySchool, Some(L::Primary4), Some(5), 700),
    ProficiencyLevel::new(L::Primary6, "primary6", "Primary grade 6", G::PrimarySchool, Some(L::Primary5), Some(6), 900),
    ProficiencyLevel::new(L::Junior1, "junior1", "Junior high grade 7", G::JuniorHigh, Some(L::Primary6), Some(7), 1_200),
    ProficiencyLevel::new(L::Junior2, "junior2", "Junior high grade 8", G::JuniorHigh, Some(L::Junior1), Some(8), 1_500),
    ProficiencyLevel::new(L::Junior3, "junior3", "Junior high grade 9", G::JuniorHigh, Some(L::Junior2), Some(9), 1_800),
    ProficiencyLevel::new(L::Senior1, "senior1", "Senior high grade 10", G::SeniorHigh, Some(L::Junior3), Some(10), 2_400),
    ProficiencyLevel::new(L::Senior2, "senior2", "Senior high grade 11", G::SeniorHigh, Some(L::Senior1), Some(11), 3_000),
    ProficiencyLevel::new(L::Senior3, "senior3", "Senior high grade 12", G::SeniorHigh, Some(L::Senior2), Some(12), 3_500),
    ProficiencyLevel::new(L::Cet4, "cet4", "College English Test Band 4", G::College, Some(L::Senior3), None, 4_500),
    ProficiencyLevel::new(L::Cet6, "cet6", "College English Test Band 6", G::College, Some(L::Cet4), None, 6_000),
    ProficiencyLevel::new(L::Postgraduate, "postgraduate", "Postgraduate entrance exam", G::Postgraduate, Some(L::Cet6), None, 5_500),
    ProficiencyLevel::new(L::Ielts, "ielts", "IELTS", G::StudyAbroad, Some(L::Cet6), None, 7_000),
    ProficiencyLevel::new(L::Toefl, "toefl", "TOEFL", G::StudyAbroad, Some(L::Cet6), None, 8_000),
    ProficiencyLevel::new(L::Gre, "gre", "GRE", G::StudyAbroad, Some(L::Toefl), None, 12_000),
    ProficiencyLevel::new(L::CefrA1, "cefr_a1", "CEFR A1", G::Cefr, None, None, 500),
    ProficiencyLevel::new(L::CefrA2, "cefr_a2", "CEFR A2", G::Cefr, Some(L::CefrA1), None, 1_000),
    ProficiencyLevel::new(L::CefrB1, "cefr_b1", "CEFR B1", G::Cefr, Some(L::CefrA2), None, 2_000),
    ProficiencyLevel::new(L::CefrB2, "cefr_b2", "CEFR B2", G::Cefr, Some(L::CefrB1), None, 4_000),
    ProficiencyLevel::new(L::CefrC1, "cefr_c1", "CEFR C1", G::Cefr, Some(L::CefrB2), None, 8_000),
    ProficiencyLevel::new(L::CefrC2, "cefr_c2", "CEFR C2", G::Cefr, Some(L::CefrC1), None, 16_000),
    ProficiencyLevel::new(L::Ket, "ket", "Cambridge A2 Key", G::Cambridge, None, None, 1_500),
    ProficiencyLevel::new(L::Pet, "pet", "Cambridge B1 Preliminary", G::Cambridge, Some(L::Ket), None, 3_000),
    ProficiencyLevel::new(L::Fce, "fce", "Cambridge B2 First", G::Cambridge, Some(L::Pet), None, 4_500),
    ProficiencyLevel::new(L::Cae, "cae", "Cambridge C1 Advanced", G::Cambridge, Some(L::Fce), None, 6_500),
    ProficiencyLevel::new(L::Cpe, "cpe", "Cambridge C2 Proficiency", G::Cambridge, Some(L::Cae), None, 9_000),
    ProficiencyLevel::new(L::BecPreliminary, "bec_preliminary", "BEC Preliminary", G::Business, None, None, 2_500),
    ProficiencyLevel::new(L::BecVantage, "bec_vantage", "BEC Vantage", G::Business, Some(L::BecPreliminary), None, 4_000),
    ProficiencyLevel::new(L::BecHigher, "bec_higher", "BEC Higher", G::Business, Some(L::BecVantage), None, 6_000),
];

/// Checks that the catalog is indexed by id and that every fallback chain
/// reaches a floor level within `LEVELS.len()` steps.
///
/// # Errors
///
/// Returns `CatalogError::Misordered` if an entry sits at the wrong index, or
/// `CatalogError::FallbackCycle` if a chain does not terminate.
pub fn validate_fallback_graph() -> Result<(), CatalogError> {
    for (index, level) in LEVELS.iter().enumerate() {
        if level.id as usize != index {
            return Err(CatalogError::Misordered {
                index,
                found: level.id,
            });
        }
    }

    for level in &LEVELS {
        let steps = level.id.fallback_chain().take(LEVELS.len() + 1).count();
        if steps > LEVELS.len() {
            return Err(CatalogError::FallbackCycle { start: level.id });
        }
    }
    Ok(())
}

//! Question pools keyed by proficiency group.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::model::{ProficiencyGroup, QuestionTemplate, TemplateError};

/// Read-only source of question templates.
pub trait QuestionPoolProvider: Send + Sync {
    /// Canned templates for `group`; may be empty.
    fn group_pool(&self, group: ProficiencyGroup) -> &[QuestionTemplate];

    /// Templates shared by every group whose own pool is empty.
    fn generic_pool(&self) -> &[QuestionTemplate];

    /// The group pool, or the generic pool when the group has nothing.
    fn pool(&self, group: ProficiencyGroup) -> &[QuestionTemplate] {
        let own = self.group_pool(group);
        if own.is_empty() {
            self.generic_pool()
        } else {
            own
        }
    }
}

/// In-memory pool catalog, either built in or deserialized from content data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolCatalog {
    #[serde(default)]
    groups: BTreeMap<ProficiencyGroup, Vec<QuestionTemplate>>,
    #[serde(default)]
    generic: Vec<QuestionTemplate>,
}

impl PoolCatalog {
    #[must_use]
    pub fn new(
        groups: BTreeMap<ProficiencyGroup, Vec<QuestionTemplate>>,
        generic: Vec<QuestionTemplate>,
    ) -> Self {
        Self { groups, generic }
    }

    /// The catalog shipped with the engine, built on first use.
    pub fn builtin() -> &'static PoolCatalog {
        static BUILTIN: OnceLock<PoolCatalog> = OnceLock::new();
        BUILTIN.get_or_init(builtin::catalog)
    }

    /// Validates every template in the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first `TemplateError` found.
    pub fn validate(&self) -> Result<(), TemplateError> {
        self.groups
            .values()
            .flatten()
            .chain(self.generic.iter())
            .try_for_each(QuestionTemplate::validate)
    }

    /// Groups that have no templates of their own and will be served the generic pool.
    pub fn groups_without_pool(&self) -> impl Iterator<Item = ProficiencyGroup> + '_ {
        ProficiencyGroup::ALL
            .into_iter()
            .filter(|group| self.group_pool(*group).is_empty())
    }

    /// Total number of templates, including the generic pool.
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum::<usize>() + self.generic.len()
    }
}

impl QuestionPoolProvider for PoolCatalog {
    fn group_pool(&self, group: ProficiencyGroup) -> &[QuestionTemplate] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or_default()
    }

    fn generic_pool(&self) -> &[QuestionTemplate] {
        &self.generic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LevelId;

    #[test]
    fn builtin_has_five_per_group_and_generic() {
        let catalog = PoolCatalog::builtin();
        for group in ProficiencyGroup::ALL {
            assert_eq!(catalog.group_pool(group).len(), 5, "{group}");
        }
        assert_eq!(catalog.generic_pool().len(), 5);
        assert_eq!(catalog.template_count(), 50);
        assert_eq!(catalog.groups_without_pool().count(), 0);
    }

    #[test]
    fn builtin_templates_are_valid_and_tagged_with_their_group() {
        let catalog = PoolCatalog::builtin();
        catalog.validate().unwrap();
        for group in ProficiencyGroup::ALL {
            for template in catalog.group_pool(group) {
                assert_eq!(template.level().level().group(), group);
            }
        }
    }

    #[test]
    fn empty_group_falls_back_to_generic() {
        let generic = vec![
            QuestionTemplate::new("G", vec!["x".into(), "y".into()], 0, LevelId::CefrA1).unwrap(),
        ];
        let catalog = PoolCatalog::new(BTreeMap::new(), generic.clone());
        assert_eq!(catalog.pool(ProficiencyGroup::Cambridge), generic.as_slice());
        assert_eq!(catalog.groups_without_pool().count(), ProficiencyGroup::ALL.len());
    }
}

//! Loading question pool catalogs from JSON content files.

use std::path::Path;
use std::sync::Arc;

use placement_core::PoolCatalog;

use crate::error::ContentError;
use crate::settings::PlacementSettings;

/// Parse and validate a pool catalog from a JSON document.
///
/// # Errors
///
/// Returns `ContentError` if the JSON is malformed, a template is invalid, or
/// the catalog holds no questions at all.
pub fn catalog_from_json(json: &str) -> Result<PoolCatalog, ContentError> {
    let catalog: PoolCatalog = serde_json::from_str(json)?;
    catalog.validate()?;
    if catalog.template_count() == 0 {
        return Err(ContentError::Empty);
    }
    for group in catalog.groups_without_pool() {
        tracing::warn!(%group, "no questions for group, generic pool will be used");
    }
    Ok(catalog)
}

/// Read a pool catalog from a JSON file.
///
/// # Errors
///
/// Returns `ContentError::Io` if the file cannot be read, or any error from
/// [`catalog_from_json`].
pub fn catalog_from_file(path: &Path) -> Result<PoolCatalog, ContentError> {
    let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = catalog_from_json(&json)?;
    tracing::info!(
        path = %path.display(),
        templates = catalog.template_count(),
        "loaded question catalog"
    );
    Ok(catalog)
}

/// The catalog named by `settings`, or the built-in one.
///
/// # Errors
///
/// Propagates errors from [`catalog_from_file`].
pub fn load_catalog(settings: &PlacementSettings) -> Result<Arc<PoolCatalog>, ContentError> {
    match settings.catalog_path() {
        Some(path) => catalog_from_file(path).map(Arc::new),
        None => Ok(Arc::new(PoolCatalog::builtin().clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placement_core::QuestionPoolProvider;
    use placement_core::model::ProficiencyGroup;

    const SMALL: &str = r#"{
        "groups": {
            "cefr": [
                {"stem": "Hello ___ you", "options": ["are", "to", "at", "in"], "correct_index": 1, "level": "cefr_a1"}
            ]
        },
        "generic": [
            {"stem": "Pick yes", "options": ["no", "yes"], "correct_index": 1, "level": "cefr_a2"}
        ]
    }"#;

    #[test]
    fn parses_groups_and_generic() {
        let catalog = catalog_from_json(SMALL).unwrap();
        assert_eq!(catalog.group_pool(ProficiencyGroup::Cefr).len(), 1);
        assert_eq!(catalog.pool(ProficiencyGroup::Business)[0].stem(), "Pick yes");
        assert_eq!(catalog.template_count(), 2);
    }

    #[test]
    fn builtin_catalog_round_trips_through_json() {
        let json = serde_json::to_string(PoolCatalog::builtin()).unwrap();
        let parsed = catalog_from_json(&json).unwrap();
        assert_eq!(&parsed, PoolCatalog::builtin());
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let json = r#"{"generic": [{"stem": "Q", "options": ["a", "b"], "correct_index": 5, "level": "ket"}]}"#;
        assert!(matches!(catalog_from_json(json), Err(ContentError::Template(_))));
    }

    #[test]
    fn rejects_empty_and_malformed_documents() {
        assert!(matches!(catalog_from_json("{}"), Err(ContentError::Empty)));
        assert!(matches!(catalog_from_json("[1, 2"), Err(ContentError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = catalog_from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn default_settings_use_builtin_catalog() {
        let catalog = load_catalog(&PlacementSettings::default()).unwrap();
        assert_eq!(*catalog, *PoolCatalog::builtin());
    }
}

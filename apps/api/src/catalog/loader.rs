use std::path::Path;

use serde_json::Value;

use crate::errors::CatalogError;
use crate::models::role::Role;

const REQUIRED_KEYS: &[&str] = &["category", "description", "id", "title", "top_skills"];

/// Reads and validates the role catalog at `path`.
///
/// The file must hold a JSON list of objects, each carrying every required
/// key with `top_skills` as a list of strings.
pub fn load_roles(path: &Path) -> Result<Vec<Role>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_roles(&raw)
}

/// Validates a catalog document already in memory.
pub fn parse_roles(raw: &str) -> Result<Vec<Role>, CatalogError> {
    let doc: Value =
        serde_json::from_str(raw).map_err(|e| CatalogError::Malformed(e.to_string()))?;

    let Value::Array(records) = doc else {
        return Err(CatalogError::Malformed(
            "catalog root must be a list of roles".to_string(),
        ));
    };

    records.into_iter().map(validate_record).collect()
}

fn validate_record(record: Value) -> Result<Role, CatalogError> {
    let id = record
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    let Some(fields) = record.as_object() else {
        return Err(CatalogError::InvalidRecord {
            id,
            reason: "record must be an object".to_string(),
        });
    };

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|k| !fields.contains_key(**k))
        .map(|k| k.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CatalogError::MissingFields { id, missing });
    }

    if !fields["top_skills"].is_array() {
        return Err(CatalogError::SkillsNotList { id });
    }

    serde_json::from_value(record).map_err(|e| CatalogError::InvalidRecord {
        id,
        reason: e.to_string(),
    })
}

/// Returns the first role whose id equals `id`.
pub fn find_role<'a>(id: &str, roles: &'a [Role]) -> Option<&'a Role> {
    roles.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn role(id: &str) -> Role {
        Role {
            id: id.to_string(),
            title: id.to_string(),
            category: "Data".to_string(),
            description: String::new(),
            top_skills: vec![],
        }
    }

    #[test]
    fn test_load_valid_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"data-analyst","title":"Data Analyst","category":"Data",
                "description":"Turns data into decisions","top_skills":["SQL","Excel","Python"]}}]"#
        )
        .unwrap();

        let roles = load_roles(file.path()).unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].id, "data-analyst");
        assert_eq!(roles[0].top_skills, vec!["SQL", "Excel", "Python"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_roles(&dir.path().join("roles.json")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn test_reload_sees_external_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roles.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(load_roles(&path).unwrap().is_empty());

        std::fs::write(
            &path,
            r#"[{"id":"a","title":"A","category":"IT","description":"","top_skills":[]}]"#,
        )
        .unwrap();
        assert_eq!(load_roles(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_keys_are_reported_with_role_id() {
        let err = parse_roles(r#"[{"id":"nurse","title":"Nurse","top_skills":[]}]"#).unwrap_err();
        match err {
            CatalogError::MissingFields { id, missing } => {
                assert_eq!(id, "nurse");
                assert_eq!(missing, vec!["category", "description"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_record_without_id_is_unknown() {
        let err = parse_roles(r#"[{"title":"Nurse"}]"#).unwrap_err();
        match err {
            CatalogError::MissingFields { id, .. } => assert_eq!(id, "UNKNOWN"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_scalar_top_skills_rejected() {
        let err = parse_roles(
            r#"[{"id":"x","title":"X","category":"IT","description":"","top_skills":"SQL"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::SkillsNotList { id } if id == "x"));
    }

    #[test]
    fn test_non_string_skill_rejected() {
        let err = parse_roles(
            r#"[{"id":"x","title":"X","category":"IT","description":"","top_skills":["SQL",3]}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { id, .. } if id == "x"));
    }

    #[test]
    fn test_root_must_be_list() {
        let err = parse_roles(r#"{"id":"x"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_find_role_returns_first_match() {
        let mut second = role("dup");
        second.title = "Second".to_string();
        let roles = vec![role("a"), role("dup"), second];

        assert_eq!(find_role("dup", &roles).unwrap().title, "dup");
        assert!(find_role("missing", &roles).is_none());
    }
}

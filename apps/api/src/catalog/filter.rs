use std::collections::BTreeSet;

use crate::models::role::Role;

/// Returns roles matching both the free-text query and the category,
/// in catalog order. Blank inputs match everything.
pub fn filter_roles(roles: &[Role], query: &str, category: &str) -> Vec<Role> {
    let query = query.trim().to_lowercase();
    let category = category.trim().to_lowercase();

    roles
        .iter()
        .filter(|r| matches_query(r, &query) && matches_category(r, &category))
        .cloned()
        .collect()
}

fn matches_query(role: &Role, query: &str) -> bool {
    query.is_empty()
        || role.title.to_lowercase().contains(query)
        || role.description.to_lowercase().contains(query)
        || role
            .top_skills
            .iter()
            .any(|s| s.to_lowercase().contains(query))
}

fn matches_category(role: &Role, category: &str) -> bool {
    category.is_empty() || role.category.to_lowercase() == category
}

/// Sorted set of categories present in the catalog, display case preserved.
pub fn distinct_categories(roles: &[Role]) -> Vec<String> {
    roles
        .iter()
        .map(|r| r.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: &str, title: &str, category: &str, description: &str, skills: &[&str]) -> Role {
        Role {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            top_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn catalog() -> Vec<Role> {
        vec![
            role(
                "data-analyst",
                "Data Analyst",
                "Data",
                "Turns raw data into reports",
                &["SQL", "Excel", "Python"],
            ),
            role(
                "soc-analyst",
                "SOC Analyst",
                "Security",
                "Monitors alerts and triages incidents",
                &["Networking", "Incident Response", "SIEM"],
            ),
            role(
                "backend-dev",
                "Backend Developer",
                "Software",
                "Builds APIs and services",
                &["Python", "Databases", "Cloud"],
            ),
            role(
                "clinical-coord",
                "Clinical Research Coordinator",
                "Healthcare",
                "Runs trial logistics",
                &["Communication", "Project Management"],
            ),
        ]
    }

    fn ids(roles: &[Role]) -> Vec<&str> {
        roles.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_return_everything_in_order() {
        let roles = catalog();
        assert_eq!(ids(&filter_roles(&roles, "", "")), ids(&roles));
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let roles = catalog();
        let result = filter_roles(&roles, "ANALYST", "");
        assert_eq!(ids(&result), vec!["data-analyst", "soc-analyst"]);
    }

    #[test]
    fn test_query_matches_description_and_skills() {
        let roles = catalog();
        assert_eq!(ids(&filter_roles(&roles, "triages", "")), vec!["soc-analyst"]);
        assert_eq!(
            ids(&filter_roles(&roles, "python", "")),
            vec!["data-analyst", "backend-dev"]
        );
    }

    #[test]
    fn test_category_is_exact_and_case_insensitive() {
        let roles = catalog();
        assert_eq!(ids(&filter_roles(&roles, "", " security ")), vec!["soc-analyst"]);
        assert!(filter_roles(&roles, "", "sec").is_empty());
    }

    #[test]
    fn test_query_and_category_intersect() {
        let roles = catalog();
        let result = filter_roles(&roles, "python", "software");
        assert_eq!(ids(&result), vec!["backend-dev"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let roles = catalog();
        let first = filter_roles(&roles, "an", "data");
        let second = filter_roles(&roles, "an", "data");
        assert_eq!(first, second);
    }

    #[test]
    fn test_included_and_excluded_roles_partition_on_query() {
        let roles = catalog();
        for q in ["a", "sql", "Response", "zzz", "ta"] {
            let included = filter_roles(&roles, q, "");
            let needle = q.to_lowercase();
            for r in &roles {
                let hit = r.title.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
                    || r.top_skills.iter().any(|s| s.to_lowercase().contains(&needle));
                assert_eq!(included.contains(r), hit, "query {q:?} role {}", r.id);
            }
        }
    }

    #[test]
    fn test_distinct_categories_sorted() {
        let mut roles = catalog();
        roles.push(role("x", "X", "Data", "", &[]));
        assert_eq!(
            distinct_categories(&roles),
            vec!["Data", "Healthcare", "Security", "Software"]
        );
    }
}

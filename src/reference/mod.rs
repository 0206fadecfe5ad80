// Reference data module - bundled country code table
// Read-only after process start; lookups go through a lazily-built map.

pub mod countries;

use std::collections::HashMap;
use std::sync::OnceLock;

use countries::{Country, COUNTRIES};

static COUNTRY_MAP: OnceLock<HashMap<&'static str, &'static Country>> = OnceLock::new();

fn country_map() -> &'static HashMap<&'static str, &'static Country> {
    COUNTRY_MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(COUNTRIES.len());
        for country in COUNTRIES {
            map.insert(country.code, country);
        }
        map
    })
}

/// Look up a country by ISO code, case-insensitively.
pub fn country_by_code(code: &str) -> Option<&'static Country> {
    country_map().get(code.to_uppercase().as_str()).copied()
}

/// Display name for a code, used when building booking links from a bare
/// favourite entry.
pub fn country_name(code: &str) -> Option<&'static str> {
    country_by_code(code).map(|c| c.name)
}

/// Substring search over country names, case-insensitive, in table order.
pub fn search_countries(term: &str) -> Vec<&'static Country> {
    let needle = term.to_lowercase();
    COUNTRIES
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(country_name("us"), Some("United States"));
        assert_eq!(country_name("US"), Some("United States"));
        assert_eq!(country_name("zz"), None);
    }

    #[test]
    fn search_matches_substrings() {
        let hits = search_countries("guinea");
        let names: Vec<&str> = hits.iter().map(|c| c.name).collect();
        assert!(names.contains(&"Guinea"));
        assert!(names.contains(&"Equatorial Guinea"));
        assert!(names.contains(&"Papua New Guinea"));
    }

    #[test]
    fn codes_are_unique_and_uppercase() {
        let mut seen = std::collections::HashSet::new();
        for country in COUNTRIES {
            assert_eq!(country.code, country.code.to_uppercase());
            assert_eq!(country.code.len(), 2);
            assert!(seen.insert(country.code), "duplicate code {}", country.code);
        }
    }
}

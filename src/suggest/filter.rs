use super::Suggestion;
use std::collections::HashSet;

/// Keeps the first suggestion seen for each id, preserving order.
pub fn dedup_by_id(suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut seen = HashSet::new();
    suggestions
        .into_iter()
        .filter(|suggestion| seen.insert(suggestion.id.clone()))
        .collect()
}

/// Case-insensitive substring match on name or category. An empty query
/// keeps everything.
pub fn filter_suggestions(suggestions: Vec<Suggestion>, query: &str) -> Vec<Suggestion> {
    if query.is_empty() {
        return suggestions;
    }
    let needle = query.to_lowercase();
    suggestions
        .into_iter()
        .filter(|suggestion| {
            suggestion.name.to_lowercase().contains(&needle)
                || suggestion.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Text used for a filtered lookup: the input with operand characters
/// stripped, trimmed.
pub fn lookup_query(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '+' | '*' | '-' | '/' | '^' | '(' | ')'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Exact name match ignoring case, used when a typed tag is committed.
pub fn find_by_name_ignore_case<'a>(
    suggestions: &'a [Suggestion],
    name: &str,
) -> Option<&'a Suggestion> {
    let name = name.to_lowercase();
    suggestions
        .iter()
        .find(|suggestion| suggestion.name.to_lowercase() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::SuggestionValue;

    fn s(id: &str, name: &str, category: &str) -> Suggestion {
        Suggestion::new(id, name, category, SuggestionValue::Number(1.0))
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let deduped = dedup_by_id(vec![
            s("1", "alpha", "a"),
            s("2", "beta", "b"),
            s("1", "alpha-prime", "a"),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].name, "alpha");
        assert_eq!(deduped[1].name, "beta");
    }

    #[test]
    fn test_filter_matches_name_or_category() {
        let all = vec![s("1", "Rent", "housing"), s("2", "Coffee", "Food"), s("3", "Tax", "gov")];
        let by_name = filter_suggestions(all.clone(), "ren");
        assert_eq!(by_name.len(), 1);
        let by_category = filter_suggestions(all.clone(), "FOOD");
        assert_eq!(by_category[0].name, "Coffee");
        assert_eq!(filter_suggestions(all, "").len(), 3);
    }

    #[test]
    fn test_lookup_query_strips_operands() {
        assert_eq!(lookup_query("  (rent) "), "rent");
        assert_eq!(lookup_query("+-*/^"), "");
        assert_eq!(lookup_query("net-income"), "netincome");
    }

    #[test]
    fn test_find_by_name_ignore_case() {
        let all = vec![s("1", "Rent", "housing")];
        assert!(find_by_name_ignore_case(&all, "rENT").is_some());
        assert!(find_by_name_ignore_case(&all, "ren").is_none());
    }
}

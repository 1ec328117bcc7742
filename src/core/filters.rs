use serde_json::Value;
use std::collections::HashMap;

use crate::core::similarity::similarity;
use crate::models::SearchOptions;

/// Check if a free-text search term matches a target text
///
/// The term is split on whitespace and every word must either appear as
/// a substring of the text or, when fuzzy search is enabled, clear the
/// similarity threshold against some word of the text. Case is folded
/// unless `case_sensitive` is set.
pub fn fuzzy_text_match(term: &str, text: &str, options: &SearchOptions) -> bool {
    let (term, text) = if options.case_sensitive {
        (term.to_string(), text.to_string())
    } else {
        (term.to_lowercase(), text.to_lowercase())
    };

    let term = term.trim();
    if term.is_empty() {
        return true;
    }

    let text_words: Vec<&str> = text.split_whitespace().collect();

    term.split_whitespace().all(|word| {
        if text.contains(word) {
            return true;
        }

        options.enable_fuzzy_search
            && text_words
                .iter()
                .any(|text_word| similarity(word, text_word) >= options.fuzzy_threshold)
    })
}

/// Filter a collection of JSON records by field-wise fuzzy criteria
///
/// Every criterion must be satisfied for a record to survive. String
/// fields go through [`fuzzy_text_match`]; numbers and booleans match
/// on their text form; for array fields any element may satisfy the
/// criterion. Records that are not objects or lack a filtered field are
/// dropped. An empty criteria map returns the collection unchanged.
pub fn fuzzy_filter(
    records: Vec<Value>,
    criteria: &HashMap<String, Value>,
    options: &SearchOptions,
) -> Vec<Value> {
    if criteria.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            let fields = match record.as_object() {
                Some(fields) => fields,
                None => return false,
            };

            criteria.iter().all(|(field, wanted)| {
                let term = match criterion_term(wanted) {
                    Some(term) => term,
                    None => return false,
                };

                match fields.get(field) {
                    Some(value) => value_matches(value, &term, options),
                    None => false,
                }
            })
        })
        .collect()
}

/// Search text carried by one criterion value
fn criterion_term(wanted: &Value) -> Option<String> {
    match wanted {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_matches(value: &Value, term: &str, options: &SearchOptions) -> bool {
    match value {
        Value::String(s) => fuzzy_text_match(term, s, options),
        Value::Number(n) => fuzzy_text_match(term, &n.to_string(), options),
        Value::Bool(b) => fuzzy_text_match(term, &b.to_string(), options),
        Value::Array(items) => items.iter().any(|item| value_matches(item, term, options)),
        _ => false,
    }
}

//! "Did you mean" hints for author and tag names missing from the snapshot.

use fritter_expr_rs::Expression;
use fritter_store_rs::MemoryStore;
use strsim::levenshtein;

/// Maximum edit distance for suggesting a similar name.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A filter leaf that names something the snapshot doesn't contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    /// "user" or "tag".
    pub kind: &'static str,
    pub name: String,
    pub suggestion: Option<String>,
}

impl UnknownName {
    /// Renders the hint as a single warning line.
    pub fn message(&self) -> String {
        match &self.suggestion {
            Some(suggestion) => format!(
                "no {} named '{}' (did you mean '{}'?)",
                self.kind, self.name, suggestion
            ),
            None => format!("no {} named '{}'", self.kind, self.name),
        }
    }
}

/// Finds a similar name using Levenshtein distance.
///
/// Returns the best match if it is within `MAX_SUGGESTION_DISTANCE` edits
/// and not identical to the query.
pub fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty() && *name != query)
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name.to_string(), distance)
        })
        .min_by_key(|(_, d)| *d)?;

    if best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

/// Collects every author and tag leaf that has no match in the store.
///
/// Leaves are reported in the order they appear, each name at most once.
pub fn unknown_names(expression: &Expression, store: &MemoryStore) -> Vec<UnknownName> {
    let mut leaves = Vec::new();
    collect_leaves(expression, &mut leaves);

    let usernames = store.usernames();
    let labels = store.labels();

    let mut unknown: Vec<UnknownName> = Vec::new();
    for (kind, name) in leaves {
        let candidates = match kind {
            "user" => &usernames,
            _ => &labels,
        };
        if candidates.contains(&name)
            || unknown.iter().any(|u| u.kind == kind && u.name == name)
        {
            continue;
        }
        unknown.push(UnknownName {
            kind,
            name: name.to_string(),
            suggestion: find_similar_name(name, candidates.iter().copied()),
        });
    }
    unknown
}

fn collect_leaves<'e>(expression: &'e Expression, out: &mut Vec<(&'static str, &'e str)>) {
    match expression {
        Expression::Author(username) => out.push(("user", username.as_str())),
        Expression::Tag(label) => out.push(("tag", label.as_str())),
        Expression::Not(sub) => collect_leaves(sub, out),
        Expression::And(left, right) | Expression::Or(left, right) => {
            collect_leaves(left, out);
            collect_leaves(right, out);
        }
    }
}

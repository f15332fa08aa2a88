//! Keyword-based category suggestion for expense descriptions.

/// The fixed category set offered at entry time. "Other" is the fallback
/// for descriptions no keyword matches.
pub const CATEGORIES: &[&str] = &[
    "Food & Groceries",
    "Dining Out",
    "Transportation",
    "Entertainment",
    "Housing",
    "Utilities",
    "Shopping",
    "Healthcare",
    "Other",
];

pub const FALLBACK_CATEGORY: &str = "Other";

// First match wins: when a description mentions several keywords, the
// earliest entry in this table decides the category, so the order is part
// of the contract.
const KEYWORD_RULES: &[(&str, &str)] = &[
    ("grocery", "Food & Groceries"),
    ("restaurant", "Dining Out"),
    ("uber", "Transportation"),
    ("fuel", "Transportation"),
    ("netflix", "Entertainment"),
    ("movie", "Entertainment"),
    ("rent", "Housing"),
    ("utility", "Utilities"),
];

/// Suggest a category for a free-text description. Matching is
/// case-insensitive substring search over the keyword table; defined for
/// every input, including the empty string.
pub fn classify(description: &str) -> &'static str {
    let desc = description.to_lowercase();
    for (keyword, category) in KEYWORD_RULES {
        if desc.contains(keyword) {
            return category;
        }
    }
    FALLBACK_CATEGORY
}

use crate::types::Alternative;

/// Changes the case of `alternatives` to follow the case of `template`, where possible.
///
/// - An all-caps template uppercases every alternative.
/// - A capitalized template (first char unchanged by uppercasing, second char unchanged by
///   lowercasing or missing) capitalizes every alternative.
/// - Anything else leaves the alternatives as they are.
pub fn adjust_case(alternatives: &[Alternative], template: &str) -> Vec<Alternative> {
    if template == template.to_uppercase() {
        return alternatives.iter().map(|alt| alt.to_uppercase()).collect();
    }

    let mut chars = template.chars();
    let first = chars.next().map(String::from).unwrap_or_default();
    let second = chars.next().map(String::from).unwrap_or_default();

    if first.to_uppercase() == first && second.to_lowercase() == second {
        return alternatives
            .iter()
            .map(|alt| capitalize_first(alt))
            .collect();
    }

    alternatives.to_vec()
}

/// Uppercases the first character of `text`, leaving the remainder unchanged.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

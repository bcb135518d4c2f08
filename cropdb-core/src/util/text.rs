fn is_name_separator(c: char) -> bool {
    c == ','
}

/// Splits a comma-separated list of names.
///
/// Surrounding whitespace is removed from each name and
/// empty entries are skipped.
pub fn split_name_list(text: &str) -> Vec<&str> {
    text.split(is_name_separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// `None` if the text is empty or only contains whitespace.
pub fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|s| !s.is_empty())
}

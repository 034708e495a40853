/// Splits a full name into first and last name. Runs of spaces count as one separator
/// and empty parts are treated as absent.
pub fn parse_full_name(full_name: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(full_name) = full_name else {
        return (None, None);
    };

    let mut parts = full_name.split(' ').filter(|part| !part.is_empty());
    let first_name = parts.next().map(String::from);
    let last_name = parts.next().map(String::from);

    (first_name, last_name)
}

fn first_letter(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .and_then(|name| name.chars().next())
        .map(|letter| letter.to_uppercase().collect())
}

/// Uppercased first letters of both names, or `None` when both are blank.
pub fn initials(first_name: Option<&str>, last_name: Option<&str>) -> Option<String> {
    match (first_letter(first_name), first_letter(last_name)) {
        (None, None) => None,
        (Some(first), None) => Some(first),
        (None, Some(last)) => Some(last),
        (Some(first), Some(last)) => Some(first + &last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(first: Option<&str>, last: Option<&str>) -> (Option<String>, Option<String>) {
        (first.map(String::from), last.map(String::from))
    }

    #[test]
    fn test_parse_full_name() {
        assert_eq!(parse_full_name(None), parsed(None, None));
        assert_eq!(parse_full_name(Some("")), parsed(None, None));
        assert_eq!(parse_full_name(Some(" ")), parsed(None, None));
        assert_eq!(parse_full_name(Some("Ivan")), parsed(Some("Ivan"), None));
        assert_eq!(
            parse_full_name(Some("Ivan Petrov")),
            parsed(Some("Ivan"), Some("Petrov"))
        );
        assert_eq!(
            parse_full_name(Some("  Ivan   Petrov ")),
            parsed(Some("Ivan"), Some("Petrov"))
        );
        assert_eq!(
            parse_full_name(Some("Ivan Petrov Sidorovich")),
            parsed(Some("Ivan"), Some("Petrov"))
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials(None, None), None);
        assert_eq!(initials(Some(" "), Some("")), None);
        assert_eq!(initials(Some("ivan"), None), Some("I".into()));
        assert_eq!(initials(None, Some("petrov")), Some("P".into()));
        assert_eq!(initials(Some("ivan"), Some("petrov")), Some("IP".into()));
        assert_eq!(initials(Some("John"), Some("Doe")), Some("JD".into()));
        assert_eq!(initials(Some("иван"), Some("петров")), Some("ИП".into()));
    }
}

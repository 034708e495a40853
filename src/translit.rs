pub const DEFAULT_DIVIDER: &'static str = " ";

fn latin(letter: char) -> Option<&'static str> {
    let latin = match letter {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' | 'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "ch",
        'ш' | 'щ' => "sh",
        'ъ' | 'ь' => "",
        'ы' => "i",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders Cyrillic letters in Latin script. Case is kept per letter, spaces become
/// `divider` and anything else passes through unchanged.
pub fn transliterate(text: &str, divider: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ' ' {
            out.push_str(divider);
            continue;
        }

        let lower = if c.is_uppercase() {
            c.to_lowercase().next()
        } else {
            None
        };
        match (lower.and_then(latin), latin(c)) {
            (Some(mapped), _) => out.push_str(&capitalize(mapped)),
            (None, Some(mapped)) => out.push_str(mapped),
            (None, None) => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliterate() {
        assert_eq!(transliterate("Привет мир", DEFAULT_DIVIDER), "Privet mir");
        assert_eq!(transliterate("Женя Стереотипов", DEFAULT_DIVIDER), "Zhenya Stereotipov");
        assert_eq!(transliterate("Amazing Петр", "_"), "Amazing_Petr");
    }

    #[test]
    fn test_transliterate_case_and_silent_letters() {
        assert_eq!(transliterate("ЩУКА", DEFAULT_DIVIDER), "ShUKA");
        assert_eq!(transliterate("подъезд", DEFAULT_DIVIDER), "podezd");
        assert_eq!(transliterate("Ёлка", DEFAULT_DIVIDER), "Elka");
        assert_eq!(transliterate("Ъ", DEFAULT_DIVIDER), "");
    }

    #[test]
    fn test_transliterate_passes_through_unmapped() {
        assert_eq!(transliterate("Rust 2024!", "-"), "Rust-2024!");
        assert_eq!(transliterate("", DEFAULT_DIVIDER), "");
    }
}

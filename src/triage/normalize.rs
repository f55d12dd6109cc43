/// Known synonyms, applied after normalization. Keys and values both live
/// in the normalized space, and aliases resolve in a single hop: no value
/// is itself a key (asserted in tests).
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("burma", "myanmar"),
    ("cape verde", "cabo verde"),
    ("congo brazzaville", "republic of congo"),
    ("congo-brazzaville", "republic of congo"),
    ("congo kinshasa", "democratic republic of congo"),
    ("congo-kinshasa", "democratic republic of congo"),
    ("czechia", "czech republic"),
    ("dr congo", "democratic republic of congo"),
    ("drc", "democratic republic of congo"),
    ("east timor", "timor-leste"),
    ("great britain", "united kingdom"),
    ("holland", "netherlands"),
    ("ivory coast", "cote d ivoire"),
    ("macedonia", "north macedonia"),
    ("swaziland", "eswatini"),
    ("turkiye", "turkey"),
    ("uae", "united arab emirates"),
    ("uk", "united kingdom"),
    ("united states of america", "united states"),
    ("usa", "united states"),
];

/// Canonicalize a free-text country name for reference-table lookups.
///
/// Lowercases, folds Latin diacritics, turns apostrophe variants into a
/// separator, strips remaining punctuation except hyphens, drops the
/// standalone word "the", collapses whitespace, then applies the alias
/// table at most once. Total: unknown input passes through, empty input
/// yields an empty string.
pub fn normalize_country(raw: &str) -> String {
    let collapsed = normalize_base(raw);
    match canonical_alias(&collapsed) {
        Some(alias) => alias.to_string(),
        None => collapsed,
    }
}

/// The normalization fold without the alias step.
fn normalize_base(raw: &str) -> String {
    let mut folded = String::with_capacity(raw.len());
    for c in raw.to_lowercase().chars() {
        let c = fold_diacritic(c);
        if matches!(c, '\'' | '\u{2019}' | '\u{02BC}' | '`' | '\u{00B4}') {
            folded.push(' ');
        } else if c.is_whitespace() {
            folded.push(' ');
        } else if c.is_alphanumeric() || c == '-' {
            folded.push(c);
        }
    }

    folded
        .split_whitespace()
        .filter(|word| *word != "the")
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-hop alias lookup in the normalized key space.
pub fn canonical_alias(normalized: &str) -> Option<&'static str> {
    COUNTRY_ALIASES
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, value)| *value)
}

/// Fold common Latin diacritics onto their base character.
fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ĭ' | 'ı' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ç' | 'ć' | 'č' => 'c',
        'ñ' | 'ń' | 'ň' => 'n',
        'ý' | 'ÿ' => 'y',
        'š' | 'ş' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        'ğ' => 'g',
        'ţ' | 'ť' => 't',
        'đ' => 'd',
        'ł' => 'l',
        'ř' => 'r',
        other => other,
    }
}

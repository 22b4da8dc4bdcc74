//! Built-in transliteration tables.
//!
//! `default` covers Latin-1 Supplement, Latin Extended-A, common ligatures,
//! currency and typographic symbols, basic Greek and Cyrillic. The language
//! tables are small overlays meant to be activated on top of it.

pub(crate) const NAMES: &[&str] = &["default", "german", "danish"];

pub(crate) fn table(name: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match name {
        "default" => Some(DEFAULT),
        "german" => Some(GERMAN),
        "danish" => Some(DANISH),
        _ => None,
    }
}

#[rustfmt::skip]
pub(crate) const DEFAULT: &[(&str, &str)] = &[
    // Latin-1 Supplement
    ("À", "A"), ("Á", "A"), ("Â", "A"), ("Ã", "A"), ("Ä", "A"), ("Å", "A"), ("Æ", "AE"),
    ("Ç", "C"), ("È", "E"), ("É", "E"), ("Ê", "E"), ("Ë", "E"),
    ("Ì", "I"), ("Í", "I"), ("Î", "I"), ("Ï", "I"), ("Ð", "D"), ("Ñ", "N"),
    ("Ò", "O"), ("Ó", "O"), ("Ô", "O"), ("Õ", "O"), ("Ö", "O"), ("Ø", "O"),
    ("Ù", "U"), ("Ú", "U"), ("Û", "U"), ("Ü", "U"), ("Ý", "Y"), ("Þ", "TH"), ("ß", "ss"),
    ("à", "a"), ("á", "a"), ("â", "a"), ("ã", "a"), ("ä", "a"), ("å", "a"), ("æ", "ae"),
    ("ç", "c"), ("è", "e"), ("é", "e"), ("ê", "e"), ("ë", "e"),
    ("ì", "i"), ("í", "i"), ("î", "i"), ("ï", "i"), ("ð", "d"), ("ñ", "n"),
    ("ò", "o"), ("ó", "o"), ("ô", "o"), ("õ", "o"), ("ö", "o"), ("ø", "o"),
    ("ù", "u"), ("ú", "u"), ("û", "u"), ("ü", "u"), ("ý", "y"), ("þ", "th"), ("ÿ", "y"),
    ("\u{a0}", " "), ("©", "c"), ("®", "r"), ("×", "x"),
    ("¼", "1/4"), ("½", "1/2"), ("¾", "3/4"),

    // Latin Extended-A
    ("Ā", "A"), ("ā", "a"), ("Ă", "A"), ("ă", "a"), ("Ą", "A"), ("ą", "a"),
    ("Ć", "C"), ("ć", "c"), ("Ĉ", "C"), ("ĉ", "c"), ("Ċ", "C"), ("ċ", "c"), ("Č", "C"), ("č", "c"),
    ("Ď", "D"), ("ď", "d"), ("Đ", "D"), ("đ", "d"),
    ("Ē", "E"), ("ē", "e"), ("Ĕ", "E"), ("ĕ", "e"), ("Ė", "E"), ("ė", "e"),
    ("Ę", "E"), ("ę", "e"), ("Ě", "E"), ("ě", "e"),
    ("Ĝ", "G"), ("ĝ", "g"), ("Ğ", "G"), ("ğ", "g"), ("Ġ", "G"), ("ġ", "g"), ("Ģ", "G"), ("ģ", "g"),
    ("Ĥ", "H"), ("ĥ", "h"), ("Ħ", "H"), ("ħ", "h"),
    ("Ĩ", "I"), ("ĩ", "i"), ("Ī", "I"), ("ī", "i"), ("Ĭ", "I"), ("ĭ", "i"),
    ("Į", "I"), ("į", "i"), ("İ", "I"), ("ı", "i"), ("Ĳ", "IJ"), ("ĳ", "ij"),
    ("Ĵ", "J"), ("ĵ", "j"), ("Ķ", "K"), ("ķ", "k"), ("ĸ", "k"),
    ("Ĺ", "L"), ("ĺ", "l"), ("Ļ", "L"), ("ļ", "l"), ("Ľ", "L"), ("ľ", "l"),
    ("Ŀ", "L"), ("ŀ", "l"), ("Ł", "L"), ("ł", "l"),
    ("Ń", "N"), ("ń", "n"), ("Ņ", "N"), ("ņ", "n"), ("Ň", "N"), ("ň", "n"),
    ("ŉ", "n"), ("Ŋ", "N"), ("ŋ", "n"),
    ("Ō", "O"), ("ō", "o"), ("Ŏ", "O"), ("ŏ", "o"), ("Ő", "O"), ("ő", "o"), ("Œ", "OE"), ("œ", "oe"),
    ("Ŕ", "R"), ("ŕ", "r"), ("Ŗ", "R"), ("ŗ", "r"), ("Ř", "R"), ("ř", "r"),
    ("Ś", "S"), ("ś", "s"), ("Ŝ", "S"), ("ŝ", "s"), ("Ş", "S"), ("ş", "s"), ("Š", "S"), ("š", "s"),
    ("Ţ", "T"), ("ţ", "t"), ("Ť", "T"), ("ť", "t"), ("Ŧ", "T"), ("ŧ", "t"),
    ("Ũ", "U"), ("ũ", "u"), ("Ū", "U"), ("ū", "u"), ("Ŭ", "U"), ("ŭ", "u"),
    ("Ů", "U"), ("ů", "u"), ("Ű", "U"), ("ű", "u"), ("Ų", "U"), ("ų", "u"),
    ("Ŵ", "W"), ("ŵ", "w"), ("Ŷ", "Y"), ("ŷ", "y"), ("Ÿ", "Y"),
    ("Ź", "Z"), ("ź", "z"), ("Ż", "Z"), ("ż", "z"), ("Ž", "Z"), ("ž", "z"), ("ſ", "s"),

    // Ligatures
    ("ẞ", "SS"), ("ﬀ", "ff"), ("ﬁ", "fi"), ("ﬂ", "fl"), ("ﬃ", "ffi"), ("ﬄ", "ffl"), ("ﬅ", "st"), ("ﬆ", "st"),

    // Currency
    ("€", "euro"), ("£", "pound"), ("¥", "yen"), ("¢", "cent"), ("₹", "rupee"),
    ("₽", "ruble"), ("₩", "won"), ("₺", "lira"), ("₿", "bitcoin"),

    // Typography
    ("‐", "-"), ("‑", "-"), ("‒", "-"), ("–", "-"), ("—", "-"), ("―", "-"),
    ("\u{2002}", " "), ("\u{2003}", " "), ("\u{2009}", " "), ("\u{200b}", ""),
    ("…", "..."), ("·", " "), ("•", " "), ("™", "tm"), ("℠", "sm"),

    // Greek
    ("Α", "A"), ("Β", "B"), ("Γ", "G"), ("Δ", "D"), ("Ε", "E"), ("Ζ", "Z"), ("Η", "I"), ("Θ", "Th"),
    ("Ι", "I"), ("Κ", "K"), ("Λ", "L"), ("Μ", "M"), ("Ν", "N"), ("Ξ", "X"), ("Ο", "O"), ("Π", "P"),
    ("Ρ", "R"), ("Σ", "S"), ("Τ", "T"), ("Υ", "Y"), ("Φ", "F"), ("Χ", "Ch"), ("Ψ", "Ps"), ("Ω", "O"),
    ("Ά", "A"), ("Έ", "E"), ("Ή", "I"), ("Ί", "I"), ("Ό", "O"), ("Ύ", "Y"), ("Ώ", "O"),
    ("α", "a"), ("β", "b"), ("γ", "g"), ("δ", "d"), ("ε", "e"), ("ζ", "z"), ("η", "i"), ("θ", "th"),
    ("ι", "i"), ("κ", "k"), ("λ", "l"), ("μ", "m"), ("ν", "n"), ("ξ", "x"), ("ο", "o"), ("π", "p"),
    ("ρ", "r"), ("σ", "s"), ("ς", "s"), ("τ", "t"), ("υ", "y"), ("φ", "f"), ("χ", "ch"), ("ψ", "ps"),
    ("ω", "o"), ("ά", "a"), ("έ", "e"), ("ή", "i"), ("ί", "i"), ("ό", "o"), ("ύ", "y"), ("ώ", "o"),
    ("ϊ", "i"), ("ϋ", "y"), ("ΐ", "i"), ("ΰ", "y"),

    // Cyrillic
    ("А", "A"), ("Б", "B"), ("В", "V"), ("Г", "G"), ("Д", "D"), ("Е", "E"), ("Ё", "Yo"), ("Ж", "Zh"),
    ("З", "Z"), ("И", "I"), ("Й", "Y"), ("К", "K"), ("Л", "L"), ("М", "M"), ("Н", "N"), ("О", "O"),
    ("П", "P"), ("Р", "R"), ("С", "S"), ("Т", "T"), ("У", "U"), ("Ф", "F"), ("Х", "Kh"), ("Ц", "Ts"),
    ("Ч", "Ch"), ("Ш", "Sh"), ("Щ", "Shch"), ("Ъ", ""), ("Ы", "Y"), ("Ь", ""), ("Э", "E"), ("Ю", "Yu"),
    ("Я", "Ya"),
    ("а", "a"), ("б", "b"), ("в", "v"), ("г", "g"), ("д", "d"), ("е", "e"), ("ё", "yo"), ("ж", "zh"),
    ("з", "z"), ("и", "i"), ("й", "y"), ("к", "k"), ("л", "l"), ("м", "m"), ("н", "n"), ("о", "o"),
    ("п", "p"), ("р", "r"), ("с", "s"), ("т", "t"), ("у", "u"), ("ф", "f"), ("х", "kh"), ("ц", "ts"),
    ("ч", "ch"), ("ш", "sh"), ("щ", "shch"), ("ъ", ""), ("ы", "y"), ("ь", ""), ("э", "e"), ("ю", "yu"),
    ("я", "ya"),
    ("Є", "Ye"), ("є", "ye"), ("І", "I"), ("і", "i"), ("Ї", "Yi"), ("ї", "yi"), ("Ґ", "G"), ("ґ", "g"),
];

#[rustfmt::skip]
const GERMAN: &[(&str, &str)] = &[
    ("Ä", "Ae"), ("Ö", "Oe"), ("Ü", "Ue"), ("ä", "ae"), ("ö", "oe"), ("ü", "ue"),
];

#[rustfmt::skip]
const DANISH: &[(&str, &str)] = &[
    ("Æ", "Ae"), ("Ø", "Oe"), ("Å", "Aa"), ("æ", "ae"), ("ø", "oe"), ("å", "aa"),
];

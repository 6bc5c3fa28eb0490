//! Static transliteration table.
//!
//! Maps individual non-ASCII letters (Cyrillic, Germanic/Nordic and extended
//! Latin) to ASCII replacements. The table is a `match`, so it is fixed at
//! compile time and shared by every caller without synchronization.

/// Returns the ASCII replacement for `c`, if the table has one.
///
/// An empty replacement is a real entry (Cyrillic hard and soft signs).
#[must_use]
pub fn lookup(c: char) -> Option<&'static str> {
    let replacement = match c {
        // Russian
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
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
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "G",
        'Д' => "D",
        'Е' => "E",
        'Ё' => "Yo",
        'Ж' => "Zh",
        'З' => "Z",
        'И' => "I",
        'Й' => "Y",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "H",
        'Ц' => "Ts",
        'Ч' => "Ch",
        'Ш' => "Sh",
        'Щ' => "Sch",
        'Ъ' => "",
        'Ы' => "Y",
        'Ь' => "",
        'Э' => "E",
        'Ю' => "Yu",
        'Я' => "Ya",

        // Ukrainian
        'є' => "ye",
        'ї' => "yi",
        'і' => "i",
        'ґ' => "g",
        'Є' => "Ye",
        'Ї' => "Yi",
        'І' => "I",
        'Ґ' => "G",

        // German and Nordic
        'ä' => "ae",
        'ö' => "oe",
        'ü' => "ue",
        'ß' => "ss",
        'å' => "a",
        'æ' => "ae",
        'ø' => "o",
        'Ä' => "Ae",
        'Ö' => "Oe",
        'Ü' => "Ue",
        'Å' => "A",
        'Æ' => "Ae",
        'Ø' => "O",

        // Extended Latin
        'á' | 'à' | 'â' | 'ą' => "a",
        'ć' | 'ç' | 'č' | 'ĉ' => "c",
        'ď' | 'đ' => "d",
        'é' | 'è' | 'ê' | 'ë' | 'ę' | 'ě' => "e",
        'í' | 'ì' | 'î' | 'ï' => "i",
        'ł' => "l",
        'ń' | 'ň' => "n",
        'ñ' => "ny",
        'ó' | 'ò' | 'ô' | 'ő' => "o",
        'ř' => "r",
        'ś' | 'š' | 'ş' => "s",
        'ť' => "t",
        'ú' | 'ù' | 'û' | 'ů' | 'ű' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        'Á' | 'À' | 'Â' | 'Ą' => "A",
        'Ć' | 'Ç' | 'Č' | 'Ĉ' => "C",
        'Ď' | 'Đ' => "D",
        'É' | 'È' | 'Ê' | 'Ë' | 'Ę' | 'Ě' => "E",
        'Í' | 'Ì' | 'Î' | 'Ï' => "I",
        'Ł' => "L",
        'Ń' | 'Ň' => "N",
        'Ñ' => "Ny",
        'Ó' | 'Ò' | 'Ô' | 'Ő' => "O",
        'Ř' => "R",
        'Ś' | 'Š' | 'Ş' => "S",
        'Ť' => "T",
        'Ú' | 'Ù' | 'Û' | 'Ů' | 'Ű' => "U",
        'Ý' | 'Ÿ' => "Y",
        'Ź' | 'Ż' | 'Ž' => "Z",

        _ => return None,
    };
    Some(replacement)
}

/// Replaces every character that has a table entry; all others pass through.
#[must_use]
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match lookup(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

//! Pinyin-initial transliteration.

use pinyin::ToPinyin;

/// Collapse a field value to its phonetic initials: the first letter of the
/// pinyin syllable for each Han character, the first character of each
/// whitespace-separated run for anything else, all lower-cased.
///
/// `"张三"` becomes `"zs"`, `"Alice Wang"` becomes `"aw"`, and mixed text
/// like `"张Bob三"` becomes `"zbs"`.
pub fn phonetic_initials(text: &str) -> String {
    let mut initials = String::new();
    let mut in_word = false;

    for ch in text.chars() {
        if let Some(syllable) = ch.to_pinyin() {
            if let Some(first) = syllable.plain().chars().next() {
                initials.push(first);
            }
            in_word = false;
        } else if ch.is_whitespace() {
            in_word = false;
        } else {
            if !in_word {
                initials.extend(ch.to_lowercase());
            }
            in_word = true;
        }
    }

    initials
}

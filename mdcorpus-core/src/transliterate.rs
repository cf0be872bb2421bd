//! Transliteration of free text to phonetic Latin syllables.

use deunicode::deunicode;

/// Map text in any script to space-separated Latin syllables.
///
/// CJK characters become pinyin-style syllables, Cyrillic and other
/// scripts their closest phonetic ASCII rendering. Whitespace is
/// normalized to single spaces so the result slugifies cleanly.
///
/// # Examples
///
/// ```
/// use mdcorpus_core::transliterate;
///
/// assert_eq!(transliterate("你好世界"), "Ni Hao Shi Jie");
/// assert_eq!(transliterate("файл"), "fail");
/// assert_eq!(transliterate("Hello World"), "Hello World");
/// ```
pub fn transliterate(text: &str) -> String {
    deunicode(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

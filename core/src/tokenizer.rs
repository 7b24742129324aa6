use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*").expect("valid regex");
}

/// Split text into raw word tokens using NFKC normalization and a Unicode
/// word scan. Case is preserved; lowercasing, stopword filtering and
/// stemming happen in the [`Normalizer`](crate::Normalizer).
pub fn tokenize(text: &str) -> Vec<String> {
    let folded = text.nfkc().collect::<String>();
    RE.find_iter(&folded)
        .map(|mat| mat.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        let toks = tokenize("Yes, sir! No, Joyce.");
        assert_eq!(toks, vec!["Yes", "sir", "No", "Joyce"]);
    }

    #[test]
    fn preserves_case() {
        let toks = tokenize("This IS mY firsT DoCuMeNt");
        assert_eq!(toks, vec!["This", "IS", "mY", "firsT", "DoCuMeNt"]);
    }

    #[test]
    fn folds_unicode_compatibility_forms() {
        // NFKC turns the ligature "ﬁ" into "fi"
        let toks = tokenize("ﬁrst");
        assert_eq!(toks, vec!["first"]);
    }

    #[test]
    fn keeps_inner_apostrophes_and_digits() {
        let toks = tokenize("Joyce's 2nd café");
        assert_eq!(toks, vec!["Joyce's", "nd", "café"]);
    }
}

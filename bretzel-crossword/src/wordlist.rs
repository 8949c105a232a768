use crate::error::Error;

/// The word list, bucketed by length.
///
/// Buckets hold indices into the word table; inside a bucket the input order
/// is preserved, as it defines the order in which a solver tries candidates.
/// Entries containing anything but ASCII letters are dropped at ingestion, so
/// a kept word's byte length is its cell count. Words are kept verbatim
/// otherwise; no case folding is applied.
pub struct WordList<'words> {
    words: &'words [String],
    by_length: Vec<Vec<usize>>,
}

impl<'words> WordList<'words> {
    /// Buckets the given words by length, in one pass over the list.
    /// Returns an error when no usable word remains.
    pub fn new(words: &'words [String]) -> Result<Self, Error> {
        let mut by_length: Vec<Vec<usize>> = Vec::new();
        let mut dropped = 0;
        for (index, word) in words.iter().enumerate() {
            if word.is_empty() || !word.bytes().all(|letter| letter.is_ascii_alphabetic()) {
                dropped += 1;
                continue;
            }
            if word.len() >= by_length.len() {
                by_length.resize(word.len() + 1, Vec::new());
            }
            by_length[word.len()].push(index);
        }
        if dropped > 0 {
            log::debug!("dropped {dropped} non-word entries from the word list");
        }
        if by_length.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(WordList { words, by_length })
    }

    /// Returns the indices of the words of the given length, in input order.
    pub fn of_length(&self, length: usize) -> &[usize] {
        self.by_length
            .get(length)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the word table this list indexes into.
    pub fn words(&self) -> &'words [String] {
        self.words
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|&word| word.to_string()).collect()
    }

    #[test]
    fn wordlist_buckets_by_length() {
        let words = owned(&["bar", "to", "cat", "eat", "a"]);
        let list = WordList::new(&words).unwrap();
        assert_eq!(&[0, 2, 3], list.of_length(3));
        assert_eq!(&[1], list.of_length(2));
        assert_eq!(&[4], list.of_length(1));
    }

    #[test]
    fn wordlist_missing_length_is_empty() {
        let words = owned(&["bar"]);
        let list = WordList::new(&words).unwrap();
        let no_words: &[usize] = &[];
        assert_eq!(no_words, list.of_length(2));
        assert_eq!(no_words, list.of_length(10));
    }

    #[test]
    fn wordlist_drops_non_words() {
        let words = owned(&["bar", "it's", "", "B2B", "cat"]);
        let list = WordList::new(&words).unwrap();
        assert_eq!(&[0, 4], list.of_length(3));
        let no_words: &[usize] = &[];
        assert_eq!(no_words, list.of_length(4));
    }

    #[test]
    fn wordlist_empty_is_an_error() {
        assert!(matches!(WordList::new(&[]), Err(Error::EmptyWordList)));
        let words = owned(&["", "1234"]);
        assert!(matches!(WordList::new(&words), Err(Error::EmptyWordList)));
    }

    #[test]
    fn wordlist_keeps_case_verbatim() {
        let words = owned(&["Bar", "bAr"]);
        let list = WordList::new(&words).unwrap();
        assert_eq!("Bar", &list.words()[list.of_length(3)[0]]);
        assert_eq!("bAr", &list.words()[list.of_length(3)[1]]);
    }
}

use std::{fs::File, io::{self, BufRead, BufReader, Read}, path::Path};

use log::{debug, error};

use crate::{anagram_index::WordSet, error::WordListError};

/// Loads the set of words listed one per line in `path`.
pub fn read_words_from_file(path: impl AsRef<Path>) -> Result<WordSet, WordListError> {
    let path = path.as_ref();
    if !path.exists() {
        error!("{:?} does not exist", path);
        return Err(WordListError::SourceNotFound { path: path.to_owned() });
    }

    let words = File::open(path)
        .and_then(|file| reader_to_words(file))
        .map_err(|err| {
            error!("Error reading words in {:?}; error: {}", path, err);
            WordListError::from_io(path, err)
        })?;
    debug!("{} unique words read from {:?}", words.len(), path);
    Ok(words)
}

/// Reads UTF-8 lines from `reader`, trimming each one and skipping blanks.
/// Repeated words collapse into one entry.
pub fn reader_to_words(reader: impl Read) -> io::Result<WordSet> {
    let mut words = WordSet::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.insert(word.to_owned());
        }
    }
    Ok(words)
}

use std::{io, process};

use anagram_finder::{anagram_index, cli::{self, Config}, presenter, word_reader};
use log::{info, error};

fn main() {
    env_logger::init();

    let config = Config::from_matches(&cli::command().get_matches());

    info!("reading words from {:?}", config.word_list);
    let words = match word_reader::read_words_from_file(&config.word_list) {
        Ok(words) => words,
        Err(err) => {
            eprintln!("Error reading words from file: {}", err);
            process::exit(1);
        },
    };
    info!("{} unique words read", words.len());

    let mut groups = anagram_index::find_groups_with_workers(&words, config.workers);
    info!("{} anagram groups found", groups.len());
    if config.sorted {
        presenter::sort_groups(&mut groups);
    }

    let stdout = io::stdout();
    if let Err(err) = presenter::write_groups(&groups, config.format, &mut stdout.lock()) {
        error!("error writing results: {}", err);
        eprintln!("Error writing results: {}", err);
        process::exit(1);
    }
}

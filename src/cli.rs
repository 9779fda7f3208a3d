use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::{anagram_index::default_workers, presenter::OutputFormat};

pub const DEFAULT_WORDS_FILE_PATH: &str = "words-utf8.txt";

/// Settings for one run of the anagram finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub word_list: PathBuf,
    pub workers: usize,
    pub format: OutputFormat,
    pub sorted: bool,
}

pub fn command() -> Command {
    Command::new("Anagram Finder")
        .about("Prints groups of words from a word list that are anagrams of each other")
        .arg(Arg::new("word-list")
            .help("File with one word per line")
            .default_value(DEFAULT_WORDS_FILE_PATH)
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("workers")
            .short('j')
            .long("workers")
            .help("Number of threads used for grouping [default: available cores]")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("format")
            .short('f')
            .long("format")
            .default_value("plain")
            .value_parser(["plain", "json", "yaml"]))
        .arg(Arg::new("sorted")
            .short('s')
            .long("sorted")
            .help("Print groups and their words in sorted order")
            .action(ArgAction::SetTrue))
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let word_list = matches.get_one::<PathBuf>("word-list")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS_FILE_PATH));
        let workers = matches.get_one::<usize>("workers")
            .copied()
            .unwrap_or_else(default_workers);
        let format = matches.get_one::<String>("format")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            word_list,
            workers,
            format,
            sorted: matches.get_flag("sorted"),
        }
    }
}

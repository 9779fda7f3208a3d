use std::{io::{self, Write}, str::FromStr};

use crate::anagram_index::AnagramGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per group, words separated by a space.
    #[default]
    Plain,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(format!("unknown output format `{}`", other)),
        }
    }
}

/// Sorts words inside each group, then the groups themselves.
pub fn sort_groups(groups: &mut [AnagramGroup]) {
    for group in groups.iter_mut() {
        group.sort();
    }
    groups.sort();
}

pub fn write_groups(groups: &[AnagramGroup], format: OutputFormat, out: &mut impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Plain => {
            for group in groups.iter().filter(|g| g.len() > 1) {
                writeln!(out, "{}", group.join(" "))?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, groups)?;
            writeln!(out)?;
        },
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, groups)
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        },
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(groups: &[&[&str]]) -> Vec<AnagramGroup> {
        groups.iter()
            .map(|g| g.iter().map(|&s| s.to_owned()).collect())
            .collect()
    }

    fn render(groups: &[AnagramGroup], format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_groups(groups, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output() {
        let g = groups(&[&["listen", "silent"], &["cat", "act", "tac"]]);
        assert_eq!(render(&g, OutputFormat::Plain), "listen silent\ncat act tac\n");
    }

    #[test]
    fn test_plain_output_skips_singletons() {
        let g = groups(&[&["lonely"], &["god", "dog"]]);
        assert_eq!(render(&g, OutputFormat::Plain), "god dog\n");
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(render(&[], OutputFormat::Plain), "");
        assert_eq!(render(&[], OutputFormat::Json), "[]\n");
    }

    #[test]
    fn test_json_output() {
        let g = groups(&[&["listen", "silent"], &["god", "dog"]]);
        let rendered = render(&g, OutputFormat::Json);
        assert_eq!(rendered, "[[\"listen\",\"silent\"],[\"god\",\"dog\"]]\n");

        let parsed: Vec<Vec<String>> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, g);
    }

    #[test]
    fn test_yaml_output() {
        let g = groups(&[&["listen", "silent"], &["god", "dog"]]);
        let rendered = render(&g, OutputFormat::Yaml);

        let parsed: Vec<Vec<String>> = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(parsed, g);
    }

    #[test]
    fn test_sort_groups() {
        let mut g = groups(&[&["silent", "listen"], &["tac", "cat", "act"], &["dog", "god"]]);
        sort_groups(&mut g);
        assert_eq!(g, groups(&[&["act", "cat", "tac"], &["dog", "god"], &["listen", "silent"]]));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("plain".parse::<OutputFormat>(), Ok(OutputFormat::Plain));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("yaml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}

//! Command-line argument definitions and parsing
//!
//! clap handles the declared options. Tokens that cannot name one of them are
//! split off beforehand and handed back as unknown tokens, so they can be
//! folded into the target list instead of failing the parse. Tokens that do
//! name an option but misuse it (`-fz`, `--flag=1`) still go to clap and fail
//! there as usage errors.
//!
//! Arguments stay [`OsString`]s end to end; option detection looks at a lossy
//! view, which only differs from the raw token outside ASCII.

use autodemo::core::Invocation;
use clap::Parser;
use std::ffi::OsString;

/// Main CLI application
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "autodemo",
    version,
    infer_long_args = true,
    about = "Simple automation sample script",
    long_about = "autodemo reports where it lives and where it was called from, then \
                  classifies each target as a file, a directory or a symbolic link. \
                  Unrecognized options are treated as targets."
)]
pub struct Cli {
    /// Activate the demo flag
    #[arg(short, long)]
    pub flag: bool,

    /// Highlight an argument (repeatable)
    #[arg(short, long, value_name = "NAME")]
    pub special: Vec<OsString>,

    /// Targets to classify
    #[arg(value_name = "TARGET")]
    pub targets: Vec<OsString>,
}

/// Parsed command line plus the tokens clap was never shown
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub cli: Cli,
    pub unknown: Vec<OsString>,
}

impl ParsedArgs {
    /// Parse a full argument vector (program name first)
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let (known, unknown) = partition_known(args);
        let cli = Cli::try_parse_from(known)?;
        Ok(Self { cli, unknown })
    }

    /// Parse the process arguments
    pub fn try_parse() -> Result<Self, clap::Error> {
        Self::try_parse_from(std::env::args_os())
    }

    pub fn into_invocation(self) -> Invocation {
        Invocation::new(self.cli.flag, self.cli.targets, self.unknown, self.cli.special)
    }
}

/// Short options that take no value
const SHORT_SWITCHES: &[char] = &['f', 'h', 'V'];

/// Long option names and whether they take a value
const LONG_OPTIONS: &[(&str, bool)] = &[
    ("flag", false),
    ("special", true),
    ("help", false),
    ("version", false),
];

/// Split `args` into tokens for clap and tokens no declared option matches.
///
/// The first element is the program name and always stays on the known side.
/// After a bare `--` everything is positional.
fn partition_known(args: Vec<OsString>) -> (Vec<OsString>, Vec<OsString>) {
    let mut known = Vec::with_capacity(args.len());
    let mut unknown = Vec::new();
    let mut iter = args.into_iter();

    if let Some(program) = iter.next() {
        known.push(program);
    }

    while let Some(arg) = iter.next() {
        match classify_token(&arg.to_string_lossy()) {
            Token::Positional | Token::Switch => known.push(arg),
            Token::TakesValue => {
                known.push(arg);
                if let Some(value) = iter.next() {
                    known.push(value);
                }
            }
            Token::Unknown => unknown.push(arg),
            Token::EndOfOptions => {
                known.push(arg);
                known.extend(iter.by_ref());
            }
        }
    }

    (known, unknown)
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Positional,
    /// Names a declared option and carries any value itself
    Switch,
    /// Option whose value is the next token
    TakesValue,
    Unknown,
    EndOfOptions,
}

fn classify_token(arg: &str) -> Token {
    if arg == "--" {
        return Token::EndOfOptions;
    }

    if let Some(long) = arg.strip_prefix("--") {
        let (name, attached) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        // unique prefixes count as the full name; ambiguous ones are left to clap
        let matches: Vec<bool> = LONG_OPTIONS
            .iter()
            .filter(|(option, _)| option.starts_with(name))
            .map(|&(_, takes_value)| takes_value)
            .collect();

        return match matches.as_slice() {
            [] => Token::Unknown,
            [true] if !attached => Token::TakesValue,
            _ => Token::Switch,
        };
    }

    let Some(cluster) = arg.strip_prefix('-') else {
        return Token::Positional;
    };
    if cluster.is_empty() {
        return Token::Positional;
    }

    for (i, c) in cluster.char_indices() {
        if c == 's' {
            // -s VALUE when last in the cluster, otherwise -sVALUE
            return if i + c.len_utf8() == cluster.len() {
                Token::TakesValue
            } else {
                Token::Switch
            };
        }
        if !SHORT_SWITCHES.contains(&c) {
            // -zf names nothing; -fz names -f and is rejected by clap
            return if i == 0 { Token::Unknown } else { Token::Switch };
        }
    }
    Token::Switch
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::ffi::OsStr;

    fn parse(args: &[&str]) -> ParsedArgs {
        let mut full = vec!["autodemo"];
        full.extend_from_slice(args);
        ParsedArgs::try_parse_from(full).unwrap()
    }

    fn parse_err(args: &[&str]) -> clap::Error {
        let mut full = vec!["autodemo"];
        full.extend_from_slice(args);
        ParsedArgs::try_parse_from(full).unwrap_err()
    }

    fn os(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_flag_and_special() {
        let parsed = parse(&["-f", "-s", "x", "--special", "y", "a"]);
        assert!(parsed.cli.flag);
        assert_eq!(parsed.cli.special, os(&["x", "y"]));
        assert_eq!(parsed.cli.targets, os(&["a"]));
        assert!(parsed.unknown.is_empty());
    }

    #[test]
    fn test_attached_values() {
        let parsed = parse(&["-sx", "--special=y", "--flag"]);
        assert!(parsed.cli.flag);
        assert_eq!(parsed.cli.special, os(&["x", "y"]));
    }

    #[test]
    fn test_clustered_short_options() {
        let parsed = parse(&["-fs", "x", "t"]);
        assert!(parsed.cli.flag);
        assert_eq!(parsed.cli.special, os(&["x"]));
        assert_eq!(parsed.cli.targets, os(&["t"]));
    }

    #[test]
    fn test_long_option_abbreviations() {
        let parsed = parse(&["--fl", "--spec", "a.txt"]);
        assert!(parsed.cli.flag);
        assert_eq!(parsed.cli.special, os(&["a.txt"]));
        assert!(parsed.cli.targets.is_empty());
        assert!(parsed.unknown.is_empty());

        let parsed = parse(&["--s=b", "c"]);
        assert_eq!(parsed.cli.special, os(&["b"]));
        assert_eq!(parsed.cli.targets, os(&["c"]));
    }

    #[test]
    fn test_unknown_tokens_collected() {
        let parsed = parse(&["a", "--bogus", "-x", "-zf", "--flagx", "b"]);
        assert!(!parsed.cli.flag);
        assert_eq!(parsed.cli.targets, os(&["a", "b"]));
        assert_eq!(parsed.unknown, os(&["--bogus", "-x", "-zf", "--flagx"]));
    }

    #[test]
    fn test_misused_options_are_usage_errors() {
        assert_eq!(parse_err(&["-fz", "a"]).exit_code(), 2);
        assert_eq!(parse_err(&["--flag=1", "a"]).exit_code(), 2);
        assert_eq!(parse_err(&["--fl=1", "a"]).exit_code(), 2);
    }

    #[test]
    fn test_end_of_options() {
        let parsed = parse(&["--", "-f", "--special"]);
        assert!(!parsed.cli.flag);
        assert!(parsed.cli.special.is_empty());
        assert_eq!(parsed.cli.targets, os(&["-f", "--special"]));
    }

    #[test]
    fn test_lone_dash_is_positional() {
        let parsed = parse(&["-"]);
        assert_eq!(parsed.cli.targets, os(&["-"]));
        assert!(parsed.unknown.is_empty());
    }

    #[test]
    fn test_special_without_value_is_usage_error() {
        assert_eq!(parse_err(&["--special"]).exit_code(), 2);
    }

    #[test]
    fn test_empty_command_line() {
        let parsed = parse(&[]);
        assert_eq!(parsed, ParsedArgs::default());
        assert!(parsed.into_invocation().is_empty());
    }

    #[test]
    fn test_into_invocation_merges_everything() {
        let invocation = parse(&["b", "--zzz", "-s", "c", "a", "b"]).into_invocation();
        assert_eq!(invocation.targets(), &os(&["--zzz", "a", "b", "c"])[..]);
        assert!(invocation.is_special(OsStr::new("c")));
        assert!(!invocation.is_special(OsStr::new("a")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_arguments_pass_through() {
        use std::os::unix::ffi::OsStringExt;

        let target = OsString::from_vec(b"caf\xe9.txt".to_vec());
        let unknown = OsString::from_vec(b"-\xff".to_vec());
        let mut attached = b"-s".to_vec();
        attached.extend_from_slice(b"\xfe");

        let parsed = ParsedArgs::try_parse_from([
            OsString::from("autodemo"),
            target.clone(),
            unknown.clone(),
            OsString::from_vec(attached),
        ])
        .unwrap();

        assert_eq!(parsed.cli.targets, vec![target]);
        assert_eq!(parsed.unknown, vec![unknown]);
        assert_eq!(parsed.cli.special, vec![OsString::from_vec(b"\xfe".to_vec())]);
    }

    #[test]
    fn test_token_classes() {
        assert_eq!(classify_token("plain"), Token::Positional);
        assert_eq!(classify_token("-f"), Token::Switch);
        assert_eq!(classify_token("-s"), Token::TakesValue);
        assert_eq!(classify_token("-fs"), Token::TakesValue);
        assert_eq!(classify_token("-svalue"), Token::Switch);
        assert_eq!(classify_token("-fz"), Token::Switch);
        assert_eq!(classify_token("--special"), Token::TakesValue);
        assert_eq!(classify_token("--sp"), Token::TakesValue);
        assert_eq!(classify_token("--special=v"), Token::Switch);
        assert_eq!(classify_token("--f"), Token::Switch);
        assert_eq!(classify_token("--flag=1"), Token::Switch);
        assert_eq!(classify_token("--flagged"), Token::Unknown);
        assert_eq!(classify_token("-1"), Token::Unknown);
    }
}

//! Word Play CLI
//!
//! Prints every word from a dictionary file that can be spelled with the
//! given letters, followed by the total.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;
use word_play::{
    dictionary, IndexStats, MatchReport, SubsetMatcher, Tokens, WordIndex, WordPlayError,
};

/// Find every dictionary word that can be built from a set of letters.
#[derive(Parser)]
#[command(name = "word-play", version)]
struct Args {
    /// Letters available in the puzzle (case-insensitive)
    tokens: Option<String>,
    /// Dictionary file, one word per line
    dictionary: Option<PathBuf>,
    /// Verify candidates on all cores
    #[arg(long)]
    parallel: bool,
    /// Print index statistics to stderr
    #[arg(long)]
    stats: bool,
    /// Print only the total line
    #[arg(long)]
    count_only: bool,
    /// Extra arguments are ignored
    #[arg(hide = true)]
    _rest: Vec<String>,
}

impl Args {
    /// Plain `TOKENS DICTIONARY` reading of the command line, without flags.
    fn positional(mut argv: impl Iterator<Item = String>) -> Self {
        Self {
            tokens: argv.next(),
            dictionary: argv.next().map(PathBuf::from),
            parallel: false,
            stats: false,
            count_only: false,
            _rest: argv.collect(),
        }
    }
}

/// Parse flags with clap, falling back to positional arguments when clap
/// rejects the command line (e.g. tokens starting with `-`).
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => Args::positional(std::env::args().skip(1)),
    }
}

fn print_stats(stats: &IndexStats) {
    eprintln!("Read {} lines, indexed {} words.", stats.lines_read, stats.admitted);
    eprintln!("  duplicates:       {:>8}", stats.duplicates);
    eprintln!("  proper nouns:     {:>8}", stats.proper_nouns);
    eprintln!("  numerals:         {:>8}", stats.numerals);
    eprintln!("  non-alphabetic:   {:>8}", stats.non_alphabetic);
    eprintln!("  empty:            {:>8}", stats.empty);
    eprintln!("  too long:         {:>8}", stats.too_long);
    eprintln!("  missing letters:  {:>8}", stats.signature_misses);
}

fn run(args: Args) -> Result<(), WordPlayError> {
    let (Some(tokens), Some(path)) = (args.tokens, args.dictionary) else {
        return Err(WordPlayError::Usage);
    };

    let lines = dictionary::open(&path)?;
    let tokens = Tokens::parse(&tokens);

    let start = Instant::now();
    let index = WordIndex::try_build(&tokens, lines)?;
    if args.stats {
        print_stats(index.stats());
        eprintln!("Index built in {:.2?}", start.elapsed());
    }

    let matcher = SubsetMatcher::new(&tokens);
    let start = Instant::now();
    let report = if args.parallel {
        matcher.find_matches_par(&index)
    } else {
        matcher.find_matches(&index)
    };
    if args.stats {
        eprintln!("Matched in {:.2?}", start.elapsed());
    }

    write_report(&report, args.count_only).map_err(WordPlayError::Output)
}

fn write_report(report: &MatchReport, count_only: bool) -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    if !count_only {
        for word in &report.words {
            writeln!(out, "{}", word)?;
        }
    }
    writeln!(out, "Total matches: {}", report.total)?;
    out.flush()
}

fn main() {
    let args = parse_args();
    if let Err(e) = run(args) {
        println!("{e}");
        if let WordPlayError::OpenDictionary { path, source } = &e {
            eprintln!("{}: {}", path.display(), source);
        }
        std::process::exit(e.exit_code());
    }
}

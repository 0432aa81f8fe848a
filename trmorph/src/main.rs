use std::io::{self, BufRead};

use clap::{Parser as ClapParser, ValueEnum};
use serde_json::json;
use trmorph_lib::finders::{default_finders, LexemeFinder, WordRootFinder};
use trmorph_lib::output::{format_for_tests, format_parse, format_simple, format_stem};
use trmorph_lib::{
    Analysis, Lexicon, ParseToken, Parser, ParserConfig, PredefinedPaths, RootMap, SuffixGraph,
    UpperCaseSupportingParser,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One JSON object per word.
    Json,
    /// kitap+Noun+A3sg+Pnon+Dat
    Parse,
    /// (1,"kitap+Noun+A3sg+Pnon+Dat")
    Simple,
    /// kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])
    Test,
    /// yaptırtmayı+Noun[yaptırtma(yap+Verb)+Noun]
    Stem,
}

#[derive(ClapParser)]
#[command(name = "trmorph", about = "Turkish morphological analyzer")]
struct Cli {
    /// Words to analyze. If omitted, reads from stdin.
    input: Vec<String>,

    /// Use the basic suffix graph (no numerals, proper nouns or copula).
    #[arg(long)]
    basic: bool,

    /// Additional lexicon file in the bundled line format.
    #[arg(long, value_name = "FILE")]
    lexicon: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Give up on a word after this many search steps.
    #[arg(long, default_value_t = ParserConfig::default().max_steps)]
    max_steps: usize,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("trmorph: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> trmorph_lib::Result<()> {
    let mut lexicon = Lexicon::bundled()?;
    if let Some(path) = &cli.lexicon {
        let extra = Lexicon::from_file(path)?;
        log::info!("loaded {} items from {path}", extra.len());
        lexicon.extend(extra);
    }
    let roots = RootMap::from_lexicon(&lexicon)?;
    let graph = if cli.basic {
        SuffixGraph::basic()?
    } else {
        SuffixGraph::extended()?
    };
    let paths = PredefinedPaths::build(&graph, &roots)?;

    // Numerals and proper nouns have no states in the basic graph.
    let finders: Vec<Box<dyn LexemeFinder + '_>> = if cli.basic {
        vec![Box::new(WordRootFinder::new(&roots))]
    } else {
        default_finders(&roots)
    };
    let config = ParserConfig {
        max_steps: cli.max_steps,
    };
    let parser = UpperCaseSupportingParser::new(Parser::new(&graph, finders, Some(&paths)).with_config(config));

    if cli.input.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                process_line(&line, &parser, cli)?;
            }
        }
    } else {
        for text in &cli.input {
            process_line(text, &parser, cli)?;
        }
    }
    Ok(())
}

fn process_line(line: &str, parser: &UpperCaseSupportingParser<'_>, cli: &Cli) -> trmorph_lib::Result<()> {
    for word in line.split_whitespace() {
        let results = parser.parse(word);
        if cli.format == Format::Json {
            let analyses: Vec<Analysis> = results.iter().map(Analysis::from).collect();
            let value = json!({ "word": word, "analyses": analyses });
            let json = if cli.pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{json}");
            continue;
        }

        if results.is_empty() {
            println!("{word}\t?");
        }
        for token in &results {
            println!("{word}\t{}", render(token, cli.format));
        }
    }
    Ok(())
}

fn render(token: &ParseToken<'_>, format: Format) -> String {
    match format {
        Format::Parse | Format::Json => format_parse(token),
        Format::Simple => format_simple(token),
        Format::Test => format_for_tests(token),
        Format::Stem => format_stem(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_several_words_on_the_command_line() {
        let cli = Cli::try_parse_from(["trmorph", "kitaba", "elma", "--format", "stem"]).unwrap();
        assert_eq!(cli.input, ["kitaba", "elma"]);
        assert_eq!(cli.format, Format::Stem);

        let cli = Cli::try_parse_from(["trmorph"]).unwrap();
        assert!(cli.input.is_empty());
        assert_eq!(cli.format, Format::Json);
    }
}

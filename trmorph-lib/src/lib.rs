pub mod alphabet;
pub mod conditions;
pub mod error;
pub mod finders;
pub mod graph;
pub mod lexicon;
pub mod numbers;
pub mod output;
pub mod parser;
pub mod phonetics;
pub mod predefined;
pub mod roots;
pub mod token;
pub mod types;

pub use error::{MorphError, Result};
pub use graph::SuffixGraph;
pub use lexicon::Lexicon;
pub use output::Analysis;
pub use parser::{Parser, ParserConfig, UpperCaseSupportingParser};
pub use predefined::PredefinedPaths;
pub use roots::RootMap;
pub use token::ParseToken;

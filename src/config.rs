use crate::parser::code_parser::CodeParser;
use crate::parser::SourceLanguage;
use crate::report::writer::Artifact;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "snippet-classifier")]
#[command(version, about = "Classify code snippets by structural completeness")]
#[command(long_about = "Walks a corpus of code snippets and checks whether each one parses, \
    declares a function or class, and has balanced braces.\n\n\
    Settings may also come from a .env file in the working directory or in \
    $XDG_CONFIG_HOME/snippet-classifier/.env.")]
pub struct Cli {
    /// Corpus root containing the snippets
    #[arg(value_name = "ROOT", env = "SNIPPET_ROOT")]
    pub root: PathBuf,

    /// Directory the reports are written to
    #[arg(short, long, env = "SNIPPET_OUTPUT_DIR", default_value = "snippet_reports")]
    pub output_dir: PathBuf,

    /// Language of the snippets
    #[arg(short, long, value_enum, default_value_t = SourceLanguage::JavaScript)]
    pub language: SourceLanguage,

    /// Snippet file extension [default: the language's extension]
    #[arg(long)]
    pub extension: Option<String>,

    /// Parse JavaScript as module code, allowing import and export
    #[arg(long)]
    pub module: bool,

    /// Abandon a single parse after this many milliseconds (0 = no limit)
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub parse_timeout_ms: u64,

    /// Reports to write [default: all]
    #[arg(long, value_enum, value_delimiter = ',')]
    pub emit: Vec<Artifact>,

    /// Honor .gitignore files and skip hidden entries
    #[arg(long)]
    pub respect_ignore: bool,
}

impl Cli {
    pub fn extension(&self) -> String {
        self.extension
            .clone()
            .unwrap_or_else(|| self.language.extension().to_string())
    }

    pub fn artifacts(&self) -> Vec<Artifact> {
        if self.emit.is_empty() {
            Artifact::ALL.to_vec()
        } else {
            self.emit.clone()
        }
    }

    pub fn code_parser(&self) -> CodeParser {
        CodeParser::new(self.language)
            .with_script_mode(!self.module)
            .with_timeout(Duration::from_millis(self.parse_timeout_ms))
    }
}

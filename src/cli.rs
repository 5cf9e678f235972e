use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Echelonian Transliteration Tools")]
pub struct Args {
    /// Print results as JSON
    #[clap(long, global = true)]
    pub json: bool,

    /// Command to execute (encode, decode or table)
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate English text to Echelonian glyphs
    Encode {
        #[clap(flatten)]
        input: InputArgs,
    },
    /// Translate Echelonian glyphs back to English
    Decode {
        #[clap(flatten)]
        input: InputArgs,
    },
    /// Verify and print the glyph table
    Table,
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Text to translate (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the text from a file
    #[clap(long, short, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

mod cli;

use clap::Parser;
use cli::{Args, Command, InputArgs};
use echelonian::{glyphs, Direction, EchelonianTranslator, Result};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn read_input(input: InputArgs) -> Result<String> {
    if let Some(text) = input.text {
        return Ok(text);
    }
    if let Some(path) = input.file {
        tracing::debug!(path = %path.display(), "reading input file");
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn run_translation(direction: Direction, input: InputArgs, json: bool) -> Result<()> {
    let raw = read_input(input)?;
    let translation = EchelonianTranslator::new().translate_input(direction, &raw)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&translation)?);
    } else {
        println!("{}", translation);
    }
    Ok(())
}

fn print_table(json: bool) -> Result<()> {
    let translator = EchelonianTranslator::new();
    glyphs::verify_bijection(translator.table())?;

    if json {
        let table: Vec<_> = translator
            .table()
            .iter()
            .map(|&(letter, glyph)| serde_json::json!({ "letter": letter, "glyph": glyph }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        for &(letter, glyph) in translator.table() {
            println!("{} {}", letter, glyph);
        }
    }
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Encode { input } => run_translation(Direction::Encode, input, args.json)?,
        Command::Decode { input } => run_translation(Direction::Decode, input, args.json)?,
        Command::Table => print_table(args.json)?,
    }

    Ok(())
}

//! Print the outline of a single glyph as a list of path commands.
//!
//! Usage: `outline-dump <FONT_PATH> <CHARACTER>`

use std::{io::Write, path::PathBuf, process::ExitCode};

use outline_dump::FontFile;

#[derive(clap::Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Index of the face to use when the file is a font collection
    #[arg(long, default_value_t = 0)]
    face_index: u16,
    /// Path to the font file
    font_path: PathBuf,
    /// The character whose outline should be printed
    #[arg(value_parser = parse_char)]
    character: char,
}

fn parse_char(arg: &str) -> Result<char, String> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(format!("expected exactly one character, found {arg:?}")),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    use clap::Parser as _;
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let text = match run(&args) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = std::io::stdout().lock().write_all(text.as_bytes()) {
        eprintln!("Error: could not write output: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Produces the complete output, so nothing reaches stdout on failure.
fn run(args: &Args) -> outline_dump::Result<String> {
    let mut font = FontFile::open(&args.font_path, args.face_index)?;
    let path = font.outline(args.character)?;
    Ok(format!(
        "// Successfully extracted vector data for character '{}' from {}.\n{path}",
        args.character,
        font.path().display()
    ))
}

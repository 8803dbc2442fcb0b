use chordsheet::{parse_sheet, transpose_sheet, ChordSheetError, Config, SaveOutcome, SongLibrary};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "\
Usage: chordsheet [--library <path>] <command>

Commands:
  transpose <steps> <input> [output]   Transpose a song sheet
  up <input> [output]                  Transpose up one semitone
  down <input> [output]                Transpose down one semitone
  save <input>                         Store a song sheet in the library
  list                                 List stored songs, newest first
  show <id> [steps]                    Print a stored song, optionally transposed
  delete <id>                          Remove a stored song";

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chordsheet=info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    // Parse flags
    let mut library_flag = None;
    if args.first().map(String::as_str) == Some("--library") {
        if args.len() < 2 {
            usage_error();
        }
        library_flag = Some(PathBuf::from(args.remove(1)));
        args.remove(0);
    }

    if args.is_empty() {
        usage_error();
    }

    if let Err(e) = run(&args, library_flag) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn usage_error() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn run(args: &[String], library_flag: Option<PathBuf>) -> Result<(), ChordSheetError> {
    let command = args[0].as_str();
    let rest = &args[1..];

    match (command, rest) {
        ("transpose", [steps, input, output @ ..]) if output.len() <= 1 => {
            transpose_file(parse_steps(steps), input, output.first())
        }
        ("up", [input, output @ ..]) if output.len() <= 1 => {
            transpose_file(1, input, output.first())
        }
        ("down", [input, output @ ..]) if output.len() <= 1 => {
            transpose_file(-1, input, output.first())
        }
        ("save", [input]) => {
            let song = parse_sheet(&fs::read_to_string(input)?)?;
            let mut library = open_library(library_flag)?;
            match library.save_song(&song.name, &song.content, i32::from(song.capo))? {
                SaveOutcome::Saved(id) => println!("Saved song {}", id),
                SaveOutcome::Duplicate => eprintln!("A song named '{}' already exists", song.name),
            }
            Ok(())
        }
        ("list", []) => {
            let library = open_library(library_flag)?;
            if library.is_empty() {
                eprintln!("No songs stored yet");
            }
            for record in library.songs() {
                println!("{:>4}  {} (capo {})", record.id, record.name, record.capo);
            }
            Ok(())
        }
        ("show", [id, steps @ ..]) if steps.len() <= 1 => {
            let library = open_library(library_flag)?;
            let song = library.song(parse_id(id))?.song();
            let steps = steps.first().map_or(0, |s| parse_steps(s));
            print!("{}", song.transpose(steps)?.to_sheet()?);
            Ok(())
        }
        ("delete", [id]) => {
            let id = parse_id(id);
            let mut library = open_library(library_flag)?;
            if !library.delete_song(id)? {
                return Err(ChordSheetError::SongNotFound(id));
            }
            println!("Deleted song {}", id);
            Ok(())
        }
        _ => usage_error(),
    }
}

fn transpose_file(steps: i32, input: &str, output: Option<&String>) -> Result<(), ChordSheetError> {
    let source = fs::read_to_string(input)?;
    let sheet = transpose_sheet(&source, steps)?;

    match output {
        Some(path) => {
            fs::write(path, &sheet)?;
            eprintln!("Wrote transposed sheet to {}", path);
        }
        None => print!("{}", sheet),
    }
    Ok(())
}

fn open_library(library_flag: Option<PathBuf>) -> Result<SongLibrary, ChordSheetError> {
    let config = Config::load(library_flag)?;
    SongLibrary::open(&config.library)
}

fn parse_steps(s: &str) -> i32 {
    s.parse().unwrap_or_else(|_| {
        eprintln!("Invalid step count '{}': expected an integer", s);
        process::exit(1);
    })
}

fn parse_id(s: &str) -> u64 {
    s.parse().unwrap_or_else(|_| {
        eprintln!("Invalid song id '{}'", s);
        process::exit(1);
    })
}

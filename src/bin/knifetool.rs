use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use cjk_knife::dict::{compiled, Dictionaries};
use cjk_knife::settings::{self, Settings};
use cjk_knife::{trace_init, Mode, Segmenter};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "knifetool", about = "CJK segmenter dictionary and segmentation tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile text dictionaries into the binary format
    Compile {
        /// Settings TOML (dictionary names, charset, max word length)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Directory holding the *.dic word lists
        dic_home: PathBuf,
        /// Output directory for *.dic.compiled files
        output_dir: PathBuf,
    },
    /// Show word and noise counts of a compiled dictionary
    Info {
        /// Compiled dictionary (.dic.compiled) file
        file: PathBuf,
    },
    /// Segment text and print one token per line
    Segment {
        /// Settings TOML
        #[arg(long)]
        config: Option<PathBuf>,
        /// Dictionary home (overrides the settings)
        #[arg(long)]
        home: Option<PathBuf>,
        /// most-words | max-word-length (overrides the settings)
        #[arg(long)]
        mode: Option<Mode>,
        /// Print tokens as JSON lines
        #[arg(long)]
        json: bool,
        /// Text to segment (default: read stdin)
        text: Option<String>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

fn main() {
    trace_init::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            config,
            dic_home,
            output_dir,
        } => compile(config.as_deref(), &dic_home, &output_dir),
        Command::Info { file } => info(&file),
        Command::Segment {
            config,
            home,
            mode,
            json,
            text,
        } => segment(config.as_deref(), home, mode, json, text),
        Command::SettingsExport => print!("{}", settings::default_toml()),
        Command::SettingsValidate { file } => settings_validate(&file),
    }
}

/// Settings from `--config`, or the embedded defaults.
fn load_settings(config: Option<&Path>) -> &'static Settings {
    if let Some(path) = config {
        let content = die!(
            fs::read_to_string(path),
            "Error reading {}: {}",
            path.display()
        );
        die!(settings::init_custom(content), "Error: {}");
    }
    settings::settings()
}

fn compile(config: Option<&Path>, dic_home: &Path, output_dir: &Path) {
    let dict_config = load_settings(config).dictionary.clone().with_home(dic_home);
    eprintln!("Loading dictionaries from {}...", dic_home.display());
    let dicts = die!(Dictionaries::load_text(&dict_config), "Error: {}");
    eprintln!("  vocabulary: {} words", dicts.vocabulary().len());

    let written = die!(dicts.compile_to(output_dir, &dict_config), "Error: {}");
    for path in &written {
        eprintln!("Wrote {}", path.display());
    }
    eprintln!("Done: {} files", written.len());
}

fn info(file: &Path) {
    let words = match die!(compiled::open(file, 0), "Error: {}") {
        Some(words) => words,
        None => {
            eprintln!("Error: {} does not exist", file.display());
            process::exit(1);
        }
    };
    let noise_words = words.iter().filter(|w| w.is_noise_word()).count();
    let noise_characters = words.iter().filter(|w| w.is_noise_character()).count();
    let longest = words.iter().map(|w| w.char_len()).max().unwrap_or(0);
    println!("File: {}", file.display());
    println!("  words: {}", words.len());
    println!("  noise words: {noise_words}");
    println!("  noise characters: {noise_characters}");
    println!("  longest word: {longest} chars");
}

fn segment(
    config: Option<&Path>,
    home: Option<PathBuf>,
    mode: Option<Mode>,
    json: bool,
    text: Option<String>,
) {
    let mut settings = load_settings(config).clone();
    if let Some(home) = home {
        settings.dictionary.home = home;
    }
    if let Some(mode) = mode {
        settings.segmenter.mode = mode;
    }
    let segmenter = die!(Segmenter::from_settings(&settings), "Error: {}");

    let tokens = match text {
        Some(text) => segmenter.tokenize(&text),
        None => die!(
            segmenter.segment_reader(io::stdin().lock()),
            "Error reading stdin: {}"
        ),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for token in &tokens {
        let line = if json {
            die!(serde_json::to_string(token), "Error: {}")
        } else {
            token.to_string()
        };
        die!(writeln!(out, "{line}"), "Error writing output: {}");
    }
}

fn settings_validate(file: &Path) {
    let s = die!(settings::load_settings(file), "Error: {}");
    println!(
        "OK: dictionary.home={}, dictionary.format={:?}, segmenter.mode={}",
        s.dictionary.home.display(),
        s.dictionary.format,
        s.segmenter.mode
    );
}

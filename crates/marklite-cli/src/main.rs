//! Marklite CLI - Render marklite markup files to HTML
//!
//! Usage:
//!   mlcli [OPTIONS] <FILE>
//!
//! Commands:
//!   render    Compile markup to HTML (default)
//!   check     Verify the file holds markup content
//!   stats     Show document statistics

use std::env;
use std::fs;
use std::process;

use marklite_core::Compiler;
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    match config.command {
        Command::Render => cmd_render(&input, &config),
        Command::Check => cmd_check(&input, &config),
        Command::Stats => cmd_stats(&input, &config),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Render,
    Check,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Render;
    let mut format = OutputFormat::Text;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("mlcli {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-j" | "--json" => format = OutputFormat::Json,
            "render" => command = Command::Render,
            "check" => command = Command::Check,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        format,
    })
}

fn print_help() {
    eprintln!(
        r#"mlcli - marklite markup renderer

USAGE:
    mlcli [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    render      Compile markup to HTML (default)
    check       Verify the file holds markup content
    stats       Show document statistics

OPTIONS:
    -j, --json       Output in JSON format
    -h, --help       Print help information
    -V, --version    Print version information

EXAMPLES:
    mlcli page.md           Render a markup file to HTML
    mlcli -j page.md        Wrap the HTML in a JSON envelope
    mlcli check page.md     Verify the file is non-empty markup
    mlcli stats page.md     Show document statistics
"#
    );
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(input: &str, config: &Config) -> Result<(), String> {
    let compiler = Compiler::new(input).map_err(|e| e.to_string())?;
    let html = compiler.compile();

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "html": html })),
        // Block fragments carry their own trailing newlines.
        OutputFormat::Text => print!("{}", html),
    }

    Ok(())
}

// =============================================================================
// Check Command
// =============================================================================

fn cmd_check(input: &str, config: &Config) -> Result<(), String> {
    match Compiler::new(input) {
        Ok(_) => {
            match config.format {
                OutputFormat::Json => println!(r#"{{"valid": true}}"#),
                OutputFormat::Text => println!("Valid: markup content present"),
            }
            Ok(())
        }
        Err(e) => {
            if matches!(config.format, OutputFormat::Json) {
                println!("{}", serde_json::json!({ "valid": false, "error": e.to_string() }));
            } else {
                eprintln!("Invalid: {}", e);
            }
            Err(e.to_string())
        }
    }
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(input: &str, config: &Config) -> Result<(), String> {
    let compiler = Compiler::new(input).map_err(|e| e.to_string())?;
    let stats = DocumentStats::from_compiler(&compiler);

    match config.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats).map_err(|e| e.to_string())?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Document Statistics");
            println!("-------------------");
            println!("Lines:          {}", stats.lines);
            println!("Words (est.):   {}", stats.words);
            println!("Characters:     {}", stats.chars);
            println!();
            println!("Rendered:");
            println!("  Headings:     {}", stats.headings);
            println!("  Paragraphs:   {}", stats.paragraphs);
            println!("  Links:        {}", stats.links);
            println!("  Bold spans:   {}", stats.strong_spans);
            println!("  Italic spans: {}", stats.em_spans);
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct DocumentStats {
    lines: usize,
    words: usize,
    chars: usize,
    headings: usize,
    paragraphs: usize,
    links: usize,
    strong_spans: usize,
    em_spans: usize,
}

impl DocumentStats {
    fn from_compiler(compiler: &Compiler) -> Self {
        let input = compiler.text();
        let html = compiler.compile();

        Self {
            lines: input.lines().count(),
            words: input.split_whitespace().count(),
            chars: input.len(),
            headings: html.matches("</h").count(),
            paragraphs: html.matches("<p>").count(),
            links: html.matches("<a href='").count(),
            strong_spans: html.matches("<strong>").count(),
            em_spans: html.matches("<em>").count(),
        }
    }
}

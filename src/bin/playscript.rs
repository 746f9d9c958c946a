//! Command-line interface for playscript
//! This binary compiles a script into a graph and prints it in one of the registered formats.
//!
//! Usage:
//!   playscript `<path>` [--format `<format>`] [--config `<file>`]  - Compile a script
//!   playscript `<path>` --cast                                    - Print the cast list instead
//!   playscript --list-formats                                     - List all available formats
//!
//! Logging goes to stderr and follows `RUST_LOG`; `-v` raises it to debug.

use clap::{Arg, ArgAction, ArgMatches, Command};
use playscript::play::config::{Loader, PlayConfig};
use playscript::play::formats::FormatRegistry;
use playscript::play::{PlayError, ScriptLoader};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("playscript")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile a screenplay-like script into a who-addresses-whom graph")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the script (YAML)")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: json)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("cast")
                .long("cast")
                .help("Print the cast list instead of the plot")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log compilation steps to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(matches: &ArgMatches) -> Result<PlayConfig, PlayError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.clone())?;
    }
    Ok(loader.build()?)
}

fn run(matches: &ArgMatches) -> Result<(), PlayError> {
    let config = load_config(matches)?;
    let registry = FormatRegistry::from_config(&config.output);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return Ok(());
    }

    let Some(path) = matches.get_one::<String>("path") else {
        return Ok(());
    };
    let loader = ScriptLoader::from_path(path)?.with_vocabulary(config.vocabulary);
    let play = if matches.get_flag("cast") {
        loader.cast()?
    } else {
        loader.perform()?
    };

    let output = registry.serialize(&play, &config.output.format)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for (name, description) in registry.describe() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}

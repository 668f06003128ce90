// Command-line interface for j2m
//
// This binary converts documents between Jira wiki markup, Markdown and HTML, and lets you watch
// a document go through the rewrite rules one at a time.
//
// The core capabilities use the j2m-babel crate; this crate only deals with arguments, files,
// configuration and logging.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension, while being overwrittable by an explicit --from flag.
// Usage:
//  j2m <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  j2m convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  j2m inspect <path> [<transform>] [--from <format>]  - Trace the rewrite rules (defaults to "pipeline-text")
//  j2m --list-transforms                 - List available transforms
//
// Extra Parameters:
//
// Renderer settings and format parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Known settings (hardbreaks, smart, unsafe, log-level)
// override the configuration; anything else is handed to the target format.
// Example:
//  j2m ticket.jira --to html --extra-hardbreaks false

use j2m_cli::transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use j2m_babel::formats::HtmlFormat;
use j2m_babel::publish::{publish_with_registry, PublishArtifact, PublishSpec};
use j2m_babel::FormatRegistry;
use j2m_config::{J2mConfig, Loader};
use std::collections::HashMap;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("j2m")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Jira wiki markup, Markdown and HTML")
        .long_about(
            "j2m converts documents between Jira wiki markup and Markdown, and renders either to HTML.\n\n\
            Commands:\n  \
            - convert: Transform between document formats (wiki, markdown, html)\n  \
            - inspect: Trace a document through the rewrite rules\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override renderer settings.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            j2m ticket.jira --to markdown             # Convert to markdown (outputs to stdout)\n  \
            j2m README.md --to wiki                   # Convert to wiki markup\n  \
            j2m ticket.jira --to html -o ticket.html  # Render HTML to a file\n  \
            j2m inspect ticket.jira                   # Show what every rule did"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a j2m.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Trace a document through the rewrite rules")
                .long_about(
                    "Run the rewrite pipeline for the source format and report every rule.\n\n\
                    Transforms:\n  \
                    - pipeline-text:  rule headers, with the text after each rule that changed it (default)\n  \
                    - pipeline-json:  the same steps as JSON\n\n\
                    Examples:\n  \
                    j2m inspect ticket.jira                  # Text trace\n  \
                    j2m inspect notes.md pipeline-json       # JSON trace of the markdown → wiki rules"
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the input file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'pipeline-text'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    Supported formats:\n  \
                    - wiki:     Jira wiki markup (.jira, .wiki)\n  \
                    - markdown: Markdown (.md)\n  \
                    - html:     HTML, output only (.html)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    j2m convert ticket.jira --to markdown      # Convert to markdown (stdout)\n  \
                    j2m convert notes.md --to wiki -o out.jira # Markdown to a wiki file\n  \
                    j2m ticket.jira --to html                  # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: wiki, markdown, html\n\
                            Use the format name, not the file extension."
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A leading file argument means the convert subcommand was left implicit
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    init_logging(&config);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                fail("path is required");
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            let from = resolve_from(sub_matches, path);
            handle_inspect_command(path, &from, transform);
        }
        Some(("convert", sub_matches)) => {
            let (Some(input), Some(to)) = (
                sub_matches.get_one::<String>("input"),
                sub_matches.get_one::<String>("to"),
            ) else {
                fail("input and --to are required");
            };
            let from = resolve_from(sub_matches, input);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Explicit `--from`, or the format registered for the file's extension
fn resolve_from(matches: &ArgMatches, input: &str) -> String {
    if let Some(from) = matches.get_one::<String>("from") {
        return from.to_string();
    }
    match FormatRegistry::default().detect_format_from_filename(input) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, from: &str, transform: &str) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let output = transforms::execute_transform(&source, from, transform).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    format_options: HashMap<String, String>,
    config: &J2mConfig,
) {
    let registry = registry_from_config(config);

    // Validate formats exist before touching the filesystem
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let mut spec = PublishSpec::new(&source, from, to);
    spec.options = format_options;
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }

    match publish_with_registry(&registry, spec) {
        Ok(result) => match result.artifact {
            PublishArtifact::InMemory(text) => print!("{text}"),
            PublishArtifact::File(path) => debug!(path = %path.display(), "wrote output"),
        },
        Err(e) => {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("  pipeline-text  - Rule by rule trace as text");
    println!("  pipeline-json  - Rule by rule trace as JSON\n");

    println!("Conversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            println!("  {format_name:<9} - {}", format.description());
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> J2mConfig {
    let loader = Loader::new().with_optional_file("j2m.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Default registry, with HTML rendered using the configured options
fn registry_from_config(config: &J2mConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(HtmlFormat::new((&config.render).into()));
    registry
}

fn apply_config_overrides(config: &mut J2mConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["hardbreaks", "preserve-line-breaks"]) {
        config.render.preserve_line_breaks = parse_bool_arg("hardbreaks", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["smart", "smart-punctuation"]) {
        config.render.smart_punctuation = parse_bool_arg("smart", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["unsafe", "allow-raw-html"]) {
        config.render.allow_raw_html = parse_bool_arg("unsafe", &raw);
    }
    if let Some(level) = take_override(extra_params, &["log-level"]) {
        config.logging.level = level;
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(config: &J2mConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => fail(&format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

// Command-line interface for docsmd
//
// Converts between Markdown files and structured documents (the JSON a document
// service returns for a fetched document, and the batch-update requests it accepts).
// The conversion itself lives in docsmd-babel; this binary only deals with files,
// configuration and logging.
//
// Usage:
//  docsmd to-md <document.json> [-o <file>]       - Render a fetched document as Markdown
//  docsmd to-doc <input.md> [-o <file>]           - Write the batch-update request for a Markdown file
//  docsmd to-doc <input.md> --preview             - Apply the requests to an in-memory document and
//                                                   write the resulting document instead
//
// Configuration is read from docsmd.toml in the working directory when present, then from
// --config. --policy and --delay-ms override the [submit] section.
//
// Logging goes to stderr. The filter comes from DOCSMD_LOG (default "warn"); --verbose forces debug.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use docsmd_babel::formats::markdown::parse_markdown_bytes;
use docsmd_babel::{
    structured_doc_to_markdown, submit, to_batch_request, BuildOptions, Cancellation, Document,
    DocumentBuilder, LocalDocument, SubmissionPolicy,
};
use docsmd_config::{DocsmdConfig, Loader};
use std::fs;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DOCSMD_LOG";
const DEFAULT_DOCUMENT_ID: &str = "local";

fn build_cli() -> Command {
    Command::new("docsmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown and structured documents")
        .long_about(
            "docsmd converts Markdown into the edit requests a structured document service \
            accepts, and renders documents fetched from such a service back to Markdown.\n\n\
            Examples:\n  \
            docsmd to-md fetched.json                     # Markdown to stdout\n  \
            docsmd to-doc notes.md -o requests.json       # batch-update request body\n  \
            docsmd to-doc notes.md --preview | docsmd to-md /dev/stdin",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a docsmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every emitted operation and submission step to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("to-md")
                .about("Render a structured document (JSON) as Markdown")
                .arg(
                    Arg::new("input")
                        .help("Document JSON as returned by the document service")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("to-doc")
                .about("Convert Markdown into document edit requests")
                .arg(
                    Arg::new("input")
                        .help("Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_arg())
                .arg(
                    Arg::new("doc")
                        .long("doc")
                        .value_name("ID")
                        .help("Target document id")
                        .default_value(DEFAULT_DOCUMENT_ID),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .value_name("TITLE")
                        .help("Document title (defaults to convert.default_title)"),
                )
                .arg(
                    Arg::new("preview")
                        .long("preview")
                        .help("Apply the requests to an in-memory document and output that document")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("policy")
                        .long("policy")
                        .help("Submission policy used with --preview")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "atomic",
                            "sequential",
                        ])),
                )
                .arg(
                    Arg::new("delay-ms")
                        .long("delay-ms")
                        .value_name("MS")
                        .help("Pause between operations under the sequential policy")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .value_name("FILE")
        .help("Write to FILE instead of stdout")
        .value_hint(ValueHint::FilePath)
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let explicit_config = matches.get_one::<String>("config").map(|s| s.as_str());

    match matches.subcommand() {
        Some(("to-md", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_to_md_command(input, output);
        }
        Some(("to-doc", sub_matches)) => {
            let config = load_cli_config(explicit_config, sub_matches);
            handle_to_doc_command(sub_matches, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_to_md_command(input: &str, output: Option<&str>) {
    let json = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });
    let document = Document::from_json(&json).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let markdown = structured_doc_to_markdown(&document);
    write_output(output, &markdown);
}

fn handle_to_doc_command(sub_matches: &ArgMatches, config: &DocsmdConfig) {
    let input = sub_matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

    let bytes = fs::read(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });
    let markdown = parse_markdown_bytes(&bytes).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let builder = DocumentBuilder::new(BuildOptions::from(&config.convert));
    let built = builder.build(&markdown);
    tracing::info!(
        operations = built.operations.len(),
        unsupported = built.unsupported.len(),
        "built edit operations"
    );

    let serialized = if sub_matches.get_flag("preview") {
        let document_id = sub_matches
            .get_one::<String>("doc")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_DOCUMENT_ID);
        let title = sub_matches
            .get_one::<String>("title")
            .unwrap_or(&config.convert.default_title);
        let policy = SubmissionPolicy::from(&config.submit);

        let mut document = LocalDocument::new(document_id, title.as_str());
        if let Err(e) = submit(
            &mut document,
            document_id,
            &built.operations,
            policy,
            &Cancellation::new(),
        ) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        document.to_document().to_json_pretty()
    } else {
        serde_json::to_string_pretty(&to_batch_request(&built.operations))
            .map_err(|e| docsmd_babel::ConvertError::Document(e.to_string()))
    };

    let serialized = serialized.unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    write_output(output, &serialized);
}

fn write_output(path: Option<&str>, content: &str) {
    match path {
        Some(path) => {
            if let Err(e) = fs::write(path, content) {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            }
        }
        None => println!("{content}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>, sub_matches: &ArgMatches) -> DocsmdConfig {
    let mut loader = Loader::new().with_optional_file("docsmd.toml");
    if let Some(path) = explicit_path {
        loader = loader.with_file(path);
    }

    let policy = sub_matches.get_one::<String>("policy");
    let delay_ms = sub_matches.get_one::<u64>("delay-ms");
    let loader = apply_submit_overrides(loader, policy, delay_ms).unwrap_or_else(|err| {
        eprintln!("Invalid configuration override: {err}");
        std::process::exit(1);
    });

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_submit_overrides(
    mut loader: Loader,
    policy: Option<&String>,
    delay_ms: Option<&u64>,
) -> Result<Loader, docsmd_config::ConfigError> {
    if let Some(policy) = policy {
        loader = loader.set_override("submit.policy", policy.as_str())?;
    }
    if let Some(delay_ms) = delay_ms {
        loader = loader.set_override("submit.delay_ms", *delay_ms)?;
    }
    Ok(loader)
}

use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs.
// Build scripts can't reach into src/, so the argument surface is repeated here.
fn build_cli() -> Command {
    let output = Arg::new("output")
        .long("output")
        .short('o')
        .value_name("FILE")
        .value_hint(ValueHint::FilePath);

    Command::new("docsmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown and structured documents")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("to-md")
                .about("Render a structured document (JSON) as Markdown")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output.clone()),
        )
        .subcommand(
            Command::new("to-doc")
                .about("Convert Markdown into document edit requests")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output)
                .arg(Arg::new("doc").long("doc").value_name("ID"))
                .arg(Arg::new("title").long("title").value_name("TITLE"))
                .arg(Arg::new("preview").long("preview").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("policy")
                        .long("policy")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "atomic",
                            "sequential",
                        ])),
                )
                .arg(Arg::new("delay-ms").long("delay-ms").value_name("MS")),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    generate_to(Bash, &mut cmd, "docsmd", &outdir)?;
    generate_to(Zsh, &mut cmd, "docsmd", &outdir)?;
    generate_to(Fish, &mut cmd, "docsmd", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

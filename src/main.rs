use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, CommandFactory, Parser};
use tracing::{debug, info};

use godzina::config::resolve_config;
use godzina::lexicon::{self, loader::export_builtin};
use godzina::logging::{env_directive, init_tracing, resolve_level};
use godzina::parsing::time_parser::parse_time;
use godzina::{GodzinaError, OutputFormat, PhraseComposer, Result, TimeReport};

#[derive(Parser, Debug)]
#[command(name = "godzina", version)]
#[command(about = "Tells the time in Polish, officially and colloquially", long_about = None)]
struct Cli {
    /// Time to describe on the 24-hour clock, e.g. 17:55
    #[arg(value_name = "HH:MM", required_unless_present = "export_lexicon")]
    time: Option<String>,

    /// Directory with the word-list files (overrides the config file)
    #[arg(long, value_name = "DIR")]
    lexicon_dir: Option<PathBuf>,

    /// Output format: text or json (overrides the config file)
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Configuration file [default: godzina.toml when present]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output on stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Write the builtin word lists into DIR and exit
    #[arg(long, value_name = "DIR", conflicts_with = "time")]
    export_lexicon: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_validation() {
                eprintln!("error: {}\n\n{}", e, Cli::command().render_usage());
            } else {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref())?;
    let level = resolve_level(
        env_directive().as_deref(),
        cli.verbose,
        config.log_level.as_deref(),
    );
    init_tracing(&level)?;

    if let Some(dir) = &cli.export_lexicon {
        export_builtin(dir)?;
        info!(dir = %dir.display(), "exported builtin lexicon");
        return Ok(());
    }

    let input = cli
        .time
        .as_deref()
        .ok_or_else(|| GodzinaError::InvalidTimeFormat(String::new()))?;
    let time = parse_time(input)?;

    let source = config.effective_lexicon_source(cli.lexicon_dir.as_deref());
    let lexicon = lexicon::load(&source)?;
    let report = TimeReport::build(&PhraseComposer::new(&lexicon), time)?;

    let format = config.effective_format(cli.format);
    debug!(%time, ?format, "writing report");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report
        .write_to(format, &mut out)
        .and_then(|_| out.flush())
        .map_err(GodzinaError::Output)?;
    Ok(())
}

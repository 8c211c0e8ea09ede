use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::time::Instant;

use intmul_io::input::read_operands;
use intmul_io::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// One OS thread per unit, in-memory pipes
    Thread,
    /// One child process per unit, stdin/stdout pipes
    Process,
}

#[derive(Debug, Parser)]
#[command(
    name = "intmul",
    version,
    about = "Multiply two equal-length hex integers read from stdin"
)]
struct Cli {
    /// How concurrent units are realized
    #[arg(long, value_enum, default_value_t = Backend::Process)]
    backend: Backend,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Print run telemetry as one JSON line on stderr
    #[arg(long)]
    telemetry_json: bool,

    /// Print input validation failures as JSON on stderr
    #[arg(long)]
    diagnostics_json: bool,

    /// Serve a single unit on stdin/stdout (used by the process backend)
    #[arg(long, hide = true)]
    unit: bool,
}

fn main() {
    let program = program_name();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let rendered = e.to_string();
            let detail = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            let err = WorkerError::InvalidUsage(detail.to_string());
            eprintln!("{}", format_diagnostic(&program, &err));
            process::exit(2);
        }
    };

    init_logger(&program, cli.log_level);

    let code = if cli.unit {
        run_unit(&cli, &program)
    } else {
        run_top_level(&cli, &program)
    };
    process::exit(code);
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "intmul".to_string())
}

fn init_logger(program: &str, level: LevelFilter) {
    let program = program.to_string();
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{program} {}] {} {}",
                process::id(),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn spawner(cli: &Cli) -> anyhow::Result<Box<dyn Spawner>> {
    Ok(match cli.backend {
        Backend::Thread => Box::new(ThreadSpawner::default()),
        Backend::Process => {
            let exe = std::env::current_exe().context("failed to locate the intmul executable")?;
            Box::new(
                ProcessSpawner::new(exe)
                    .args(["--unit", "--backend", "process", "--log-level"])
                    .arg(cli.log_level.to_string()),
            )
        }
    })
}

/// Unit entry contract: two lines in, one line out, diagnostics on stderr only.
fn run_unit(cli: &Cli, program: &str) -> i32 {
    let spawner = match spawner(cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", format_diagnostic(program, format!("{e:#}")));
            return 1;
        }
    };

    match serve(io::stdin().lock(), io::stdout().lock(), spawner.as_ref()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", format_diagnostic(program, &e));
            1
        }
    }
}

fn run_top_level(cli: &Cli, program: &str) -> i32 {
    let started = Instant::now();

    let spawner = match spawner(cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", format_diagnostic(program, format!("{e:#}")));
            return 1;
        }
    };

    let mut telemetry = MultiplyTelemetry::new(spawner.name());
    let result = read_operands(&mut io::stdin().lock())
        .map_err(WorkerError::from)
        .and_then(|pair| multiply_top_level(&pair, spawner.as_ref(), &mut telemetry));
    telemetry.finish(&result, started.elapsed());

    if cli.telemetry_json {
        match serde_json::to_string(&telemetry) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => log::warn!("failed to serialize telemetry: {e}"),
        }
    }

    match result {
        Ok(product) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{product}").and_then(|()| stdout.flush()) {
                eprintln!(
                    "{}",
                    format_diagnostic(program, format!("failed to print product: {e}"))
                );
                return 1;
            }
            0
        }
        Err(WorkerError::Input(e)) if cli.diagnostics_json => {
            match serde_json::to_string(&e) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", format_diagnostic(program, &e)),
            }
            1
        }
        Err(e) => {
            eprintln!("{}", format_diagnostic(program, &e));
            1
        }
    }
}

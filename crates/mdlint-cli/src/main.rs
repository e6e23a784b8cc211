use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use mdlint_core::checker;

struct Args {
    target: PathBuf,
    select: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    extra_ignore: Vec<String>,
}

fn parse_args(argv: &[String]) -> Result<Args> {
    let mut target = None;
    let mut select = None;
    let mut exclude = None;
    let mut extra_ignore = Vec::new();

    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--select" => {
                let value = iter.next().ok_or_else(|| anyhow::anyhow!("--select requires a value"))?;
                select = Some(value.split(',').map(|s| s.trim().to_string()).collect());
            }
            "--exclude" => {
                let value = iter.next().ok_or_else(|| anyhow::anyhow!("--exclude requires a value"))?;
                exclude = Some(value.split(',').map(|s| s.trim().to_string()).collect());
            }
            "--extra-ignore" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--extra-ignore requires a value"))?;
                extra_ignore.extend(value.split(',').map(|s| s.trim().to_string()));
            }
            other if target.is_none() => target = Some(PathBuf::from(other)),
            other => bail!("unexpected argument: {other}"),
        }
    }

    let Some(target) = target else {
        bail!("missing required <path-or-directory> argument");
    };

    Ok(Args {
        target,
        select,
        exclude,
        extra_ignore,
    })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <path-or-directory> [--select CODES] [--exclude CODES] [--extra-ignore NAMES]");
}

fn run() -> Result<bool> {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().cloned().unwrap_or_else(|| "mdlint".to_string());

    let args = match parse_args(&argv[1..]) {
        Ok(args) => args,
        Err(e) => {
            print_usage(&program);
            bail!(e);
        }
    };

    let select: Option<Vec<&str>> = args.select.as_ref().map(|v| v.iter().map(String::as_str).collect());
    let exclude: Option<Vec<&str>> = args.exclude.as_ref().map(|v| v.iter().map(String::as_str).collect());

    let mut any_diagnostics = false;

    if args.target.is_dir() {
        log::debug!("checking directory {}", args.target.display());
        let results = checker::check_directory(
            &args.target,
            select.as_deref(),
            exclude.as_deref(),
            &args.extra_ignore,
        );
        for (path, diagnostics) in results {
            if diagnostics.is_empty() {
                continue;
            }
            any_diagnostics = true;
            for line in diagnostics {
                println!("{line}");
            }
            let _ = path;
        }
    } else {
        log::debug!("checking file {}", args.target.display());
        let diagnostics = checker::check(&args.target, select.as_deref(), exclude.as_deref());
        any_diagnostics = !diagnostics.is_empty();
        for line in diagnostics {
            println!("{line}");
        }
    }

    Ok(any_diagnostics)
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::from(0),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

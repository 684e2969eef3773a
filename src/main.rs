//! Palabra CLI
//!
//! Config generation entry point for the palabra library.
//!
//! # Usage
//!
//! ```bash
//! # Generate a starter config
//! palabra init config config.cfg
//!
//! # Generate for a specific use case
//! palabra init config config.cfg --lang de --pipeline tagger,parser --optimize accuracy
//!
//! # Write to stdout
//! palabra init config -
//!
//! # Fill a partial config with defaults
//! palabra init fill-config base.cfg config.cfg
//!
//! # Show what filling would change
//! palabra init fill-config base.cfg --diff
//! ```

use clap::Parser;
use palabra::cli::{Cli, Command, FillConfigArgs, InitCommand, InitConfigArgs};
use palabra::{
    fill_config, init_config, is_stdout, save_config, Error, FillOptions, InitOptions, Result,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Init(InitCommand::Config(args)) => run_init_config(args, cli.quiet),
        Command::Init(InitCommand::FillConfig(args)) => run_fill_config(args, cli.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_init_config(args: InitConfigArgs, quiet: bool) -> Result<()> {
    let to_stdout = is_stdout(&args.output_file);
    if !to_stdout && args.output_file.exists() && !args.force {
        return Err(Error::OutputExists(args.output_file));
    }
    let opts = InitOptions {
        lang: args.lang,
        pipeline: args.pipeline,
        optimize: args.optimize,
        gpu: args.gpu,
        pretraining: args.pretraining,
        silent: to_stdout || quiet,
    };
    let config = init_config(&opts)?;
    save_config(&config, &args.output_file, opts.silent)
}

fn run_fill_config(args: FillConfigArgs, quiet: bool) -> Result<()> {
    let opts = FillOptions {
        distillation: args.distillation,
        pretraining: args.pretraining,
        diff: args.diff,
        silent: quiet,
    };
    fill_config(&args.output_file, &args.base_path, &opts)?;
    Ok(())
}

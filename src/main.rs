use clap::Parser;
use colored::*;

use isbn_checker::cli::Cli;
use isbn_checker::commands::{self, CommandContext};
use isbn_checker::config::Config;
use isbn_checker::error::Result;
use isbn_checker::ui;

fn main() {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "[X]".red().bold(), e.to_string().red());
            2
        }
    };

    ui::flush_output(&mut std::io::stdout());
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<i32> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    ui::debug(cli.debug, format!("{:?}", cli));

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => {
                Config::default().save_to(path)?;
                path.clone()
            }
            None => Config::init()?,
        };
        println!("{} Wrote default config to {}", "[OK]".green().bold(), path.display());
        return Ok(0);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if !config.color {
        colored::control::set_override(false);
    }

    ui::debug(cli.debug, format!("{:?}", config));

    let ctx = CommandContext::new(cli, &config);

    if cli.is_batch() {
        let summary = commands::run_batch(cli.file.as_deref(), &ctx)?;
        return Ok(commands::exit_code(&summary));
    }

    if !cli.isbns.is_empty() {
        let summary = commands::run_check(&cli.isbns, &ctx)?;
        return Ok(commands::exit_code(&summary));
    }

    commands::run_menu(&ctx)?;
    Ok(0)
}

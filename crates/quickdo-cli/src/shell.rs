use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use quickdo_core::api::TaskService;
use quickdo_core::config::Config;

use crate::commands;
use crate::Command;

/// Re-parses one tokenized shell line through the same subcommand surface
/// as the one-shot CLI.
#[derive(Parser)]
#[command(name = "quickdo", disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

/// Line-oriented read-eval loop. Every iteration is independent: listings
/// are refetched per command and nothing is cached across lines. Errors are
/// printed and the loop continues; `exit`, `quit` or end-of-input leave it.
pub fn run(service: &dyn TaskService, config: &Config) -> Result<()> {
    println!("quickdo shell; 'help' lists commands, 'exit' leaves.");
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("quickdo> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input.
            println!();
            break;
        }

        let tokens = match shell_words::split(line.trim()) {
            Ok(tokens) => tokens,
            Err(err) => {
                println!("Could not parse input: {err}");
                continue;
            }
        };
        let Some(first) = tokens.first() else {
            continue;
        };
        match first.as_str() {
            "exit" | "quit" => break,
            "help" => {
                print_help();
                continue;
            }
            _ => {}
        }

        match ShellLine::try_parse_from(std::iter::once("quickdo".to_string()).chain(tokens)) {
            Ok(parsed) => {
                if let Err(err) = commands::dispatch(service, config, parsed.command) {
                    println!("Command failed: {err}");
                }
            }
            Err(err) => println!("{err}"),
        }
    }
    Ok(())
}

fn print_help() {
    let mut help = ShellLine::command();
    if let Err(err) = help.print_help() {
        println!("Could not render help: {err}");
    }
    println!("  exit | quit    Leave the shell");
}

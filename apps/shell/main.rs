use std::sync::Arc;
use clap::Parser;
use reedline::{Reedline, Signal};

mod cmds;
mod prompt;
use prompt::ShellPrompt;

use contacts::{
    configuration as cfg,
    logger,
    APIClient,
    App,
    Route,
};

#[derive(Parser, Debug)]
#[command(name = "Contacts")]
#[command(version = "1.0")]
#[command(about = "Contact Manager Shell", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Base url of the contacts backend, overrides the configuration file
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// The page to open first
    #[arg(short, long, value_name = "PATH", default_value = "/")]
    path: String,
}

#[tokio::main]
async fn main() {
    let opts = Options::parse();

    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = builder.load(path) {
            eprintln!("Loading config error: {e}");
            return;
        }
    }
    if let Some(url) = opts.url.as_ref() {
        builder.with_api_url(url);
    }

    let cfg = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Building config error: {e}");
            return;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    if let Err(e) = logger::setup(cfg.log_level(), cfg.log_file()) {
        eprintln!("Setting up logger error: {e}");
        return;
    }

    let route = match opts.path.parse::<Route>() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let api = match APIClient::from_config(cfg.as_ref()) {
        Ok(v) => Arc::new(v),
        Err(e) => {
            eprintln!("Creating contacts api client error: {e}");
            return;
        }
    };

    println!("Welcome to the contact manager shell. Type 'help' for commands, 'exit' to quit.\n");

    let mut app = App::start(api, route).await;
    let mut cli = cmds::build_cli();
    let mut rl = Reedline::create();

    println!("{}", app);

    loop {
        let prompt = ShellPrompt::new(&app.route().path());
        let Ok(sig) = rl.read_line(&prompt) else {
            println!("\n Fatal error occurred.");
            continue;
        };

        match sig {
            Signal::Success(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                match input {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    },
                    "help" => {
                        _ = cli.print_long_help();
                        continue;
                    },
                    _ => {}
                }

                let args: Vec<String> = input.split_whitespace()
                    .map(|s| s.to_string())
                    .collect();

                if args[0] == "help" && args.len() > 1 {
                    _ = match cli.find_subcommand_mut(args[1].as_str()) {
                        Some(cmd) => cmd.print_long_help(),
                        None => cli.print_long_help(),
                    };
                    continue;
                }

                let matches = match cli.clone().try_get_matches_from(&args) {
                    Ok(v) => v,
                    Err(_) => {
                        println!("Error: command not found: '{}'", args.join(" "));
                        continue;
                    }
                };

                match cmds::to_action(&matches) {
                    Ok(Some(action)) => {
                        if let Err(e) = app.dispatch(action).await {
                            println!("Error: {e}");
                            continue;
                        }
                    },
                    Ok(None) => {},
                    Err(e) => {
                        println!("Error: {e}");
                        continue;
                    }
                }
                println!("{}", app);
            }
            Signal::CtrlC | Signal::CtrlD => {
                println!("\nGoodbye!");
                break;
            }
        }
    }

    logger::teardown();
}

//! origin: trace a command name through shell builtins, aliases and PATH.
//!
//! Usage: origin [-v] [--json] [--dump-config] <COMMAND>
//!
//! Exit status is 0 for every finished walk, including "no match" and alias
//! cycles; 1 for fatal configuration errors; 2 for usage errors.

use clap::Parser;
use cmd_origin::config::{Config, Environment};
use cmd_origin::{Walker, logging, report};

#[derive(Parser)]
#[command(name = "origin")]
#[command(about = "Show what running a command name actually does")]
#[command(version)]
struct Cli {
    /// Log each lookup to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Print the walk as JSON
    #[arg(long)]
    json: bool,

    /// Print the merged configuration and exit
    #[arg(long = "dump-config")]
    dump_config: bool,

    /// Command name to resolve
    #[arg(required_unless_present = "dump_config")]
    command: Option<String>,
}

fn main() {
    let args = Cli::parse();
    let config = Config::load();

    if args.dump_config {
        print!("{}", config.to_toml());
        return;
    }

    let command = args.command.unwrap_or_default();

    logging::init(args.verbose, &config.settings);
    let env = Environment::from_process();
    let walker = Walker::from_config(&env, &config.settings);

    let walk = match walker.walk(&command) {
        Ok(walk) => walk,
        Err(e) => {
            eprintln!("origin: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", report::render_json(&walk));
    } else {
        for line in report::render(&walk) {
            println!("{line}");
        }
    }
}

use std::process;

use anyhow::Result;
use clap::Parser;

use savings_challenge::cli::{handle_challenge_command, ChallengeArgs};
use savings_challenge::config::SavingsPaths;
use savings_challenge::logging;

#[derive(Parser)]
#[command(
    name = "savings",
    version,
    about = "Daily savings challenge calculator",
    long_about = "Works out how much a daily savings challenge needs over a range of days. \
                  On challenge day N you put away N+1 pence. Days may be given as numbers \
                  or as dates such as 26JAN."
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    challenge: ChallengeArgs,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.challenge) {
        println!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: ChallengeArgs) -> Result<()> {
    let paths = SavingsPaths::new()?;
    handle_challenge_command(&paths, args)?;
    Ok(())
}

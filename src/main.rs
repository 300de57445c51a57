use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use prepaid_ledger::session::{Reply, Session};

#[derive(Parser)]
#[command(
    name = "prepaid",
    version,
    about = "Balance and categorized-spending tracker for prepaid-card accounts",
    long_about = "Tracks prepaid-card balances: deposits, category-tagged spending, \
                  inter-account transfers, and transaction history. Starts an \
                  interactive session; type 'help' for the command list."
)]
struct Cli {
    /// Descriptive name for the ledger
    #[arg(short, long, default_value = "Prepaid Card Ledger")]
    name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut session = Session::new(cli.name.clone());

    println!("{} - interactive session", cli.name);
    println!("Type 'help' for commands, 'quit' to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input ends the session
            break;
        }

        match session.execute(&line) {
            Reply::Message(message) => {
                if !message.is_empty() {
                    println!("{}", message);
                }
            }
            Reply::Quit => break,
        }
    }

    println!("Session ended.");
    Ok(())
}

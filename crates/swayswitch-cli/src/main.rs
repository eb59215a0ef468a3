//! swayswitch CLI entry point

use clap::Parser;
use swayswitch_cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    if let Err(e) = swayswitch_cli::run(cli, &mut stdout.lock()).await {
        eprintln!("error: {}", e.user_message());
        std::process::exit(1);
    }
}

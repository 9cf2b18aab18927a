use std::sync::Arc;

use clap::Parser;

use tabula::consts::DEFAULT_RESET_URL;
use tabula::dispatch::http::HttpDispatcher;
use tabula::report;
use tabula::trigger::ResetTrigger;

#[derive(Parser)]
#[command(name = "tabula", version, about = "A clean slate, on demand.")]
struct Cli {
    /// Reset endpoint of the local test server
    #[arg(short, long, default_value = DEFAULT_RESET_URL)]
    url: String,

    /// Emit the outcome as JSON instead of the console line
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let trigger = ResetTrigger::new(Arc::new(HttpDispatcher::new()), cli.url);

    // The callback does all the reporting; the await only keeps the process
    // alive until the single in-flight request finishes. Both branches
    // exit 0: the outcome lives in the output, not the exit code.
    let json = cli.json;
    trigger
        .spawn(move |outcome| report::emit(&outcome, json))
        .await?;

    Ok(())
}

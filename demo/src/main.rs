use anyhow::Result;
use slotted_demo::{Console, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // initialize tracing; stdout is reserved for the demo transcript
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    run(&Console::Stdout)
}

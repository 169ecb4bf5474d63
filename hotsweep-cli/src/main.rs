use anyhow::Result;

fn main() -> Result<()> {
    hotsweep_cli::run_cli()
}

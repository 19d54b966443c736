use tooltip_updater::{run, CliOptions};

fn main() -> anyhow::Result<()> {
    run(CliOptions::default())
}

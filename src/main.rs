mod app;
mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::parse();
    app::run(cli)
}

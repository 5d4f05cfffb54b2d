fn main() -> anyhow::Result<()> {
    lsdkit::cli::run_cli()
}

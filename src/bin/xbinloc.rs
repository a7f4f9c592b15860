fn main() -> anyhow::Result<()> {
    xbinloc::cli::run_cli()
}

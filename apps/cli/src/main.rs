fn main() -> anyhow::Result<()> {
    mjolnir::run()
}

use fibgen_cli::run;

fn main() -> anyhow::Result<()> {
    run()
}

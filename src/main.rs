use planpro::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}

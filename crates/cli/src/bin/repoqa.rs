use anyhow::Result;

fn main() -> Result<()> {
    repoqa_cli::main_entry()
}

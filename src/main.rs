use anyhow::Result;

fn main() -> Result<()> {
    let args = ext_move::cli::parse();
    ext_move::app::run(args)
}

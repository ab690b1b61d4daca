pub fn main() -> miette::Result<()> {
    fibdemo_cli::execute()
}

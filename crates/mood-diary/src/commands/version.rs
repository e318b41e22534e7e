pub fn run() -> anyhow::Result<()> {
    println!("mood-diary {}", env!("CARGO_PKG_VERSION"));
    println!("A gentle journal that listens to how you feel");
    Ok(())
}

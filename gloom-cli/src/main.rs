fn main() -> std::io::Result<()> {
    gloom_cli::main()
}

fn main() {
    clarion::cli::run();
}

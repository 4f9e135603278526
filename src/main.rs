fn main() {
    perfopt::app::cli::run();
}

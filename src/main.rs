fn main() {
    cygterm::app::cli::run();
}

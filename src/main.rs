fn main() {
    explorer_launcher::run()
}

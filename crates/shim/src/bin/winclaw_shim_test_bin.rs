fn main() {
    std::process::exit(winclaw_shim::run());
}

fn main() {
    std::process::exit(ocr_overlay::run());
}

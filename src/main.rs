fn main() {
    let return_code = vid_dct_hash::run_app();
    std::process::exit(return_code)
}

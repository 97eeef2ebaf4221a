fn main() {
    multiversx_sc_meta_lib::cli_main::<bounty_market::AbiProvider>();
}

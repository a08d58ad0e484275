fn main() {
    // ESP-IDF build metadata is only emitted when targeting the device.
    if std::env::var("CARGO_FEATURE_ESPIDF").is_ok() {
        embuild::espidf::sysenv::output();
    }
}

fn main() {
    // Host builds (tests, fuzzing) carry no ESP-IDF environment to export.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}

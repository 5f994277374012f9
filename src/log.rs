pub fn init() {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter(None, log::LevelFilter::Info);
    }
    builder.init();
}

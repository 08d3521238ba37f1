mod region_code;
mod mock_backend;

static ONCE: std::sync::Once = std::sync::Once::new();

/// Installs a trace level logger once for the whole test binary.
pub(crate) fn init_logging() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}

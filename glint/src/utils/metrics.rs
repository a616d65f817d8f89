#[cfg(feature = "metrics")]
pub(crate) fn metric<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let tt = std::time::Instant::now();
    let result = f();

    log::info!("{} took {}", name, humantime::format_duration(tt.elapsed()));

    result
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn metric<T>(_name: &str, f: impl FnOnce() -> T) -> T {
    f()
}

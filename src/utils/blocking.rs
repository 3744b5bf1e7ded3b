use std::future::Future;

/// Drives a future to completion on a fresh current-thread runtime.
///
/// Backs the `*_blocking` index operations. Must not be called from within an
/// async context; tokio panics on nested runtimes.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, std::io::Error> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_on_returns_future_output() {
        let out = block_on(async { 41 + 1 }).unwrap();
        assert_eq!(out, 42);
    }
}

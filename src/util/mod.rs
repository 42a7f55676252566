use std::sync::atomic::{AtomicUsize, Ordering};

pub mod assets;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Process-unique identifier such as `toast-7` or `holding-3`.
pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_prefixed_and_unique() {
        let first = generate_id("holding");
        let second = generate_id("holding");
        assert!(first.starts_with("holding-"));
        assert_ne!(first, second);
    }
}

pub mod comparator;
pub mod comparators;
pub mod error;
pub mod optional;
pub mod ordered;

pub use comparator::{by, natural, Comparator};
pub use error::{Error, Result};
pub use optional::optional_lift;
pub use ordered::Ordered;

#[cfg(test)]
#[ctor::ctor]
fn init() {
    color_backtrace::install();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .with_file(true)
        .with_level(true)
        .without_time()
        .with_thread_ids(true)
        .init();
}

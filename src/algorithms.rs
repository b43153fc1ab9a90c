pub mod decomposition;

#[doc(inline)]
pub use decomposition::{convex_decomposition, Decomposer};

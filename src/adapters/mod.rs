// Adapters layer: concrete implementations of the domain ports.

pub mod xlsx;

pub use xlsx::XlsxWorkbook;

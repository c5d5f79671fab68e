pub mod breakdown;

pub use breakdown::generate_breakdown;

pub mod chunker;
pub mod narrator;


pub use narrator::Narrator;

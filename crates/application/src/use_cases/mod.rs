pub mod health;

// Re-export use cases
pub use health::DualStackCheckUseCase;

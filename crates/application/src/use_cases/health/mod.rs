pub mod dual_stack_check;

pub use dual_stack_check::DualStackCheckUseCase;

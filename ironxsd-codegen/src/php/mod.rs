//! PHP code generation modules.

pub mod class;
pub mod hints;
pub mod validation;

pub use class::ClassGenerator;
pub use hints::{TypeHint, align_type_hints};
pub use validation::render_validation;

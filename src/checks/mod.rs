pub mod braces;
pub mod declaration;
pub mod statements;

pub use braces::is_balanced;
pub use declaration::{DeclarationDetector, Detection};
pub use statements::StatementProfile;

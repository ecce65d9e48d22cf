//! TypeScript declaration emitter for curried signatures.

pub mod type_printer;
pub use type_printer::TypePrinter;

pub mod declaration_emitter;
pub use declaration_emitter::{DeclarationEmitter, EmitterOptions};

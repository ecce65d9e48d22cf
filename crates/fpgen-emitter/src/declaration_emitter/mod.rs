//! Declaration File (.d.ts) Emitter
//!
//! Renders curried signatures into an ambient module declaration.
//!
//! ```typescript
//! declare module 'lodash/fp' {
//!   type ObjectOf<T> = { [key: string]: T } | { [key: number]: T };
//!   type CollectionOf<T> = ObjectOf<T> | T[];
//!
//!   interface Curry1<A, Z> {
//!     (arg1: A): Z;
//!   }
//!   ...
//!   type Iteratee1<T, R> = (value: T) => R;
//!   type Iteratee2<T, R> = (accumulator: R, value: T) => R;
//!
//!   // lodash/fp/map
//!   export function map<A, B, Z>(iteratee: Iteratee1<A, Z>): Curry1<CollectionOf<B>, Z[]>;
//!   export function map<A, B, Z>(iteratee: Iteratee1<A, Z>, collection: CollectionOf<B>): Z[];
//!   // lodash/fp/pluck
//!   export const pluck: typeof map;
//!
//! }
//! ```
//!
//! No computation happens here: every shape comes from the solver.

use fpgen_common::limits::{INDENT_UNIT, OUTPUT_BUFFER_CAPACITY};
use fpgen_metadata::AliasBinding;
use fpgen_solver::{ContinuationDefinition, CurriedFunction, CurryOverload, IterateeArity};
use tracing::debug;

use crate::type_printer::{COLLECTION_ALIAS, OBJECT_ALIAS, TypePrinter};

/// Where the declarations are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterOptions {
    /// Module specifier of the `declare module` block.
    pub module_name: String,
    /// Prefix of the marker comment naming each source function.
    pub doc_prefix: String,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        EmitterOptions {
            module_name: "lodash/fp".to_string(),
            doc_prefix: "lodash/fp/".to_string(),
        }
    }
}

/// Declaration emitter for curried typings.
pub struct DeclarationEmitter {
    options: EmitterOptions,
    printer: TypePrinter,
    writer: String,
    indent_level: u32,
}

impl DeclarationEmitter {
    pub fn new(options: EmitterOptions) -> Self {
        DeclarationEmitter {
            options,
            printer: TypePrinter::new(),
            writer: String::with_capacity(OUTPUT_BUFFER_CAPACITY),
            indent_level: 0,
        }
    }

    /// Render one function block at module indentation.
    ///
    /// Blocks are independent of each other, so they can be rendered on any
    /// thread and concatenated in order afterwards.
    pub fn function_block(options: &EmitterOptions, function: &CurriedFunction) -> String {
        let mut emitter = DeclarationEmitter::new(options.clone());
        emitter.indent_level = 1;
        emitter.emit_function(function);
        emitter.take_output()
    }

    /// Render a whole module: header, helpers, every function, footer.
    pub fn emit_module(
        &mut self,
        continuations: &[ContinuationDefinition],
        functions: &[CurriedFunction],
    ) -> String {
        self.emit_header();
        self.emit_helpers(continuations);
        for function in functions {
            self.emit_function(function);
        }
        self.emit_footer();
        self.take_output()
    }

    /// Everything written so far; the buffer is left empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.writer)
    }

    pub fn emit_header(&mut self) {
        let line = format!("declare module '{}' {{", self.options.module_name);
        self.emit_statement(&line);
        self.increase_indent();
    }

    pub fn emit_footer(&mut self) {
        self.decrease_indent();
        self.write_indent();
        self.write("}");
        self.write_line();
    }

    /// Container aliases, continuation interfaces and iteratee aliases.
    pub fn emit_helpers(&mut self, continuations: &[ContinuationDefinition]) {
        self.emit_statement(&format!(
            "type {OBJECT_ALIAS}<T> = {{ [key: string]: T }} | {{ [key: number]: T }};"
        ));
        self.emit_statement(&format!(
            "type {COLLECTION_ALIAS}<T> = {OBJECT_ALIAS}<T> | T[];"
        ));
        self.write_line();

        for definition in continuations {
            self.emit_continuation(definition);
            self.write_line();
        }

        for arity in [IterateeArity::Unary, IterateeArity::Binary] {
            let body = self.printer.print_callback(arity, "T", "R");
            self.emit_statement(&format!(
                "type {}<T, R> = {body};",
                TypePrinter::iteratee_alias(arity)
            ));
        }
        self.write_line();
    }

    fn emit_continuation(&mut self, definition: &ContinuationDefinition) {
        let header = format!(
            "interface {}{} {{",
            TypePrinter::continuation_name(definition.arity),
            self.printer.print_type_params(&definition.type_params)
        );
        self.emit_statement(&header);
        self.increase_indent();
        for signature in &definition.signatures {
            let line = format!("{};", self.print_call_signature(signature));
            self.emit_statement(&line);
        }
        self.decrease_indent();
        self.emit_statement("}");
    }

    /// Marker comment, one overload per line, then the alias statements.
    pub fn emit_function(&mut self, function: &CurriedFunction) {
        let name = function.name();
        self.emit_marker(name);

        let type_params = self.printer.print_type_params(&function.plan.type_params());
        for overload in &function.overloads {
            let line = format!(
                "export function {name}{type_params}{};",
                self.print_call_signature(overload)
            );
            self.emit_statement(&line);
        }

        for binding in &function.aliases {
            self.emit_alias(binding);
        }
        self.write_line();

        debug!(
            function = name,
            overloads = function.overloads.len(),
            aliases = function.aliases.len(),
            "emitted declarations"
        );
    }

    pub fn emit_alias(&mut self, binding: &AliasBinding) {
        self.emit_marker(&binding.alias);
        let line = format!(
            "export const {}: typeof {};",
            binding.alias, binding.target
        );
        self.emit_statement(&line);
    }

    fn emit_marker(&mut self, name: &str) {
        let line = format!("// {}{name}", self.options.doc_prefix);
        self.emit_statement(&line);
    }

    /// `(iteratee: Iteratee1<A, Z>, collection: CollectionOf<B>): Z[]`
    fn print_call_signature(&self, overload: &CurryOverload) -> String {
        let params: Vec<String> = overload
            .parameters
            .iter()
            .map(|slot| format!("{}: {}", slot.name, self.printer.print_type(&slot.ty)))
            .collect();
        format!(
            "({}): {}",
            params.join(", "),
            self.printer.print_type(&overload.return_type)
        )
    }

    // =========================================================================
    // Writer helpers
    // =========================================================================

    fn emit_statement(&mut self, text: &str) {
        self.write_indent();
        self.write(text);
        self.write_line();
    }

    fn write(&mut self, s: &str) {
        self.writer.push_str(s);
    }

    fn write_line(&mut self) {
        self.writer.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.writer.push_str(INDENT_UNIT);
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/declaration_emitter_tests.rs"]
mod tests;

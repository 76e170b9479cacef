//! Per-module declaration table
//!
//! One pass over the whole statement tree collects every identifier a later
//! export resolution step may need: `const`/`let` declarators, function
//! declarations, and all bindings introduced by import statements. Import
//! bindings capture the module specifier and original (pre-alias) name at
//! collection time, so resolution never has to walk back up the tree.

use oxc_ast::ast::*;
use std::collections::HashMap;

/// A declaring node for one top-level identifier
#[derive(Clone, Copy)]
pub enum Declared<'a> {
    /// `const x = ...` / `let x` declarator
    Variable(&'a VariableDeclarator<'a>),
    /// `function f() {}` declaration
    Function(&'a Function<'a>),
    /// `import x from 'mod'`
    ImportDefault { source: &'a str },
    /// `import { orig as local } from 'mod'`
    ImportNamed { source: &'a str, imported: &'a str },
    /// `import * as ns from 'mod'`
    ImportNamespace { source: &'a str },
}

/// Mapping from identifier name to its declaring node within one module.
/// Shadowing is not modeled; the last declaration of a name wins.
pub struct DeclarationTable<'a> {
    entries: HashMap<String, Declared<'a>>,
}

impl<'a> DeclarationTable<'a> {
    /// Collect every declaration reachable from the program body
    pub fn build(program: &'a Program<'a>) -> Self {
        let mut table = Self {
            entries: HashMap::new(),
        };
        for stmt in &program.body {
            table.collect_statement(stmt);
        }
        table
    }

    /// Look up the declaring node for an identifier
    pub fn get(&self, name: &str) -> Option<Declared<'a>> {
        self.entries.get(name).copied()
    }

    fn insert(&mut self, name: &str, declared: Declared<'a>) {
        self.entries.insert(name.to_string(), declared);
    }

    fn collect_statement(&mut self, stmt: &'a Statement<'a>) {
        match stmt {
            Statement::VariableDeclaration(decl) => self.collect_variable_declaration(decl),
            Statement::FunctionDeclaration(func) => self.collect_function(func),
            Statement::ImportDeclaration(decl) => self.collect_import(decl),
            Statement::ExportNamedDeclaration(decl) => {
                if let Some(declaration) = &decl.declaration {
                    self.collect_declaration(declaration);
                }
            }
            Statement::ExportDefaultDeclaration(decl) => {
                if let ExportDefaultDeclarationKind::FunctionDeclaration(func) = &decl.declaration {
                    self.collect_function(func);
                }
            }
            Statement::BlockStatement(block) => {
                for stmt in &block.body {
                    self.collect_statement(stmt);
                }
            }
            Statement::IfStatement(stmt) => {
                self.collect_statement(&stmt.consequent);
                if let Some(alternate) = &stmt.alternate {
                    self.collect_statement(alternate);
                }
            }
            Statement::ForStatement(stmt) => {
                if let Some(ForStatementInit::VariableDeclaration(decl)) = &stmt.init {
                    self.collect_variable_declaration(decl);
                }
                self.collect_statement(&stmt.body);
            }
            Statement::ForInStatement(stmt) => {
                if let ForStatementLeft::VariableDeclaration(decl) = &stmt.left {
                    self.collect_variable_declaration(decl);
                }
                self.collect_statement(&stmt.body);
            }
            Statement::ForOfStatement(stmt) => {
                if let ForStatementLeft::VariableDeclaration(decl) = &stmt.left {
                    self.collect_variable_declaration(decl);
                }
                self.collect_statement(&stmt.body);
            }
            Statement::WhileStatement(stmt) => self.collect_statement(&stmt.body),
            Statement::DoWhileStatement(stmt) => self.collect_statement(&stmt.body),
            Statement::LabeledStatement(stmt) => self.collect_statement(&stmt.body),
            Statement::TryStatement(stmt) => {
                for stmt in &stmt.block.body {
                    self.collect_statement(stmt);
                }
                if let Some(handler) = &stmt.handler {
                    for stmt in &handler.body.body {
                        self.collect_statement(stmt);
                    }
                }
                if let Some(finalizer) = &stmt.finalizer {
                    for stmt in &finalizer.body {
                        self.collect_statement(stmt);
                    }
                }
            }
            Statement::SwitchStatement(stmt) => {
                for case in &stmt.cases {
                    for stmt in &case.consequent {
                        self.collect_statement(stmt);
                    }
                }
            }
            _ => {}
        }
    }

    fn collect_declaration(&mut self, declaration: &'a Declaration<'a>) {
        match declaration {
            Declaration::VariableDeclaration(decl) => self.collect_variable_declaration(decl),
            Declaration::FunctionDeclaration(func) => self.collect_function(func),
            _ => {}
        }
    }

    fn collect_variable_declaration(&mut self, decl: &'a VariableDeclaration<'a>) {
        for declarator in &decl.declarations {
            if let BindingPatternKind::BindingIdentifier(id) = &declarator.id.kind {
                self.insert(id.name.as_str(), Declared::Variable(declarator));
            }
            // Declarations nested inside function-valued initializers are
            // referenceable by name, so descend into their bodies too.
            match &declarator.init {
                Some(Expression::FunctionExpression(func)) => {
                    if let Some(body) = &func.body {
                        self.collect_function_body(body);
                    }
                }
                Some(Expression::ArrowFunctionExpression(arrow)) => {
                    self.collect_function_body(&arrow.body);
                }
                _ => {}
            }
        }
    }

    fn collect_function(&mut self, func: &'a Function<'a>) {
        if let Some(id) = &func.id {
            self.insert(id.name.as_str(), Declared::Function(func));
        }
        if let Some(body) = &func.body {
            self.collect_function_body(body);
        }
    }

    fn collect_function_body(&mut self, body: &'a FunctionBody<'a>) {
        for stmt in &body.statements {
            self.collect_statement(stmt);
        }
    }

    fn collect_import(&mut self, decl: &'a ImportDeclaration<'a>) {
        let source = decl.source.value.as_str();
        let Some(specifiers) = &decl.specifiers else {
            return;
        };
        for specifier in specifiers {
            match specifier {
                ImportDeclarationSpecifier::ImportSpecifier(spec) => {
                    self.insert(
                        spec.local.name.as_str(),
                        Declared::ImportNamed {
                            source,
                            imported: spec.imported.name().as_str(),
                        },
                    );
                }
                ImportDeclarationSpecifier::ImportDefaultSpecifier(spec) => {
                    self.insert(spec.local.name.as_str(), Declared::ImportDefault { source });
                }
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(spec) => {
                    self.insert(spec.local.name.as_str(), Declared::ImportNamespace { source });
                }
            }
        }
    }
}

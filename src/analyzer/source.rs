//! Source parsing wrapper using OXC

use oxc_allocator::Allocator;
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::ParseOptions;
use oxc_span::SourceType;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// Thread-safe allocator pool for reuse across parses
pub struct AllocatorPool {
    allocators: Arc<RwLock<Vec<Allocator>>>,
}

impl AllocatorPool {
    /// Create a new allocator pool
    pub fn new(size: usize) -> Self {
        let mut allocators = Vec::with_capacity(size);
        for _ in 0..size {
            allocators.push(Allocator::default());
        }
        Self {
            allocators: Arc::new(RwLock::new(allocators)),
        }
    }

    /// Take an allocator from the pool
    pub fn take(&self) -> Option<Allocator> {
        self.allocators.write().pop()
    }

    /// Return an allocator to the pool
    pub fn return_allocator(&self, allocator: Allocator) {
        self.allocators.write().push(allocator);
    }
}

/// Parser front-end shared across the cross-module recursion of one
/// analysis invocation. Holds no analysis state, only arena allocators.
pub struct SourceParser {
    parse_options: ParseOptions,
    allocator_pool: AllocatorPool,
}

impl SourceParser {
    /// Create a new source parser
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions {
                parse_regular_expression: true,
                ..ParseOptions::default()
            },
            allocator_pool: AllocatorPool::new(num_cpus::get()),
        }
    }

    /// Parse options to hand to the OXC parser
    pub fn options(&self) -> ParseOptions {
        self.parse_options.clone()
    }

    /// Get or create an allocator
    pub fn take_allocator(&self) -> Allocator {
        self.allocator_pool.take().unwrap_or_default()
    }

    /// Return an allocator to the pool for reuse
    pub fn return_allocator(&self, allocator: Allocator) {
        self.allocator_pool.return_allocator(allocator);
    }
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Determine the source type for a file path, defaulting to TypeScript for
/// paths without a recognized extension (the analyzer accepts in-memory
/// entry text whose path may not exist on disk)
pub fn source_type_for(path: &Path) -> SourceType {
    SourceType::from_path(path).unwrap_or_else(|_| SourceType::ts())
}

/// Render parser diagnostics as plain strings
pub fn render_diagnostics(errors: &[OxcDiagnostic]) -> Vec<String> {
    errors.iter().map(|e| format!("{}", e)).collect()
}

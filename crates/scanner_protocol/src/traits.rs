//! The capability trait structural scanners implement.
//!
//! The discovery core drives a [`StructuralScanner`] over every candidate in
//! a run; it depends on this trait only and never on a concrete scanner, so
//! orchestration can be tested against a canned double and the real parser
//! can be swapped without touching the core.

use crate::error::ScanError;
use crate::table::MetadataTable;
use crate::types::{Candidate, ExtensionDescriptor};

/// Outcome of exploring one candidate, when exploration itself succeeded.
#[derive(Debug, Clone)]
pub enum Exploration {
    /// The candidate is a valid extension artifact. Descriptors are returned
    /// in the order the scanner resolved them; the core preserves that order
    /// in its output.
    Resolved(Vec<ExtensionDescriptor>),

    /// The candidate is structurally sound but contains no extension. It is
    /// skipped silently and contributes no descriptors.
    NotAnExtension,
}

/// A structural scanner inspects one candidate's compiled units without
/// executing any of them.
///
/// **Contract**: `explore` must treat the shared [`MetadataTable`] as
/// append-only - it may record new entries but never read back and rewrite
/// entries from other candidates. The table is the only cross-candidate
/// channel; descriptors produced for one candidate are never visible to the
/// exploration of another.
///
/// **Failure classification** is the scanner's responsibility: anything
/// attributable to the artifact's own structure must surface as
/// [`ScanError::Invalid`] so the run can continue past it; genuine I/O or
/// internal faults must use the fatal variants so the run aborts rather than
/// returning unreliable results.
///
/// # Example
///
/// ```rust
/// use quarry_scanner_protocol::{
///     Candidate, Exploration, MetadataTable, ScanError, StructuralScanner,
/// };
///
/// /// A scanner that never finds anything.
/// struct NullScanner;
///
/// impl StructuralScanner for NullScanner {
///     fn key(&self) -> &str {
///         "null"
///     }
///
///     fn explore(
///         &self,
///         _candidate: &Candidate,
///         _table: &mut MetadataTable,
///     ) -> Result<Exploration, ScanError> {
///         Ok(Exploration::NotAnExtension)
///     }
/// }
/// ```
pub trait StructuralScanner {
    /// Stable identifier for this scanner.
    ///
    /// Recorded as `resolved_by` on every descriptor it produces. Use
    /// kebab-case, no whitespace, stable across versions.
    fn key(&self) -> &str;

    /// Explore one candidate, appending findings into the shared table.
    ///
    /// Called exactly once per candidate per run, in candidate accumulation
    /// order. Blocking I/O is expected; the pipeline is synchronous.
    fn explore(
        &self,
        candidate: &Candidate,
        table: &mut MetadataTable,
    ) -> Result<Exploration, ScanError>;
}

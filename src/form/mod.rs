// ============================================================================
// Form Module
// Owner-side bookkeeping of canonical field values
// ============================================================================

mod values;

pub use values::FormValues;

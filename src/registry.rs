// 📇 Tax Type Registry - Lookup surface over the closed label set
//
// Unlike the mutable entity registries this pattern comes from, the tax-type
// set is fixed at compile time, so the registry needs no interior storage:
// it is a zero-cost view over `TaxType::ALL`.

use crate::tax_type::TaxType;

// ============================================================================
// TAX TYPE REGISTRY
// ============================================================================

/// Registry of all recognized tax types.
///
/// Process-wide constant state: initialized before any reader observes it,
/// never mutated, safe for unsynchronized concurrent reads from any number
/// of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxTypeRegistry;

impl TaxTypeRegistry {
    /// Create the registry view.
    ///
    /// Intentionally zero-sized: the closed set lives in `TaxType::ALL`,
    /// so there is no state to seed or store.
    pub fn new() -> Self {
        TaxTypeRegistry
    }

    /// All registered tax types, in declaration order.
    pub fn all(&self) -> &'static [TaxType] {
        &TaxType::ALL
    }

    /// Resolve a stable string value back to its tax type.
    ///
    /// Returns `None` for anything outside the closed set, including
    /// case variants of the recognized values.
    pub fn get(&self, value: &str) -> Option<TaxType> {
        TaxType::ALL.iter().copied().find(|t| t.as_str() == value)
    }

    /// Check whether a candidate string is a registered tax-type value.
    pub fn contains(&self, candidate: &str) -> bool {
        self.get(candidate).is_some()
    }

    /// Number of registered tax types.
    pub fn count(&self) -> usize {
        TaxType::ALL.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Batch validation utilities.
//!
//! Service addresses are derived from file names alone, so two schema files
//! can end up routing to the same address. Nothing in the descriptor set
//! prevents this; the registry below only reports it.

use crate::ir::SchemaFile;
use std::collections::HashMap;

/// Two schema files that derived the same default service address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCollision {
    /// The shared address.
    pub address: String,
    /// File that claimed the address first.
    pub first: String,
    /// File that claimed it again.
    pub second: String,
}

/// Tracks which schema file claimed each service address within a batch.
#[derive(Debug, Default)]
pub struct ServiceAddressRegistry {
    claimed: HashMap<String, String>,
}

impl ServiceAddressRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the address of `file`.
    ///
    /// Files without services claim nothing. Returns the collision if
    /// another file already claimed the same address; the first claim is
    /// kept.
    pub fn register(&mut self, file: &SchemaFile) -> Option<AddressCollision> {
        if !file.has_services() {
            return None;
        }

        match self.claimed.get(&file.short_name) {
            Some(first) if *first != file.source_name => Some(AddressCollision {
                address: file.short_name.clone(),
                first: first.clone(),
                second: file.source_name.clone(),
            }),
            Some(_) => None,
            None => {
                self.claimed
                    .insert(file.short_name.clone(), file.source_name.clone());
                None
            }
        }
    }

    /// Returns the number of distinct addresses claimed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Returns true if no address has been claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

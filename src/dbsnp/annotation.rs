//! Per-identifier gene annotation state and the priority update rule.

use std::collections::BTreeMap;

use crate::config::ReductionMode;
use crate::region::RegionClass;

use super::row::GeneCandidate;

/// The gene ID and raw function code kept for one gene name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneRecord {
    pub gene_id: u32,
    pub gene_code: u8,
}

/// Best gene annotations accumulated for one rs identifier.
///
/// In rule mode every record's code maps to `best_class`. In no-rule mode
/// `best_class` stays `Null` and `genes` holds every name seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierAnnotation {
    best_class: RegionClass,
    genes: BTreeMap<String, GeneRecord>,
}

impl IdentifierAnnotation {
    #[must_use]
    pub fn best_class(&self) -> RegionClass {
        self.best_class
    }

    /// Gene names in byte order with their records.
    #[must_use]
    pub fn genes(&self) -> &BTreeMap<String, GeneRecord> {
        &self.genes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// Fold one candidate into an identifier's annotation.
///
/// Rule mode:
/// - a higher class replaces every kept gene
/// - an equal class adds the gene unless the name is already kept
/// - a lower class or an unmapped code changes nothing
///
/// No-rule mode stores the candidate under its name, replacing any earlier record.
#[must_use]
pub fn update(
    mut annotation: IdentifierAnnotation,
    candidate: &GeneCandidate<'_>,
    mode: ReductionMode,
) -> IdentifierAnnotation {
    let record = GeneRecord {
        gene_id: candidate.gene_id,
        gene_code: candidate.gene_code,
    };

    match mode {
        ReductionMode::NoRule => {
            annotation
                .genes
                .insert(candidate.gene_name.to_string(), record);
        }
        ReductionMode::Rule => {
            let Some(class) = RegionClass::from_gene_code(candidate.gene_code) else {
                return annotation;
            };
            if class > annotation.best_class {
                annotation.best_class = class;
                annotation.genes.clear();
                annotation
                    .genes
                    .insert(candidate.gene_name.to_string(), record);
            } else if class == annotation.best_class
                && !annotation.genes.contains_key(candidate.gene_name)
            {
                annotation
                    .genes
                    .insert(candidate.gene_name.to_string(), record);
            }
        }
    }

    annotation
}

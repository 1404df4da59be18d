//! Tab-separated output of the reduced annotations.

use std::io::Write;

use crate::dbsnp::AnnotationMap;
use crate::dbsnp::annotation::GeneRecord;
use crate::error::Error;
use crate::identifier::RsId;

/// Iterate `(rs id, gene name, record)` in ascending rs id, then gene name order.
pub fn records(annotations: &AnnotationMap) -> impl Iterator<Item = (RsId, &str, &GeneRecord)> {
    let mut entries: Vec<_> = annotations.iter().collect();
    entries.sort_unstable_by_key(|(rs_id, _)| **rs_id);

    entries.into_iter().flat_map(|(&rs_id, annotation)| {
        annotation
            .genes()
            .iter()
            .map(move |(name, record)| (rs_id, name.as_str(), record))
    })
}

/// Write one `rs_id\tgene_id\tgene_name\tgene_code` line per kept gene.
///
/// Returns the number of lines written. The writer is flushed before returning.
pub fn write_annotations<W: Write>(
    writer: &mut W,
    annotations: &AnnotationMap,
) -> Result<usize, Error> {
    let mut num_records = 0;
    for (rs_id, gene_name, record) in records(annotations) {
        writeln!(
            writer,
            "{rs_id}\t{}\t{gene_name}\t{}",
            record.gene_id, record.gene_code
        )?;
        num_records += 1;
    }
    writer.flush()?;
    Ok(num_records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReductionMode;
    use crate::dbsnp::annotation::{IdentifierAnnotation, update};
    use crate::dbsnp::row::GeneCandidate;

    fn annotation(rows: &[(u32, &str, u8)], mode: ReductionMode) -> IdentifierAnnotation {
        rows.iter()
            .fold(IdentifierAnnotation::default(), |ann, &(gene_id, gene_name, gene_code)| {
                let candidate = GeneCandidate {
                    gene_id,
                    gene_name,
                    gene_code,
                };
                update(ann, &candidate, mode)
            })
    }

    fn render(annotations: &AnnotationMap) -> (String, usize) {
        let mut out = Vec::new();
        let n = write_annotations(&mut out, annotations).unwrap();
        (String::from_utf8(out).unwrap(), n)
    }

    #[test]
    fn sorted_tab_separated_output() {
        let mut map = AnnotationMap::new();
        map.insert(
            RsId::new(42),
            annotation(&[(7, "ZNF1", 20), (8, "ABC2", 42)], ReductionMode::Rule),
        );
        map.insert(RsId::new(7), annotation(&[(100, "GENEA", 6)], ReductionMode::Rule));

        let (text, n) = render(&map);
        assert_eq!(n, 3);
        assert_eq!(
            text,
            "7\t100\tGENEA\t6\n42\t8\tABC2\t42\n42\t7\tZNF1\t20\n"
        );
    }

    #[test]
    fn empty_annotations_write_nothing() {
        let mut map = AnnotationMap::new();
        map.insert(RsId::new(42), annotation(&[(200, "GENEC", 255)], ReductionMode::Rule));

        let (text, n) = render(&map);
        assert_eq!(n, 0);
        assert!(text.is_empty());
    }

    #[test]
    fn no_rule_emits_every_name() {
        let mut map = AnnotationMap::new();
        map.insert(
            RsId::new(1),
            annotation(&[(1, "A", 20), (2, "B", 13), (3, "A", 99)], ReductionMode::NoRule),
        );
        let lines: Vec<(RsId, &str, GeneRecord)> =
            records(&map).map(|(id, name, r)| (id, name, *r)).collect();
        assert_eq!(
            lines,
            vec![
                (
                    RsId::new(1),
                    "A",
                    GeneRecord {
                        gene_id: 3,
                        gene_code: 99
                    }
                ),
                (
                    RsId::new(1),
                    "B",
                    GeneRecord {
                        gene_id: 2,
                        gene_code: 13
                    }
                ),
            ]
        );
    }
}

//! Ordering manifest records for installation

use crate::kind::KindOrder;
use crate::manifest::ManifestRecord;

impl KindOrder {
    /// Sort records by kind rank
    ///
    /// Records with equal rank keep their relative input order, so documents
    /// of the same kind come out in the order they were read.
    pub fn sort(&self, mut records: Vec<ManifestRecord>) -> Vec<ManifestRecord> {
        records.sort_by_key(|record| self.rank(&record.kind));
        records
    }

    /// Whether `records` is already in install order
    pub fn is_sorted(&self, records: &[ManifestRecord]) -> bool {
        records
            .windows(2)
            .all(|pair| self.rank(&pair[0].kind) <= self.rank(&pair[1].kind))
    }
}

/// Sort records into the [`INSTALL_ORDER`](crate::INSTALL_ORDER)
pub fn sort_by_kind(records: Vec<ManifestRecord>) -> Vec<ManifestRecord> {
    KindOrder::install().sort(records)
}

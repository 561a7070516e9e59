//! Identity contract shared by every stored record.
//!
//! A record's identity is assigned once by storage on its first successful save and is absent
//! before that. Two records are the same record only when both carry an identity and the
//! identities match; records that were never saved are never equal to one another, even when
//! every field matches. An instance compared with itself is still equal.

/// A record whose identity is assigned by storage.
pub trait Record {
    /// The storage-assigned identity, `None` until the record is first saved.
    fn identity(&self) -> Option<i64>;

    /// Overwrites the identity.
    fn set_identity(&mut self, identity: Option<i64>);

    /// Returns the record with `identity` assigned.
    fn with_identity(mut self, identity: i64) -> Self
    where
        Self: Sized,
    {
        self.set_identity(Some(identity));
        self
    }

    /// Whether both records carry the same assigned identity.
    fn same_record(&self, other: &Self) -> bool {
        matches!((self.identity(), other.identity()), (Some(a), Some(b)) if a == b)
    }
}

/// Implements [`Record`], `PartialEq`, `Eq` and `Hash` for a record type with an `id: Option<i64>`
/// field, following the identity-only equality contract.
macro_rules! impl_record {
    ($($record:ty),+ $(,)?) => {
        $(
            impl $crate::model::record::Record for $record {
                fn identity(&self) -> Option<i64> {
                    self.id
                }

                fn set_identity(&mut self, identity: Option<i64>) {
                    self.id = identity;
                }
            }

            impl PartialEq for $record {
                fn eq(&self, other: &Self) -> bool {
                    use $crate::model::record::Record;

                    std::ptr::eq(self, other) || self.same_record(other)
                }
            }

            impl Eq for $record {}

            impl std::hash::Hash for $record {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    self.id.hash(state);
                }
            }
        )+
    };
}

pub(crate) use impl_record;

use serde::{Serialize, Serializer, ser::SerializeSeq};

use super::FieldMap;

/// Fields are serialized as a sequence of `[name, value]` pairs so that
/// order and duplicate names survive.
impl<N, V> Serialize for FieldMap<N, V>
where
    N: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.fields.len()))?;

        for (name, value) in &self.fields {
            seq.serialize_element(&(name, value))?;
        }
        seq.end()
    }
}

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize};

use crate::{ArrayHeap, HeapEntry};

impl<K, V> Serialize for ArrayHeap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.entries() {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

struct LevelOrderVisitor<K, V>(core::marker::PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for LevelOrderVisitor<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    type Value = ArrayHeap<K, V>;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str("a level-order sequence of entries for ArrayHeap")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some(entry) = seq.next_element::<HeapEntry<K, V>>()? {
            entries.push(entry);
        }

        // The serialized layout is level order, so it is taken verbatim and
        // re-checked rather than rebalanced.
        let heap = ArrayHeap { entries };
        if !heap.is_valid() {
            return Err(serde::de::Error::custom(
                "level-order layout violates the max-heap invariant",
            ));
        }

        Ok(heap)
    }
}

impl<'de, K, V> Deserialize<'de> for ArrayHeap<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LevelOrderVisitor(core::marker::PhantomData))
    }
}

use std::fmt::{Formatter, Result as FmtResult};
use std::marker::PhantomData;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use crate::OrderedTree;

// A tree is written as its keys in pre-order. Inserting them again in that
// order rebuilds the same shape, and the flat encoding keeps degenerate
// chains within the nesting limits of self-describing formats.

impl<K: Serialize> Serialize for OrderedTree<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.traverse().map(|visit| visit.key))
    }
}

struct PreOrderVisitor<K> {
    _key_type: PhantomData<K>,
}

impl<'de, K: Ord + Deserialize<'de>> Visitor<'de> for PreOrderVisitor<K> {
    type Value = OrderedTree<K>;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        f.write_str("a sequence of keys in pre-order")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<OrderedTree<K>, A::Error> {
        let mut tree = OrderedTree::new();
        while let Some(key) = seq.next_element()? {
            tree.insert(key);
        }
        Ok(tree)
    }
}

impl<'de, K: Ord + Deserialize<'de>> Deserialize<'de> for OrderedTree<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PreOrderVisitor { _key_type: PhantomData })
    }
}

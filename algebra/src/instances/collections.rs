use std::{
  collections::{BTreeMap, HashMap},
  hash::Hash,
};

use crate::{
  monoid::MonoidInstance,
  semigroup::{combine, Semigroup, SemigroupInstance},
};

#[allow(clippy::ptr_arg)]
fn concat_strings(x: &String, y: &String) -> String {
  let mut joined = String::with_capacity(x.len() + y.len());
  joined.push_str(x);
  joined.push_str(y);
  joined
}

#[allow(clippy::ptr_arg)]
fn concat_vecs<T: Clone>(x: &Vec<T>, y: &Vec<T>) -> Vec<T> {
  let mut joined = Vec::with_capacity(x.len() + y.len());
  joined.extend_from_slice(x);
  joined.extend_from_slice(y);
  joined
}

crate::monoid_instance!(String, concat_strings, String::new());

impl<T: Clone + 'static> SemigroupInstance for Vec<T> {
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(concat_vecs);
}

impl<T: Clone + 'static> MonoidInstance for Vec<T> {
  fn identity() -> Self {
    Vec::new()
  }
}

/// Union of the keys. Where both maps hold a key, the values are combined with
/// `V`'s semigroup, left map first.
fn union_btree_maps<K, V>(x: &BTreeMap<K, V>, y: &BTreeMap<K, V>) -> BTreeMap<K, V>
where
  K: Ord + Clone,
  V: SemigroupInstance + Clone,
{
  let mut merged = x.clone();
  for (key, value) in y {
    merged
      .entry(key.clone())
      .and_modify(|existing| *existing = combine(existing, value))
      .or_insert_with(|| value.clone());
  }
  merged
}

fn union_hash_maps<K, V>(x: &HashMap<K, V>, y: &HashMap<K, V>) -> HashMap<K, V>
where
  K: Eq + Hash + Clone,
  V: SemigroupInstance + Clone,
{
  let mut merged = x.clone();
  for (key, value) in y {
    merged
      .entry(key.clone())
      .and_modify(|existing| *existing = combine(existing, value))
      .or_insert_with(|| value.clone());
  }
  merged
}

impl<K, V> SemigroupInstance for BTreeMap<K, V>
where
  K: Ord + Clone + 'static,
  V: SemigroupInstance + Clone,
{
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(union_btree_maps);
}

impl<K, V> MonoidInstance for BTreeMap<K, V>
where
  K: Ord + Clone + 'static,
  V: SemigroupInstance + Clone,
{
  fn identity() -> Self {
    BTreeMap::new()
  }
}

impl<K, V> SemigroupInstance for HashMap<K, V>
where
  K: Eq + Hash + Clone + 'static,
  V: SemigroupInstance + Clone,
{
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(union_hash_maps);
}

impl<K, V> MonoidInstance for HashMap<K, V>
where
  K: Eq + Hash + Clone + 'static,
  V: SemigroupInstance + Clone,
{
  fn identity() -> Self {
    HashMap::new()
  }
}

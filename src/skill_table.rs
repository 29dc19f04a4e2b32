//! Per-skill tables.
//!
//! A `SkillTable<T>` holds exactly one value for each [`SkillId`], stored
//! in chart label order. Cap tables, allocations and scale rows are all
//! skill tables, so "a table missing a skill" cannot be represented.

use crate::skill::SkillId;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// A total mapping from skill to value.
///
/// # Examples
///
/// ```rust
/// use skillcap::{SkillId, SkillTable};
///
/// let mut table = SkillTable::splat(10);
/// table[SkillId::Speed] = 40;
///
/// assert_eq!(table[SkillId::Speed], 40);
/// assert_eq!(table.total(), 110);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SkillTable<T> {
    values: [T; SkillId::COUNT],
}

/// Per-skill maximums for one position/height combination, each in `0..=99`.
pub type SkillCapTable = SkillTable<u8>;

/// The user's point assignment. Values are signed so raw input that is
/// out of range can be represented until validation clamps it.
pub type Allocation = SkillTable<i32>;

impl<T> SkillTable<T> {
    /// Build a table from values given in label order.
    pub fn from_values(values: [T; SkillId::COUNT]) -> Self {
        Self { values }
    }

    /// Build a table by computing each skill's value.
    pub fn from_fn(mut f: impl FnMut(SkillId) -> T) -> Self {
        Self {
            values: SkillId::ALL.map(&mut f),
        }
    }

    pub fn values(&self) -> &[T; SkillId::COUNT] {
        &self.values
    }

    /// `(skill, value)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillId, &T)> {
        SkillId::ALL.into_iter().zip(self.values.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(SkillId, &T) -> U) -> SkillTable<U> {
        SkillTable::from_fn(|skill| f(skill, &self.values[skill.index()]))
    }
}

impl<T: Copy> SkillTable<T> {
    /// Every skill set to the same value.
    pub fn splat(value: T) -> Self {
        Self {
            values: [value; SkillId::COUNT],
        }
    }
}

impl<T: Copy + Into<i64>> SkillTable<T> {
    /// Sum of all eight values.
    pub fn total(&self) -> i64 {
        self.values.iter().map(|&v| Into::<i64>::into(v)).sum()
    }

    /// Sum of every value except `skill`'s.
    pub fn total_without(&self, skill: SkillId) -> i64 {
        self.total() - Into::<i64>::into(self.values[skill.index()])
    }
}

impl<T> Index<SkillId> for SkillTable<T> {
    type Output = T;

    fn index(&self, skill: SkillId) -> &T {
        &self.values[skill.index()]
    }
}

impl<T> IndexMut<SkillId> for SkillTable<T> {
    fn index_mut(&mut self, skill: SkillId) -> &mut T {
        &mut self.values[skill.index()]
    }
}

impl<T: Serialize> Serialize for SkillTable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(SkillId::COUNT))?;
        for (skill, value) in self.iter() {
            map.serialize_entry(&skill, value)?;
        }
        map.end()
    }
}

struct SkillTableVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for SkillTableVisitor<T> {
    type Value = SkillTable<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with one entry for each of the eight skills")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut slots: [Option<T>; SkillId::COUNT] = Default::default();
        while let Some(skill) = access.next_key::<SkillId>()? {
            let slot = &mut slots[skill.index()];
            if slot.is_some() {
                return Err(de::Error::custom(format!("duplicate skill `{skill}`")));
            }
            *slot = Some(access.next_value()?);
        }

        if let Some(missing) = SkillId::ALL.into_iter().find(|s| slots[s.index()].is_none()) {
            return Err(de::Error::missing_field(missing.key()));
        }
        let values: Vec<T> = slots.into_iter().flatten().collect();
        let values: [T; SkillId::COUNT] = values
            .try_into()
            .map_err(|_| de::Error::invalid_length(SkillId::COUNT, &self))?;
        Ok(SkillTable::from_values(values))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SkillTable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SkillTableVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_follows_label_order() {
        let table = SkillTable::from_values([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(table[SkillId::Shooting], 1);
        assert_eq!(table[SkillId::Rebounding], 5);
        assert_eq!(table[SkillId::Stamina], 8);
        assert_eq!(table.total(), 36);
        assert_eq!(table.total_without(SkillId::Stamina), 28);
    }

    #[test]
    fn test_map_and_iter() {
        let caps: SkillCapTable = SkillTable::splat(80);
        let doubled = caps.map(|_, &v| i32::from(v) * 2);
        assert!(doubled.iter().all(|(_, &v)| v == 160));
        let skills: Vec<_> = caps.iter().map(|(s, _)| s).collect();
        assert_eq!(skills, SkillId::ALL);
    }

    #[test]
    fn test_serialize_as_object() {
        let alloc: Allocation = SkillTable::from_values([10, 0, 0, 0, 0, 0, 0, 5]);
        let json = serde_json::to_value(alloc).unwrap();
        assert_eq!(json["shooting"], 10);
        assert_eq!(json["stamina"], 5);
        assert_eq!(json.as_object().unwrap().len(), 8);

        let back: Allocation = serde_json::from_value(json).unwrap();
        assert_eq!(back, alloc);
    }

    #[test]
    fn test_deserialize_rejects_missing_skill() {
        let json = r#"{"shooting":1,"passing":1,"dribbling":1,"defense":1,
                       "rebounding":1,"speed":1,"vertical":1}"#;
        let err = serde_json::from_str::<Allocation>(json).unwrap_err();
        assert!(err.to_string().contains("stamina"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_skill() {
        let json = r#"{"shooting":1,"shooting":2}"#;
        assert!(serde_json::from_str::<Allocation>(json).is_err());
    }
}

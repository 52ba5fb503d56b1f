use crate::world::cell::CellPos;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arbitrarily-structured key/value record attached to aux-capable cells and
/// item stacks. The schema belongs to whatever block or item produced it; the
/// only fields this crate interprets are the embedded `x`/`y`/`z` coordinates.
///
/// `Clone` performs a deep copy, so a cloned record never aliases the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataTag {
    fields: Map<String, Value>,
}

impl DataTag {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty record pre-labelled with the coordinates of `pos`.
    pub fn for_cell(pos: CellPos) -> Self {
        let mut tag = Self::new();
        tag.relabel_position(pos);
        tag
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.fields.get(key).and_then(Value::as_i64)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Overwrite the embedded coordinate fields with the coordinates of `pos`.
    pub fn relabel_position(&mut self, pos: CellPos) {
        self.fields.insert("x".to_string(), pos.x().into());
        self.fields.insert("y".to_string(), pos.y().into());
        self.fields.insert("z".to_string(), pos.z().into());
    }

    /// The embedded coordinates, if all three fields are present.
    pub fn position(&self) -> Option<CellPos> {
        let x = self.get_i64("x")?;
        let y = self.get_i64("y")?;
        let z = self.get_i64("z")?;
        Some(CellPos::new(x as i32, y as i32, z as i32))
    }
}

impl From<Map<String, Value>> for DataTag {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

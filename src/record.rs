use serde::{Deserialize, Serialize};

use crate::{config::RECORD_FIELD_COUNT, error::SquishError, value::Value};

/// Holder for three values, enumerated in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquishableRecord {
    thing1: Value,
    thing2: Value,
    thing3: Value,
}

impl SquishableRecord {
    pub fn new(
        thing1: impl Into<Value>,
        thing2: impl Into<Value>,
        thing3: impl Into<Value>,
    ) -> Self {
        Self {
            thing1: thing1.into(),
            thing2: thing2.into(),
            thing3: thing3.into(),
        }
    }

    /// Builds a record from up to three positional values.
    ///
    /// Fields without a value stay empty text.
    pub fn from_values<I, V>(values: I) -> Result<Self, SquishError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() > RECORD_FIELD_COUNT {
            return Err(SquishError::TooManyValues {
                count: values.len(),
            });
        }

        let mut record = Self::default();
        for (slot, value) in [&mut record.thing1, &mut record.thing2, &mut record.thing3]
            .into_iter()
            .zip(values)
        {
            *slot = value;
        }
        Ok(record)
    }

    pub fn thing1(&self) -> &Value {
        &self.thing1
    }

    pub fn thing2(&self) -> &Value {
        &self.thing2
    }

    pub fn thing3(&self) -> &Value {
        &self.thing3
    }

    /// The field values in declaration order.
    pub fn get_attribute_val_list(&self) -> [&Value; RECORD_FIELD_COUNT] {
        [&self.thing1, &self.thing2, &self.thing3]
    }
}

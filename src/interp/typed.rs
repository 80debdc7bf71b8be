//! Direct serde bridge between typed keyframe states and [`Value`] trees.
//!
//! Numbers stay `f64` end to end, so NaN and infinities survive a round trip. On the way
//! back, an integral finite number may fill an integer field; anything else is an error.
//!
//! Unit enum variants map to text, data-carrying variants to a single-key structure.
//! Booleans, `None`/unit and non-text map keys have no [`Value`] form and are rejected.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::vec;

use serde::de::value::StringDeserializer;
use serde::de::{
    self, DeserializeOwned, DeserializeSeed, EnumAccess, IntoDeserializer, MapAccess,
    SeqAccess, Unexpected, VariantAccess, Visitor,
};
use serde::ser::{self, Serialize};

use crate::foundation::error::{SceneError, SceneResult};
use crate::interp::value::Value;

/// Convert a typed state into a [`Value`] tree.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> SceneResult<Value> {
    value.serialize(ValueSerializer)
}

/// Rebuild a typed state from a [`Value`] tree.
pub fn from_value<T: DeserializeOwned>(value: Value) -> SceneResult<T> {
    T::deserialize(value)
}

fn not_interpolable(what: &str) -> SceneError {
    SceneError::serde(format!("state is not interpolable: {what} has no value form"))
}

struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = SceneError;

    type SerializeSeq = SequenceBuilder;
    type SerializeTuple = SequenceBuilder;
    type SerializeTupleStruct = SequenceBuilder;
    type SerializeTupleVariant = VariantBuilder<SequenceBuilder>;
    type SerializeMap = StructureBuilder;
    type SerializeStruct = StructureBuilder;
    type SerializeStructVariant = VariantBuilder<StructureBuilder>;

    fn serialize_bool(self, _v: bool) -> SceneResult<Value> {
        Err(not_interpolable("bool"))
    }

    fn serialize_i8(self, v: i8) -> SceneResult<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> SceneResult<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> SceneResult<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> SceneResult<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_u8(self, v: u8) -> SceneResult<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> SceneResult<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> SceneResult<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> SceneResult<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_f32(self, v: f32) -> SceneResult<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> SceneResult<Value> {
        Ok(Value::Number(v))
    }

    fn serialize_char(self, v: char) -> SceneResult<Value> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> SceneResult<Value> {
        Ok(Value::Text(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> SceneResult<Value> {
        Ok(Value::Sequence(
            v.iter().map(|b| Value::Number(f64::from(*b))).collect(),
        ))
    }

    fn serialize_none(self) -> SceneResult<Value> {
        Err(not_interpolable("None"))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> SceneResult<Value> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> SceneResult<Value> {
        Err(not_interpolable("()"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> SceneResult<Value> {
        Err(not_interpolable(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> SceneResult<Value> {
        Ok(Value::Text(variant.to_owned()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> SceneResult<Value> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> SceneResult<Value> {
        let inner = value.serialize(ValueSerializer)?;
        Ok(Value::structure([(variant, inner)]))
    }

    fn serialize_seq(self, len: Option<usize>) -> SceneResult<SequenceBuilder> {
        Ok(SequenceBuilder::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> SceneResult<SequenceBuilder> {
        Ok(SequenceBuilder::with_capacity(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> SceneResult<SequenceBuilder> {
        Ok(SequenceBuilder::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> SceneResult<VariantBuilder<SequenceBuilder>> {
        Ok(VariantBuilder {
            variant,
            inner: SequenceBuilder::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> SceneResult<StructureBuilder> {
        Ok(StructureBuilder::default())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> SceneResult<StructureBuilder> {
        Ok(StructureBuilder::default())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> SceneResult<VariantBuilder<StructureBuilder>> {
        Ok(VariantBuilder {
            variant,
            inner: StructureBuilder::default(),
        })
    }
}

struct SequenceBuilder {
    items: Vec<Value>,
}

impl SequenceBuilder {
    fn with_capacity(len: usize) -> Self {
        Self {
            items: Vec::with_capacity(len),
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> SceneResult<()> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn finish(self) -> Value {
        Value::Sequence(self.items)
    }
}

impl ser::SerializeSeq for SequenceBuilder {
    type Ok = Value;
    type Error = SceneError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> SceneResult<()> {
        self.push(value)
    }

    fn end(self) -> SceneResult<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SequenceBuilder {
    type Ok = Value;
    type Error = SceneError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> SceneResult<()> {
        self.push(value)
    }

    fn end(self) -> SceneResult<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SequenceBuilder {
    type Ok = Value;
    type Error = SceneError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> SceneResult<()> {
        self.push(value)
    }

    fn end(self) -> SceneResult<Value> {
        Ok(self.finish())
    }
}

#[derive(Default)]
struct StructureBuilder {
    fields: BTreeMap<String, Value>,
    pending_key: Option<String>,
}

impl StructureBuilder {
    fn insert<T: Serialize + ?Sized>(&mut self, key: String, value: &T) -> SceneResult<()> {
        self.fields.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn finish(self) -> Value {
        Value::Structure(self.fields)
    }
}

impl ser::SerializeMap for StructureBuilder {
    type Ok = Value;
    type Error = SceneError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> SceneResult<()> {
        match key.serialize(ValueSerializer)? {
            Value::Text(k) => {
                self.pending_key = Some(k);
                Ok(())
            }
            other => Err(SceneError::serde(format!(
                "state is not interpolable: map key is {}, expected text",
                other.kind()
            ))),
        }
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> SceneResult<()> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| SceneError::serde("map value serialized before its key"))?;
        self.insert(key, value)
    }

    fn end(self) -> SceneResult<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for StructureBuilder {
    type Ok = Value;
    type Error = SceneError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> SceneResult<()> {
        self.insert(key.to_owned(), value)
    }

    fn end(self) -> SceneResult<Value> {
        Ok(self.finish())
    }
}

struct VariantBuilder<B> {
    variant: &'static str,
    inner: B,
}

impl ser::SerializeTupleVariant for VariantBuilder<SequenceBuilder> {
    type Ok = Value;
    type Error = SceneError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> SceneResult<()> {
        self.inner.push(value)
    }

    fn end(self) -> SceneResult<Value> {
        Ok(Value::structure([(self.variant, self.inner.finish())]))
    }
}

impl ser::SerializeStructVariant for VariantBuilder<StructureBuilder> {
    type Ok = Value;
    type Error = SceneError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> SceneResult<()> {
        self.inner.insert(key.to_owned(), value)
    }

    fn end(self) -> SceneResult<Value> {
        Ok(Value::structure([(self.variant, self.inner.finish())]))
    }
}

impl Value {
    fn unexpected(&self) -> Unexpected<'_> {
        match self {
            Value::Number(n) => Unexpected::Float(*n),
            Value::Text(s) => Unexpected::Str(s),
            Value::Sequence(_) => Unexpected::Seq,
            Value::Structure(_) => Unexpected::Map,
        }
    }

    fn as_i64_exact(&self) -> Option<i64> {
        match *self {
            Value::Number(n) if n.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&n) => {
                Some(n as i64)
            }
            _ => None,
        }
    }

    fn as_u64_exact(&self) -> Option<u64> {
        match *self {
            Value::Number(n) if n.fract() == 0.0 && (0.0..U64_BOUND).contains(&n) => Some(n as u64),
            _ => None,
        }
    }
}

// 2^63 and 2^64, both exact in f64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

fn text_deserializer(s: String) -> StringDeserializer<SceneError> {
    s.into_deserializer()
}

fn visit_sequence<'de, V: Visitor<'de>>(items: Vec<Value>, visitor: V) -> SceneResult<V::Value> {
    let len = items.len();
    let mut access = SequenceAccess {
        iter: items.into_iter(),
    };
    let out = visitor.visit_seq(&mut access)?;
    if access.iter.len() == 0 {
        Ok(out)
    } else {
        Err(de::Error::invalid_length(len, &"fewer elements in sequence"))
    }
}

fn visit_structure<'de, V: Visitor<'de>>(
    fields: BTreeMap<String, Value>,
    visitor: V,
) -> SceneResult<V::Value> {
    visitor.visit_map(StructureAccess {
        iter: fields.into_iter(),
        value: None,
    })
}

macro_rules! deserialize_signed {
    ($($method:ident),*) => {$(
        fn $method<V: Visitor<'de>>(self, visitor: V) -> SceneResult<V::Value> {
            match self.as_i64_exact() {
                Some(n) => visitor.visit_i64(n),
                None => self.deserialize_any(visitor),
            }
        }
    )*};
}

macro_rules! deserialize_unsigned {
    ($($method:ident),*) => {$(
        fn $method<V: Visitor<'de>>(self, visitor: V) -> SceneResult<V::Value> {
            match self.as_u64_exact() {
                Some(n) => visitor.visit_u64(n),
                None => self.deserialize_any(visitor),
            }
        }
    )*};
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = SceneError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> SceneResult<V::Value> {
        match self {
            Value::Number(n) => visitor.visit_f64(n),
            Value::Text(s) => visitor.visit_string(s),
            Value::Sequence(items) => visit_sequence(items, visitor),
            Value::Structure(fields) => visit_structure(fields, visitor),
        }
    }

    deserialize_signed!(deserialize_i8, deserialize_i16, deserialize_i32, deserialize_i64);
    deserialize_unsigned!(deserialize_u8, deserialize_u16, deserialize_u32, deserialize_u64);

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> SceneResult<V::Value> {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> SceneResult<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> SceneResult<V::Value> {
        match self {
            Value::Text(variant) => visitor.visit_enum(EnumValue {
                variant,
                payload: None,
            }),
            Value::Structure(fields) => {
                let mut iter = fields.into_iter();
                match (iter.next(), iter.next()) {
                    (Some((variant, payload)), None) => visitor.visit_enum(EnumValue {
                        variant,
                        payload: Some(payload),
                    }),
                    _ => Err(de::Error::invalid_value(
                        Unexpected::Map,
                        &"structure with a single variant key",
                    )),
                }
            }
            other => Err(de::Error::invalid_type(
                other.unexpected(),
                &"text or single-key structure",
            )),
        }
    }

    serde::forward_to_deserialize_any! {
        bool i128 u128 f32 f64 char str string bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SequenceAccess {
    iter: vec::IntoIter<Value>,
}

impl<'de> SeqAccess<'de> for SequenceAccess {
    type Error = SceneError;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> SceneResult<Option<T::Value>> {
        self.iter.next().map(|v| seed.deserialize(v)).transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct StructureAccess {
    iter: btree_map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl<'de> MapAccess<'de> for StructureAccess {
    type Error = SceneError;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> SceneResult<Option<K::Value>> {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(text_deserializer(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<T: DeserializeSeed<'de>>(&mut self, seed: T) -> SceneResult<T::Value> {
        let value = self
            .value
            .take()
            .ok_or_else(|| SceneError::serde("structure value requested before its key"))?;
        seed.deserialize(value)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumValue {
    variant: String,
    payload: Option<Value>,
}

impl<'de> EnumAccess<'de> for EnumValue {
    type Error = SceneError;
    type Variant = VariantValue;

    fn variant_seed<V: DeserializeSeed<'de>>(
        self,
        seed: V,
    ) -> SceneResult<(V::Value, VariantValue)> {
        let variant = seed.deserialize(text_deserializer(self.variant))?;
        Ok((
            variant,
            VariantValue {
                payload: self.payload,
            },
        ))
    }
}

struct VariantValue {
    payload: Option<Value>,
}

impl<'de> VariantAccess<'de> for VariantValue {
    type Error = SceneError;

    fn unit_variant(self) -> SceneResult<()> {
        match self.payload {
            None => Ok(()),
            Some(other) => Err(de::Error::invalid_type(other.unexpected(), &"unit variant")),
        }
    }

    fn newtype_variant_seed<T: DeserializeSeed<'de>>(self, seed: T) -> SceneResult<T::Value> {
        match self.payload {
            Some(value) => seed.deserialize(value),
            None => Err(de::Error::invalid_type(
                Unexpected::UnitVariant,
                &"newtype variant",
            )),
        }
    }

    fn tuple_variant<V: Visitor<'de>>(self, _len: usize, visitor: V) -> SceneResult<V::Value> {
        match self.payload {
            Some(Value::Sequence(items)) => visit_sequence(items, visitor),
            Some(other) => Err(de::Error::invalid_type(other.unexpected(), &"tuple variant")),
            None => Err(de::Error::invalid_type(
                Unexpected::UnitVariant,
                &"tuple variant",
            )),
        }
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> SceneResult<V::Value> {
        match self.payload {
            Some(Value::Structure(fields)) => visit_structure(fields, visitor),
            Some(other) => Err(de::Error::invalid_type(other.unexpected(), &"struct variant")),
            None => Err(de::Error::invalid_type(
                Unexpected::UnitVariant,
                &"struct variant",
            )),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/typed.rs"]
mod tests;

//! Resource serializers for transformer output.
//!
//! A serializer decides the outer shape of a transformed item, collection
//! or empty resource. [`ArraySerializer`] wraps collections under a key
//! (`"data"` by default); [`DataArraySerializer`] only wraps when the caller
//! names a resource key and otherwise returns the data untouched.
//!
//! Both are total functions: every input has an output, nothing fails.

use serde_json::{Map, Value};

/// Key used by [`ArraySerializer`] when no resource key is given.
pub const DEFAULT_RESOURCE_KEY: &str = "data";

/// Shapes transformed data for output.
pub trait ResourceSerializer {
    /// Serialize a collection: `{key: data}`, with `"data"` when unnamed.
    fn collection(&self, resource_key: Option<&str>, data: Value) -> Value {
        let key = named(resource_key).unwrap_or(DEFAULT_RESOURCE_KEY);
        wrap(key, data)
    }

    /// Serialize a single item: the data itself.
    fn item(&self, _resource_key: Option<&str>, data: Value) -> Value {
        data
    }

    /// Serialize the absence of a resource: an empty object.
    fn null(&self) -> Value {
        Value::Object(Map::new())
    }
}

/// Plain array serializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArraySerializer;

impl ResourceSerializer for ArraySerializer {}

/// Array serializer that leaves unnamed collections unwrapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataArraySerializer;

impl ResourceSerializer for DataArraySerializer {
    fn collection(&self, resource_key: Option<&str>, data: Value) -> Value {
        match named(resource_key) {
            Some(key) => wrap(key, data),
            None => data,
        }
    }
}

/// An empty key counts as no key.
fn named(resource_key: Option<&str>) -> Option<&str> {
    resource_key.filter(|k| !k.is_empty())
}

fn wrap(key: &str, data: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), data);
    Value::Object(map)
}

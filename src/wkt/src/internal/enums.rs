// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::marker::PhantomData;

/// A value received from the service that this version of the client library
/// does not recognize.
#[derive(Clone, Debug, PartialEq)]
pub struct UnknownEnumValue(String);

impl UnknownEnumValue {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self(name.into())
    }
    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}

impl serde::ser::Serialize for UnknownEnumValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumVisitor<'lf, T> {
    name: &'lf str,
    _unused: PhantomData<T>,
}

impl<'lf, T> EnumVisitor<'lf, T> {
    pub fn new(name: &'lf str) -> Self {
        Self {
            name,
            _unused: Default::default(),
        }
    }
}

impl<T> serde::de::Visitor<'_> for EnumVisitor<'_, T>
where
    T: for<'a> From<&'a str>,
{
    type Value = T;
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from(value))
    }
    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a {} enum value in string format", self.name)
    }
}

pub fn display_enum(f: &mut std::fmt::Formatter<'_>, name: &str) -> Result<(), std::fmt::Error> {
    f.write_str(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[derive(Debug, PartialEq)]
    enum Color {
        Red,
        UnknownValue(UnknownEnumValue),
    }

    impl From<&str> for Color {
        fn from(value: &str) -> Self {
            match value {
                "RED" => Self::Red,
                _ => Self::UnknownValue(UnknownEnumValue::new(value)),
            }
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Color {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(EnumVisitor::<Color>::new("test.Color"))
        }
    }

    impl std::fmt::Display for Color {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Red => display_enum(f, "RED"),
                Self::UnknownValue(u) => display_enum(f, u.name()),
            }
        }
    }

    #[test]
    fn unknown_enum_value_accessors() {
        let u = UnknownEnumValue::new("MAGENTA");
        assert_eq!(u.name(), "MAGENTA");
    }

    #[test]
    fn unknown_enum_value_serialize() -> anyhow::Result<()> {
        let u = UnknownEnumValue::new("MAGENTA");
        let got = serde_json::to_value(&u)?;
        assert_eq!(got, json!("MAGENTA"));
        Ok(())
    }

    #[test_case(json!("RED"), Color::Red)]
    #[test_case(json!("MAGENTA"), Color::UnknownValue(UnknownEnumValue::new("MAGENTA")))]
    fn visitor(input: serde_json::Value, want: Color) -> anyhow::Result<()> {
        let got = serde_json::from_value::<Color>(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!(123))]
    #[test_case(json!({}))]
    #[test_case(json!(null))]
    fn visitor_errors(input: serde_json::Value) {
        let got = serde_json::from_value::<Color>(input);
        let msg = format!("{got:?}");
        assert!(msg.contains("test.Color enum value"), "{msg}");
    }

    #[test]
    fn display() {
        assert_eq!(Color::Red.to_string(), "RED");
        let unknown = Color::UnknownValue(UnknownEnumValue::new("MAGENTA"));
        assert_eq!(unknown.to_string(), "MAGENTA");
    }
}

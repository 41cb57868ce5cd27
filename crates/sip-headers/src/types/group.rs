//! # Header field groups
//!
//! A [`HeaderFieldGroup`] holds every occurrence of one header name in a message,
//! in the order they were seen. Order matters for headers such as Record-Route, so
//! the group never sorts or deduplicates.
//!
//! A group can be compared with a single instance of its member type. The two
//! are equal when the group's canonical single value ([`HeaderField::coalesce`])
//! equals the instance, and the comparison gives the same answer from either side.
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//! use std::str::FromStr;
//!
//! let template = RecordRoute::default();
//! let group = HeaderFieldGroup::parse_split(
//!     &template,
//!     "Record-Route: <sip:server10.biloxi.com;lr>, <sip:bigbox3.site3.atlanta.com;lr>",
//! ).unwrap();
//!
//! assert_eq!(group.len(), 2);
//! assert_eq!(group.to_canonical_string(),
//!     "<sip:server10.biloxi.com;lr>, <sip:bigbox3.site3.atlanta.com;lr>");
//! ```

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::utils::{split_comma_list, strip_header_name, unfold};
use crate::resources::LIST_SEPARATOR;
use crate::types::header_field::HeaderField;

/// All occurrences of one header name, insertion order preserved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderFieldGroup<T> {
    fields: Vec<T>,
}

impl<T> Default for HeaderFieldGroup<T> {
    fn default() -> Self {
        HeaderFieldGroup { fields: Vec::new() }
    }
}

impl<T: HeaderField> HeaderFieldGroup<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: Vec<T>) -> Self {
        HeaderFieldGroup { fields }
    }

    /// Parses each value into a clone of `template`, one member per value
    pub fn parse_each<'a, I>(template: &T, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = Vec::new();
        for value in values {
            let mut field = template.clone();
            field.parse(value)?;
            fields.push(field);
        }
        Ok(HeaderFieldGroup { fields })
    }

    /// Splits one header line at top-level commas and parses each element.
    /// Types whose [`HeaderField::is_comma_list`] is false give a one-member group.
    pub fn parse_split(template: &T, line: &str) -> Result<Self> {
        let unfolded = unfold(line);
        let value = strip_header_name(&unfolded, template.field_name(), template.compact_name());
        if template.is_comma_list() {
            Self::parse_each(template, split_comma_list(value))
        } else {
            Self::parse_each(template, [value])
        }
    }

    pub fn push(&mut self, field: T) {
        self.fields.push(field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.fields.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.fields.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.fields.iter()
    }

    pub fn fields(&self) -> &[T] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<T> {
        self.fields
    }

    /// Long name of the members, if the group has any
    pub fn field_name(&self) -> Option<&str> {
        self.fields.first().map(HeaderField::field_name)
    }

    /// Members joined into one comma-separated value
    pub fn to_canonical_string(&self) -> String {
        self.fields
            .iter()
            .map(HeaderField::to_canonical_string)
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)
    }

    /// One `Name: value` line per member, for headers that are never combined
    pub fn to_header_lines(&self) -> Vec<String> {
        self.fields.iter().map(HeaderField::to_header_line).collect()
    }

    /// The canonical single value of the group, if there is one
    pub fn coalesce(&self) -> Option<T> {
        T::coalesce(&self.fields)
    }

    /// Group/single equality
    pub fn equals_value(&self, single: &T) -> bool {
        self.coalesce().as_ref() == Some(single)
    }

    pub fn is_valid(&self) -> bool {
        !self.fields.is_empty() && self.fields.iter().all(HeaderField::is_valid)
    }
}

impl<T> From<Vec<T>> for HeaderFieldGroup<T> {
    fn from(fields: Vec<T>) -> Self {
        HeaderFieldGroup { fields }
    }
}

impl<T> Index<usize> for HeaderFieldGroup<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.fields[index]
    }
}

impl<'a, T> IntoIterator for &'a HeaderFieldGroup<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Symmetric `==` between a header type and a group of it
macro_rules! impl_group_equality {
    ($($header:ty),+ $(,)?) => {
        $(
            impl PartialEq<$header> for $crate::types::group::HeaderFieldGroup<$header> {
                fn eq(&self, other: &$header) -> bool {
                    self.equals_value(other)
                }
            }

            impl PartialEq<$crate::types::group::HeaderFieldGroup<$header>> for $header {
                fn eq(&self, other: &$crate::types::group::HeaderFieldGroup<$header>) -> bool {
                    other.equals_value(self)
                }
            }
        )+
    };
}

pub(crate) use impl_group_equality;

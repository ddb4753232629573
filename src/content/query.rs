//! Projection queries against the content store.
//!
//! Every section asks for the first document of one type and projects a
//! fixed set of fields:
//!
//! ```text
//! *[_type == "skills"][0]{title, description, skillsList[]{title, icon, level}}
//! ```

use std::fmt::Write as _;

/// How a projected field is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Field value returned as stored.
    Value,
    /// Array of objects, each projected with the nested fields (`name[]{..}`).
    Array(Vec<Field>),
    /// Object projected with the nested fields (`name{..}`).
    Object(Vec<Field>),
    /// Reference followed and projected (`name->{..}`).
    Deref(Vec<Field>),
}

/// A single projected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
}

impl Field {
    pub fn value(name: &'static str) -> Self {
        Self {
            name,
            shape: Shape::Value,
        }
    }

    pub fn array(name: &'static str, fields: Vec<Field>) -> Self {
        Self {
            name,
            shape: Shape::Array(fields),
        }
    }

    pub fn object(name: &'static str, fields: Vec<Field>) -> Self {
        Self {
            name,
            shape: Shape::Object(fields),
        }
    }

    pub fn deref(name: &'static str, fields: Vec<Field>) -> Self {
        Self {
            name,
            shape: Shape::Deref(fields),
        }
    }

    fn write_to(&self, out: &mut String) {
        out.push_str(self.name);
        match &self.shape {
            Shape::Value => {}
            Shape::Array(fields) => {
                out.push_str("[]");
                write_projection(fields, out);
            }
            Shape::Object(fields) => write_projection(fields, out),
            Shape::Deref(fields) => {
                out.push_str("->");
                write_projection(fields, out);
            }
        }
    }
}

fn write_projection(fields: &[Field], out: &mut String) {
    out.push('{');
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        field.write_to(out);
    }
    out.push('}');
}

/// Query for the first document of `doc_type`, projected to `fields`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub doc_type: &'static str,
    pub fields: Vec<Field>,
}

impl Query {
    pub fn first_of(doc_type: &'static str, fields: Vec<Field>) -> Self {
        Self { doc_type, fields }
    }

    /// Render the query text sent to the content store.
    pub fn to_groq(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "*[_type == \"{}\"][0]", self.doc_type);
        write_projection(&self.fields, &mut out);
        out
    }
}

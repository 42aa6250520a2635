//! Source-language display form of descriptors.
//!
//! This is the spelling the front-end itself would print, so it doubles as
//! the lookup key for anything that is neither a built-in nor generic.

use crate::descriptor::{NamedType, Shape};
use crate::{TypeId, TypeTable};

impl TypeTable {
    /// Format a type the way the source language spells it.
    pub fn display(&self, id: TypeId) -> String {
        let mut buf = String::new();
        self.display_into(id, &mut buf);
        buf
    }

    /// Format a type into an existing buffer.
    pub fn display_into(&self, id: TypeId, buf: &mut String) {
        match &self.get(id).shape {
            Shape::Special(special) => match special.keyword() {
                Some(keyword) => buf.push_str(keyword),
                None => {
                    buf.push_str(special.namespace());
                    buf.push('.');
                    buf.push_str(special.metadata_name());
                }
            },
            Shape::Named(named) | Shape::Enum(named) | Shape::Delegate { named, .. } => {
                self.display_named(named, buf);
            }
            Shape::Array { element } => {
                self.display_into(*element, buf);
                buf.push_str("[]");
            }
            Shape::TypeParameter { name } => buf.push_str(name),
            Shape::Anonymous { members } => {
                buf.push_str("<anonymous type");
                for (i, member) in members.iter().enumerate() {
                    buf.push_str(if i == 0 { ": " } else { ", " });
                    self.display_into(member.ty, buf);
                    buf.push(' ');
                    buf.push_str(&member.name);
                }
                buf.push('>');
            }
            Shape::Nullable { inner } => {
                self.display_into(*inner, buf);
                buf.push('?');
            }
        }
    }

    fn display_named(&self, named: &NamedType, buf: &mut String) {
        match named.container {
            Some(container) => {
                self.display_into(container, buf);
                buf.push('.');
            }
            None if !named.namespace.is_empty() => {
                buf.push_str(&named.namespace);
                buf.push('.');
            }
            None => {}
        }
        buf.push_str(&named.name);

        if !named.type_args.is_empty() {
            buf.push('<');
            for (i, &arg) in named.type_args.iter().enumerate() {
                if i > 0 {
                    buf.push_str(", ");
                }
                self.display_into(arg, buf);
            }
            buf.push('>');
        } else if named.arity > 0 {
            // unbound: `Dictionary<,>`
            buf.push('<');
            for _ in 1..named.arity {
                buf.push(',');
            }
            buf.push('>');
        }
    }
}

#[cfg(test)]
mod tests;

//! Naming of anonymous types.
//!
//! The code generator decides how anonymous records are declared in the
//! target, so it also owns their names. The mapper only asks.

use hx_types::{AnonymousMember, TypeId, TypeTable};

/// Supplies the target name of an anonymous type.
pub trait AnonymousTypeNamer: Sync {
    fn type_name(&self, table: &TypeTable, ty: TypeId, members: &[AnonymousMember]) -> String;
}

/// Default convention: `Anon_` followed by the member names, e.g.
/// `Anon_Id_Name`.
///
/// Members are emitted untyped, so two anonymous types that differ only in
/// member types share a declaration.
#[derive(Copy, Clone, Debug, Default)]
pub struct SynthesizedAnonymousNames;

impl AnonymousTypeNamer for SynthesizedAnonymousNames {
    fn type_name(&self, _table: &TypeTable, _ty: TypeId, members: &[AnonymousMember]) -> String {
        let mut name = String::from("Anon");
        for member in members {
            name.push('_');
            name.extend(
                member
                    .name
                    .chars()
                    .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }),
            );
        }
        name
    }
}

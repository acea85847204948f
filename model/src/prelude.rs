//! Prelude scalar shapes every model can target without declaring them.

use crate::{ScalarKind, ScalarShape, Shape};
use resdex_core::ShapeId;

/// Namespace of the prelude shapes.
pub const PRELUDE_NAMESPACE: &str = "prelude";

const PRELUDE_SCALARS: [(&str, ScalarKind); 10] = [
    ("String", ScalarKind::String),
    ("Boolean", ScalarKind::Boolean),
    ("Integer", ScalarKind::Integer),
    ("Long", ScalarKind::Long),
    ("Float", ScalarKind::Float),
    ("Double", ScalarKind::Double),
    ("BigDecimal", ScalarKind::BigDecimal),
    ("Timestamp", ScalarKind::Timestamp),
    ("Blob", ScalarKind::Blob),
    ("Document", ScalarKind::Document),
];

pub(crate) fn prelude_shapes() -> impl Iterator<Item = Shape> {
    PRELUDE_SCALARS.into_iter().map(|(name, kind)| {
        Shape::Scalar(ScalarShape {
            id: ShapeId::new(PRELUDE_NAMESPACE, name),
            kind,
        })
    })
}

use std::sync::Arc;

use crate::base::{MethodKey, TypeName, ValueType};

use super::{Annotation, AnnotationKind};

/// A declared method of a [`BeanType`](super::BeanType), with its annotations.
///
/// Methods are shared as `Arc<Method>` so descriptors can hold live accessor
/// handles without copying annotation lists.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Method {
    key: MethodKey,
    return_type: ValueType,
    annotations: Vec<Annotation>,
    /// Set when the method is added to a type builder
    declaring_type: TypeName,
}

impl Method {
    pub fn new(name: impl Into<Arc<str>>, params: Vec<ValueType>, return_type: ValueType) -> Self {
        Self {
            key: MethodKey::new(name, params),
            return_type,
            annotations: Vec::new(),
            declaring_type: Arc::from(""),
        }
    }

    /// A method taking no parameters and returning `return_type`.
    pub fn getter(name: impl Into<Arc<str>>, return_type: ValueType) -> Self {
        Self::new(name, Vec::new(), return_type)
    }

    /// A method taking one `param` and returning nothing.
    pub fn setter(name: impl Into<Arc<str>>, param: ValueType) -> Self {
        Self::new(name, vec![param], ValueType::Void)
    }

    /// Attach an annotation.
    #[must_use]
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub(crate) fn declared_in(mut self, type_name: TypeName) -> Self {
        self.declaring_type = type_name;
        self
    }

    pub fn key(&self) -> &MethodKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.key.name
    }

    pub fn params(&self) -> &[ValueType] {
        &self.key.params
    }

    pub fn return_type(&self) -> &ValueType {
        &self.return_type
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// The type whose declaration this is.
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// The first annotation of `kind` on this method.
    pub fn annotation(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.kind() == kind)
    }

    pub fn has_annotation(&self, kind: AnnotationKind) -> bool {
        self.annotation(kind).is_some()
    }
}

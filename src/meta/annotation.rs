use serde::{Deserialize, Serialize};

/// Metadata attached to an accessor method.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annotation {
    /// Display/iteration position; lower sorts first.
    Order(i32),
    /// Localize the display name via the owning type's resource bundle.
    ///
    /// The literal is the fallback when the bundle has no entry; an empty
    /// literal falls back to the raw property name.
    Localized(String),
    /// Exclude the property from visible views.
    Hidden,
    /// Render a string property as multi-line text.
    MultiLine,
    /// The property accepts an absent value.
    Nullable,
}

impl Annotation {
    /// `Localized` with no literal.
    pub fn localized() -> Self {
        Annotation::Localized(String::new())
    }

    /// `Localized` with a literal fallback.
    pub fn localized_as(literal: impl Into<String>) -> Self {
        Annotation::Localized(literal.into())
    }

    pub fn kind(&self) -> AnnotationKind {
        match self {
            Annotation::Order(_) => AnnotationKind::Order,
            Annotation::Localized(_) => AnnotationKind::Localized,
            Annotation::Hidden => AnnotationKind::Hidden,
            Annotation::MultiLine => AnnotationKind::MultiLine,
            Annotation::Nullable => AnnotationKind::Nullable,
        }
    }
}

/// Discriminant of [`Annotation`], used for lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    Order,
    Localized,
    Hidden,
    MultiLine,
    Nullable,
}

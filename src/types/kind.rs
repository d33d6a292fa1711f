//! Registered type identifiers.
//!
//! Type checks compare [`TypeId`]s, never names. A [`TypeTag`] names exactly
//! one concrete type; a [`TypeFamily`] groups several tags under one name and
//! stands in for a supertype or interface: a value is-a family when its
//! concrete type is one of the members.

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Borrowed element view of a sequence, if the value is one.
type ElementsFn = for<'a> fn(&'a dyn Any) -> Option<Vec<&'a dyn Any>>;

/// Identifier for one concrete type.
///
/// Equality and hashing use the `TypeId` only; the display name is cosmetic.
#[derive(Clone)]
pub struct TypeTag {
    id: TypeId,
    name: Cow<'static, str>,
    elements: ElementsFn,
    array: Option<ElementsFn>,
}

impl TypeTag {
    /// Tag for `T`, named after its path-less type name.
    pub fn of<T: Any>() -> Self {
        Self::named::<T>(short_type_name(std::any::type_name::<T>()))
    }

    /// Tag for `T` with a caller-chosen display name.
    pub fn named<T: Any>(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: name.into(),
            elements: sequence_of::<T>,
            array: None,
        }
    }

    /// Tag for `T` that also views fixed-size `[T; N]` arrays as sequences.
    ///
    /// Array length is part of the type, so each `N` needs its own tag.
    pub fn array_of<T: Any, const N: usize>() -> Self {
        Self {
            array: Some(fixed_array_of::<T, N>),
            ..Self::of::<T>()
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this tag names `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Exact-type test against a type-erased value.
    pub fn matches(&self, value: &dyn Any) -> bool {
        value.type_id() == self.id
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeTag").field(&self.name).finish()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named group of concrete types that share a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFamily {
    name: Cow<'static, str>,
    members: Vec<TypeTag>,
}

impl TypeFamily {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Register `T` as a member.
    pub fn with<T: Any>(self) -> Self {
        self.member(TypeTag::of::<T>())
    }

    /// Register an existing tag as a member.
    ///
    /// A tag for an already registered type is merged into the existing one:
    /// it only contributes a fixed-size array view the member lacks.
    pub fn member(mut self, tag: TypeTag) -> Self {
        match self.members.iter_mut().find(|existing| **existing == tag) {
            Some(existing) => {
                if existing.array.is_none() {
                    existing.array = tag.array;
                }
            }
            None => self.members.push(tag),
        }
        self
    }

    pub fn members(&self) -> &[TypeTag] {
        &self.members
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.members.iter().any(TypeTag::is::<T>)
    }
}

impl fmt::Display for TypeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Anything a value can be checked against with is-a semantics.
pub trait Kind {
    /// Name used in error messages.
    fn name(&self) -> &str;

    /// Concrete types that satisfy this kind.
    fn tags(&self) -> &[TypeTag];

    fn admits(&self, value: &dyn Any) -> bool {
        self.tags().iter().any(|tag| tag.matches(value))
    }

    /// View `value` as an ordered sequence, or `None` if it is not one.
    ///
    /// Heterogeneous `Vec<Box<dyn Any>>` sequences are always recognised.
    /// Homogeneous `Vec<T>`, `VecDeque<T>`, `Box<[T]>` and `&'static [T]`
    /// are recognised for the member types `T`. A fixed-size `[T; N]` is only
    /// recognised through a tag built with [`TypeTag::array_of`].
    fn elements<'a>(&self, value: &'a dyn Any) -> Option<Vec<&'a dyn Any>> {
        boxed_elements(value).or_else(|| {
            self.tags().iter().find_map(|tag| {
                (tag.elements)(value).or_else(|| tag.array.and_then(|array| array(value)))
            })
        })
    }
}

impl Kind for TypeTag {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[TypeTag] {
        std::slice::from_ref(self)
    }
}

impl Kind for TypeFamily {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[TypeTag] {
        &self.members
    }
}

fn erase<'a, T: Any>(items: impl Iterator<Item = &'a T>) -> Vec<&'a dyn Any> {
    items.map(|item| item as &dyn Any).collect()
}

fn sequence_of<T: Any>(value: &dyn Any) -> Option<Vec<&dyn Any>> {
    if let Some(items) = value.downcast_ref::<Vec<T>>() {
        return Some(erase(items.iter()));
    }
    if let Some(items) = value.downcast_ref::<VecDeque<T>>() {
        return Some(erase(items.iter()));
    }
    if let Some(items) = value.downcast_ref::<Box<[T]>>() {
        return Some(erase(items.iter()));
    }
    value
        .downcast_ref::<&'static [T]>()
        .map(|items| erase(items.iter()))
}

fn fixed_array_of<T: Any, const N: usize>(value: &dyn Any) -> Option<Vec<&dyn Any>> {
    value
        .downcast_ref::<[T; N]>()
        .map(|items| erase(items.iter()))
}

fn boxed_elements(value: &dyn Any) -> Option<Vec<&dyn Any>> {
    // Deref through the box so each element is inspected, not the Box itself.
    if let Some(items) = value.downcast_ref::<Vec<Box<dyn Any>>>() {
        return Some(items.iter().map(|item| &**item).collect());
    }
    if let Some(items) = value.downcast_ref::<Vec<Box<dyn Any + Send>>>() {
        return Some(items.iter().map(|item| &**item as &dyn Any).collect());
    }
    value
        .downcast_ref::<Vec<Box<dyn Any + Send + Sync>>>()
        .map(|items| items.iter().map(|item| &**item as &dyn Any).collect())
}

/// Strip module paths from every segment of a type name.
///
/// `alloc::vec::Vec<app::model::Customer>` becomes `Vec<Customer>`.
pub(crate) fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
    }
    out
}

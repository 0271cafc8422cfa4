// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{
    any::{type_name, Any},
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{
    error::CallbackError,
    numberparser::{NumberError, Radix},
    span::Span,
};

pub type Callback<'d, 'i> = Box<dyn FnMut(&'i [u8]) -> Result<(), CallbackError> + 'd>;

/// A caller-owned slot that receives one capture group.
///
/// `'d` is the lifetime of the borrowed cell, `'i` is the lifetime of the
/// input, which matters for `Bytes` and `Callback` since they receive
/// slices of the input itself.
pub enum Destination<'d, 'i> {
    /// Ignores the capture group, even if it did not participate in the match.
    Discard,

    /// Stores an owned copy of the capture group, which must be valid UTF-8.
    Text(&'d mut String),

    /// Stores a view of the input, no copy is made.
    ///
    /// Call `to_vec()` on the stored slice when an independent copy is needed.
    Bytes(&'d mut &'i [u8]),

    Bool(&'d mut bool),

    Int(IntCell<'d>, Radix),

    Float(FloatCell<'d>),

    /// Stores the offsets of the capture group instead of its content.
    Span(&'d mut Span),

    /// Passes the raw capture group to a conversion function.
    ///
    /// A group that did not participate in the match is passed as an
    /// empty slice.
    Callback(Callback<'d, 'i>),

    /// A cell whose type is only known at runtime, see `Destination::any`.
    Dynamic {
        cell: &'d mut dyn Any,
        type_name: &'static str,
    },
}

impl<'d, 'i> Destination<'d, 'i> {
    /// An integer destination that only accepts base-10 literals.
    pub fn decimal(cell: impl Into<IntCell<'d>>) -> Self {
        Destination::Int(cell.into(), Radix::Decimal)
    }

    /// Wraps a conversion function, any error type convertible into
    /// `CallbackError` is accepted.
    pub fn callback<F, E>(mut f: F) -> Self
    where
        F: FnMut(&'i [u8]) -> Result<(), E> + 'd,
        E: Into<CallbackError>,
    {
        Destination::Callback(Box::new(
            move |bytes: &'i [u8]| -> Result<(), CallbackError> { f(bytes).map_err(Into::into) },
        ))
    }

    /// A destination whose type is checked when the capture group is assigned.
    ///
    /// Supported types are `String`, `bool`, `Span`, `f32`, `f64` and every
    /// primitive integer type up to 64 bits (plus `isize` and `usize`),
    /// anything else fails with `ScanError::UnsupportedDestinationType`.
    pub fn any<T: Any>(cell: &'d mut T) -> Self {
        Destination::Dynamic {
            cell,
            type_name: type_name::<T>(),
        }
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, Destination::Discard)
    }
}

impl fmt::Debug for Destination<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Discard => write!(f, "Discard"),
            Destination::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Destination::Bytes(value) => f.debug_tuple("Bytes").field(value).finish(),
            Destination::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Destination::Int(cell, radix) => {
                f.debug_tuple("Int").field(cell).field(radix).finish()
            }
            Destination::Float(cell) => f.debug_tuple("Float").field(cell).finish(),
            Destination::Span(value) => f.debug_tuple("Span").field(value).finish(),
            Destination::Callback(_) => write!(f, "Callback"),
            Destination::Dynamic { type_name, .. } => write!(f, "Dynamic({})", type_name),
        }
    }
}

/// An integer cell of a fixed width and signedness.
#[derive(Debug)]
pub enum IntCell<'d> {
    I8(&'d mut i8),
    I16(&'d mut i16),
    I32(&'d mut i32),
    I64(&'d mut i64),
    Isize(&'d mut isize),
    U8(&'d mut u8),
    U16(&'d mut u16),
    U32(&'d mut u32),
    U64(&'d mut u64),
    Usize(&'d mut usize),
}

impl IntCell<'_> {
    /// The name of the cell type, used in range errors.
    pub fn kind(&self) -> &'static str {
        match self {
            IntCell::I8(_) => "i8",
            IntCell::I16(_) => "i16",
            IntCell::I32(_) => "i32",
            IntCell::I64(_) => "i64",
            IntCell::Isize(_) => "isize",
            IntCell::U8(_) => "u8",
            IntCell::U16(_) => "u16",
            IntCell::U32(_) => "u32",
            IntCell::U64(_) => "u64",
            IntCell::Usize(_) => "usize",
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            IntCell::I8(_) | IntCell::I16(_) | IntCell::I32(_) | IntCell::I64(_) | IntCell::Isize(_)
        )
    }

    /// Narrows `value` to the cell type and stores it, the cell is left
    /// untouched when the value does not fit.
    pub fn store(&mut self, value: i128) -> Result<(), NumberError> {
        match self {
            IntCell::I8(cell) => narrow(&mut **cell, value),
            IntCell::I16(cell) => narrow(&mut **cell, value),
            IntCell::I32(cell) => narrow(&mut **cell, value),
            IntCell::I64(cell) => narrow(&mut **cell, value),
            IntCell::Isize(cell) => narrow(&mut **cell, value),
            IntCell::U8(cell) => narrow(&mut **cell, value),
            IntCell::U16(cell) => narrow(&mut **cell, value),
            IntCell::U32(cell) => narrow(&mut **cell, value),
            IntCell::U64(cell) => narrow(&mut **cell, value),
            IntCell::Usize(cell) => narrow(&mut **cell, value),
        }
    }
}

fn narrow<T: TryFrom<i128>>(cell: &mut T, value: i128) -> Result<(), NumberError> {
    *cell = T::try_from(value).map_err(|_| NumberError::Range)?;
    Ok(())
}

#[derive(Debug)]
pub enum FloatCell<'d> {
    F32(&'d mut f32),
    F64(&'d mut f64),
}

impl<'d> From<&'d mut f32> for FloatCell<'d> {
    fn from(cell: &'d mut f32) -> Self {
        FloatCell::F32(cell)
    }
}

impl<'d> From<&'d mut f64> for FloatCell<'d> {
    fn from(cell: &'d mut f64) -> Self {
        FloatCell::F64(cell)
    }
}

macro_rules! impl_from_int_cell {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'d> From<&'d mut $ty> for IntCell<'d> {
                fn from(cell: &'d mut $ty) -> Self {
                    IntCell::$variant(cell)
                }
            }

            impl<'d, 'i> From<&'d mut $ty> for Destination<'d, 'i> {
                fn from(cell: &'d mut $ty) -> Self {
                    Destination::Int(IntCell::$variant(cell), Radix::Prefixed)
                }
            }
        )*
    };
}

impl_from_int_cell!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
);

impl<'d, 'i> From<&'d mut String> for Destination<'d, 'i> {
    fn from(cell: &'d mut String) -> Self {
        Destination::Text(cell)
    }
}

impl<'d, 'i> From<&'d mut &'i [u8]> for Destination<'d, 'i> {
    fn from(cell: &'d mut &'i [u8]) -> Self {
        Destination::Bytes(cell)
    }
}

impl<'d, 'i> From<&'d mut bool> for Destination<'d, 'i> {
    fn from(cell: &'d mut bool) -> Self {
        Destination::Bool(cell)
    }
}

impl<'d, 'i> From<&'d mut f32> for Destination<'d, 'i> {
    fn from(cell: &'d mut f32) -> Self {
        Destination::Float(FloatCell::F32(cell))
    }
}

impl<'d, 'i> From<&'d mut f64> for Destination<'d, 'i> {
    fn from(cell: &'d mut f64) -> Self {
        Destination::Float(FloatCell::F64(cell))
    }
}

impl<'d, 'i> From<&'d mut Span> for Destination<'d, 'i> {
    fn from(cell: &'d mut Span) -> Self {
        Destination::Span(cell)
    }
}

/// Turns a runtime typed cell into one of the static kinds,
/// `None` if the type is not supported.
pub fn resolve_dynamic<'a, 'i>(cell: &'a mut dyn Any) -> Option<Destination<'a, 'i>> {
    if cell.is::<String>() {
        return cell.downcast_mut::<String>().map(Destination::Text);
    }
    if cell.is::<bool>() {
        return cell.downcast_mut::<bool>().map(Destination::Bool);
    }
    if cell.is::<Span>() {
        return cell.downcast_mut::<Span>().map(Destination::Span);
    }
    if cell.is::<f32>() {
        return cell.downcast_mut::<f32>().map(Destination::from);
    }
    if cell.is::<f64>() {
        return cell.downcast_mut::<f64>().map(Destination::from);
    }

    resolve_dynamic_int(cell).map(|int_cell| Destination::Int(int_cell, Radix::Prefixed))
}

fn resolve_dynamic_int(cell: &mut dyn Any) -> Option<IntCell<'_>> {
    if cell.is::<i8>() {
        return cell.downcast_mut::<i8>().map(IntCell::I8);
    }
    if cell.is::<i16>() {
        return cell.downcast_mut::<i16>().map(IntCell::I16);
    }
    if cell.is::<i32>() {
        return cell.downcast_mut::<i32>().map(IntCell::I32);
    }
    if cell.is::<i64>() {
        return cell.downcast_mut::<i64>().map(IntCell::I64);
    }
    if cell.is::<isize>() {
        return cell.downcast_mut::<isize>().map(IntCell::Isize);
    }
    if cell.is::<u8>() {
        return cell.downcast_mut::<u8>().map(IntCell::U8);
    }
    if cell.is::<u16>() {
        return cell.downcast_mut::<u16>().map(IntCell::U16);
    }
    if cell.is::<u32>() {
        return cell.downcast_mut::<u32>().map(IntCell::U32);
    }
    if cell.is::<u64>() {
        return cell.downcast_mut::<u64>().map(IntCell::U64);
    }
    if cell.is::<usize>() {
        return cell.downcast_mut::<usize>().map(IntCell::Usize);
    }
    None
}

/// An ordered list of destinations, filled left to right from capture
/// group 1 onwards.
///
/// e.g.
///
/// ```
/// use regex::bytes::Regex;
/// use regex_scan::{scan, Destinations};
///
/// let re = Regex::new(r"(\w+):(\d+)").unwrap();
/// let mut host = String::new();
/// let mut port = 0u16;
///
/// let mut destinations = Destinations::new().text(&mut host).int(&mut port);
/// scan(&re, b"host:1234", &mut destinations).unwrap();
/// drop(destinations);
///
/// assert_eq!(host, "host");
/// assert_eq!(port, 1234);
/// ```
#[derive(Default)]
pub struct Destinations<'d, 'i> {
    items: Vec<Destination<'d, 'i>>,
}

impl<'d, 'i> Destinations<'d, 'i> {
    pub fn new() -> Self {
        Destinations { items: Vec::new() }
    }

    pub fn push(mut self, destination: impl Into<Destination<'d, 'i>>) -> Self {
        self.items.push(destination.into());
        self
    }

    pub fn discard(self) -> Self {
        self.push(Destination::Discard)
    }

    pub fn text(self, cell: &'d mut String) -> Self {
        self.push(Destination::Text(cell))
    }

    pub fn bytes(self, cell: &'d mut &'i [u8]) -> Self {
        self.push(Destination::Bytes(cell))
    }

    pub fn boolean(self, cell: &'d mut bool) -> Self {
        self.push(Destination::Bool(cell))
    }

    pub fn int(self, cell: impl Into<IntCell<'d>>) -> Self {
        self.push(Destination::Int(cell.into(), Radix::Prefixed))
    }

    /// Same as `int`, but the literal is always read as base 10.
    pub fn decimal(self, cell: impl Into<IntCell<'d>>) -> Self {
        self.push(Destination::decimal(cell))
    }

    pub fn float(self, cell: impl Into<FloatCell<'d>>) -> Self {
        self.push(Destination::Float(cell.into()))
    }

    pub fn span(self, cell: &'d mut Span) -> Self {
        self.push(Destination::Span(cell))
    }

    pub fn callback<F, E>(self, f: F) -> Self
    where
        F: FnMut(&'i [u8]) -> Result<(), E> + 'd,
        E: Into<CallbackError>,
    {
        self.push(Destination::callback(f))
    }

    pub fn any<T: Any>(self, cell: &'d mut T) -> Self {
        self.push(Destination::any(cell))
    }

    pub fn into_vec(self) -> Vec<Destination<'d, 'i>> {
        self.items
    }
}

impl<'d, 'i> From<Vec<Destination<'d, 'i>>> for Destinations<'d, 'i> {
    fn from(items: Vec<Destination<'d, 'i>>) -> Self {
        Destinations { items }
    }
}

impl<'d, 'i> Deref for Destinations<'d, 'i> {
    type Target = [Destination<'d, 'i>];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl DerefMut for Destinations<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

//! The `Reflect` trait: turning Rust values into [`Value`]s the dispatcher
//! can inspect.
//!
//! Structs get it from `#[derive(Reflect)]`. The impls here cover the
//! field types a record is usually made of.

use std::rc::Rc;
use std::sync::Arc;

use crate::record::RecordValue;
use crate::value::Value;

/// Types whose runtime shape can be inspected by the validator.
pub trait Reflect {
    fn reflect(&self) -> Value;
}

impl Reflect for Value {
    fn reflect(&self) -> Value {
        self.clone()
    }
}

impl Reflect for RecordValue {
    fn reflect(&self) -> Value {
        Value::Record(self.clone())
    }
}

impl Reflect for () {
    fn reflect(&self) -> Value {
        Value::Nil
    }
}

impl Reflect for bool {
    fn reflect(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Reflect for str {
    fn reflect(&self) -> Value {
        Value::Str(self.to_owned())
    }
}

impl Reflect for String {
    fn reflect(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl Reflect for char {
    fn reflect(&self) -> Value {
        Value::Str(self.to_string())
    }
}

macro_rules! reflect_int {
    ($($t:ty),*) => {
        $(
            impl Reflect for $t {
                fn reflect(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

reflect_int!(i8, i16, i32, i64, u8, u16, u32);

// Wider than i64: clamp to the nearest representable bound.
macro_rules! reflect_wide_unsigned {
    ($($t:ty),*) => {
        $(
            impl Reflect for $t {
                fn reflect(&self) -> Value {
                    Value::Int(i64::try_from(*self).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

macro_rules! reflect_wide_signed {
    ($($t:ty),*) => {
        $(
            impl Reflect for $t {
                fn reflect(&self) -> Value {
                    let clamped = if *self < 0 { i64::MIN } else { i64::MAX };
                    Value::Int(i64::try_from(*self).unwrap_or(clamped))
                }
            }
        )*
    };
}

reflect_wide_unsigned!(u64, u128, usize);
reflect_wide_signed!(i128, isize);

impl Reflect for f32 {
    fn reflect(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl Reflect for f64 {
    fn reflect(&self) -> Value {
        Value::Float(*self)
    }
}

impl<T: Reflect> Reflect for [T] {
    fn reflect(&self) -> Value {
        Value::Seq(self.iter().map(Reflect::reflect).collect())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> Value {
        self.as_slice().reflect()
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Value {
        self.as_slice().reflect()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Value {
        match self {
            Some(inner) => Value::Ref(Box::new(inner.reflect())),
            None => Value::Nil,
        }
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn reflect(&self) -> Value {
        Value::Ref(Box::new((**self).reflect()))
    }
}

impl<T: Reflect + ?Sized> Reflect for Rc<T> {
    fn reflect(&self) -> Value {
        Value::Ref(Box::new((**self).reflect()))
    }
}

impl<T: Reflect + ?Sized> Reflect for Arc<T> {
    fn reflect(&self) -> Value {
        Value::Ref(Box::new((**self).reflect()))
    }
}

// A borrow is not an indirection level.
impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

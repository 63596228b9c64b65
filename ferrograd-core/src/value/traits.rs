use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::{Operand, Value};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("id", &guard.id.as_u64())
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op)
            .field("label", &guard.label)
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        match &guard.label {
            Some(label) if !label.is_empty() => write!(
                f,
                "Value({:.4}, grad={:.4}, label={})",
                guard.data, guard.grad, label
            ),
            _ => write!(f, "Value({:.4}, grad={:.4})", guard.data, guard.grad),
        }
    }
}

/// Value equality: same `data` and same `grad`.
///
/// This is not node identity; use [`Value::ptr_eq`] or [`Value::id`] for that.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data() && self.grad() == other.grad()
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<R: Into<Operand>> $trait<R> for Value {
            type Output = Value;
            fn $method(self, rhs: R) -> Value {
                $op_fn(&self, &rhs.into().into_value())
            }
        }

        impl<R: Into<Operand>> $trait<R> for &Value {
            type Output = Value;
            fn $method(self, rhs: R) -> Value {
                $op_fn(self, &rhs.into().into_value())
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, &v))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, v))
    }
}

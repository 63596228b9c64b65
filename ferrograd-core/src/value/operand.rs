use crate::error::FerroGradError;
use crate::value::Value;
use num_traits::ToPrimitive;

/// Input accepted wherever a graph node is expected.
///
/// Plain numbers are promoted to fresh leaf nodes by [`Operand::into_value`];
/// existing nodes are passed through by reference so their graph links survive.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f64),
    Node(Value),
}

impl Operand {
    /// Converts any primitive number into an operand.
    ///
    /// # Errors
    /// Returns `FerroGradError::NonNumericLeaf` if `n` has no `f64` representation.
    pub fn try_from_primitive<N: ToPrimitive + std::fmt::Debug>(n: N) -> Result<Self, FerroGradError> {
        n.to_f64()
            .map(Operand::Number)
            .ok_or_else(|| FerroGradError::NonNumericLeaf(format!("{:?}", n)))
    }

    /// The numeric value carried by this operand.
    pub fn data(&self) -> f64 {
        match self {
            Operand::Number(x) => *x,
            Operand::Node(v) => v.data(),
        }
    }

    /// Normalizes the operand to a graph node.
    pub fn into_value(self) -> Value {
        match self {
            Operand::Number(x) => Value::new(x),
            Operand::Node(v) => v,
        }
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Number(x)
    }
}

impl From<f32> for Operand {
    fn from(x: f32) -> Self {
        Operand::Number(f64::from(x))
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Operand::Number(f64::from(x))
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Node(v)
    }
}

impl From<&Value> for Operand {
    fn from(v: &Value) -> Self {
        Operand::Node(v.clone())
    }
}

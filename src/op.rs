//! Arithmetic strategies and the name-keyed operation registry.

use hashbrown::HashMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::error::OperationError;

/// Stateless arithmetic strategy selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `a + b`.
    Addition,
    /// `a - b`.
    Subtraction,
    /// `a * b`.
    Multiplication,
    /// `a / b`; rejects a zero divisor.
    Division,
    /// `a ^ b` via float exponentiation; rejects a negative exponent.
    Power,
    /// `b`-th root of `a` via float exponentiation; rejects a negative base
    /// and a zero index.
    Root,
    /// `a mod b`; rejects a zero divisor.
    Modulus,
    /// `(a + b) / 2`.
    Average,
}

/// All built-in strategies, in registration order.
const BUILTINS: [Operation; 8] = [
    Operation::Addition,
    Operation::Subtraction,
    Operation::Multiplication,
    Operation::Division,
    Operation::Power,
    Operation::Root,
    Operation::Modulus,
    Operation::Average,
];

impl Operation {
    /// Canonical lowercase name used in records and the registry.
    pub fn name(self) -> &'static str {
        match self {
            Self::Addition => "add",
            Self::Subtraction => "subtract",
            Self::Multiplication => "multiply",
            Self::Division => "divide",
            Self::Power => "power",
            Self::Root => "root",
            Self::Modulus => "mod",
            Self::Average => "average",
        }
    }

    /// Resolves a built-in strategy from its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTINS.into_iter().find(|op| op.name() == name)
    }

    /// Checks operand preconditions without executing.
    pub fn validate(self, a: Decimal, b: Decimal) -> Result<(), OperationError> {
        match self {
            Self::Division if b.is_zero() => Err(OperationError::DivisionByZero),
            Self::Modulus if b.is_zero() => Err(OperationError::ModulusByZero),
            Self::Power if b < Decimal::ZERO => Err(OperationError::NegativeExponent),
            Self::Root if a < Decimal::ZERO => Err(OperationError::NegativeRootBase),
            Self::Root if b.is_zero() => Err(OperationError::ZeroRootIndex),
            _ => Ok(()),
        }
    }

    /// Applies the strategy to `(a, b)`.
    ///
    /// Power and Root run through `f64` exponentiation and carry its rounding
    /// into the decimal result; the remaining operations are exact decimal
    /// arithmetic.
    pub fn execute(self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        self.validate(a, b)?;
        match self {
            Self::Addition => a.checked_add(b).ok_or_else(|| overflow(a, b)),
            Self::Subtraction => a.checked_sub(b).ok_or_else(|| overflow(a, b)),
            Self::Multiplication => a.checked_mul(b).ok_or_else(|| overflow(a, b)),
            Self::Division => a.checked_div(b).ok_or_else(|| overflow(a, b)),
            Self::Power => float_pow(a, to_float(b)?),
            Self::Root => float_pow(a, 1.0 / to_float(b)?),
            Self::Modulus => a.checked_rem(b).ok_or_else(|| overflow(a, b)),
            Self::Average => a
                .checked_add(b)
                .and_then(|sum| sum.checked_div(Decimal::TWO))
                .ok_or_else(|| overflow(a, b)),
        }
    }
}

fn overflow(a: Decimal, b: Decimal) -> OperationError {
    OperationError::Arithmetic(format!("decimal overflow on ({a}, {b})"))
}

fn to_float(value: Decimal) -> Result<f64, OperationError> {
    value
        .to_f64()
        .ok_or_else(|| OperationError::Arithmetic(format!("{value} is not representable as float")))
}

fn float_pow(base: Decimal, exponent: f64) -> Result<Decimal, OperationError> {
    let raised = to_float(base)?.powf(exponent);
    Decimal::from_f64(raised).ok_or_else(|| {
        OperationError::Arithmetic(format!("result {raised} is not representable as decimal"))
    })
}

/// Name-keyed registry of operation strategies.
///
/// Names are lowercased on registration and lookup; re-registering a name
/// silently replaces the prior mapping.
#[derive(Debug, Clone)]
pub struct OperationRegistry {
    ops: HashMap<String, Operation>,
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationRegistry {
    /// Builds a registry with the eight built-in operations registered under
    /// their canonical names.
    pub fn new() -> Self {
        let mut ops = HashMap::new();
        for op in BUILTINS {
            ops.insert(op.name().to_string(), op);
        }
        Self { ops }
    }

    /// Maps `name` to `op`, replacing any prior mapping.
    pub fn register(&mut self, name: &str, op: Operation) {
        self.ops.insert(name.to_ascii_lowercase(), op);
    }

    /// Returns a fresh strategy instance for `name`.
    pub fn create(&self, name: &str) -> Result<Operation, OperationError> {
        self.ops
            .get(&name.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| OperationError::Unknown(name.to_string()))
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True when no names are registered.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

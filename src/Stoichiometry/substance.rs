use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle of the picture a front end draws for a substance.
/// The quantity model never looks inside; it only compares handles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Icon(pub String);

impl Icon {
    pub fn new(key: &str) -> Self {
        Icon(key.to_string())
    }
    pub fn key(&self) -> &str {
        &self.0
    }
}

/// a named quantity holder with a stoichiometric coefficient
#[derive(Debug, Clone)]
pub struct Substance {
    symbol: String,
    coefficient: u32,
    quantity: u32,
    icon: Icon,
    // construction-time values restored by reset()
    initial_coefficient: u32,
    initial_quantity: u32,
}

impl Substance {
    pub fn new(coefficient: u32, symbol: &str, icon: Icon, quantity: u32) -> Self {
        Self {
            symbol: symbol.to_string(),
            coefficient,
            quantity,
            icon,
            initial_coefficient: coefficient,
            initial_quantity: quantity,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
    pub fn coefficient(&self) -> u32 {
        self.coefficient
    }
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
    pub fn icon(&self) -> &Icon {
        &self.icon
    }
    pub fn set_coefficient(&mut self, coefficient: u32) {
        self.coefficient = coefficient;
    }
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// symbol, coefficient, icon and quantity all match
    pub fn equals(&self, other: &Substance) -> bool {
        self.symbol == other.symbol
            && self.coefficient == other.coefficient
            && self.icon == other.icon
            && self.quantity == other.quantity
    }

    /// Independent copy of the substance. With `Some(q)` the copy starts (and resets) at quantity `q`,
    /// which is how the guessable side of a challenge gets zeroed.
    pub fn clone_with(&self, quantity: Option<u32>) -> Substance {
        let quantity = quantity.unwrap_or(self.quantity);
        Substance {
            symbol: self.symbol.clone(),
            coefficient: self.coefficient,
            quantity,
            icon: self.icon.clone(),
            initial_coefficient: self.coefficient,
            initial_quantity: quantity,
        }
    }

    pub fn reset(&mut self) {
        self.coefficient = self.initial_coefficient;
        self.quantity = self.initial_quantity;
    }
}

impl PartialEq for Substance {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Substance {}

impl fmt::Display for Substance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.coefficient, self.symbol)
    }
}

//! Parses text equations like "2H2 + O2 -> 2H2O" into reactions.
//! The arrow may be written as "->", "=>" or "=". A missing coefficient means 1.
use crate::Stoichiometry::reaction::Reaction;
use crate::Stoichiometry::stoich_errors::StoichiometryError;
use crate::Stoichiometry::substance::{Icon, Substance};
use regex::Regex;

fn parse_error(equation: &str, reason: &str) -> StoichiometryError {
    StoichiometryError::Parse {
        equation: equation.to_string(),
        reason: reason.to_string(),
    }
}

/// one side of the equation: "2H2 + O2" -> [(2, "H2"), (1, "O2")]
fn parse_side(equation: &str, side: &str) -> Result<Vec<(u32, String)>, StoichiometryError> {
    let term_re = Regex::new(r"^\s*(\d*)\s*([A-Za-z][A-Za-z0-9()]*)\s*$")
        .map_err(|e| parse_error(equation, &e.to_string()))?;
    let mut terms = Vec::new();
    for term in side.split('+') {
        let caps = term_re
            .captures(term)
            .ok_or_else(|| parse_error(equation, &format!("bad term '{}'", term.trim())))?;
        let coefficient = match &caps[1] {
            "" => 1,
            digits => digits
                .parse::<u32>()
                .map_err(|e| parse_error(equation, &e.to_string()))?,
        };
        terms.push((coefficient, caps[2].to_string()));
    }
    Ok(terms)
}

/// splits an equation into (coefficient, symbol) lists of reactants and products
pub fn parse_equation(equation: &str) -> Result<(Vec<(u32, String)>, Vec<(u32, String)>), StoichiometryError> {
    let arrow_re = Regex::new(r"->|=>|=").map_err(|e| parse_error(equation, &e.to_string()))?;
    let sides: Vec<&str> = arrow_re.split(equation).collect();
    if sides.len() != 2 {
        return Err(parse_error(equation, "expected exactly one arrow"));
    }
    let reactants = parse_side(equation, sides[0])?;
    let products = parse_side(equation, sides[1])?;
    Ok((reactants, products))
}

fn to_substances(terms: Vec<(u32, String)>) -> Vec<Substance> {
    terms
        .into_iter()
        .map(|(coefficient, symbol)| Substance::new(coefficient, &symbol, Icon::new(&symbol), 0))
        .collect()
}

impl Reaction {
    /// Reaction with all quantities at 0 built from a text equation; icons are keyed by symbol.
    pub fn from_equation(equation: &str, name: Option<&str>) -> Result<Reaction, StoichiometryError> {
        let (reactants, products) = parse_equation(equation)?;
        Reaction::new(to_substances(reactants), to_substances(products), name)
    }
}

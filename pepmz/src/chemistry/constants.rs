//! Physical constants and the basic mass to charge calculation

use crate::{chemistry::MolecularFormula, molecular_formula};

/// The mass of a proton in Dalton (CODATA 2018)
pub const MASS_PROTON: f64 = 1.007276466621;

/// The elemental composition of water, added once to every peptide for its termini
pub fn water() -> MolecularFormula {
    molecular_formula!(H 2 O 1)
}

/// Calculate the mass over charge for a molecule with the given neutral monoisotopic mass
/// carrying `charge` protons: `(M + z * m(p)) / z`. The charge is assumed to be validated
/// before, a charge of zero results in an infinite value.
pub fn mass_over_charge(monoisotopic_mass: f64, charge: isize) -> f64 {
    let z = charge as f64;
    z.mul_add(MASS_PROTON, monoisotopic_mass) / z
}

// src/noyau/faute.rs
//
// Fautes du noyau (récupérables, jamais fatales).
// - OperandMissing / ConstantMissing / VariableMissing : programme incomplet
// - DivideByZero / SquareRootOfNegativeNumber : validateurs d’opérateurs
// - Generic : message libre (garde-fous du moteur)

use thiserror::Error;

use super::format::format_g;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Faute {
    #[error("opérandes insuffisants")]
    OperandMissing,

    #[error("constante {0} non définie")]
    ConstantMissing(String),

    #[error("variable {0} non définie")]
    VariableMissing(String),

    #[error("division par zéro")]
    DivideByZero,

    #[error("racine carrée d'un nombre négatif")]
    SquareRootOfNegativeNumber,

    #[error("{0}")]
    Generic(String),
}

/// Résultat d’une évaluation : valeur ou faute typée.
pub type Resultat = Result<f64, Faute>;

/// Rendu affichable d’un résultat : `%g` pour une valeur, message sinon.
pub fn rendu_resultat(r: &Resultat) -> String {
    match r {
        Ok(v) => format_g(*v),
        Err(f) => f.to_string(),
    }
}

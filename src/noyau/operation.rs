// src/noyau/operation.rs
//
// Entrées de la pile (programme postfixé).
// - Constant / Variable : référence nommée, résolue à l’évaluation seulement
// - Operand : littéral
// - UnaryOp / BinaryOp : fonction + validateur optionnel (exécuté AVANT la fonction)
//
// IMPORTANT:
// - Le symbole sert de clé dans la table des opérateurs connus (unicité).
// - La précédence ne sert qu’à l’affichage (l’ordre d’évaluation = position dans la pile).
// - Convention binaire : f(op1, op2) où op1 = sommet (le plus récent), op2 = juste dessous.

use super::faute::Faute;
use super::format::format_g;

/// Validateur unaire : Some(faute) => la fonction n’est pas appelée.
pub type ValidateurUnaire = fn(f64) -> Option<Faute>;

/// Validateur binaire, reçoit (op1, op2) comme la fonction.
pub type ValidateurBinaire = fn(f64, f64) -> Option<Faute>;

#[derive(Clone, Debug)]
pub struct OpUnaire {
    pub symbole: String,
    pub fonction: fn(f64) -> f64,
    pub validateur: Option<ValidateurUnaire>,
}

#[derive(Clone, Debug)]
pub struct OpBinaire {
    pub symbole: String,
    pub precedence: i32,
    pub fonction: fn(f64, f64) -> f64,
    pub validateur: Option<ValidateurBinaire>,
}

#[derive(Clone, Debug)]
pub enum Op {
    Constant(String),
    Variable(String),
    Operand(f64),
    UnaryOp(OpUnaire),
    BinaryOp(OpBinaire),
}

impl Op {
    pub fn unaire(
        symbole: &str,
        fonction: fn(f64) -> f64,
        validateur: Option<ValidateurUnaire>,
    ) -> Op {
        Op::UnaryOp(OpUnaire {
            symbole: symbole.to_string(),
            fonction,
            validateur,
        })
    }

    pub fn binaire(
        symbole: &str,
        precedence: i32,
        fonction: fn(f64, f64) -> f64,
        validateur: Option<ValidateurBinaire>,
    ) -> Op {
        Op::BinaryOp(OpBinaire {
            symbole: symbole.to_string(),
            precedence,
            fonction,
            validateur,
        })
    }

    /// Texte affiché (et clé de table pour les opérateurs).
    pub fn symbole(&self) -> String {
        match self {
            Op::Constant(nom) | Op::Variable(nom) => nom.clone(),
            Op::Operand(v) => format_g(*v),
            Op::UnaryOp(u) => u.symbole.clone(),
            Op::BinaryOp(b) => b.symbole.clone(),
        }
    }

    /// Opérateur enregistrable dans la table (unaire ou binaire).
    pub fn est_operateur(&self) -> bool {
        matches!(self, Op::UnaryOp(_) | Op::BinaryOp(_))
    }
}

/* ------------------------ Table par défaut ------------------------ */

pub const PRECEDENCE_MULTIPLICATIVE: i32 = 100;
pub const PRECEDENCE_ADDITIVE: i32 = 50;

fn valide_diviseur(diviseur: f64, _dividende: f64) -> Option<Faute> {
    if diviseur == 0.0 {
        Some(Faute::DivideByZero)
    } else {
        None
    }
}

fn valide_racine(x: f64) -> Option<Faute> {
    if x < 0.0 {
        Some(Faute::SquareRootOfNegativeNumber)
    } else {
        None
    }
}

/// Opérateurs connus au démarrage : × ÷ + − √ cos sin ±.
pub fn operateurs_par_defaut() -> Vec<Op> {
    vec![
        Op::binaire("×", PRECEDENCE_MULTIPLICATIVE, |a, b| a * b, None),
        // op1 = diviseur (sommet), op2 = dividende
        Op::binaire(
            "÷",
            PRECEDENCE_MULTIPLICATIVE,
            |op1, op2| op2 / op1,
            Some(valide_diviseur),
        ),
        Op::binaire("+", PRECEDENCE_ADDITIVE, |a, b| a + b, None),
        Op::binaire("−", PRECEDENCE_ADDITIVE, |op1, op2| op2 - op1, None),
        Op::unaire("√", f64::sqrt, Some(valide_racine)),
        Op::unaire("cos", f64::cos, None),
        Op::unaire("sin", f64::sin, None),
        Op::unaire("±", |x| -x, None),
    ]
}

/// Constantes connues au démarrage.
pub fn constantes_par_defaut() -> Vec<(String, f64)> {
    vec![("π".to_string(), std::f64::consts::PI)]
}

//! Moteur d’expressions : pile postfixée + tables.
//!
//! Contrats :
//! - La pile n’est modifiée que par push / operate / undo / clear.
//! - Chaque mutation renvoie la réévaluation complète de la pile.
//! - Opérateur inconnu : la pile reste intacte (pas de faute, simple avertissement).
//! - `clear` vide pile + variables ; les constantes persistent.
//! - Garde-fou : capacité bornée (mémoire ; le parcours est itératif, sans récursion).

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, trace, warn};

use super::description::decrit;
use super::eval::evalue;
use super::faute::{Faute, Resultat};
use super::operation::{constantes_par_defaut, operateurs_par_defaut, Op};

/// Nombre maximal d’entrées dans la pile.
pub const CAPACITE_PILE: usize = 4096;

/// Séparateur des sous-expressions indépendantes dans la description.
pub const SEPARATEUR: &str = ",";

#[derive(Clone, Debug)]
pub struct Reglages {
    pub capacite: usize,
    pub separateur: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            capacite: CAPACITE_PILE,
            separateur: SEPARATEUR.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Moteur {
    pile: Vec<Op>,
    operateurs: HashMap<String, Op>,
    constantes: HashMap<String, f64>,
    variables: HashMap<String, f64>,
    reglages: Reglages,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::new()
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::avec_reglages(Reglages::default())
    }

    pub fn avec_reglages(reglages: Reglages) -> Self {
        let operateurs = operateurs_par_defaut()
            .into_iter()
            .map(|op| (op.symbole(), op))
            .collect();

        Self {
            pile: Vec::new(),
            operateurs,
            constantes: constantes_par_defaut().into_iter().collect(),
            variables: HashMap::new(),
            reglages,
        }
    }

    /* ------------------------ Table des opérateurs ------------------------ */

    /// Enregistre un opérateur supplémentaire (symbole unique).
    pub fn apprendre(&mut self, op: Op) -> Result<(), Faute> {
        if !op.est_operateur() {
            return Err(Faute::Generic(format!(
                "{} n’est pas un opérateur",
                op.symbole()
            )));
        }

        let symbole = op.symbole();
        if self.operateurs.contains_key(&symbole) {
            return Err(Faute::Generic(format!("opérateur {symbole} déjà connu")));
        }

        debug!(%symbole, "opérateur appris");
        self.operateurs.insert(symbole, op);
        Ok(())
    }

    /* ------------------------ Mutations de la pile ------------------------ */

    pub fn push_operand(&mut self, valeur: f64) -> Resultat {
        self.empile(Op::Operand(valeur))
    }

    /// Référence nommée (variable utilisateur ou tout “nom” à résoudre plus tard).
    pub fn push_symbol(&mut self, nom: &str) -> Resultat {
        self.empile(Op::Variable(nom.to_string()))
    }

    /// Référence de constante : résolue seulement à l’évaluation.
    pub fn push_constant(&mut self, nom: &str) -> Resultat {
        self.empile(Op::Constant(nom.to_string()))
    }

    pub fn perform_operation(&mut self, symbole: &str) -> Resultat {
        match self.operateurs.get(symbole).cloned() {
            Some(op) => self.empile(op),
            None => {
                warn!(%symbole, "opérateur inconnu ignoré");
                self.evaluate()
            }
        }
    }

    /// Retire l’entrée la plus récente (sans effet sur une pile vide).
    pub fn undo(&mut self) -> Resultat {
        match self.pile.pop() {
            Some(op) => trace!(symbole = %op.symbole(), "undo"),
            None => trace!("undo sur pile vide"),
        }
        self.evaluate()
    }

    pub fn clear(&mut self) {
        info!(
            entrees = self.pile.len(),
            variables = self.variables.len(),
            "moteur remis à zéro"
        );
        self.pile.clear();
        self.variables.clear();
    }

    fn empile(&mut self, op: Op) -> Resultat {
        if self.pile.len() >= self.reglages.capacite {
            warn!(capacite = self.reglages.capacite, "pile pleine, entrée refusée");
            return Err(Faute::Generic("pile pleine".into()));
        }

        trace!(symbole = %op.symbole(), taille = self.pile.len() + 1, "push");
        self.pile.push(op);
        self.evaluate()
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn evaluate(&self) -> Resultat {
        let resultat = evalue(&self.pile, &self.constantes, &self.variables);
        debug!(taille = self.pile.len(), ?resultat, "évaluation");
        resultat
    }

    pub fn description(&self) -> String {
        decrit(&self.pile, &self.reglages.separateur)
    }

    /// Vue en lecture seule du programme.
    pub fn pile_programme(&self) -> &[Op] {
        &self.pile
    }

    pub fn taille(&self) -> usize {
        self.pile.len()
    }

    pub fn est_vide(&self) -> bool {
        self.pile.is_empty()
    }

    /* ------------------------ Tables ------------------------ */

    pub fn set_variable(&mut self, nom: &str, valeur: f64) {
        self.variables.insert(nom.to_string(), valeur);
    }

    pub fn variable(&self, nom: &str) -> Option<f64> {
        self.variables.get(nom).copied()
    }

    pub fn definir_constante(&mut self, nom: &str, valeur: f64) {
        self.constantes.insert(nom.to_string(), valeur);
    }

    pub fn constante(&self, nom: &str) -> Option<f64> {
        self.constantes.get(nom).copied()
    }
}

impl fmt::Display for Moteur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

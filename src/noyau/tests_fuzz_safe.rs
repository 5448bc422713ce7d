//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : programme bien formé => même résultat que le calcul direct
//! - programme quelconque => jamais de panique, undo = retour à l’état précédent

use std::time::{Duration, Instant};

use super::faute::{Faute, Resultat};
use super::moteur::Moteur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arbre de référence ------------------------ */

#[derive(Clone, Debug)]
enum Arbre {
    Nombre(f64),
    Pi,
    Unaire(&'static str, Box<Arbre>),
    // (symbole, gauche, droite) : gauche poussé en premier
    Binaire(&'static str, Box<Arbre>, Box<Arbre>),
}

const UNAIRES: [&str; 4] = ["√", "cos", "sin", "±"];
const BINAIRES: [&str; 4] = ["×", "÷", "+", "−"];

fn gen_arbre(rng: &mut Rng, profondeur: u32) -> Arbre {
    if profondeur == 0 || rng.pick(4) == 0 {
        return match rng.pick(6) {
            0 => Arbre::Pi,
            _ => Arbre::Nombre(rng.pick(9) as f64 - 2.0),
        };
    }

    if rng.pick(3) == 0 {
        let s = UNAIRES[rng.pick(4) as usize];
        Arbre::Unaire(s, Box::new(gen_arbre(rng, profondeur - 1)))
    } else {
        let s = BINAIRES[rng.pick(4) as usize];
        let g = gen_arbre(rng, profondeur - 1);
        let d = gen_arbre(rng, profondeur - 1);
        Arbre::Binaire(s, Box::new(g), Box::new(d))
    }
}

/// Calcul direct, même ordre de détection des fautes que la pile (droite d’abord).
fn calcul_direct(a: &Arbre) -> Resultat {
    match a {
        Arbre::Nombre(v) => Ok(*v),
        Arbre::Pi => Ok(std::f64::consts::PI),
        Arbre::Unaire(s, x) => {
            let x = calcul_direct(x)?;
            match *s {
                "√" if x < 0.0 => Err(Faute::SquareRootOfNegativeNumber),
                "√" => Ok(x.sqrt()),
                "cos" => Ok(x.cos()),
                "sin" => Ok(x.sin()),
                _ => Ok(-x),
            }
        }
        Arbre::Binaire(s, g, d) => {
            let droite = calcul_direct(d)?;
            let gauche = calcul_direct(g)?;
            match *s {
                "×" => Ok(gauche * droite),
                "÷" if droite == 0.0 => Err(Faute::DivideByZero),
                "÷" => Ok(gauche / droite),
                "+" => Ok(gauche + droite),
                _ => Ok(gauche - droite),
            }
        }
    }
}

/// Pousse l’arbre dans le moteur en ordre postfixé.
fn pousse(m: &mut Moteur, a: &Arbre) {
    match a {
        Arbre::Nombre(v) => {
            let _ = m.push_operand(*v);
        }
        Arbre::Pi => {
            let _ = m.push_constant("π");
        }
        Arbre::Unaire(s, x) => {
            pousse(m, x);
            let _ = m.perform_operation(s);
        }
        Arbre::Binaire(s, g, d) => {
            pousse(m, g);
            pousse(m, d);
            let _ = m.perform_operation(s);
        }
    }
}

fn memes_resultats(a: &Resultat, b: &Resultat) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x == y || (x.is_nan() && y.is_nan()),
        _ => a == b,
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_programmes_bien_formes() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0x5EED_CA1C);

    for i in 0..2_000 {
        budget(start, max);

        let arbre = gen_arbre(&mut rng, 5);
        let mut m = Moteur::new();
        pousse(&mut m, &arbre);

        let attendu = calcul_direct(&arbre);
        let obtenu = m.evaluate();
        assert!(
            memes_resultats(&attendu, &obtenu),
            "#{i} {arbre:?}: attendu {attendu:?}, obtenu {obtenu:?}"
        );

        let d = m.description();
        assert!(!d.is_empty(), "#{i} description vide");
        assert!(!d.contains('?'), "#{i} {d:?} ne devrait pas contenir ?");
    }
}

#[test]
fn fuzz_programmes_quelconques() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(42);

    let mut m = Moteur::new();
    for _ in 0..20_000 {
        budget(start, max);

        let avant = m.evaluate();
        let taille = m.taille();

        let r = match rng.pick(8) {
            0 | 1 => m.push_operand(rng.pick(7) as f64 - 3.0),
            2 => m.push_symbol(["M", "X"][rng.pick(2) as usize]),
            3 => m.push_constant(["π", "k"][rng.pick(2) as usize]),
            4 => m.perform_operation(UNAIRES[rng.pick(4) as usize]),
            5 => m.perform_operation(BINAIRES[rng.pick(4) as usize]),
            6 => m.perform_operation("inconnu"),
            _ => {
                if rng.pick(4) == 0 {
                    m.set_variable("M", rng.pick(5) as f64);
                }
                m.undo()
            }
        };

        // chaque mutation renvoie l’état courant
        assert!(memes_resultats(&r, &m.evaluate()));

        // undo d’un push réussi ramène l’évaluation précédente
        if m.taille() == taille + 1 && rng.pick(3) == 0 {
            let apres_undo = m.undo();
            assert!(memes_resultats(&apres_undo, &avant));
        }

        assert_eq!(m.description().is_empty(), m.est_vide());

        // pile bornée pour garder des descriptions courtes
        if m.taille() > 64 {
            m.clear();
        }
    }
}

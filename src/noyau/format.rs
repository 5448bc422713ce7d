// src/noyau/format.rs
//
// Affichage des nombres flottants façon `%g` (C/printf) :
// - 6 chiffres significatifs
// - zéros finaux retirés (et le point s’il ne reste rien derrière)
// - forme exposant si exposant < -4 ou >= 6 (ex: 1e+06, 1.5e-05)

use std::fmt::{Display, LowerExp};

use num_traits::Float;

/// Chiffres significatifs (précision par défaut de `%g`).
const CHIFFRES_SIGNIFICATIFS: i32 = 6;

/// Formate un flottant comme `printf("%g", x)`.
pub fn format_g<T: Float + Display + LowerExp>(x: T) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    if x.is_zero() {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // L’exposant est lu APRÈS arrondi à 6 chiffres (999999.5 => 1e+06).
    let sci = format!("{:.*e}", (CHIFFRES_SIGNIFICATIFS - 1) as usize, x);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..CHIFFRES_SIGNIFICATIFS).contains(&exposant) {
        let decimales = (CHIFFRES_SIGNIFICATIFS - 1 - exposant) as usize;
        let fixe = format!("{:.*}", decimales, x);
        return retire_zeros_finaux(&fixe).to_string();
    }

    let signe = if exposant < 0 { '-' } else { '+' };
    format!(
        "{}e{}{:02}",
        retire_zeros_finaux(mantisse),
        signe,
        exposant.abs()
    )
}

fn retire_zeros_finaux(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

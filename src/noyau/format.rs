// src/noyau/format.rs
//
// Affichage du résultat numérique.
// - entier exact : pas de point final ("14", pas "14.0")
// - sinon : au plus `chiffres` décimales, zéros de queue retirés
// - jamais "-0", jamais NaN/inf (refusés : PasUnNombre)

use super::erreur::ErreurCalcul;

pub fn format_resultat(valeur: f64, chiffres: usize) -> Result<String, ErreurCalcul> {
    if !valeur.is_finite() {
        return Err(ErreurCalcul::PasUnNombre);
    }

    let brut = if valeur.fract() == 0.0 {
        format!("{valeur}")
    } else {
        let s = format!("{valeur:.chiffres$}");
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            s
        }
    };

    Ok(sans_zero_negatif(brut))
}

/// "-0" (ou "-0" après arrondi de -0.0000000000001) -> "0".
fn sans_zero_negatif(s: String) -> String {
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

// src/noyau/tampon.rs
//
// Gestion du tampon d’édition (expression non évaluée).
//
// Contrat : appliquer(tampon, touche) -> Some(nouveau tampon) ou None (touche refusée,
// tampon inchangé). Fonction pure : le tampon courant n’est jamais modifié en place.
//
// Invariants garantis sur tout tampon atteignable :
// - jamais deux opérateurs binaires consécutifs (le dernier choix remplace le précédent)
// - jamais d’opérateur binaire en tête (seul le moins unaire “±” peut ouvrir une opérande)
// - au plus un '.' par segment numérique
// - longueur <= longueur_max

use super::touches::{est_operateur, Touche};

/// Paramètres d’édition (issus des Réglages).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReglesEdition {
    /// Texte inséré par la touche π (ex: "3.14159").
    pub texte_pi: String,
    pub longueur_max: usize,
}

impl ReglesEdition {
    pub fn new(decimales_pi: usize, longueur_max: usize) -> Self {
        Self {
            texte_pi: format!("{:.*}", decimales_pi, std::f64::consts::PI),
            longueur_max,
        }
    }
}

impl Default for ReglesEdition {
    fn default() -> Self {
        Self::new(5, 128)
    }
}

/// Fin d’opérande : ce qui peut précéder un opérateur binaire.
fn termine_operande(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | ')' | '%')
}

/// Séparateurs de segments numériques.
fn coupe_segment(c: char) -> bool {
    est_operateur(c) || matches!(c, '(' | ')' | '%')
}

/// Segment numérique en fin de tampon (depuis le dernier séparateur).
pub fn segment_final(tampon: &str) -> &str {
    match tampon.rfind(coupe_segment) {
        Some(i) => &tampon[i + 1..],
        None => tampon,
    }
}

pub fn appliquer(tampon: &str, touche: Touche, regles: &ReglesEdition) -> Option<String> {
    let dernier = tampon.chars().last();

    let nouveau = match touche {
        Touche::Effacer => return Some(String::new()),

        Touche::Retour => {
            let mut t = tampon.to_string();
            t.pop()?;
            return Some(t);
        }

        Touche::Egal => return None,

        Touche::Operateur(op) => match dernier {
            None | Some('(') => return None,
            Some(c) if est_operateur(c) => {
                // remplacement, seulement si une vraie opérande précède
                // (un '-' unaire en tête ou après '(' ne se remplace pas)
                let mut t = tampon.to_string();
                t.pop();
                if !t.chars().last().is_some_and(termine_operande) {
                    return None;
                }
                t.push(op.symbole());
                t
            }
            Some(_) => format!("{tampon}{}", op.symbole()),
        },

        Touche::Point => {
            if segment_final(tampon).contains('.') {
                return None;
            }
            format!("{tampon}.")
        }

        Touche::Pourcent => match dernier {
            Some(c) if c.is_ascii_digit() || c == '.' => format!("{tampon}%"),
            _ => return None,
        },

        Touche::Pi => match dernier {
            None => regles.texte_pi.clone(),
            Some(c) if est_operateur(c) => format!("{tampon}{}", regles.texte_pi),
            Some(_) => return None,
        },

        Touche::Negation => match dernier {
            None | Some('(') => format!("{tampon}-"),
            Some(_) => return None,
        },

        Touche::Chiffre(d) => format!("{tampon}{}", char::from(b'0' + d.min(9))),
        Touche::ParGauche => format!("{tampon}("),
        Touche::ParDroite => format!("{tampon})"),
    };

    if nouveau.chars().count() > regles.longueur_max {
        return None;
    }
    Some(nouveau)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::touches::Operateur;

    fn regles() -> ReglesEdition {
        ReglesEdition::default()
    }

    /// Rejoue une suite de libellés depuis un tampon vide (touches refusées ignorées).
    fn tape(seq: &[&str]) -> String {
        let r = regles();
        let mut t = String::new();
        for s in seq {
            let touche: Touche = s.parse().unwrap();
            if let Some(n) = appliquer(&t, touche, &r) {
                t = n;
            }
        }
        t
    }

    #[test]
    fn operateur_refuse_sur_vide() {
        assert_eq!(appliquer("", Touche::Operateur(Operateur::Plus), &regles()), None);
        assert_eq!(tape(&["*", "/", "+"]), "");
    }

    #[test]
    fn operateur_remplace() {
        assert_eq!(tape(&["5", "+", "*"]), "5*");
        assert_eq!(tape(&["5", "+", "-", "/", "2"]), "5/2");
    }

    #[test]
    fn operateur_apres_parenthese_ouvrante_refuse() {
        assert_eq!(tape(&["(", "*"]), "(");
    }

    #[test]
    fn negation() {
        assert_eq!(tape(&["±", "3"]), "-3");
        assert_eq!(tape(&["2", "*", "(", "±", "1"]), "2*(-1");
        // pas de négation au milieu d’une opérande
        assert_eq!(tape(&["2", "±"]), "2");
        // un '-' unaire ne se remplace pas par un binaire
        assert_eq!(tape(&["±", "+"]), "-");
        assert_eq!(tape(&["(", "±", "*"]), "(-");
    }

    #[test]
    fn point_unique_par_segment() {
        assert_eq!(tape(&["1", ".", "5", "."]), "1.5");
        assert_eq!(tape(&["1", ".", "5", "+", ".", "2", "."]), "1.5+.2");
        assert_eq!(tape(&["(", "1", ".", ")", "."]), "(1.).");
    }

    #[test]
    fn segment_final_coupe() {
        assert_eq!(segment_final("12+3.4"), "3.4");
        assert_eq!(segment_final("(7"), "7");
        assert_eq!(segment_final("50%"), "");
        assert_eq!(segment_final("42"), "42");
    }

    #[test]
    fn pourcent_apres_nombre() {
        assert_eq!(tape(&["5", "0", "%"]), "50%");
        assert_eq!(tape(&["%"]), "");
        assert_eq!(tape(&["5", "%", "%"]), "5%");
        assert_eq!(tape(&["5", "+", "%"]), "5+");
    }

    #[test]
    fn pi_ouvre_une_operande() {
        assert_eq!(tape(&["pi"]), "3.14159");
        assert_eq!(tape(&["2", "*", "pi"]), "2*3.14159");
        assert_eq!(tape(&["2", "pi"]), "2");
        assert_eq!(tape(&["(", "pi"]), "(");
    }

    #[test]
    fn pi_decimales_reglables() {
        let r = ReglesEdition::new(2, 128);
        assert_eq!(appliquer("", Touche::Pi, &r).as_deref(), Some("3.14"));
    }

    #[test]
    fn retour_et_effacer() {
        assert_eq!(tape(&["1", "2", "backspace"]), "1");
        assert_eq!(appliquer("", Touche::Retour, &regles()), None);
        assert_eq!(tape(&["1", "+", "2", "clear"]), "");
    }

    #[test]
    fn longueur_bornee() {
        let r = ReglesEdition::new(5, 4);
        assert_eq!(appliquer("123", Touche::Chiffre(4), &r).as_deref(), Some("1234"));
        assert_eq!(appliquer("1234", Touche::Chiffre(5), &r), None);
        assert_eq!(appliquer("1+", Touche::Pi, &r), None);
        // le remplacement d’opérateur ne grandit pas le tampon
        assert_eq!(
            appliquer("123+", Touche::Operateur(Operateur::Fois), &r).as_deref(),
            Some("123*")
        );
    }
}

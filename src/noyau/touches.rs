// src/noyau/touches.rs
//
// Touches du pavé (KeyToken).
// Une touche = un événement discret venu de l’UI. Aucune logique d’édition ici:
// les règles vivent dans tampon.rs, l’automate dans moteur.rs.

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalcul;

/// Opérateur binaire (les seuls caractères qui ne peuvent pas se suivre).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }
}

/// Vrai pour `+ - * /`.
pub fn est_operateur(c: char) -> bool {
    Operateur::depuis_char(c).is_some()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8), // 0..=9
    Point,
    Operateur(Operateur),
    Pourcent,
    ParGauche,
    ParDroite,
    Pi,
    Negation, // moins unaire (±), distinct du '-' binaire
    Retour,   // backspace
    Effacer,  // clear
    Egal,
}

impl Touche {
    /// Clavier physique : un caractère tapé -> touche (None si hors pavé).
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c as u8 - b'0')),
            '.' | ',' => Some(Touche::Point),
            '%' => Some(Touche::Pourcent),
            '(' => Some(Touche::ParGauche),
            ')' => Some(Touche::ParDroite),
            'p' | 'P' | 'π' => Some(Touche::Pi),
            '=' => Some(Touche::Egal),
            'x' | '×' => Some(Touche::Operateur(Operateur::Fois)),
            '÷' => Some(Touche::Operateur(Operateur::Divise)),
            _ => Operateur::depuis_char(c).map(Touche::Operateur),
        }
    }

    /// Libellé affiché sur le bouton.
    pub fn libelle(self) -> &'static str {
        match self {
            Touche::Chiffre(d) => CHIFFRES[(d % 10) as usize],
            Touche::Point => ".",
            Touche::Operateur(Operateur::Plus) => "+",
            Touche::Operateur(Operateur::Moins) => "-",
            Touche::Operateur(Operateur::Fois) => "*",
            Touche::Operateur(Operateur::Divise) => "/",
            Touche::Pourcent => "%",
            Touche::ParGauche => "(",
            Touche::ParDroite => ")",
            Touche::Pi => "π",
            Touche::Negation => "±",
            Touche::Retour => "⌫",
            Touche::Effacer => "C",
            Touche::Egal => "=",
        }
    }
}

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}

/// Noms longs acceptés en plus des libellés : "pi", "backspace", "clear", "equals", "negate".
impl FromStr for Touche {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let touche = match t.to_ascii_lowercase().as_str() {
            "pi" | "π" => Touche::Pi,
            "backspace" | "⌫" | "del" => Touche::Retour,
            "clear" | "c" | "ac" => Touche::Effacer,
            "equals" | "=" => Touche::Egal,
            "negate" | "±" => Touche::Negation,
            _ => {
                let mut chars = t.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Touche::depuis_char(c)
                        .ok_or_else(|| ErreurCalcul::ToucheInconnue(t.to_string()))?,
                    _ => return Err(ErreurCalcul::ToucheInconnue(t.to_string())),
                }
            }
        };
        Ok(touche)
    }
}

/// Lit une suite de touches séparées par des espaces.
/// Un mot est d’abord lu comme nom de touche ("pi", "clear"...), sinon caractère par caractère :
/// "12 + pi =" -> [1, 2, +, π, =].
pub fn lire_sequence(s: &str) -> Result<Vec<Touche>, ErreurCalcul> {
    let mut out = Vec::new();
    for mot in s.split_whitespace() {
        if let Ok(t) = mot.parse::<Touche>() {
            out.push(t);
            continue;
        }
        for c in mot.chars() {
            let t = Touche::depuis_char(c)
                .ok_or_else(|| ErreurCalcul::ToucheInconnue(mot.to_string()))?;
            out.push(t);
        }
    }
    Ok(out)
}

//! Noyau — automate de la calculette (toutes touches confondues).
//!
//! Idle ──touche acceptée──▶ Editing ──“=”──▶ Result | Error
//!   ▲                          ▲                    │
//!   │                          └──touche donnée─────┘  (tampon repart de zéro)
//!   └───────────── “C” depuis n’importe quel état ─────────────
//!
//! Contrats :
//! - une touche est traitée jusqu’au bout avant la suivante (mono-fil, synchrone)
//! - seule “=” peut produire une erreur ; éditer ne mène jamais à un état d’erreur
//! - tampon et résultat sont remplacés à chaque transition, jamais lus à moitié modifiés

use tracing::debug;

use super::erreur::{classer, Evaluation};
use super::eval::{eval_expression, DemarcheNoyau};
use super::tampon::{appliquer, ReglesEdition};
use super::touches::Touche;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Editing,
    Result,
    Error,
}

/// Ce que l’UI doit afficher après une touche.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtatAffichage {
    pub texte: String,
    pub resultat: Option<String>,
    pub erreur: Option<&'static str>,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    tampon: String,
    resultat: Option<Evaluation>,
    demarche: Option<DemarcheNoyau>,

    regles: ReglesEdition,
    chiffres: usize,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::new(ReglesEdition::default(), 10)
    }
}

impl Moteur {
    pub fn new(regles: ReglesEdition, chiffres: usize) -> Self {
        Self {
            tampon: String::new(),
            resultat: None,
            demarche: None,
            regles,
            chiffres,
        }
    }

    /// pressKey : applique une touche puis renvoie l’état à afficher.
    pub fn press_key(&mut self, touche: Touche) -> EtatAffichage {
        match touche {
            Touche::Effacer => self.reset(),
            Touche::Egal => self.evaluer(),
            Touche::Retour => {
                if let Some(t) = appliquer(&self.tampon, touche, &self.regles) {
                    self.editer(t);
                }
            }
            _ => {
                // Après un résultat ou une erreur : on repart d’un tampon vide,
                // puis les règles ordinaires décident (ex: "+" seul reste refusé).
                let base = if self.resultat.is_some() {
                    ""
                } else {
                    self.tampon.as_str()
                };
                match appliquer(base, touche, &self.regles) {
                    Some(t) => self.editer(t),
                    None => debug!(touche = %touche, tampon = %self.tampon, "touche refusée"),
                }
            }
        }

        self.etat()
    }

    /// getDisplayText : tampon courant, ou "0" si vide.
    pub fn display_text(&self) -> &str {
        if self.tampon.is_empty() {
            "0"
        } else {
            &self.tampon
        }
    }

    /// getResultText : présent seulement juste après un “=” réussi.
    pub fn result_text(&self) -> Option<&str> {
        self.resultat.as_ref().and_then(Evaluation::valeur)
    }

    /// getErrorText : présent seulement juste après un “=” en échec.
    pub fn error_text(&self) -> Option<&'static str> {
        self.resultat
            .as_ref()
            .and_then(Evaluation::erreur)
            .map(|e| e.texte())
    }

    pub fn phase(&self) -> Phase {
        match &self.resultat {
            Some(Evaluation::Valeur(_)) => Phase::Result,
            Some(Evaluation::Erreur(_)) => Phase::Error,
            None if self.tampon.is_empty() => Phase::Idle,
            None => Phase::Editing,
        }
    }

    pub fn tampon(&self) -> &str {
        &self.tampon
    }

    /// Démarche du dernier “=” réussi (None sinon).
    pub fn demarche(&self) -> Option<&DemarcheNoyau> {
        self.demarche.as_ref()
    }

    pub fn etat(&self) -> EtatAffichage {
        EtatAffichage {
            texte: self.display_text().to_string(),
            resultat: self.result_text().map(str::to_string),
            erreur: self.error_text(),
        }
    }

    /* ------------------------ Transitions ------------------------ */

    fn reset(&mut self) {
        self.tampon.clear();
        self.resultat = None;
        self.demarche = None;
    }

    /// Toute édition acceptée efface le résultat / l’erreur affichés.
    fn editer(&mut self, tampon: String) {
        self.tampon = tampon;
        self.resultat = None;
        self.demarche = None;
    }

    fn evaluer(&mut self) {
        let (res, demarche) = match eval_expression(&self.tampon, self.chiffres) {
            Ok((valeur, d)) => {
                debug!(tampon = %self.tampon, %valeur, "évaluation réussie");
                (Ok(valeur), Some(d))
            }
            Err(e) => {
                debug!(tampon = %self.tampon, erreur = %e, "évaluation en échec");
                (Err(e), None)
            }
        };
        self.resultat = Some(classer(res));
        self.demarche = demarche;
    }
}

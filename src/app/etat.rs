//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le Moteur (tampon + résultat) et les petits drapeaux d’affichage.
//! Les Réglages ne servent qu’à construire le moteur.
//! Toute édition passe par `touche()` -> `Moteur::press_key` : l’UI ne touche jamais
//! au tampon directement.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing) : le moteur s’en charge sur “=”.
//! - Actions déterministes, sans effet de bord caché.
//! - Pas d’état global : tout vit dans AppCalc, possédé par eframe.

use crate::noyau::{EtatAffichage, Moteur, Touche};
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- moteur (tampon + résultat/erreur) ---
    pub moteur: Moteur,

    // --- UX ---
    pub demarche_ouverte: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            moteur: Moteur::new(reglages.regles_edition(), reglages.chiffres_affichage),
            demarche_ouverte: false,
        }
    }

    /// Une touche (bouton ou clavier) -> moteur.
    pub fn touche(&mut self, t: Touche) -> EtatAffichage {
        self.moteur.press_key(t)
    }

    /// Rejoue une suite de touches (raccourci clavier collé, tests).
    pub fn touches(&mut self, seq: impl IntoIterator<Item = Touche>) {
        for t in seq {
            self.touche(t);
        }
    }
}

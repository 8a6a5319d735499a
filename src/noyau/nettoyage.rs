// src/noyau/nettoyage.rs
//
// Nettoyage du tampon avant lecture structurée.
// Étapes (totales, pures) :
// 1) filtre : ne garde que 0-9 . + - * / ( ) %
// 2) littéraux : zéros de tête superflus retirés ("007" -> "7", "0.5" reste "0.5")
// 3) pourcent : "<nombre>%" -> "(<nombre>/100)", une passe, gauche -> droite
//
// Invariant : sanitize(sanitize(x)) == sanitize(x).

fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')' | '%')
}

fn est_litteral(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Retire les zéros de tête de la partie entière, sans changer la valeur.
/// Garde un zéro avant le point ("00.5" -> "0.5") ; ".5" reste ".5".
fn normalise_litteral(lit: &str) -> String {
    let (entier, reste) = match lit.find('.') {
        Some(i) => lit.split_at(i),
        None => (lit, ""),
    };

    let coupe = entier.trim_start_matches('0');
    let entier = if coupe.is_empty() && !entier.is_empty() {
        "0"
    } else {
        coupe
    };

    format!("{entier}{reste}")
}

pub fn sanitize(tampon: &str) -> String {
    let chars: Vec<char> = tampon.chars().filter(|c| est_autorise(*c)).collect();
    let mut out = String::with_capacity(chars.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if !est_litteral(c) {
            out.push(c);
            i += 1;
            continue;
        }

        let debut = i;
        while i < chars.len() && est_litteral(chars[i]) {
            i += 1;
        }
        let lit: String = chars[debut..i].iter().collect();
        let lit = normalise_litteral(&lit);

        if i < chars.len() && chars[i] == '%' {
            out.push('(');
            out.push_str(&lit);
            out.push_str("/100)");
            i += 1;
        } else {
            out.push_str(&lit);
        }
    }

    out
}

// src/noyau/lecture.rs
//
// Lecture décimale tronquée d’une Fraction (division longue exacte, pas de flottant).

use super::fraction::Fraction;

/// Nombre maximal de chiffres après la virgule ; au-delà, on tronque à cette borne.
pub const DIGITS_MAX: usize = 60;

/// `f` en décimal, tronqué vers zéro après `digits` chiffres (borné à `DIGITS_MAX`).
///
/// Le signe n’apparaît que si au moins un chiffre non nul est affiché
/// (ex: -1/3 -> "0" à 0 chiffre, "-0.33" à 2 chiffres).
pub fn lecture_decimale(f: &Fraction, digits: usize) -> String {
    let digits = digits.min(DIGITS_MAX);
    let d = f.denom().unsigned_abs() as u128;
    let n = f.numer().unsigned_abs() as u128;

    let entier = n / d;
    let mut reste = n % d;

    let mut frac = String::with_capacity(digits);
    for _ in 0..digits {
        // reste < d <= i64::MAX : reste * 10 tient largement dans un u128
        reste *= 10;
        let chiffre = (reste / d) as u32;
        reste %= d;
        frac.push(char::from_digit(chiffre, 10).unwrap_or('?'));
    }

    let nul = entier == 0 && frac.bytes().all(|c| c == b'0');
    let signe = if f.numer() < 0 && !nul { "-" } else { "" };

    if digits == 0 {
        format!("{signe}{entier}")
    } else {
        format!("{signe}{entier}.{frac}")
    }
}

/// Vrai si le développement décimal est fini (dénominateur = 2^a · 5^b).
pub fn decimal_fini(f: &Fraction) -> bool {
    let mut d = f.denom();
    while d % 2 == 0 {
        d /= 2;
    }
    while d % 5 == 0 {
        d /= 5;
    }
    d == 1
}

//! Fraction exacte (i64 / i64) toujours canonique.
//!
//! Contrats (tenus après CHAQUE construction / opération) :
//! - dénominateur > 0 (le signe est porté par le numérateur)
//! - pgcd(|n|, d) == 1 ; zéro s’écrit 0/1
//!
//! Calculs intermédiaires en i128 : les produits croisés de deux i64 ne débordent jamais.
//! Seul le rétrécissement final vers i64 peut échouer (=> ErreurFraction::Depassement).

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, ToPrimitive, Zero};

use super::erreur::ErreurFraction;

/// Plus grand commun diviseur (Euclide). pgcd(0, d) = d.
pub fn pgcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numer: 0, denom: 1 };
    pub const UN: Fraction = Fraction { numer: 1, denom: 1 };

    /// Construit puis réduit `numer/denom`.
    ///
    /// Échoue avec `DenominateurNul` si `denom == 0`.
    pub fn new(numer: i64, denom: i64) -> Result<Self, ErreurFraction> {
        Self::reduire(i128::from(numer), i128::from(denom))
    }

    /// Réduction canonique : signe sur le numérateur, puis division des DEUX termes par le même pgcd.
    fn reduire(mut n: i128, mut d: i128) -> Result<Self, ErreurFraction> {
        if d == 0 {
            return Err(ErreurFraction::DenominateurNul);
        }
        if d < 0 {
            n = -n;
            d = -d;
        }

        // d != 0 => g >= 1, et g <= max(|n|, d) tient dans un i128
        let g = pgcd(n.unsigned_abs(), d.unsigned_abs()) as i128;

        let numer = i64::try_from(n / g).map_err(|_| ErreurFraction::Depassement)?;
        let denom = i64::try_from(d / g).map_err(|_| ErreurFraction::Depassement)?;
        Ok(Self { numer, denom })
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> i64 {
        self.denom
    }

    pub fn est_entier(&self) -> bool {
        self.denom == 1
    }

    /// Transfert : rend la valeur et laisse 0/1 à sa place.
    pub fn prendre(&mut self) -> Fraction {
        std::mem::take(self)
    }

    /// Réécrit la fraction depuis deux entiers bruts (re-canonicalise).
    /// En cas d’erreur, `self` reste intact.
    pub fn assigner(&mut self, numer: i64, denom: i64) -> Result<(), ErreurFraction> {
        *self = Self::new(numer, denom)?;
        Ok(())
    }

    /* ------------------------ Arithmétique ------------------------ */

    pub fn ajouter(&self, rhs: &Fraction) -> Result<Fraction, ErreurFraction> {
        let (n1, d1, n2, d2) = self.termes(rhs);
        Self::reduire(n1 * d2 + n2 * d1, d1 * d2)
    }

    pub fn soustraire(&self, rhs: &Fraction) -> Result<Fraction, ErreurFraction> {
        let (n1, d1, n2, d2) = self.termes(rhs);
        Self::reduire(n1 * d2 - n2 * d1, d1 * d2)
    }

    pub fn multiplier(&self, rhs: &Fraction) -> Result<Fraction, ErreurFraction> {
        let (n1, d1, n2, d2) = self.termes(rhs);
        Self::reduire(n1 * n2, d1 * d2)
    }

    /// Échoue avec `DivisionParZero` si `rhs` vaut 0.
    pub fn diviser(&self, rhs: &Fraction) -> Result<Fraction, ErreurFraction> {
        if rhs.numer == 0 {
            return Err(ErreurFraction::DivisionParZero);
        }
        let (n1, d1, n2, d2) = self.termes(rhs);
        Self::reduire(n1 * d2, d1 * n2)
    }

    /// Comme `diviser`, mais `None` pour un diviseur nul ou un dépassement.
    pub fn checked_div(&self, v: &Fraction) -> Option<Fraction> {
        self.diviser(v).ok()
    }

    fn termes(&self, rhs: &Fraction) -> (i128, i128, i128, i128) {
        (
            i128::from(self.numer),
            i128::from(self.denom),
            i128::from(rhs.numer),
            i128::from(rhs.denom),
        )
    }

    /* ------------------------ Conversion / texte ------------------------ */

    /// Approximation flottante (perte de précision possible, sens unique).
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Écrit `n/d` dans un puits d’octets.
    pub fn ecrire_dans<W: io::Write>(&self, sortie: &mut W) -> io::Result<()> {
        write!(sortie, "{self}")
    }

    /// Lit `n/d` dans une instance existante. En cas d’erreur, `self` reste intact.
    pub fn lire_dans(&mut self, texte: &str) -> Result<(), ErreurFraction> {
        *self = texte.parse()?;
        Ok(())
    }

    /// Lit une ligne de `source` et la parse.
    /// Fin de flux ou erreur d’E/S => `FormatInvalide`.
    pub fn lire_depuis<R: io::BufRead>(source: &mut R) -> Result<Fraction, ErreurFraction> {
        let mut ligne = String::new();
        match source.read_line(&mut ligne) {
            Ok(0) | Err(_) => Err(ErreurFraction::FormatInvalide),
            Ok(_) => ligne.parse(),
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Fraction {
    fn from(numer: i64) -> Self {
        Self { numer, denom: 1 }
    }
}

impl From<Fraction> for f64 {
    fn from(f: Fraction) -> f64 {
        f.to_f64()
    }
}

/* ------------------------ Opérateurs ------------------------ */

// + - * : mêmes contrats que les entiers standard => panique si le résultat sort des i64.
// Utiliser ajouter/soustraire/multiplier (ou Checked*) pour récupérer l’erreur.

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        match self.ajouter(&rhs) {
            Ok(r) => r,
            Err(e) => panic!("{self} + {rhs} : {e}"),
        }
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        match self.soustraire(&rhs) {
            Ok(r) => r,
            Err(e) => panic!("{self} - {rhs} : {e}"),
        }
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        match self.multiplier(&rhs) {
            Ok(r) => r,
            Err(e) => panic!("{self} * {rhs} : {e}"),
        }
    }
}

/// La division rend un Result : diviser par 0 est une erreur ordinaire, pas une panique.
impl Div for Fraction {
    type Output = Result<Fraction, ErreurFraction>;

    fn div(self, rhs: Fraction) -> Self::Output {
        self.diviser(&rhs)
    }
}

/* ------------------------ Ordre (produits croisés) ------------------------ */

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // dénominateurs > 0 : le sens de l’inégalité est conservé
        let gauche = i128::from(self.numer) * i128::from(other.denom);
        let droite = i128::from(other.numer) * i128::from(self.denom);
        gauche.cmp(&droite)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ------------------------ Texte ------------------------ */

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl FromStr for Fraction {
    type Err = ErreurFraction;

    /// Forme acceptée : `<entier>/<entier>` (signe optionnel, espaces tolérés autour des entiers).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (n, d) = s.split_once('/').ok_or(ErreurFraction::FormatInvalide)?;
        let n: i64 = n.trim().parse().map_err(|_| ErreurFraction::FormatInvalide)?;
        let d: i64 = d.trim().parse().map_err(|_| ErreurFraction::FormatInvalide)?;
        if d == 0 {
            return Err(ErreurFraction::FormatInvalide);
        }
        Self::new(n, d)
    }
}

/* ------------------------ num-traits ------------------------ */

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numer == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::UN
    }
}

impl CheckedAdd for Fraction {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.ajouter(v).ok()
    }
}

impl CheckedSub for Fraction {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.soustraire(v).ok()
    }
}

impl CheckedMul for Fraction {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        self.multiplier(v).ok()
    }
}

impl ToPrimitive for Fraction {
    /// Troncature vers zéro.
    fn to_i64(&self) -> Option<i64> {
        Some(self.numer / self.denom)
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.numer / self.denom).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Fraction::to_f64(self))
    }
}

//! Tests fuzz safe : invariants canoniques + oracle num-rational.
//!
//! But : marteler Fraction sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - oracle : Ratio<i64> (petites valeurs) / Ratio<i128> (bords des i64)
//! - erreurs attendues seulement : dénominateur nul, division par zéro, dépassement

use std::time::{Duration, Instant};

use num_rational::Ratio;

use super::erreur::ErreurFraction;
use super::fraction::{pgcd, Fraction};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u64(&mut self) -> u64 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
    fn between(&mut self, lo: i64, hi: i64) -> i64 {
        let span = (hi - lo + 1) as u64;
        lo + ((self.next_u64() >> 16) % span) as i64
    }
    fn coin(&mut self) -> bool {
        (self.next_u64() >> 40) & 1 == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers ------------------------ */

fn check_canonique(f: &Fraction) {
    assert!(f.denom() > 0, "dénominateur <= 0 : {f}");
    let g = pgcd(f.numer().unsigned_abs() as u128, f.denom() as u128);
    assert_eq!(g, 1, "non réduite : {f}");
    if f.numer() == 0 {
        assert_eq!(f.denom(), 1, "zéro non canonique : {f}");
    }
}

fn same(f: &Fraction, r: &Ratio<i64>) -> bool {
    f.numer() == *r.numer() && f.denom() == *r.denom()
}

/// Oracle i128 : Ok si le résultat réduit tient dans i64, Depassement sinon.
fn attendu(r: Ratio<i128>) -> Result<(i64, i64), ErreurFraction> {
    match (i64::try_from(*r.numer()), i64::try_from(*r.denom())) {
        (Ok(n), Ok(d)) => Ok((n, d)),
        _ => Err(ErreurFraction::Depassement),
    }
}

fn parts(r: Result<Fraction, ErreurFraction>) -> Result<(i64, i64), ErreurFraction> {
    r.map(|f| (f.numer(), f.denom()))
}

fn gen_petite(rng: &mut Rng) -> (i64, i64) {
    (rng.between(-1000, 1000), rng.between(-60, 60))
}

fn gen_grande(rng: &mut Rng) -> (i64, i64) {
    let n = if rng.coin() {
        i64::MAX - rng.between(0, 1000)
    } else {
        i64::MIN + rng.between(0, 1000)
    };
    let d = if rng.coin() {
        rng.between(1, 7)
    } else {
        i64::MAX - rng.between(0, 1000)
    };
    (n, d)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_construction_contre_oracle() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vu_nul = 0usize;
    for _ in 0..2000 {
        budget(t0, max);
        let (n, d) = gen_petite(&mut rng);

        match Fraction::new(n, d) {
            Ok(f) => {
                check_canonique(&f);
                assert!(same(&f, &Ratio::new(n, d)), "{n}/{d} -> {f}");
                // idempotence
                assert_eq!(Fraction::new(f.numer(), f.denom()), Ok(f));
            }
            Err(e) => {
                assert_eq!(d, 0, "erreur non attendue: {n}/{d} err={e}");
                assert_eq!(e, ErreurFraction::DenominateurNul);
                vu_nul += 1;
            }
        }
    }

    // sinon le fuzz ne “balaye” pas le cas d = 0
    assert!(vu_nul > 0, "aucun dénominateur nul vu");
}

#[test]
fn fuzz_safe_fermeture_arithmetique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);
    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut vu_div0 = 0usize;
    for _ in 0..1500 {
        budget(t0, max);

        let (n1, d1) = gen_petite(&mut rng);
        let (n2, d2) = gen_petite(&mut rng);
        let (Ok(a), Ok(b)) = (Fraction::new(n1, d1), Fraction::new(n2, d2)) else {
            continue;
        };
        let (ra, rb) = (Ratio::new(n1, d1), Ratio::new(n2, d2));

        let somme = a + b;
        let diff = a - b;
        let prod = a * b;
        for r in [&somme, &diff, &prod] {
            check_canonique(r);
        }
        assert!(same(&somme, &(ra + rb)), "{a} + {b} = {somme}");
        assert!(same(&diff, &(ra - rb)), "{a} - {b} = {diff}");
        assert!(same(&prod, &(ra * rb)), "{a} * {b} = {prod}");

        // commutativité
        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);

        match a / b {
            Ok(q) => {
                check_canonique(&q);
                assert!(same(&q, &(ra / rb)), "{a} / {b} = {q}");
            }
            Err(e) => {
                assert_eq!(e, ErreurFraction::DivisionParZero, "{a} / {b}");
                assert_eq!(n2, 0);
                vu_div0 += 1;
            }
        }

        // ordre cohérent avec l’oracle
        assert_eq!(a.cmp(&b), ra.cmp(&rb), "{a} <=> {b}");
        assert_eq!(a == b, ra == rb);
    }

    assert!(vu_div0 > 0, "aucune division par zéro vue");
}

#[test]
fn fuzz_safe_aller_retour_texte() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..1000 {
        budget(t0, max);
        let (n, d) = if rng.coin() {
            gen_petite(&mut rng)
        } else {
            gen_grande(&mut rng)
        };
        let Ok(f) = Fraction::new(n, d) else {
            continue;
        };

        let texte = f.to_string();
        assert_eq!(texte.parse::<Fraction>(), Ok(f), "texte={texte:?}");

        // conversion flottante : même valeur que la division flottante directe
        assert_eq!(f.to_f64(), f.numer() as f64 / f.denom() as f64);
    }
}

#[test]
fn fuzz_safe_bords_i64_depassement_controle() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);
    let mut rng = Rng::new(0xDEAD_BEEF_u64);

    let mut vu_ok = 0usize;
    let mut vu_dep = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let (n1, d1) = gen_grande(&mut rng);
        let (n2, d2) = if rng.coin() {
            gen_grande(&mut rng)
        } else {
            gen_petite(&mut rng)
        };
        let (Ok(a), Ok(b)) = (Fraction::new(n1, d1), Fraction::new(n2, d2)) else {
            continue;
        };

        let ra = Ratio::new(i128::from(a.numer()), i128::from(a.denom()));
        let rb = Ratio::new(i128::from(b.numer()), i128::from(b.denom()));

        let cas = [
            (parts(a.ajouter(&b)), attendu(ra + rb)),
            (parts(a.soustraire(&b)), attendu(ra - rb)),
            (parts(a.multiplier(&b)), attendu(ra * rb)),
            (parts(a.soustraire(&a)), Ok((0, 1))),
        ];
        for (obtenu, oracle) in cas {
            assert_eq!(obtenu, oracle, "a={a} b={b}");
            match obtenu {
                Ok(_) => vu_ok += 1,
                Err(_) => vu_dep += 1,
            }
        }

        if b.numer() != 0 {
            assert_eq!(parts(a.diviser(&b)), attendu(ra / rb), "a={a} / b={b}");
        }

        // l’ordre ne déborde jamais (produits croisés en i128)
        assert_eq!(a.cmp(&b), ra.cmp(&rb));
    }

    assert!(vu_ok > 0, "aucun succès aux bords");
    assert!(vu_dep > 0, "aucun dépassement vu aux bords");
}
